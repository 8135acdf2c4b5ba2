// Phonological feature tables: one per language.
//
// A table maps each DISC symbol to a fixed-length integer feature vector.
// Tables are loaded once per run from tab-delimited files, or taken from the
// copies shipped inside the binary.

pub mod builtin;
pub mod table;

pub use builtin::Language;
pub use table::FeatureTable;
