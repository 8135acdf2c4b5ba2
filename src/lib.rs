// disc-similarity: phonetic feature similarity between German and Dutch
// DISC transcriptions.
//
// This is the library root. `features` and `scoring` are the core; `input`,
// `output` and `config` are the glue the command-line tool is built from.

pub mod config;
pub mod features;
pub mod input;
pub mod output;
pub mod scoring;

pub use features::{FeatureTable, Language};
pub use scoring::{score, score_files, ScoreReport, SkipRecord};
