// Input readers: turn files on disk into paired transcription lists.
//
// Two layouts are supported:
// - CSV mode: one delimited file with a German and a Dutch column
// - Two-file mode: one transcription per line, paired by line number
//
// Both clean the transcriptions (stress marks and syllable hyphens removed)
// and keep the full input table so the output can repeat it.

pub mod encoding;
pub mod reader;

pub use encoding::Encoding;
pub use reader::{
    clean_transcription, parse_separator, read_line_files, read_paired_table, PairedInput,
};
