// Text encodings accepted for input files.
//
// Word lists exported from older lexical databases are usually Latin-1, so
// CSV mode defaults to it. Plain transcription files default to UTF-8.
// Latin-1 maps every byte to the code point of the same value, which makes
// decoding infallible.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Latin1,
    Utf8,
}

impl Encoding {
    /// Encoding assumed for CSV mode when none is given.
    pub const PAIRED_TABLE_DEFAULT: Encoding = Encoding::Latin1;

    /// Encoding assumed for two-file mode when none is given.
    pub const LINE_FILES_DEFAULT: Encoding = Encoding::Utf8;

    /// Decode raw file bytes into a string.
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        match self {
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            Encoding::Utf8 => String::from_utf8(bytes).context("Input is not valid UTF-8"),
        }
    }
}

impl FromStr for Encoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Encoding::Latin1),
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            other => anyhow::bail!("Unsupported encoding '{other}' (expected latin-1 or utf-8)"),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Latin1 => f.write_str("latin-1"),
            Encoding::Utf8 => f.write_str("utf-8"),
        }
    }
}
