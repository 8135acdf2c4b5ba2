// Feature tables shipped with the tool.
//
// The files under data/ are compiled into the binary so the tool works
// without any extra files next to it. `--feature-de` / `--feature-nl` (or the
// DISC_FEATURE_* environment variables) replace them at runtime.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use super::table::FeatureTable;

const FEATURE_DE: &str = include_str!("../../data/feature_de.csv");
const FEATURE_NL: &str = include_str!("../../data/feature_nl.csv");

/// The two languages the tool compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    German,
    Dutch,
}

impl Language {
    /// Short code used in log lines and the skip log ("DE" / "NL").
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "DE",
            Language::Dutch => "NL",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FeatureTable {
    /// The built-in table for a language.
    pub fn builtin(language: Language) -> Result<Self> {
        let source = match language {
            Language::German => FEATURE_DE,
            Language::Dutch => FEATURE_NL,
        };
        Self::from_reader(source.as_bytes())
            .with_context(|| format!("Built-in {language} feature table is invalid"))
    }

    /// Load from `path` when given, otherwise fall back to the built-in table.
    pub fn load_or_builtin(path: Option<&Path>, language: Language) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(language),
        }
    }
}
