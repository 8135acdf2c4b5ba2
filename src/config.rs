use std::env;
use std::path::PathBuf;

/// Default tracing filter when DISC_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "disc_similarity=info";

/// Configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags take
/// precedence over anything set here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// German feature table (DISC_FEATURE_DE). Built-in table when unset.
    pub feature_de: Option<PathBuf>,
    /// Dutch feature table (DISC_FEATURE_NL). Built-in table when unset.
    pub feature_nl: Option<PathBuf>,
    /// tracing filter directive (DISC_LOG).
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            feature_de: non_empty("DISC_FEATURE_DE").map(PathBuf::from),
            feature_nl: non_empty("DISC_FEATURE_NL").map(PathBuf::from),
            log_filter: non_empty("DISC_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Resolve a feature table path: explicit flag first, then environment.
    /// `None` means use the built-in table.
    pub fn resolve_feature_path(
        flag: Option<PathBuf>,
        from_env: &Option<PathBuf>,
    ) -> Option<PathBuf> {
        flag.or_else(|| from_env.clone())
    }
}
