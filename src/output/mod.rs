// Output: scored table, skip log and terminal summaries.

pub mod skip_log;
pub mod table;
pub mod terminal;

use std::path::{Path, PathBuf};

/// `<dir>/<stem><suffix>` for a given path, where stem drops the extension.
pub(crate) fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}"))
}
