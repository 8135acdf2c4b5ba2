// Sidecar log of pairs that were not scored.
//
// Format:
//
//   2 word pair(s) returned NA due to unexpected characters:
//     Row 3: DE='Qa', NL='pa' — unknown DE chars: {'Q'}
//
// Row numbers are 1-based so they match a spreadsheet view of the input.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::with_stem_suffix;
use crate::scoring::SkipRecord;

/// `<output stem>_skipped.log`, next to the output file.
pub fn skip_log_path(output: &Path) -> PathBuf {
    with_stem_suffix(output, "_skipped.log")
}

pub fn format_skip_header(count: usize) -> String {
    format!("{count} word pair(s) returned NA due to unexpected characters:")
}

/// Render a symbol set as `{'a', 'b'}`.
pub fn format_symbol_set(symbols: &BTreeSet<char>) -> String {
    let inner: Vec<String> = symbols.iter().map(|&c| quote_symbol(c)).collect();
    format!("{{{}}}", inner.join(", "))
}

/// Quote one symbol, escaping characters that would make the entry ambiguous.
fn quote_symbol(c: char) -> String {
    match c {
        '\\' => r"'\\'".to_string(),
        '\'' => r#""'""#.to_string(),
        '\t' => r"'\t'".to_string(),
        '\n' => r"'\n'".to_string(),
        '\r' => r"'\r'".to_string(),
        c => format!("'{c}'"),
    }
}

/// One line per skipped pair. Only non-empty symbol sets are listed.
pub fn format_skip_line(record: &SkipRecord) -> String {
    let mut parts = vec![format!(
        "  Row {}: DE='{}', NL='{}'",
        record.index + 1,
        record.german,
        record.dutch
    )];
    if !record.bad_german.is_empty() {
        parts.push(format!(
            "unknown DE chars: {}",
            format_symbol_set(&record.bad_german)
        ));
    }
    if !record.bad_dutch.is_empty() {
        parts.push(format!(
            "unknown NL chars: {}",
            format_symbol_set(&record.bad_dutch)
        ));
    }
    parts.join(" — ")
}

/// Header plus one line per record, newline-terminated.
pub fn render_skip_log(records: &[SkipRecord]) -> String {
    let mut out = format_skip_header(records.len());
    out.push('\n');
    for record in records {
        out.push_str(&format_skip_line(record));
        out.push('\n');
    }
    out
}

pub fn write_skip_log(path: &Path, records: &[SkipRecord]) -> Result<()> {
    fs::write(path, render_skip_log(records))
        .with_context(|| format!("Failed to write skip log: {}", path.display()))
}
