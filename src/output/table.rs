// Scored table writer.
//
// Writes the input table back out with a `simi` column appended. Skipped or
// undefined scores are written as empty cells.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::with_stem_suffix;
use crate::input::PairedInput;

/// Header of the appended similarity column.
pub const SIMILARITY_COLUMN: &str = "simi";

/// `<input stem>_with_similarity.tsv`, next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    with_stem_suffix(input, "_with_similarity.tsv")
}

/// Format a score for the output table. NaN becomes an empty cell, whole
/// numbers keep one decimal (`1.0`), everything else is written in shortest
/// round-trip form.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        String::new()
    } else if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

/// Write `input` plus one similarity value per row to `path`.
///
/// Rows without a matching score (more rows than scores) get an empty cell.
pub fn write_scores(path: &Path, input: &PairedInput, scores: &[f64], sep: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(sep)
        .from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let mut header: Vec<&str> = input.headers.iter().map(String::as_str).collect();
    header.push(SIMILARITY_COLUMN);
    wtr.write_record(&header)
        .with_context(|| format!("Failed to write header to {}", path.display()))?;

    for (i, row) in input.rows.iter().enumerate() {
        let simi = scores.get(i).copied().map(format_score).unwrap_or_default();
        let record = row
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(simi.as_str()));
        wtr.write_record(record)
            .with_context(|| format!("Failed to write row {} to {}", i + 1, path.display()))?;
    }

    wtr.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    info!(path = %path.display(), rows = input.rows.len(), "Wrote scored table");
    Ok(())
}
