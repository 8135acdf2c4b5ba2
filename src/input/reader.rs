// Readers for CSV mode and two-file mode.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::{info, warn};

use super::encoding::Encoding;

/// Characters that carry stress or syllable boundaries, not phonemes.
fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"['\-]").expect("static pattern is valid"))
}

/// Remove stress marks (`'`) and syllable hyphens (`-`) from a transcription.
pub fn clean_transcription(raw: &str) -> String {
    strip_pattern().replace_all(raw, "").into_owned()
}

/// Paired transcriptions together with the table they came from.
///
/// `headers` and `rows` reproduce the input as read (uncleaned) so the output
/// writer can append a similarity column. `german[i]` and `dutch[i]` are the
/// cleaned transcriptions of `rows[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedInput {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub german: Vec<String>,
    pub dutch: Vec<String>,
}

impl PairedInput {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// CSV mode: read a delimited file with a header row and pull out the German
/// and Dutch columns.
///
/// Short rows are padded with empty cells, so a missing transcription reads
/// as the empty string.
pub fn read_paired_table(
    path: &Path,
    sep: u8,
    encoding: Encoding,
    col_de: &str,
    col_nl: &str,
) -> Result<PairedInput> {
    let text = read_text(path, encoding)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(sep)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let idx_de = column_index(&headers, col_de, path)?;
    let idx_nl = column_index(&headers, col_nl, path)?;

    let mut rows = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read row {} of {}", line + 1, path.display()))?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() > headers.len() {
            anyhow::bail!(
                "Row {} of {} has {} fields, header has {}",
                line + 1,
                path.display(),
                row.len(),
                headers.len()
            );
        }
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    let german = rows.iter().map(|r| clean_transcription(&r[idx_de])).collect();
    let dutch = rows.iter().map(|r| clean_transcription(&r[idx_nl])).collect();

    info!(path = %path.display(), rows = rows.len(), "Read paired word list");

    Ok(PairedInput {
        headers,
        rows,
        german,
        dutch,
    })
}

/// Two-file mode: one transcription per line in each file, paired by line
/// number. The resulting table has `col_de` and `col_nl` as its header and the
/// cleaned transcriptions as its rows.
pub fn read_line_files(
    de_path: &Path,
    nl_path: &Path,
    encoding: Encoding,
    col_de: &str,
    col_nl: &str,
) -> Result<PairedInput> {
    let german = read_lines(de_path, encoding)?;
    let dutch = read_lines(nl_path, encoding)?;

    if german.len() != dutch.len() {
        warn!(
            german_lines = german.len(),
            dutch_lines = dutch.len(),
            "Line counts differ, extra lines are ignored"
        );
    }

    let n = german.len().min(dutch.len());
    let german: Vec<String> = german.into_iter().take(n).collect();
    let dutch: Vec<String> = dutch.into_iter().take(n).collect();

    let rows = german
        .iter()
        .zip(dutch.iter())
        .map(|(de, nl)| vec![de.clone(), nl.clone()])
        .collect();

    info!(
        german = %de_path.display(),
        dutch = %nl_path.display(),
        pairs = n,
        "Read transcription files"
    );

    Ok(PairedInput {
        headers: vec![col_de.to_string(), col_nl.to_string()],
        rows,
        german,
        dutch,
    })
}

/// Parse a field separator given on the command line. Accepts a single
/// ASCII character or the escape `\t`.
pub fn parse_separator(raw: &str) -> Result<u8> {
    let sep = match raw {
        "\\t" | "tab" => "\t",
        other => other,
    };
    match sep.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => anyhow::bail!("Separator must be a single ASCII character, got {raw:?}"),
    }
}

fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?;
    encoding
        .decode(bytes)
        .with_context(|| format!("Failed to decode {} as {encoding}", path.display()))
}

fn read_lines(path: &Path, encoding: Encoding) -> Result<Vec<String>> {
    let text = read_text(path, encoding)?;
    Ok(text
        .lines()
        .map(|line| clean_transcription(line.trim()))
        .collect())
}

fn column_index(headers: &[String], name: &str, path: &Path) -> Result<usize> {
    headers.iter().position(|h| h == name).with_context(|| {
        format!(
            "Column '{name}' not found in {} (available: {})",
            path.display(),
            headers.join(", ")
        )
    })
}
