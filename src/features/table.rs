// FeatureTable: symbol → feature vector lookup for one language.
//
// File format (tab-delimited, header row):
//
//   consonant  example  voiced  bilabial  ...
//   p          Pein     0       1         ...
//
// `consonant` holds the DISC symbol, `example` is a human-readable word and is
// dropped, every other column is a feature. Empty cells count as 0 and all
// values are coerced to integers.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Header of the column holding the phoneme symbol.
pub const SYMBOL_COLUMN: &str = "consonant";

/// Header of the column holding an example word (ignored).
pub const EXAMPLE_COLUMN: &str = "example";

/// Immutable mapping from phoneme symbol to its feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    feature_names: Vec<String>,
    /// Symbols in file order, so diagnostics list them the way the table does.
    symbols: Vec<char>,
    rows: HashMap<char, Vec<i64>>,
}

impl FeatureTable {
    /// Open and parse a feature table file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open feature table: {}", path.display()))?;
        let table = Self::from_reader(file)
            .with_context(|| format!("Invalid feature table: {}", path.display()))?;

        debug!(
            path = %path.display(),
            symbols = table.len(),
            features = table.dimension(),
            "Loaded feature table"
        );
        Ok(table)
    }

    /// Parse a tab-delimited feature table from any reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .context("Failed to read feature table header")?
            .clone();

        let symbol_idx = headers
            .iter()
            .position(|h| h.trim() == SYMBOL_COLUMN)
            .with_context(|| format!("Feature table has no '{SYMBOL_COLUMN}' column"))?;
        let example_idx = headers
            .iter()
            .position(|h| h.trim() == EXAMPLE_COLUMN)
            .with_context(|| format!("Feature table has no '{EXAMPLE_COLUMN}' column"))?;

        let feature_columns: Vec<usize> = (0..headers.len())
            .filter(|&i| i != symbol_idx && i != example_idx)
            .collect();
        let feature_names = feature_columns
            .iter()
            .map(|&i| headers[i].trim().to_string())
            .collect();

        let mut symbols = Vec::new();
        let mut rows = HashMap::new();

        for (line, record) in rdr.records().enumerate() {
            // +2: one for the header, one for 1-based numbering
            let line = line + 2;
            let record = record.with_context(|| format!("Failed to read row on line {line}"))?;

            if record.len() > headers.len() {
                anyhow::bail!(
                    "Row on line {line} has {} fields, header has {}",
                    record.len(),
                    headers.len()
                );
            }

            let symbol_cell = record
                .get(symbol_idx)
                .with_context(|| format!("Row on line {line} has no '{SYMBOL_COLUMN}' cell"))?;
            let symbol =
                parse_symbol(symbol_cell).with_context(|| format!("Bad symbol on line {line}"))?;

            // Cells missing from a short row count as empty.
            let features = feature_columns
                .iter()
                .map(|&i| {
                    let cell = record.get(i).unwrap_or("");
                    parse_feature(cell).with_context(|| {
                        format!(
                            "Bad value {:?} for feature '{}' on line {line}",
                            cell,
                            headers[i].trim()
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if rows.insert(symbol, features).is_some() {
                anyhow::bail!("Duplicate symbol '{symbol}' on line {line}");
            }
            symbols.push(symbol);
        }

        Ok(Self {
            feature_names,
            symbols,
            rows,
        })
    }

    /// Number of features per symbol (F).
    pub fn dimension(&self) -> usize {
        self.feature_names.len()
    }

    /// Feature column names in header order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Known symbols in table order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.rows.contains_key(&symbol)
    }

    /// Feature vector for a symbol, if the symbol is known.
    pub fn get(&self, symbol: char) -> Option<&[i64]> {
        self.rows.get(&symbol).map(Vec::as_slice)
    }

    /// Distinct characters of `word` that the table does not know.
    pub fn unknown_symbols(&self, word: &str) -> BTreeSet<char> {
        word.chars().filter(|c| !self.contains(*c)).collect()
    }
}

/// A symbol cell must hold exactly one character, taken verbatim.
fn parse_symbol(cell: &str) -> Result<char> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => anyhow::bail!("symbol is empty"),
        (Some(_), Some(_)) => anyhow::bail!("symbol {cell:?} is longer than one character"),
    }
}

/// Empty cells are 0; numeric text is truncated toward zero (`1.0` → 1).
fn parse_feature(cell: &str) -> Result<i64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0);
    }
    if let Ok(v) = cell.parse::<i64>() {
        return Ok(v);
    }
    let v: f64 = cell.parse().context("not a number")?;
    if !v.is_finite() {
        anyhow::bail!("not a finite number");
    }
    Ok(v.trunc() as i64)
}
