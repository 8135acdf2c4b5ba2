// Pairwise German/Dutch similarity scoring.
//
// For each (German, Dutch) pair:
// 1. Collect symbols missing from the respective feature table
// 2. If any are missing, record NaN and a SkipRecord, move on
// 3. Otherwise expand each word phoneme by phoneme into one flat vector
// 4. Zero-pad both vectors to the same length
// 5. Score with cosine similarity
//
// Pairs are independent and the tables are read-only, so the result for a
// pair never depends on its neighbours.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use super::cosine::{cosine_similarity, zero_pad};
use crate::features::FeatureTable;

/// A pair that could not be scored because a word used unknown symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    /// Zero-based position of the pair in the input.
    pub index: usize,
    pub german: String,
    pub dutch: String,
    /// German symbols missing from the German table (may be empty).
    pub bad_german: BTreeSet<char>,
    /// Dutch symbols missing from the Dutch table (may be empty).
    pub bad_dutch: BTreeSet<char>,
}

/// Scores for every pair plus the pairs that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ScoreReport {
    /// One entry per processed pair, in input order. Skipped pairs are NaN.
    pub scores: Vec<f64>,
    /// Skipped pairs in input order.
    pub skipped: Vec<SkipRecord>,
}

impl ScoreReport {
    /// Number of pairs that produced a finite score.
    pub fn valid_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_finite()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Mean of the finite scores, if there are any.
    pub fn mean(&self) -> Option<f64> {
        let finite: Vec<f64> = self
            .scores
            .iter()
            .copied()
            .filter(|s| s.is_finite())
            .collect();
        if finite.is_empty() {
            None
        } else {
            Some(finite.iter().sum::<f64>() / finite.len() as f64)
        }
    }
}

/// Concatenated feature vector for a word, phoneme by phoneme.
///
/// Repeated phonemes repeat their features. Returns `None` if any symbol is
/// missing from the table.
pub fn word_vector(word: &str, table: &FeatureTable) -> Option<Vec<f64>> {
    let mut v = Vec::with_capacity(word.chars().count() * table.dimension());
    for symbol in word.chars() {
        let features = table.get(symbol)?;
        v.extend(features.iter().map(|&f| f as f64));
    }
    Some(v)
}

/// Score every (German, Dutch) pair against the given tables.
///
/// Sequences are paired by index; if their lengths differ the extra entries
/// of the longer one are ignored.
pub fn score<S, T>(
    german: &[S],
    dutch: &[T],
    german_table: &FeatureTable,
    dutch_table: &FeatureTable,
) -> ScoreReport
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    if german.len() != dutch.len() {
        warn!(
            german = german.len(),
            dutch = dutch.len(),
            "Transcription lists differ in length, pairing up to the shorter one"
        );
    }

    let mut report = ScoreReport::default();

    for (index, (word_de, word_nl)) in german.iter().zip(dutch.iter()).enumerate() {
        let word_de = word_de.as_ref();
        let word_nl = word_nl.as_ref();

        let bad_german = german_table.unknown_symbols(word_de);
        let bad_dutch = dutch_table.unknown_symbols(word_nl);

        if !bad_german.is_empty() || !bad_dutch.is_empty() {
            warn!(
                index,
                german = word_de,
                dutch = word_nl,
                "Skipping pair with unknown symbols"
            );
            report.scores.push(f64::NAN);
            report.skipped.push(SkipRecord {
                index,
                german: word_de.to_string(),
                dutch: word_nl.to_string(),
                bad_german,
                bad_dutch,
            });
            continue;
        }

        report
            .scores
            .push(score_pair(word_de, word_nl, german_table, dutch_table));
    }

    info!(
        pairs = report.scores.len(),
        scored = report.valid_count(),
        skipped = report.skipped_count(),
        "Scored transcription pairs"
    );

    report
}

/// Load both feature tables, then score. Table errors are returned before
/// any pair is looked at.
pub fn score_files<S, T>(
    german: &[S],
    dutch: &[T],
    german_table_path: &Path,
    dutch_table_path: &Path,
) -> Result<ScoreReport>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let german_table = FeatureTable::load(german_table_path)?;
    let dutch_table = FeatureTable::load(dutch_table_path)?;
    Ok(score(german, dutch, &german_table, &dutch_table))
}

/// Score a pair whose symbols are all known to their tables.
fn score_pair(
    word_de: &str,
    word_nl: &str,
    german_table: &FeatureTable,
    dutch_table: &FeatureTable,
) -> f64 {
    let (Some(v_de), Some(v_nl)) = (
        word_vector(word_de, german_table),
        word_vector(word_nl, dutch_table),
    ) else {
        return f64::NAN;
    };

    let n = v_de.len().max(v_nl.len());
    let v_de = zero_pad(v_de, n);
    let v_nl = zero_pad(v_nl, n);

    let sim = cosine_similarity(&v_de, &v_nl);
    if sim.is_nan() {
        debug!(
            german = word_de,
            dutch = word_nl,
            "Zero-magnitude feature vector, score is NaN"
        );
    }
    sim
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &str) -> FeatureTable {
        let input = format!("consonant\texample\tvoiced\tbilabial\talveolar\tplosive\n{rows}");
        FeatureTable::from_reader(input.as_bytes()).unwrap()
    }

    fn both() -> (FeatureTable, FeatureTable) {
        let de = table("p\tPein\t0\t1\t0\t1\nb\tBein\t1\t1\t0\t1\nt\tTeich\t0\t0\t1\t1\n");
        let nl = table("p\tpak\t0\t1\t0\t1\nb\tbak\t1\t1\t0\t1\nd\tdak\t1\t0\t1\t1\n");
        (de, nl)
    }

    #[test]
    fn test_word_vector_repeats_duplicates() {
        let (de, _) = both();
        let v = word_vector("pp", &de).unwrap();
        assert_eq!(v, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_word_vector_unknown_symbol() {
        let (de, _) = both();
        assert!(word_vector("pQ", &de).is_none());
        assert_eq!(word_vector("", &de), Some(vec![]));
    }

    #[test]
    fn test_identical_phoneme_scores_one() {
        let (de, nl) = both();
        let report = score(&["p"], &["p"], &de, &nl);
        assert_eq!(report.scores.len(), 1);
        assert!((report.scores[0] - 1.0).abs() < 1e-9);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_skip_records_both_sides() {
        let (de, nl) = both();
        // 'd' is Dutch-only, 't' German-only
        let report = score(&["d"], &["t"], &de, &nl);
        assert!(report.scores[0].is_nan());
        let skip = &report.skipped[0];
        assert_eq!(skip.index, 0);
        assert_eq!(skip.bad_german, BTreeSet::from(['d']));
        assert_eq!(skip.bad_dutch, BTreeSet::from(['t']));
    }

    #[test]
    fn test_padding_changes_score() {
        let (de, nl) = both();
        let report = score(&["pt"], &["p"], &de, &nl);
        // [p t] vs [p 0]: dot 2, norms 2 and sqrt(2)
        let expected = 2.0 / (2.0 * 2.0_f64.sqrt());
        assert!((report.scores[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_pair_is_nan() {
        let (de, nl) = both();
        let report = score(&[""], &[""], &de, &nl);
        assert_eq!(report.scores.len(), 1);
        assert!(report.scores[0].is_nan());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_unequal_lengths_truncate() {
        let (de, nl) = both();
        let report = score(&["p", "b", "t"], &["p"], &de, &nl);
        assert_eq!(report.scores.len(), 1);
    }

    #[test]
    fn test_report_counts_and_mean() {
        let (de, nl) = both();
        let report = score(&["p", "Q", "b"], &["p", "p", "b"], &de, &nl);
        assert_eq!(report.valid_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert!((report.mean().unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(ScoreReport::default().mean(), None);
    }
}
