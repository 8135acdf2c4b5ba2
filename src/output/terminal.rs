// Colored terminal output for a scoring run.
//
// Plain progress lines ("Output written to ...") go to stdout uncolored so
// scripts can grep them; the summary and skip list use color.

use colored::Colorize;

use super::skip_log::{format_skip_header, format_skip_line};
use crate::scoring::{ScoreReport, SkipRecord};

/// Print a one-block summary of a scoring run.
pub fn print_summary(report: &ScoreReport) {
    let total = report.scores.len();
    let scored = report.valid_count();
    let skipped = report.skipped_count();
    // NaN scores that were not skipped come from zero-magnitude vectors
    let undefined = total - scored - skipped;

    println!(
        "\n{}",
        format!("=== Similarity ({total} pairs) ===").bold()
    );
    println!("  {:<10} {}", "Scored".dimmed(), scored.to_string().green());
    if skipped > 0 {
        println!("  {:<10} {}", "Skipped".dimmed(), skipped.to_string().yellow());
    }
    if undefined > 0 {
        println!("  {:<10} {}", "Undefined".dimmed(), undefined.to_string().yellow());
    }
    if let Some(mean) = report.mean() {
        println!("  {:<10} {:.4}", "Mean".dimmed(), mean);
    }
    println!();
}

/// Print the skip header and one line per skipped pair.
pub fn print_skipped(records: &[SkipRecord]) {
    if records.is_empty() {
        return;
    }
    println!("{}", format_skip_header(records.len()).yellow());
    for record in records {
        println!("{}", format_skip_line(record));
    }
}
