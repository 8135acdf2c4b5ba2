use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use disc_similarity::config::{Config, DEFAULT_LOG_FILTER};
use disc_similarity::features::{FeatureTable, Language};
use disc_similarity::input::{self, Encoding};
use disc_similarity::output::{skip_log, table, terminal};
use disc_similarity::scoring;

/// Compute cosine similarity between paired Dutch and German DISC transcriptions.
///
/// Each phoneme is mapped to a phonological feature vector, the vectors of a
/// word are concatenated, and the German and Dutch word vectors are compared
/// after zero-padding to equal length.
#[derive(Parser)]
#[command(
    name = "disc-similarity",
    version,
    about,
    after_help = "Examples:\n  \
        # CSV mode (single file with paired words)\n  \
        disc-similarity wordlist.csv --sep \";\" --encoding latin-1 -o output.tsv\n\n  \
        # Two-file mode (one DISC transcription per line, paired by line number)\n  \
        disc-similarity de_transcriptions.txt nl_transcriptions.txt -o results.tsv"
)]
struct Cli {
    /// CSV/TSV file with paired words, or first DISC transcription file
    input_file: PathBuf,

    /// Second DISC transcription file (one per line, paired by line number)
    input_file_2: Option<PathBuf>,

    /// CSV separator
    #[arg(long, default_value = ";")]
    sep: String,

    /// Column name for German DISC strings
    #[arg(long, default_value = "PhonStrsDISC_DE")]
    col_de: String,

    /// Column name for Dutch DISC strings
    #[arg(long, default_value = "PhonStrsDISC_NL")]
    col_nl: String,

    /// Input file encoding, latin-1 or utf-8 (default: latin-1 for CSV mode,
    /// utf-8 for two-file mode)
    #[arg(long)]
    encoding: Option<Encoding>,

    /// Path to German feature matrix (default: built-in table)
    #[arg(long)]
    feature_de: Option<PathBuf>,

    /// Path to Dutch feature matrix (default: built-in table)
    #[arg(long)]
    feature_nl: Option<PathBuf>,

    /// Output separator
    #[arg(long, default_value = "\t", hide_default_value = true)]
    output_sep: String,

    /// Output file path (default: <input_stem>_with_similarity.tsv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();
    let config = Config::load();

    // Logs go to stderr; stdout carries the user-facing messages
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output_sep = input::parse_separator(&cli.output_sep)?;

    // Tables first: a broken table aborts before any input is read
    let german_table = FeatureTable::load_or_builtin(
        Config::resolve_feature_path(cli.feature_de, &config.feature_de).as_deref(),
        Language::German,
    )?;
    let dutch_table = FeatureTable::load_or_builtin(
        Config::resolve_feature_path(cli.feature_nl, &config.feature_nl).as_deref(),
        Language::Dutch,
    )?;

    let paired = match &cli.input_file_2 {
        None => {
            let sep = input::parse_separator(&cli.sep)?;
            input::read_paired_table(
                &cli.input_file,
                sep,
                cli.encoding.unwrap_or(Encoding::PAIRED_TABLE_DEFAULT),
                &cli.col_de,
                &cli.col_nl,
            )?
        }
        Some(second) => input::read_line_files(
            &cli.input_file,
            second,
            cli.encoding.unwrap_or(Encoding::LINE_FILES_DEFAULT),
            &cli.col_de,
            &cli.col_nl,
        )?,
    };

    info!(pairs = paired.len(), "Scoring transcription pairs");
    let report = scoring::score(&paired.german, &paired.dutch, &german_table, &dutch_table);

    let output_path = cli
        .output
        .unwrap_or_else(|| table::default_output_path(&cli.input_file));
    table::write_scores(&output_path, &paired, &report.scores, output_sep)?;
    println!("Output written to {}", output_path.display());

    terminal::print_summary(&report);

    if !report.skipped.is_empty() {
        let log_path = skip_log::skip_log_path(&output_path);
        terminal::print_skipped(&report.skipped);
        skip_log::write_skip_log(&log_path, &report.skipped)?;
        println!("Log written to {}", log_path.display());
    }

    Ok(())
}
