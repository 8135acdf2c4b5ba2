// Similarity scoring over concatenated feature vectors.

pub mod cosine;
pub mod similarity;

pub use similarity::{score, score_files, ScoreReport, SkipRecord};
