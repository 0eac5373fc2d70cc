//! Corpus-level BLEU scoring.

pub mod cli;
pub mod core;

#[cfg(feature = "python")]
pub mod python;

// Re-export main types
pub use crate::core::{
    bleu_counts, corpus_score, corpus_score_with_offset, corpus_statistics, ngram_statistics,
    score, BleuError, BleuScoreResult, BleuScorer, BleuScorerBuilder, BleuScorerConfig,
    SentenceStatistics, Statistics,
};

/// Convenient alias for a result with a boxed error.
pub type Result<T> = anyhow::Result<T>;

// Python module entry point
#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rust_bleu_score(_py: Python, m: &PyModule) -> PyResult<()> {
    python::_rust(_py, m)
}
