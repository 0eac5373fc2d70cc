//! Error types for BLEU computation.

use thiserror::Error;

/// Errors surfaced by the corpus-level entry points and scorer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BleuError {
    /// Hypotheses and references must be paired one-to-one by position.
    #[error("length mismatch: {hypotheses} hypotheses but {references} references")]
    LengthMismatch { hypotheses: usize, references: usize },

    /// Smoothing offsets must be finite and lie in `[0, 1]`.
    #[error("invalid smoothing offset {0}: expected a finite value in [0, 1]")]
    InvalidOffset(f64),
}

/// Checks that `offset` keeps every smoothed precision within `[0, 1]`.
pub fn validate_offset(offset: f64) -> Result<f64, BleuError> {
    if offset.is_finite() && (0.0..=1.0).contains(&offset) {
        Ok(offset)
    } else {
        Err(BleuError::InvalidOffset(offset))
    }
}

/// Fails fast when the two sides of a corpus are not aligned.
pub(crate) fn check_aligned(hypotheses: usize, references: usize) -> Result<(), BleuError> {
    if hypotheses != references {
        return Err(BleuError::LengthMismatch {
            hypotheses,
            references,
        });
    }
    Ok(())
}
