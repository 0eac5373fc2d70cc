//! Corpus-level BLEU over position-aligned hypotheses and references.

use crate::core::error::{check_aligned, validate_offset, BleuError};
use crate::core::ngram::bleu_counts;
use crate::core::statistics::SentenceStatistics;
use tracing::{debug, trace};

/// Smoothing offset applied by corpus-level scoring unless overridden.
pub const DEFAULT_CORPUS_OFFSET: f64 = 0.01;

/// Pools the statistics of every hypothesis/reference pair.
///
/// Pair `i` is the hypothesis at index `i` scored against the reference at
/// index `i`. Counts are summed, not averaged, so the result can be combined
/// with statistics from other batches before scoring.
pub fn corpus_statistics<S: AsRef<str>>(
    hypotheses: &[S],
    references: &[S],
) -> Result<SentenceStatistics, BleuError> {
    check_aligned(hypotheses.len(), references.len())?;

    let pooled: SentenceStatistics = hypotheses
        .iter()
        .zip(references)
        .enumerate()
        .map(|(i, (hyp, reference))| {
            let stats = bleu_counts(hyp.as_ref(), reference.as_ref());
            trace!(sentence = i, ?stats, "sentence statistics");
            stats
        })
        .sum();

    debug!(
        sentences = hypotheses.len(),
        hyp_length = pooled.hyp_length,
        ref_length = pooled.ref_length,
        common = ?pooled.statistics.common_counts(),
        total = ?pooled.statistics.total_counts(),
        "pooled corpus statistics"
    );
    Ok(pooled)
}

/// Corpus BLEU with the default smoothing offset.
pub fn corpus_score<S: AsRef<str>>(hypotheses: &[S], references: &[S]) -> Result<f64, BleuError> {
    corpus_score_with_offset(hypotheses, references, DEFAULT_CORPUS_OFFSET)
}

/// Corpus BLEU with an explicit smoothing offset.
///
/// Fails with `InvalidOffset` unless `offset` is finite and in `[0, 1]`.
pub fn corpus_score_with_offset<S: AsRef<str>>(
    hypotheses: &[S],
    references: &[S],
    offset: f64,
) -> Result<f64, BleuError> {
    let offset = validate_offset(offset)?;
    Ok(corpus_statistics(hypotheses, references)?.score(offset))
}
