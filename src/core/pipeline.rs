//! High-level pipeline assembling tokenization, counting, and scoring.

use crate::core::{
    corpus::{corpus_statistics as pooled_statistics, DEFAULT_CORPUS_OFFSET},
    error::{check_aligned, validate_offset},
    ngram::bleu_counts,
    score::{compute_bleu, BleuScoreResult},
    statistics::SentenceStatistics,
};
use crate::Result;
use rayon::prelude::*;
use tracing::debug;

/// Configuration for BleuScorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BleuScorerConfig {
    /// Floor used for orders with no matching n-grams, in `[0, 1]`
    pub offset: f64,
    /// Whether per-sentence statistics are computed on the rayon pool
    pub parallel: bool,
}

impl Default for BleuScorerConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_CORPUS_OFFSET,
            parallel: true,
        }
    }
}

/// BleuScorer handles the full corpus BLEU pipeline.
#[derive(Debug, Clone)]
pub struct BleuScorer {
    config: BleuScorerConfig,
}

impl BleuScorer {
    /// Get the configuration.
    pub fn config(&self) -> &BleuScorerConfig {
        &self.config
    }

    /// Creates a new BleuScorer, rejecting offsets outside `[0, 1]`.
    pub fn new(config: BleuScorerConfig) -> Result<Self> {
        validate_offset(config.offset)?;
        Ok(Self { config })
    }

    /// Computes statistics for each candidate-reference pair.
    ///
    /// # Arguments
    /// * `candidates` - List of candidate sentences
    /// * `references` - List of reference sentences (same length as candidates)
    ///
    /// # Returns
    /// One statistics triple per pair, in input order
    pub fn sentence_statistics<S: AsRef<str> + Send + Sync>(
        &self,
        candidates: &[S],
        references: &[S],
    ) -> Result<Vec<SentenceStatistics>> {
        check_aligned(candidates.len(), references.len())?;

        let stats: Vec<SentenceStatistics> = if self.config.parallel {
            candidates
                .par_iter()
                .zip(references.par_iter())
                .map(|(cand, reference)| bleu_counts(cand.as_ref(), reference.as_ref()))
                .collect()
        } else {
            candidates
                .iter()
                .zip(references)
                .map(|(cand, reference)| bleu_counts(cand.as_ref(), reference.as_ref()))
                .collect()
        };
        Ok(stats)
    }

    /// Pools the statistics of all pairs.
    ///
    /// Counts are integers, so the parallel reduction is exact and does not
    /// depend on the order in which partial sums are combined.
    pub fn corpus_statistics<S: AsRef<str> + Send + Sync>(
        &self,
        candidates: &[S],
        references: &[S],
    ) -> Result<SentenceStatistics> {
        if !self.config.parallel {
            return Ok(pooled_statistics(candidates, references)?);
        }
        check_aligned(candidates.len(), references.len())?;

        let pooled = candidates
            .par_iter()
            .zip(references.par_iter())
            .map(|(cand, reference)| bleu_counts(cand.as_ref(), reference.as_ref()))
            .reduce(SentenceStatistics::default, |a, b| a + b);

        debug!(
            sentences = candidates.len(),
            ?pooled,
            "pooled corpus statistics"
        );
        Ok(pooled)
    }

    /// Scores the corpus as a whole.
    pub fn score<S: AsRef<str> + Send + Sync>(
        &self,
        candidates: &[S],
        references: &[S],
    ) -> Result<BleuScoreResult> {
        let pooled = self.corpus_statistics(candidates, references)?;
        Ok(self.score_statistics(&pooled))
    }

    /// Scores each pair on its own.
    ///
    /// Sentence-level BLEU is unstable on short sentences; prefer `score` for
    /// corpus evaluation.
    pub fn score_sentences<S: AsRef<str> + Send + Sync>(
        &self,
        candidates: &[S],
        references: &[S],
    ) -> Result<Vec<BleuScoreResult>> {
        let stats = self.sentence_statistics(candidates, references)?;
        Ok(stats.iter().map(|s| self.score_statistics(s)).collect())
    }

    /// Scores pre-aggregated statistics, e.g. sums collected across batches.
    pub fn score_statistics(&self, stats: &SentenceStatistics) -> BleuScoreResult {
        compute_bleu(stats, self.config.offset)
    }
}

/// Builder for BleuScorer.
pub struct BleuScorerBuilder {
    config: BleuScorerConfig,
}

impl BleuScorerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: BleuScorerConfig::default(),
        }
    }

    /// Sets the smoothing offset.
    pub fn offset(mut self, offset: f64) -> Self {
        self.config.offset = offset;
        self
    }

    /// Enables or disables parallel statistics computation.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Builds the BleuScorer.
    pub fn build(self) -> Result<BleuScorer> {
        BleuScorer::new(self.config)
    }
}

impl Default for BleuScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
