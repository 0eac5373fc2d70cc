//! N-gram count statistics and their elementwise aggregation.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Highest n-gram order counted by BLEU. Orders run from 1 to this value.
pub const MAX_NGRAM_ORDER: usize = 4;

/// Clipped match counts and candidate totals for each n-gram order.
///
/// Index `n - 1` holds the counts for order `n`. For any value built from a
/// single sentence pair, or a sum of such values, `common_counts[i]` never
/// exceeds `total_counts[i]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statistics {
    common_counts: [u64; MAX_NGRAM_ORDER],
    total_counts: [u64; MAX_NGRAM_ORDER],
}

impl Statistics {
    /// Creates statistics from per-order common and total counts.
    pub fn new(common_counts: [u64; MAX_NGRAM_ORDER], total_counts: [u64; MAX_NGRAM_ORDER]) -> Self {
        Self {
            common_counts,
            total_counts,
        }
    }

    /// Clipped n-gram matches per order.
    pub fn common_counts(&self) -> &[u64; MAX_NGRAM_ORDER] {
        &self.common_counts
    }

    /// Number of hypothesis n-grams per order.
    pub fn total_counts(&self) -> &[u64; MAX_NGRAM_ORDER] {
        &self.total_counts
    }
}

impl Add for Statistics {
    type Output = Statistics;

    fn add(self, other: Statistics) -> Statistics {
        let mut common_counts = self.common_counts;
        let mut total_counts = self.total_counts;
        for i in 0..MAX_NGRAM_ORDER {
            common_counts[i] += other.common_counts[i];
            total_counts[i] += other.total_counts[i];
        }
        Statistics::new(common_counts, total_counts)
    }
}

impl Sum for Statistics {
    fn sum<I: Iterator<Item = Statistics>>(iter: I) -> Self {
        iter.fold(Statistics::default(), Add::add)
    }
}

/// The per-sentence unit of BLEU: counts plus hypothesis and reference lengths.
///
/// Corpus statistics are the sum of sentence statistics; every field is added
/// independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentenceStatistics {
    pub statistics: Statistics,
    pub hyp_length: u64,
    pub ref_length: u64,
}

impl SentenceStatistics {
    pub fn new(statistics: Statistics, hyp_length: u64, ref_length: u64) -> Self {
        Self {
            statistics,
            hyp_length,
            ref_length,
        }
    }

    /// Scores these statistics with the given smoothing offset.
    pub fn score(&self, offset: f64) -> f64 {
        crate::core::score::score(&self.statistics, self.hyp_length, self.ref_length, offset)
    }
}

impl Add for SentenceStatistics {
    type Output = SentenceStatistics;

    fn add(self, other: SentenceStatistics) -> SentenceStatistics {
        SentenceStatistics {
            statistics: self.statistics + other.statistics,
            hyp_length: self.hyp_length + other.hyp_length,
            ref_length: self.ref_length + other.ref_length,
        }
    }
}

impl Sum for SentenceStatistics {
    fn sum<I: Iterator<Item = SentenceStatistics>>(iter: I) -> Self {
        iter.fold(SentenceStatistics::default(), Add::add)
    }
}
