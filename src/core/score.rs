//! BLEU scoring from pooled n-gram statistics.

use crate::core::statistics::{SentenceStatistics, Statistics, MAX_NGRAM_ORDER};
use serde::{Deserialize, Serialize};

/// Smoothing offset used when scoring a single statistics triple directly.
pub const DEFAULT_SENTENCE_OFFSET: f64 = 0.0;

/// Result of BLEU scoring, with the intermediate terms that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BleuScoreResult {
    /// Final BLEU score in `[0, 1]`
    pub score: f64,
    /// Smoothed precision per n-gram order (index `n - 1`)
    pub precisions: [f64; MAX_NGRAM_ORDER],
    /// Multiplicative penalty for hypotheses shorter than their reference
    pub brevity_penalty: f64,
    /// The statistics that were scored
    pub statistics: SentenceStatistics,
}

/// Computes BLEU for a statistics triple.
///
/// # Arguments
/// * `statistics` - Clipped common counts and hypothesis totals per order
/// * `hyp_length` - Number of hypothesis tokens
/// * `ref_length` - Number of reference tokens
/// * `offset` - Floor used in place of a zero match count. Values outside
///   `[0, 1]` are clamped into it and `NaN` is treated as `0.0`.
///
/// # Returns
/// The score in `[0, 1]`. An empty hypothesis, or any order without
/// hypothesis n-grams, scores exactly `0.0` whatever the offset.
pub fn score(statistics: &Statistics, hyp_length: u64, ref_length: u64, offset: f64) -> f64 {
    compute_bleu(
        &SentenceStatistics::new(*statistics, hyp_length, ref_length),
        offset,
    )
    .score
}

/// Computes BLEU for a statistics triple and keeps the intermediate terms.
pub fn compute_bleu(stats: &SentenceStatistics, offset: f64) -> BleuScoreResult {
    let mut result = BleuScoreResult {
        score: 0.0,
        precisions: [0.0; MAX_NGRAM_ORDER],
        brevity_penalty: 0.0,
        statistics: *stats,
    };

    // Brevity penalty is undefined for an empty hypothesis.
    if stats.hyp_length == 0 {
        return result;
    }

    result.precisions = smoothed_precisions(&stats.statistics, offset);
    result.brevity_penalty = brevity_penalty(stats.hyp_length, stats.ref_length);
    result.score = result.brevity_penalty * geometric_mean(&result.precisions);
    result
}

/// Per-order precision with floor smoothing.
///
/// An order without hypothesis n-grams gets precision `0.0`. An order with
/// n-grams but no matches uses `offset` in place of the zero count.
fn smoothed_precisions(statistics: &Statistics, offset: f64) -> [f64; MAX_NGRAM_ORDER] {
    let floor = clamp_offset(offset);
    let mut precisions = [0.0; MAX_NGRAM_ORDER];
    for (i, precision) in precisions.iter_mut().enumerate() {
        let common = statistics.common_counts()[i];
        let total = statistics.total_counts()[i];
        if total == 0 {
            continue;
        }
        let matched = if common > 0 { common as f64 } else { floor };
        *precision = matched / total as f64;
    }
    precisions
}

/// Keeps `offset / total` within `[0, 1]` for any `total >= 1`.
fn clamp_offset(offset: f64) -> f64 {
    if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, 1.0)
    }
}

/// Uniformly weighted geometric mean; zero if any precision is zero.
fn geometric_mean(precisions: &[f64; MAX_NGRAM_ORDER]) -> f64 {
    if precisions.iter().any(|&p| p <= 0.0) {
        return 0.0;
    }
    let log_sum: f64 = precisions.iter().map(|p| p.ln()).sum();
    (log_sum / MAX_NGRAM_ORDER as f64).exp()
}

/// `exp(1 - r / h)` for hypotheses shorter than the reference, else `1.0`.
///
/// Callers guarantee `hyp_length > 0`.
fn brevity_penalty(hyp_length: u64, ref_length: u64) -> f64 {
    if hyp_length >= ref_length {
        1.0
    } else {
        (1.0 - ref_length as f64 / hyp_length as f64).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-8;

    #[test]
    fn test_scoring() {
        let stats = Statistics::new([9, 7, 5, 3], [10, 8, 6, 4]);
        let bleu = score(&stats, 11, 11, DEFAULT_SENTENCE_OFFSET);
        assert!((bleu - 0.8375922397).abs() < EPSILON);
    }

    #[test]
    fn test_offset_floors_zero_matches() {
        let stats = Statistics::new([4, 2, 1, 0], [6, 5, 4, 3]);
        assert!((score(&stats, 6, 8, 0.1) - 0.1555722182).abs() < EPSILON);
        assert_eq!(score(&stats, 6, 8, 0.0), 0.0);
    }

    #[test]
    fn test_out_of_range_offset_is_clamped() {
        let stats = Statistics::new([4, 3, 2, 0], [4, 3, 2, 1]);
        assert_eq!(score(&stats, 4, 4, 2.0), score(&stats, 4, 4, 1.0));
        assert!(score(&stats, 4, 4, 2.0) <= 1.0);
        assert_eq!(score(&stats, 4, 4, -1.0), 0.0);
        assert_eq!(score(&stats, 4, 4, f64::NAN), 0.0);
        assert_eq!(score(&stats, 4, 4, f64::INFINITY), score(&stats, 4, 4, 1.0));
    }

    #[test]
    fn test_degenerate_statistics() {
        let cases = [
            (Statistics::new([0, 0, 0, 0], [4, 4, 2, 1]), 0, 1, 0.0),
            (Statistics::new([0, 0, 0, 0], [10, 11, 12, 0]), 14, 10, 0.0),
            (Statistics::new([0, 0, 0, 0], [0, 0, 0, 0]), 0, 0, 0.0),
            (Statistics::new([6, 5, 4, 0], [6, 5, 4, 3]), 6, 6, 0.0),
            (Statistics::new([0, 0, 0, 0], [0, 0, 0, 0]), 0, 0, 0.1),
            (Statistics::new([0, 0, 0, 0], [0, 0, 0, 0]), 1, 5, 0.01),
        ];
        for (stats, hyp_length, ref_length, offset) in cases {
            assert_eq!(score(&stats, hyp_length, ref_length, offset), 0.0);
        }
    }

    #[test]
    fn test_zero_total_ignores_offset() {
        // Perfect matches on orders 1..3 cannot rescue a missing 4-gram order.
        let stats = Statistics::new([3, 2, 1, 0], [3, 2, 1, 0]);
        assert_eq!(score(&stats, 3, 3, 1.0), 0.0);
    }

    #[test]
    fn test_brevity_penalty() {
        assert_eq!(brevity_penalty(5, 5), 1.0);
        assert_eq!(brevity_penalty(7, 5), 1.0);
        assert!((brevity_penalty(6, 8) - (-1.0f64 / 3.0).exp()).abs() < EPSILON);
    }

    #[test]
    fn test_compute_bleu_breakdown() {
        let stats = SentenceStatistics::new(Statistics::new([3, 2, 1, 0], [4, 3, 2, 1]), 4, 4);
        let result = compute_bleu(&stats, 0.01);
        assert!((result.precisions[0] - 0.75).abs() < EPSILON);
        assert!((result.precisions[3] - 0.01).abs() < EPSILON);
        assert_eq!(result.brevity_penalty, 1.0);
        assert!((result.score - 0.223606797749979).abs() < EPSILON);
        assert_eq!(result.statistics, stats);
    }

    #[test]
    fn test_empty_hypothesis_breakdown() {
        let stats = SentenceStatistics::new(Statistics::default(), 0, 3);
        let result = compute_bleu(&stats, 0.5);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.brevity_penalty, 0.0);
        assert_eq!(result.precisions, [0.0; MAX_NGRAM_ORDER]);
    }
}
