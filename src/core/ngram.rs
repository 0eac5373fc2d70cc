//! N-gram extraction and clipped match counting.

use crate::core::statistics::{SentenceStatistics, Statistics, MAX_NGRAM_ORDER};
use crate::core::tokenizer::tokenize;
use std::collections::HashMap;

/// Counts every n-gram of order `n` in `tokens`.
///
/// `n` must be at least 1. Sequences shorter than `n` yield an empty map.
fn ngram_counts<'a>(tokens: &'a [&'a str], n: usize) -> HashMap<&'a [&'a str], u64> {
    let mut counts = HashMap::new();
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// Sums `min(hyp_count, ref_count)` over the distinct hypothesis n-grams.
fn clipped_matches<'a>(
    hyp: &HashMap<&'a [&'a str], u64>,
    reference: &HashMap<&'a [&'a str], u64>,
) -> u64 {
    hyp.iter()
        .map(|(gram, &hyp_count)| hyp_count.min(reference.get(gram).copied().unwrap_or(0)))
        .sum()
}

/// Computes BLEU statistics for one tokenized hypothesis/reference pair.
///
/// # Arguments
/// * `hypothesis` - Hypothesis tokens
/// * `reference` - Reference tokens
///
/// # Returns
/// Clipped common counts and hypothesis totals for orders 1 through
/// `MAX_NGRAM_ORDER`, together with both sequence lengths. Empty inputs are
/// valid and produce all-zero counts.
pub fn ngram_statistics<S: AsRef<str>>(hypothesis: &[S], reference: &[S]) -> SentenceStatistics {
    let hyp: Vec<&str> = hypothesis.iter().map(|token| token.as_ref()).collect();
    let reference: Vec<&str> = reference.iter().map(|token| token.as_ref()).collect();

    let mut common_counts = [0u64; MAX_NGRAM_ORDER];
    let mut total_counts = [0u64; MAX_NGRAM_ORDER];

    for n in 1..=MAX_NGRAM_ORDER {
        total_counts[n - 1] = (hyp.len() + 1).saturating_sub(n) as u64;
        if total_counts[n - 1] == 0 {
            continue;
        }
        let hyp_grams = ngram_counts(&hyp, n);
        let ref_grams = ngram_counts(&reference, n);
        common_counts[n - 1] = clipped_matches(&hyp_grams, &ref_grams);
    }

    SentenceStatistics::new(
        Statistics::new(common_counts, total_counts),
        hyp.len() as u64,
        reference.len() as u64,
    )
}

/// Tokenizes both strings on whitespace and computes their statistics.
pub fn bleu_counts(hypothesis: &str, reference: &str) -> SentenceStatistics {
    ngram_statistics(&tokenize(hypothesis), &tokenize(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_counts() {
        let tokens = ["a", "b", "a", "b"];
        let bigrams = ngram_counts(&tokens, 2);
        assert_eq!(bigrams.len(), 2);
        assert_eq!(bigrams[&["a", "b"][..]], 2);
        assert_eq!(bigrams[&["b", "a"][..]], 1);

        assert!(ngram_counts(&tokens, 5).is_empty());
    }

    #[test]
    fn test_repeated_ngrams_are_clipped() {
        // "the" appears 7 times in the hypothesis but twice in the reference.
        let hyp = ["the"; 7];
        let reference = ["the", "cat", "is", "on", "the", "mat"];
        let stats = ngram_statistics(&hyp, &reference);
        assert_eq!(stats.statistics.common_counts(), &[2, 0, 0, 0]);
        assert_eq!(stats.statistics.total_counts(), &[7, 6, 5, 4]);
    }

    #[test]
    fn test_statistics_example() {
        let hyp = ["am", "I", "am", "a", "character", "sequence"];
        let reference = ["I", "am", "a", "symbol", "string", "sequence", "a", "a"];
        let stats = ngram_statistics(&hyp, &reference);
        assert_eq!(stats.statistics, Statistics::new([4, 2, 1, 0], [6, 5, 4, 3]));
        assert_eq!(stats.hyp_length, 6);
        assert_eq!(stats.ref_length, 8);
    }

    #[test]
    fn test_short_hypothesis_has_zero_totals() {
        let stats = bleu_counts("a b", "a b c d");
        assert_eq!(stats.statistics.total_counts(), &[2, 1, 0, 0]);
        assert_eq!(stats.statistics.common_counts(), &[2, 1, 0, 0]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        let stats = ngram_statistics(&empty, &empty);
        assert_eq!(stats, SentenceStatistics::default());

        let stats = bleu_counts("", "some reference");
        assert_eq!(stats.statistics, Statistics::default());
        assert_eq!(stats.hyp_length, 0);
        assert_eq!(stats.ref_length, 2);
    }

    #[test]
    fn test_bleu_counts_matches_token_version() {
        let from_text = bleu_counts("am I am a character sequence", "I am a symbol string sequence a a");
        let hyp = ["am", "I", "am", "a", "character", "sequence"];
        let reference = ["I", "am", "a", "symbol", "string", "sequence", "a", "a"];
        assert_eq!(from_text, ngram_statistics(&hyp, &reference));
    }
}
