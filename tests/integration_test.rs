//! Integration tests for the BLEU implementation.

use rust_bleu_score::{
    bleu_counts, corpus_score, corpus_score_with_offset, ngram_statistics, score, BleuError,
    BleuScorerBuilder, Statistics,
};

const EPSILON: f64 = 1e-8;

#[test]
fn test_corpus_bleu_reference_values() {
    let bleu = corpus_score(&["this is a test", "another test"], &["ref1", "ref2"]).unwrap();
    assert!((bleu - 0.003799178428257963).abs() < EPSILON);

    let bleu = corpus_score(&["this is a test"], &["this is a test"]).unwrap();
    assert!((bleu - 1.0).abs() < EPSILON);

    let bleu = corpus_score(&["this is a fest"], &["this is a test"]).unwrap();
    assert!((bleu - 0.223606797749979).abs() < EPSILON);
}

#[test]
fn test_statistics_for_token_sequences() {
    let stats = ngram_statistics(
        &["am", "I", "am", "a", "character", "sequence"],
        &["I", "am", "a", "symbol", "string", "sequence", "a", "a"],
    );
    assert_eq!(stats.statistics, Statistics::new([4, 2, 1, 0], [6, 5, 4, 3]));
}

#[test]
fn test_direct_scoring() {
    let stats = Statistics::new([9, 7, 5, 3], [10, 8, 6, 4]);
    assert!((score(&stats, 11, 11, 0.0) - 0.8375922397).abs() < EPSILON);

    let empty = Statistics::new([0, 0, 0, 0], [0, 0, 0, 0]);
    assert_eq!(score(&empty, 1, 5, 0.01), 0.0);
}

#[test]
fn test_offset_on_sentence_counts() {
    let counts = bleu_counts("am I am a character sequence", "I am a symbol string sequence a a");
    assert_eq!(counts.score(0.0), 0.0);
    assert!((counts.score(0.1) - 0.1555722182).abs() < EPSILON);
}

#[test]
fn test_identity_for_any_offset() {
    let sentence = "the quick brown fox jumps over the lazy dog";
    for offset in [0.0, 0.01, 0.1, 0.5, 1.0] {
        let bleu = corpus_score_with_offset(&[sentence], &[sentence], offset).unwrap();
        assert!((bleu - 1.0).abs() < EPSILON, "offset {offset} gave {bleu}");
    }
}

#[test]
fn test_length_mismatch_fails_fast() {
    let err = corpus_score(&["a b c d", "e f g h"], &["a b c d"]).unwrap_err();
    assert_eq!(
        err,
        BleuError::LengthMismatch {
            hypotheses: 2,
            references: 1
        }
    );
}

#[test]
fn test_incremental_aggregation_across_batches() {
    let hypotheses = [
        "the cat sat on the mat",
        "there is a cat on the mat",
        "a dog ran in the park today",
        "it is raining",
    ];
    let references = [
        "the cat is on the mat",
        "there is a cat on the mat",
        "a dog was running in the park",
        "it rains heavily today",
    ];
    let scorer = BleuScorerBuilder::new().build().unwrap();

    let first = scorer
        .corpus_statistics(&hypotheses[..2], &references[..2])
        .unwrap();
    let second = scorer
        .corpus_statistics(&hypotheses[2..], &references[2..])
        .unwrap();
    let full = scorer.corpus_statistics(&hypotheses, &references).unwrap();

    assert_eq!(first + second, full);
    assert_eq!(
        scorer.score_statistics(&(first + second)).score,
        scorer.score(&hypotheses, &references).unwrap().score
    );
}

#[test]
fn test_scorer_matches_free_functions() {
    let hypotheses = ["this is a test", "another test"];
    let references = ["ref1", "ref2"];
    let scorer = BleuScorerBuilder::new().build().unwrap();
    let result = scorer.score(&hypotheses, &references).unwrap();
    assert_eq!(result.score, corpus_score(&hypotheses, &references).unwrap());
}
