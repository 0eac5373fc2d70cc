//! Walkthrough of rust-bleu-score functionality.

use rust_bleu_score::core::{
    bleu_counts, compute_bleu, corpus_score, corpus_score_with_offset, ngram_statistics, score,
    SentenceStatistics, Statistics, DEFAULT_CORPUS_OFFSET,
};
use rust_bleu_score::BleuScorerBuilder;

fn main() -> anyhow::Result<()> {
    println!("=== Rust BLEU Demo ===\n");

    demo_sentence_statistics();
    demo_direct_scoring();
    demo_corpus_scoring()?;
    demo_incremental_aggregation()?;

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn demo_sentence_statistics() {
    println!("1. Sentence Statistics");
    println!("------------------------------------");

    let hyp = ["am", "I", "am", "a", "character", "sequence"];
    let reference = ["I", "am", "a", "symbol", "string", "sequence", "a", "a"];
    let stats = ngram_statistics(&hyp, &reference);

    println!("Hypothesis: {}", hyp.join(" "));
    println!("Reference:  {}", reference.join(" "));
    println!("Common counts: {:?}", stats.statistics.common_counts());
    println!("Total counts:  {:?}", stats.statistics.total_counts());
    println!("Lengths: hyp={}, ref={}\n", stats.hyp_length, stats.ref_length);
}

fn demo_direct_scoring() {
    println!("2. Scoring Pre-computed Statistics");
    println!("------------------------------------");

    let stats = Statistics::new([9, 7, 5, 3], [10, 8, 6, 4]);
    println!("Unsmoothed BLEU: {:.10}", score(&stats, 11, 11, 0.0));

    let counts = bleu_counts("this is a fest", "this is a test");
    let result = compute_bleu(&counts, 0.01);
    println!("Precisions: {:?}", result.precisions);
    println!("Brevity penalty: {:.4}", result.brevity_penalty);
    println!("Smoothed BLEU: {:.6}\n", result.score);
}

fn demo_corpus_scoring() -> anyhow::Result<()> {
    println!("3. Corpus Scoring");
    println!("------------------------------------");

    let hypotheses = ["this is a test", "another test"];
    let references = ["ref1", "ref2"];

    println!(
        "Corpus BLEU (offset {}): {:.10}",
        DEFAULT_CORPUS_OFFSET,
        corpus_score(&hypotheses, &references)?
    );
    println!(
        "Corpus BLEU (offset 0.0): {:.10}\n",
        corpus_score_with_offset(&hypotheses, &references, 0.0)?
    );
    Ok(())
}

fn demo_incremental_aggregation() -> anyhow::Result<()> {
    println!("4. Incremental Aggregation");
    println!("------------------------------------");

    let scorer = BleuScorerBuilder::new().offset(0.01).build()?;
    let batches = [
        (vec!["the cat sat on the mat"], vec!["the cat is on the mat"]),
        (vec!["a dog ran in the park"], vec!["a dog was running in the park"]),
    ];

    let mut pooled = SentenceStatistics::default();
    for (i, (hyps, refs)) in batches.iter().enumerate() {
        let batch = scorer.corpus_statistics(hyps, refs)?;
        pooled = pooled + batch;
        println!(
            "After batch {}: BLEU = {:.4}",
            i + 1,
            scorer.score_statistics(&pooled).score
        );
    }
    Ok(())
}
