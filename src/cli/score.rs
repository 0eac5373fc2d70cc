use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io;
use tracing::info;

use crate::cli::ScoreArgs;
use crate::core::{BleuScoreResult, BleuScorerBuilder, SentenceStatistics};

/// Command to compute corpus BLEU for candidate and reference texts.
///
/// # Arguments
/// `args` - The CLI arguments structure containing:
///  - `candidates`: Path to the file containing candidate texts.
///  - `references`: Path to the file containing reference texts.
///  - `offset`: Smoothing offset for orders without matches.
///  - `per_sentence`: Whether to print sentence-level scores.
///  - `csv`: Optional path for a per-sentence CSV report.
///  - `sequential`: Disables parallel statistics computation.
pub fn cmd_score(args: ScoreArgs) -> Result<()> {
    // Read files
    let candidates = read_lines(&args.candidates)?;
    let references = read_lines(&args.references)?;

    let scorer = BleuScorerBuilder::new()
        .offset(args.offset)
        .parallel(!args.sequential)
        .build()?;

    info!(
        sentences = candidates.len(),
        offset = args.offset,
        "scoring corpus"
    );
    let stats = scorer.sentence_statistics(&candidates, &references)?;
    let pooled: SentenceStatistics = stats.iter().copied().sum();
    let corpus = scorer.score_statistics(&pooled);

    if args.per_sentence || args.csv.is_some() {
        let sentences: Vec<BleuScoreResult> =
            stats.iter().map(|s| scorer.score_statistics(s)).collect();
        if args.per_sentence {
            for (i, result) in sentences.iter().enumerate() {
                println!("Pair {}: BLEU={:.4}", i + 1, result.score);
            }
        }
        if let Some(path) = &args.csv {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create CSV report {path}"))?;
            write_csv(file, &sentences)?;
            info!(path = %path, rows = sentences.len(), "wrote per-sentence report");
        }
    }

    println!(
        "BLEU = {:.2}, {:.1}/{:.1}/{:.1}/{:.1} (BP={:.3}, hyp_len={}, ref_len={})",
        corpus.score * 100.0,
        corpus.precisions[0] * 100.0,
        corpus.precisions[1] * 100.0,
        corpus.precisions[2] * 100.0,
        corpus.precisions[3] * 100.0,
        corpus.brevity_penalty,
        corpus.statistics.hyp_length,
        corpus.statistics.ref_length,
    );

    Ok(())
}

/// One row of the per-sentence CSV report.
#[derive(Debug, Serialize)]
struct SentenceRecord {
    index: usize,
    hyp_length: u64,
    ref_length: u64,
    common_1: u64,
    common_2: u64,
    common_3: u64,
    common_4: u64,
    total_1: u64,
    total_2: u64,
    total_3: u64,
    total_4: u64,
    bleu: f64,
}

impl SentenceRecord {
    fn new(index: usize, result: &BleuScoreResult) -> Self {
        let stats = &result.statistics;
        let common = stats.statistics.common_counts();
        let total = stats.statistics.total_counts();
        Self {
            index,
            hyp_length: stats.hyp_length,
            ref_length: stats.ref_length,
            common_1: common[0],
            common_2: common[1],
            common_3: common[2],
            common_4: common[3],
            total_1: total[0],
            total_2: total[1],
            total_3: total[2],
            total_4: total[3],
            bleu: result.score,
        }
    }
}

fn write_csv<W: io::Write>(writer: W, results: &[BleuScoreResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, result) in results.iter().enumerate() {
        csv_writer.serialize(SentenceRecord::new(i + 1, result))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[inline(always)]
fn read_lines(filename: &str) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(filename).with_context(|| format!("failed to read {filename}"))?;
    Ok(content.lines().map(String::from).collect())
}
