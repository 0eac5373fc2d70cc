//! Command-line interface for rust-bleu-score.
use clap::{Args, Parser, Subcommand};

use crate::core::DEFAULT_CORPUS_OFFSET;

#[derive(Parser)]
#[command(name = "bleu-score", about = "Corpus-level BLEU scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// File containing candidate sentences, one per line
    #[arg(short, long)]
    pub candidates: String,

    /// File containing reference sentences, one per line
    #[arg(short, long)]
    pub references: String,

    /// Smoothing offset for orders without matches, in [0, 1]
    #[arg(long, default_value_t = DEFAULT_CORPUS_OFFSET)]
    pub offset: f64,

    /// Also print sentence-level scores
    #[arg(long)]
    pub per_sentence: bool,

    /// Write per-sentence statistics and scores to a CSV file
    #[arg(long)]
    pub csv: Option<String>,

    /// Compute statistics on the current thread only
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Debug, Args)]
pub struct CountsArgs {
    /// Hypothesis sentence
    #[arg(long)]
    pub hypothesis: String,

    /// Reference sentence
    #[arg(long)]
    pub reference: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score candidates against references
    Score(ScoreArgs),

    /// Print n-gram statistics for a single sentence pair
    Counts(CountsArgs),
}
