//! Command-line interface for rust-bleu-score.

use anyhow::Result;
use clap::Parser;
use rust_bleu_score::cli::{cmd_counts, cmd_score, Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Results go to stdout; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score(args) => cmd_score(args),
        Command::Counts(args) => cmd_counts(args),
    }
}
