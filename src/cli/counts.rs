use anyhow::Result;

use crate::cli::CountsArgs;
use crate::core::{bleu_counts, DEFAULT_SENTENCE_OFFSET};

/// Prints the statistics triple of one hypothesis/reference pair and its
/// unsmoothed sentence score.
pub fn cmd_counts(args: CountsArgs) -> Result<()> {
    print!("{}", counts_report(&args.hypothesis, &args.reference));
    Ok(())
}

fn counts_report(hypothesis: &str, reference: &str) -> String {
    let stats = bleu_counts(hypothesis, reference);
    format!(
        "common counts: {:?}\ntotal counts:  {:?}\nhyp length:    {}\nref length:    {}\nBLEU:          {:.4}\n",
        stats.statistics.common_counts(),
        stats.statistics.total_counts(),
        stats.hyp_length,
        stats.ref_length,
        stats.score(DEFAULT_SENTENCE_OFFSET),
    )
}
