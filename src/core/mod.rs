mod corpus;
mod error;
mod ngram;
mod pipeline;
mod score;
mod statistics;
mod tokenizer;

pub use corpus::{corpus_score, corpus_score_with_offset, corpus_statistics, DEFAULT_CORPUS_OFFSET};
pub use error::{validate_offset, BleuError};
pub use ngram::{bleu_counts, ngram_statistics};
pub use pipeline::{BleuScorer, BleuScorerBuilder, BleuScorerConfig};
pub use score::{compute_bleu, score, BleuScoreResult, DEFAULT_SENTENCE_OFFSET};
pub use statistics::{SentenceStatistics, Statistics, MAX_NGRAM_ORDER};
pub use tokenizer::tokenize;
