pub mod types;
mod counts;
mod score;

pub use types::{Cli, Command, CountsArgs, ScoreArgs};
pub use counts::cmd_counts;
pub use score::cmd_score;
