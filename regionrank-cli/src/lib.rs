//! Command-line interface for ranking and recommending regions.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod dataset;
mod error;
mod fs;
mod recommend;
mod score;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use score::{ScoreArgs, run_score};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_WEIGHTS: &str = "weights";
pub(crate) const ARG_DISABLE: &str = "disable";
pub(crate) const ENV_SCORE_DATASET: &str = "REGIONRANK_CMDS_SCORE_DATASET";
pub(crate) const ENV_RECOMMEND_DATASET: &str = "REGIONRANK_CMDS_RECOMMEND_DATASET";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "REGIONRANK_CMDS_RECOMMEND_REQUEST";

/// Run the regionrank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, inputs, or the ranking pipeline fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "regionrank",
    about = "Rank administrative regions by a weighted desirability score",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every region in a dataset.
    Score(ScoreArgs),
    /// Recommend regions around a reference location.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
