//! Command-line interface for scoring locations for habitability.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod addresses;
mod error;
mod score;

pub use error::CliError;

use addresses::{AddressesArgs, run_addresses};
use score::{ScoreArgs, run_score};

const ARG_LAT: &str = "lat";
const ARG_LNG: &str = "lng";
const ARG_ADDRESS: &str = "address";
const ARG_DATA_DIR: &str = "data-dir";
const ARG_AMENITY_WEIGHT: &str = "amenity-weight";
const ARG_POLYGON_WEIGHT: &str = "polygon-weight";
const ARG_PENALTY_WEIGHT: &str = "penalty-weight";
const ARG_CELL_SIZE: &str = "cell-size";
const ARG_LIMIT: &str = "limit";
const ENV_LAT: &str = "HABITAT_CMDS_SCORE_LAT";
const ENV_LNG: &str = "HABITAT_CMDS_SCORE_LNG";

/// Directory searched for datasets when none is configured.
const DEFAULT_DATA_DIR: &str = "data";

/// Run the habitability CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Addresses(args) => run_addresses(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "habitat",
    about = "Score locations for habitability from amenity and zone datasets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a coordinate or a known address.
    Score(ScoreArgs),
    /// List the addresses available to `score --address`.
    Addresses(AddressesArgs),
}

#[cfg(test)]
mod tests;
