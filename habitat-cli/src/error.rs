//! Error types emitted by the habitability CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use habitat_core::GridIndexError;
use habitat_data::DatasetError;
use habitat_scorer::ScoreError;
use thiserror::Error;

/// Errors emitted by the habitability CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Both coordinates and an address were supplied.
    #[error("pass either --lat/--lng or --address, not both")]
    ConflictingTarget,
    /// The requested address is not in the geocoding dataset.
    #[error("address {label:?} is not in the geocoding dataset")]
    UnknownAddress { label: String },
    /// Loading the datasets failed.
    #[error("data unavailable: {0}")]
    Datasets(#[from] DatasetError),
    /// The spatial index rejected its configuration.
    #[error("failed to build the amenity index: {0}")]
    BuildIndex(#[from] GridIndexError),
    /// The scorer rejected the query.
    #[error("cannot score location: {0}")]
    Score(#[from] ScoreError),
    /// Serialising the score result failed.
    #[error("failed to serialise score result: {0}")]
    SerialiseResult(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
