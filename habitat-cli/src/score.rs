//! Score command implementation for the habitability CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use habitat_core::{DEFAULT_CELL_SIZE_DEG, GridIndex, ProximitySource, ZoneIndex};
use habitat_data::Datasets;
use habitat_scorer::{HabitabilityScorer, Region, ScoreResult, ScorerConfig, WeightUpdate};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ADDRESS, ARG_AMENITY_WEIGHT, ARG_CELL_SIZE, ARG_DATA_DIR, ARG_LAT, ARG_LNG,
    ARG_PENALTY_WEIGHT, ARG_POLYGON_WEIGHT, CliError, DEFAULT_DATA_DIR, ENV_LAT, ENV_LNG,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a location for habitability. The location is given \
                 either as coordinates or as an address label from the \
                 geocoding dataset. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Score a location for habitability"
)]
#[ortho_config(prefix = "HABITAT")]
pub(crate) struct ScoreArgs {
    /// Latitude of the location in degrees.
    #[arg(long = ARG_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the location in degrees.
    #[arg(long = ARG_LNG, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Address label to look up instead of coordinates.
    #[arg(long = ARG_ADDRESS, value_name = "label")]
    #[serde(default)]
    pub(crate) address: Option<String>,
    /// Directory holding `features.json`, `features_poly.json`, and `geocoding.json`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Weight of the amenity component.
    #[arg(long = ARG_AMENITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) amenity_weight: Option<f64>,
    /// Weight of the polygon component.
    #[arg(long = ARG_POLYGON_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) polygon_weight: Option<f64>,
    /// Weight of the penalty component.
    #[arg(long = ARG_PENALTY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) penalty_weight: Option<f64>,
    /// Treat the weight flags as slider magnitudes and divide them by their
    /// sum. Missing weights count as zero; an all-zero set keeps the defaults.
    #[arg(long)]
    #[serde(default)]
    pub(crate) normalise_weights: bool,
    /// Grid cell size in degrees.
    #[arg(long = ARG_CELL_SIZE, value_name = "deg")]
    #[serde(default)]
    pub(crate) cell_size: Option<f64>,
    /// Scan every amenity instead of using the grid index.
    #[arg(long)]
    #[serde(default)]
    pub(crate) linear_scan: bool,
    /// Accept coordinates outside the New York City bounds.
    #[arg(long)]
    #[serde(default)]
    pub(crate) no_region: bool,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Where to score.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Target {
    /// Explicit coordinates.
    Coordinates { lat: f64, lon: f64 },
    /// An address label resolved through the geocoding dataset.
    Address(String),
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) target: Target,
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) weights: WeightUpdate,
    pub(crate) cell_size_deg: f64,
    pub(crate) linear_scan: bool,
    pub(crate) enforce_region: bool,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let weights = weight_update(&args);
        let target = match (args.lat, args.lng, args.address) {
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => {
                return Err(CliError::ConflictingTarget);
            }
            (None, None, Some(label)) => Target::Address(label),
            (Some(lat), Some(lon), None) => Target::Coordinates { lat, lon },
            (None, _, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LAT,
                    env: ENV_LAT,
                });
            }
            (Some(_), None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LNG,
                    env: ENV_LNG,
                });
            }
        };
        Ok(Self {
            target,
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            weights,
            cell_size_deg: args.cell_size.unwrap_or(DEFAULT_CELL_SIZE_DEG),
            linear_scan: args.linear_scan,
            enforce_region: !args.no_region,
        })
    }
}

fn weight_update(args: &ScoreArgs) -> WeightUpdate {
    if args.normalise_weights {
        WeightUpdate::from_sliders(args.amenity_weight, args.polygon_weight, args.penalty_weight)
    } else {
        WeightUpdate {
            amenity: args.amenity_weight,
            polygons: args.polygon_weight,
            penalty: args.penalty_weight,
        }
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_score_with(&config, &mut stdout)
}

pub(super) fn run_score_with(
    config: &ScoreConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let result = execute_score(config)?;
    write_score_result(writer, &result)
}

fn execute_score(config: &ScoreConfig) -> Result<ScoreResult, CliError> {
    let datasets = Datasets::load(&config.data_dir)?;
    let (lat, lon) = match &config.target {
        Target::Coordinates { lat, lon } => (*lat, *lon),
        Target::Address(label) => {
            let found = datasets
                .addresses
                .lookup(label)
                .ok_or_else(|| CliError::UnknownAddress {
                    label: label.clone(),
                })?;
            info!("resolved {label:?} to ({}, {})", found.latitude, found.longitude);
            (found.latitude, found.longitude)
        }
    };

    let scorer_config = ScorerConfig {
        region: config.enforce_region.then(Region::new_york),
        ..ScorerConfig::default()
    };
    let zones = ZoneIndex::new(datasets.zones);
    if config.linear_scan {
        let scorer = HabitabilityScorer::with_config(datasets.amenities, zones, scorer_config);
        evaluate(scorer, config.weights, lat, lon)
    } else {
        let index = GridIndex::build(datasets.amenities, config.cell_size_deg)?;
        let scorer = HabitabilityScorer::with_config(index, zones, scorer_config);
        evaluate(scorer, config.weights, lat, lon)
    }
}

fn evaluate<S: ProximitySource>(
    mut scorer: HabitabilityScorer<S>,
    weights: WeightUpdate,
    lat: f64,
    lon: f64,
) -> Result<ScoreResult, CliError> {
    scorer.set_weights(weights);
    Ok(scorer.evaluate(lat, lon)?)
}

fn write_score_result(writer: &mut dyn Write, result: &ScoreResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerialiseResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
