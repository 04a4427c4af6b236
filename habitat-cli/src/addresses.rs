//! Address listing for the habitability CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use habitat_data::{ADDRESSES_FILE, AddressBook};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATA_DIR, ARG_LIMIT, CliError, DEFAULT_DATA_DIR};

/// CLI arguments for the `addresses` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the addresses available for scoring")]
#[ortho_config(prefix = "HABITAT")]
pub(crate) struct AddressesArgs {
    /// Directory holding `geocoding.json`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Print at most this many addresses.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

/// Resolved `addresses` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AddressesConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) limit: usize,
}

impl From<AddressesArgs> for AddressesConfig {
    fn from(args: AddressesArgs) -> Self {
        Self {
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            limit: args.limit.unwrap_or(usize::MAX),
        }
    }
}

pub(super) fn run_addresses(args: AddressesArgs) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let mut stdout = std::io::stdout().lock();
    run_addresses_with(&AddressesConfig::from(merged), &mut stdout)
}

pub(super) fn run_addresses_with(
    config: &AddressesConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let book = AddressBook::load(&config.data_dir.join(ADDRESSES_FILE))?;
    for address in book.first(config.limit) {
        writeln!(
            writer,
            "{}\t{}\t{}",
            address.address, address.latitude, address.longitude
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
