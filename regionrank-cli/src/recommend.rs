//! `recommend` command: rank the regions around a reference location.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use regionrank_scorer::{
    DEFAULT_CAPITALISATION_RATE, DEFAULT_NAME_COLUMN, RecommendOptions, recommend,
};
use serde::{Deserialize, Serialize};

use crate::dataset::{load_dataset, load_request, write_collection};
use crate::fs::require_existing;
use crate::{
    ARG_DATASET, ARG_REQUEST, CliError, ENV_RECOMMEND_DATASET, ENV_RECOMMEND_REQUEST,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find the reference region named by a JSON recommendation \
                 request, keep the regions within its distance and budget \
                 bounds, and print them ranked by computedValue.",
    about = "Recommend regions around a reference location"
)]
#[ortho_config(prefix = "REGIONRANK")]
pub(crate) struct RecommendArgs {
    /// Path to the GeoJSON region dataset.
    #[arg(value_name = "dataset")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "request")]
    #[serde(default)]
    pub(crate) request: Option<Utf8PathBuf>,
    /// Annual rate used to capitalise monthly rent (default 0.06).
    #[arg(long, value_name = "rate")]
    #[serde(default)]
    pub(crate) capitalisation_rate: Option<f64>,
    /// Attribute holding each region's administrative name.
    #[arg(long, value_name = "column")]
    #[serde(default)]
    pub(crate) name_column: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) request: Utf8PathBuf,
    pub(crate) options: RecommendOptions,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)?;
        require_existing(&self.request, ARG_REQUEST)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_RECOMMEND_DATASET,
        })?;
        let request = args.request.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let options = RecommendOptions {
            name_column: args
                .name_column
                .unwrap_or_else(|| DEFAULT_NAME_COLUMN.to_owned()),
            capitalisation_rate: args
                .capitalisation_rate
                .unwrap_or(DEFAULT_CAPITALISATION_RATE),
        };
        Ok(Self {
            dataset,
            request,
            options,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let collection = load_dataset(&config.dataset)?;
    let query = load_request(&config.request)?;
    let ranked = recommend(&collection, &query, &config.options)?;
    write_collection(writer, &ranked)
}
