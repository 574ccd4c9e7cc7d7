//! `score` command: rank every region in a dataset.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use regionrank_core::{HousingType, Indicator, Statuses, Weights};
use regionrank_scorer::{ScoringProfile, score_collection};
use serde::{Deserialize, Serialize};

use crate::dataset::{load_dataset, write_collection};
use crate::fs::require_existing;
use crate::{ARG_DATASET, ARG_DISABLE, ARG_WEIGHTS, CliError, ENV_SCORE_DATASET};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every region in a GeoJSON FeatureCollection and print \
                 the collection ranked by computedValue. Weights, toggles, \
                 and column settings can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Rank all regions in a dataset"
)]
#[ortho_config(prefix = "REGIONRANK")]
pub(crate) struct ScoreArgs {
    /// Path to the GeoJSON region dataset.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Weights for population, transit, commercial, and cost (e.g. "1,1,1,1").
    #[arg(long = ARG_WEIGHTS, value_name = "w,w,w,w")]
    #[serde(default)]
    pub(crate) weights: Option<String>,
    /// Comma-separated indicators to exclude from the score.
    #[arg(long = ARG_DISABLE, value_name = "indicators")]
    #[serde(default)]
    pub(crate) disable: Option<String>,
    /// Dwelling type whose rent columns feed the cost indicator.
    #[arg(long, value_name = "type")]
    #[serde(default)]
    pub(crate) housing_type: Option<HousingType>,
    /// Annual rate used to capitalise monthly rent (default 0.06).
    #[arg(long, value_name = "rate")]
    #[serde(default)]
    pub(crate) capitalisation_rate: Option<f64>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) weights: Weights,
    pub(crate) statuses: Statuses,
    pub(crate) profile: ScoringProfile,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_SCORE_DATASET,
        })?;
        let weights = args
            .weights
            .as_deref()
            .map_or_else(|| Ok(Weights::default()), parse_weights)?;
        let statuses = args
            .disable
            .as_deref()
            .map_or_else(|| Ok(Statuses::default()), parse_disabled)?;
        let mut profile = ScoringProfile::full_dataset(args.housing_type.unwrap_or_default());
        if let Some(rate) = args.capitalisation_rate {
            profile = profile.with_capitalisation_rate(rate);
        }
        Ok(Self {
            dataset,
            weights,
            statuses,
            profile,
        })
    }
}

/// Parse four comma-separated weights in indicator order.
pub(crate) fn parse_weights(raw: &str) -> Result<Weights, CliError> {
    let invalid = || CliError::InvalidWeights { raw: raw.to_owned() };
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    let array: [f64; 4] = values.try_into().map_err(|_| invalid())?;
    Ok(Weights::from_array(array))
}

/// Parse a comma-separated list of indicators to switch off.
pub(crate) fn parse_disabled(raw: &str) -> Result<Statuses, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .try_fold(Statuses::default(), |statuses, part| {
            let indicator = part
                .parse::<Indicator>()
                .map_err(|reason| CliError::InvalidIndicator {
                    raw: part.to_owned(),
                    reason,
                })?;
            Ok(statuses.with(indicator, false))
        })
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.dataset, ARG_DATASET)?;
    execute_score(&config, writer)
}

pub(crate) fn execute_score(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let collection = load_dataset(&config.dataset)?;
    let ranked = score_collection(
        collection,
        &config.weights,
        &config.statuses,
        &config.profile,
    )?;
    write_collection(writer, &ranked)
}
