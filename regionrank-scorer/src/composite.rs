//! Weighted, toggle-gated composite scoring.
//!
//! Each record receives a `computedValue` in `0.0..=100.0` built from three
//! positive indicators and one inverted cost indicator:
//!
//! 1. Positive indicators are min-max normalised over the current records.
//! 2. Rent columns are aggregated into `priceSum`, capitalising monthly rent
//!    into a deposit equivalent. Missing rent figures take the column mean.
//! 3. `priceSum` is normalised and inverted so cheaper regions score higher.
//! 4. Enabled indicators contribute `normalised * weight`; disabled ones
//!    contribute exactly zero.
//! 5. Raw scores are rescaled to `0.0..=100.0` across the current records.

use log::{debug, warn};
use regionrank_core::{
    Indicator, IndicatorSet, RegionRecord, Statuses, Weights, fields,
};

use crate::normalize::{column_mean, normalise_column, normalise_values};
use crate::profile::{ColumnSource, PriceColumns, ScoringProfile, density_field};

const SCORE_SCALE: f64 = 100.0;

/// Per-record intermediate values produced while scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Normalised indicator values; `cost` holds the inverted price value.
    pub normalised: IndicatorSet<f64>,
    /// Monetised rent aggregate before normalisation.
    pub price_sum: f64,
    /// Normalised rent aggregate before inversion.
    pub price_sum_normalised: f64,
    /// Weighted sum before rescaling.
    pub raw_score: f64,
    /// Final score in `0.0..=100.0`.
    pub computed_value: f64,
}

/// Score `records` in place and return their breakdowns in record order.
///
/// Attaches `priceSum`, `priceSumNormalized`, `reversePriceSumNormalized`,
/// the per-indicator normalised fields, any derived density fields, and
/// `computedValue`. No other attributes are altered.
pub fn score(
    records: &mut [RegionRecord],
    weights: &Weights,
    statuses: &Statuses,
    profile: &ScoringProfile,
) -> Vec<ScoreBreakdown> {
    let breakdowns = compute(records, weights, statuses, profile);
    for (record, breakdown) in records.iter_mut().zip(&breakdowns) {
        attach(record, breakdown);
    }
    attach_densities(records, profile);
    breakdowns
}

/// Compute breakdowns without touching the records.
#[must_use]
pub fn compute(
    records: &[RegionRecord],
    weights: &Weights,
    statuses: &Statuses,
    profile: &ScoringProfile,
) -> Vec<ScoreBreakdown> {
    let population = positive_indicator(records, &profile.indicators.population);
    let transit = positive_indicator(records, &profile.indicators.transit);
    let commercial = positive_indicator(records, &profile.indicators.commercial);
    let price_sum = price_sums(records, &profile.price, profile.annualisation_factor());
    let price_normalised = normalise_values(&price_sum);

    let normalised: Vec<IndicatorSet<f64>> = population
        .iter()
        .zip(&transit)
        .zip(&commercial)
        .zip(&price_normalised)
        .map(|(((population, transit), commercial), price)| IndicatorSet {
            population: *population,
            transit: *transit,
            commercial: *commercial,
            cost: reverse(*price),
        })
        .collect();
    let raw: Vec<f64> = normalised
        .iter()
        .map(|values| raw_score(values, weights, statuses))
        .collect();
    let computed = rescale(&raw);
    debug!(
        "scored {} regions with weights {weights:?} and statuses {statuses:?}",
        records.len()
    );

    normalised
        .into_iter()
        .zip(price_sum)
        .zip(price_normalised)
        .zip(raw)
        .zip(computed)
        .map(
            |((((normalised, price_sum), price_sum_normalised), raw_score), computed_value)| {
                ScoreBreakdown {
                    normalised,
                    price_sum,
                    price_sum_normalised,
                    raw_score,
                    computed_value,
                }
            },
        )
        .collect()
}

/// Weighted sum of normalised indicators, skipping disabled ones.
#[expect(
    clippy::float_arithmetic,
    reason = "the composite is a weighted linear sum"
)]
#[must_use]
pub fn raw_score(normalised: &IndicatorSet<f64>, weights: &Weights, statuses: &Statuses) -> f64 {
    Indicator::ALL
        .into_iter()
        .filter(|indicator| statuses.get(*indicator))
        .map(|indicator| normalised.get(indicator) * weights.get(indicator))
        .sum()
}

/// Monetised rent aggregate for each record.
///
/// `priceSum = monthlyRent * factor + monthlyDeposit + leaseDeposit`, where a
/// missing component is replaced by that column's mean over `records`. A sum
/// that overflows saturates to `f64::MAX`.
#[expect(
    clippy::float_arithmetic,
    reason = "rent aggregation capitalises and sums price components"
)]
#[must_use]
pub fn price_sums(records: &[RegionRecord], columns: &PriceColumns, factor: f64) -> Vec<f64> {
    let rent_mean = mean_or_zero(records, &columns.monthly_rent);
    let deposit_mean = mean_or_zero(records, &columns.monthly_deposit);
    let lease_mean = mean_or_zero(records, &columns.lease_deposit);
    records
        .iter()
        .map(|record| {
            let rent = record.present(&columns.monthly_rent).unwrap_or(rent_mean);
            let deposit = record
                .present(&columns.monthly_deposit)
                .unwrap_or(deposit_mean);
            let lease = record.present(&columns.lease_deposit).unwrap_or(lease_mean);
            saturate(rent * factor + deposit + lease)
        })
        .collect()
}

/// Overflowed price sums rank as the most expensive region.
fn saturate(price_sum: f64) -> f64 {
    if price_sum.is_finite() {
        price_sum
    } else {
        warn!("price sum {price_sum} is not finite; treating it as the maximum price");
        f64::MAX
    }
}

/// Rescale raw scores onto `0.0..=100.0`; all-tied scores become `0.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "rescaling multiplies normalised scores by the output scale"
)]
#[must_use]
pub fn rescale(raw: &[f64]) -> Vec<f64> {
    normalise_values(raw)
        .into_iter()
        .map(|value| value * SCORE_SCALE)
        .collect()
}

fn positive_indicator(records: &[RegionRecord], source: &ColumnSource) -> Vec<f64> {
    normalise_column(records, |record| source.value(record))
}

#[expect(
    clippy::float_arithmetic,
    reason = "cost is inverted so cheaper regions score higher"
)]
fn reverse(normalised: f64) -> f64 {
    1.0 - normalised
}

fn mean_or_zero(records: &[RegionRecord], column: &str) -> f64 {
    column_mean(records, column).unwrap_or_else(|| {
        if !records.is_empty() {
            warn!("price column {column:?} has no values; treating it as zero");
        }
        0.0
    })
}

fn attach(record: &mut RegionRecord, breakdown: &ScoreBreakdown) {
    let values = &breakdown.normalised;
    record.set_number(fields::POPULATION_NORMALIZED, values.population);
    record.set_number(fields::TRANSIT_NORMALIZED, values.transit);
    record.set_number(fields::COMMERCIAL_NORMALIZED, values.commercial);
    record.set_number(fields::PRICE_SUM, breakdown.price_sum);
    record.set_number(fields::PRICE_SUM_NORMALIZED, breakdown.price_sum_normalised);
    record.set_number(fields::REVERSE_PRICE_SUM_NORMALIZED, values.cost);
    record.set_number(fields::COMPUTED_VALUE, breakdown.computed_value);
}

fn attach_densities(records: &mut [RegionRecord], profile: &ScoringProfile) {
    for indicator in Indicator::ALL {
        let Some(source) = profile.indicators.source(indicator) else {
            continue;
        };
        if !source.is_density() {
            continue;
        }
        let field = density_field(indicator);
        for record in records.iter_mut() {
            let density = source.value(record);
            record.set_number(&field, density);
        }
    }
}
