//! Min-max normalisation over the records of the current request.
//!
//! Statistics are always computed from the slice passed in, so a filtered
//! recommendation subset is normalised within itself rather than against the
//! full dataset.

use regionrank_core::RegionRecord;

/// Minimum and maximum of one column across a record slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
}

impl ColumnStats {
    /// Compute statistics over `values`.
    ///
    /// Non-finite values are ignored. Returns `None` when no finite value is
    /// present.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |acc, value| {
                Some(match acc {
                    None => Self {
                        min: value,
                        max: value,
                    },
                    Some(Self { min, max }) => Self {
                        min: min.min(value),
                        max: max.max(value),
                    },
                })
            })
    }

    /// Map `value` onto `0.0..=1.0` using these statistics.
    ///
    /// A constant column (`max == min`) carries no signal and maps every
    /// value to `0.0`. Non-finite inputs also map to `0.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max scaling divides by the observed range"
    )]
    #[must_use]
    pub fn normalise(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if !value.is_finite() || !range.is_finite() || range <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}

/// Normalise one value per record, in record order.
///
/// `extract` supplies the raw value for each record; an empty slice yields
/// an empty vector.
#[must_use]
pub fn normalise_column<F>(records: &[RegionRecord], extract: F) -> Vec<f64>
where
    F: Fn(&RegionRecord) -> f64,
{
    let raw: Vec<f64> = records.iter().map(extract).collect();
    normalise_values(&raw)
}

/// Normalise a list of raw values against their own min and max.
#[must_use]
pub fn normalise_values(raw: &[f64]) -> Vec<f64> {
    let Some(stats) = ColumnStats::from_values(raw.iter().copied()) else {
        return vec![0.0; raw.len()];
    };
    log::debug!(
        "normalising {} values with min {} and max {}",
        raw.len(),
        stats.min,
        stats.max
    );
    raw.iter().map(|value| stats.normalise(*value)).collect()
}

/// Mean of the values present in `column`, ignoring missing entries.
///
/// Returns `None` when no record carries a parseable value.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging requires a float division by the sample count"
)]
#[must_use]
pub fn column_mean(records: &[RegionRecord], column: &str) -> Option<f64> {
    let (sum, count) = records
        .iter()
        .filter_map(|record| record.present(column))
        .fold((0.0_f64, 0_usize), |(sum, count), value| {
            (sum + value, count + 1)
        });
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}
