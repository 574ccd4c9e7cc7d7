//! Column configuration for the two scoring modes.

use regionrank_core::{HousingType, Indicator, RegionRecord};

/// Default administrative-name attribute used for identity and lookup.
pub const DEFAULT_NAME_COLUMN: &str = "ADM_NM";
/// Single-person household count.
pub const DEFAULT_POPULATION_COLUMN: &str = "2023년_계_총세대수";
/// Combined bus stop and rail station count.
pub const DEFAULT_TRANSIT_COLUMN: &str = "count_transport";
/// Combined shop count across all categories.
pub const DEFAULT_COMMERCIAL_COLUMN: &str = "sum_all_shop";
/// Annual discount rate used to capitalise monthly rent into a deposit.
pub const DEFAULT_CAPITALISATION_RATE: f64 = 0.06;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Where an indicator's raw value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// The parsed attribute value.
    Raw(String),
    /// The parsed attribute value divided by the region's area in km².
    PerSquareKm(String),
}

impl ColumnSource {
    /// Raw value for `record`. Regions with zero area have density `0.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "densities divide counts by area"
    )]
    #[must_use]
    pub fn value(&self, record: &RegionRecord) -> f64 {
        match self {
            Self::Raw(column) => record.number(column),
            Self::PerSquareKm(column) => {
                let area = record.area_km2();
                if area > 0.0 {
                    record.number(column) / area
                } else {
                    0.0
                }
            }
        }
    }

    /// Report whether the source derives a density.
    #[must_use]
    pub const fn is_density(&self) -> bool {
        matches!(self, Self::PerSquareKm(_))
    }
}

/// Sources of the three positive indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorColumns {
    /// Source for [`Indicator::Population`].
    pub population: ColumnSource,
    /// Source for [`Indicator::Transit`].
    pub transit: ColumnSource,
    /// Source for [`Indicator::Commercial`].
    pub commercial: ColumnSource,
}

impl IndicatorColumns {
    /// Population per km², raw transit count, raw shop count.
    #[must_use]
    pub fn full_dataset() -> Self {
        Self {
            population: ColumnSource::PerSquareKm(DEFAULT_POPULATION_COLUMN.to_owned()),
            transit: ColumnSource::Raw(DEFAULT_TRANSIT_COLUMN.to_owned()),
            commercial: ColumnSource::Raw(DEFAULT_COMMERCIAL_COLUMN.to_owned()),
        }
    }

    /// Per-km² densities for all three positive indicators.
    #[must_use]
    pub fn recommendation() -> Self {
        Self {
            population: ColumnSource::PerSquareKm(DEFAULT_POPULATION_COLUMN.to_owned()),
            transit: ColumnSource::PerSquareKm(DEFAULT_TRANSIT_COLUMN.to_owned()),
            commercial: ColumnSource::PerSquareKm(DEFAULT_COMMERCIAL_COLUMN.to_owned()),
        }
    }

    /// Return the source for a positive indicator.
    ///
    /// [`Indicator::Cost`] is derived from [`PriceColumns`] and has no
    /// column source.
    #[must_use]
    pub const fn source(&self, indicator: Indicator) -> Option<&ColumnSource> {
        match indicator {
            Indicator::Population => Some(&self.population),
            Indicator::Transit => Some(&self.transit),
            Indicator::Commercial => Some(&self.commercial),
            Indicator::Cost => None,
        }
    }
}

/// Rent columns aggregated into the cost indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceColumns {
    /// Monthly rent per unit area.
    pub monthly_rent: String,
    /// Deposit paid alongside monthly rent, per unit area.
    pub monthly_deposit: String,
    /// Lease-only deposit per unit area.
    pub lease_deposit: String,
}

impl PriceColumns {
    /// Columns for a housing type.
    #[must_use]
    pub fn for_housing(housing: HousingType) -> Self {
        Self {
            monthly_rent: housing.monthly_rent_column(),
            monthly_deposit: housing.monthly_deposit_column(),
            lease_deposit: housing.lease_deposit_column(),
        }
    }
}

/// Everything the composite scorer needs to know about column layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    /// Positive indicator sources.
    pub indicators: IndicatorColumns,
    /// Cost indicator columns.
    pub price: PriceColumns,
    /// Annual discount rate used to capitalise monthly rent.
    pub capitalisation_rate: f64,
}

impl ScoringProfile {
    /// Profile for scoring a whole dataset.
    #[must_use]
    pub fn full_dataset(housing: HousingType) -> Self {
        Self {
            indicators: IndicatorColumns::full_dataset(),
            price: PriceColumns::for_housing(housing),
            capitalisation_rate: DEFAULT_CAPITALISATION_RATE,
        }
    }

    /// Profile for scoring a filtered recommendation subset.
    #[must_use]
    pub fn recommendation(housing: HousingType) -> Self {
        Self {
            indicators: IndicatorColumns::recommendation(),
            price: PriceColumns::for_housing(housing),
            capitalisation_rate: DEFAULT_CAPITALISATION_RATE,
        }
    }

    /// Replace the capitalisation rate while returning `self`.
    #[must_use]
    pub fn with_capitalisation_rate(mut self, rate: f64) -> Self {
        self.capitalisation_rate = rate;
        self
    }

    /// Multiplier that turns a monthly rent into a deposit equivalent.
    ///
    /// With the default 6% rate this is `12 / 0.06 = 200`.
    #[expect(
        clippy::float_arithmetic,
        reason = "capitalisation divides annual months by the discount rate"
    )]
    #[must_use]
    pub fn annualisation_factor(&self) -> f64 {
        MONTHS_PER_YEAR / self.capitalisation_rate
    }

    /// Report whether the capitalisation rate is usable.
    ///
    /// The rate must be finite and positive, and small enough that the
    /// annualisation factor stays finite.
    #[must_use]
    pub fn has_valid_rate(&self) -> bool {
        self.capitalisation_rate.is_finite()
            && self.capitalisation_rate > 0.0
            && self.annualisation_factor().is_finite()
    }
}

/// Field name for a derived density, e.g. `transitDensity`.
#[must_use]
pub fn density_field(indicator: Indicator) -> String {
    format!("{}Density", indicator.as_str())
}
