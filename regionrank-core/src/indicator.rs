//! Named scoring indicators and per-indicator value sets.
//!
//! The composite score has a fixed arity of four. Keeping one named slot per
//! [`Indicator`] means weights, statuses, and columns cannot drift out of
//! alignment the way positional arrays can.
//!
//! # Examples
//! ```
//! use regionrank_core::{Indicator, Statuses, Weights};
//!
//! let weights = Weights::from_array([2.0, 1.0, 1.0, 0.5]);
//! assert_eq!(weights.get(Indicator::Population), 2.0);
//! assert_eq!(weights.get(Indicator::Cost), 0.5);
//!
//! let statuses = Statuses::default().with(Indicator::Transit, false);
//! assert!(!statuses.get(Indicator::Transit));
//! assert_eq!(Indicator::Cost.to_string(), "cost");
//! ```

use serde::{Deserialize, Serialize};

/// One scored dimension of the composite formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Positive demographic indicator (single-person households).
    Population,
    /// Positive transit indicator (stops and stations).
    Transit,
    /// Positive commercial indicator (shops).
    Commercial,
    /// Inverted monetised rent indicator; cheaper scores higher.
    Cost,
}

impl Indicator {
    /// All indicators in formula order.
    pub const ALL: [Self; 4] = [
        Self::Population,
        Self::Transit,
        Self::Commercial,
        Self::Cost,
    ];

    /// Return the indicator as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Transit => "transit",
            Self::Commercial => "commercial",
            Self::Cost => "cost",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "population" => Ok(Self::Population),
            "transit" => Ok(Self::Transit),
            "commercial" => Ok(Self::Commercial),
            "cost" => Ok(Self::Cost),
            _ => Err(format!("unknown indicator '{s}'")),
        }
    }
}

/// One value per [`Indicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSet<T> {
    /// Value for [`Indicator::Population`].
    pub population: T,
    /// Value for [`Indicator::Transit`].
    pub transit: T,
    /// Value for [`Indicator::Commercial`].
    pub commercial: T,
    /// Value for [`Indicator::Cost`].
    pub cost: T,
}

impl<T: Copy> IndicatorSet<T> {
    /// Build a set holding `value` for every indicator.
    #[must_use]
    pub const fn splat(value: T) -> Self {
        Self {
            population: value,
            transit: value,
            commercial: value,
            cost: value,
        }
    }

    /// Build a set from values in formula order
    /// (population, transit, commercial, cost).
    #[must_use]
    pub const fn from_array(values: [T; 4]) -> Self {
        let [population, transit, commercial, cost] = values;
        Self {
            population,
            transit,
            commercial,
            cost,
        }
    }

    /// Return the value stored for `indicator`.
    #[must_use]
    pub const fn get(&self, indicator: Indicator) -> T {
        match indicator {
            Indicator::Population => self.population,
            Indicator::Transit => self.transit,
            Indicator::Commercial => self.commercial,
            Indicator::Cost => self.cost,
        }
    }

    /// Replace the value stored for `indicator`.
    pub fn set(&mut self, indicator: Indicator, value: T) {
        match indicator {
            Indicator::Population => self.population = value,
            Indicator::Transit => self.transit = value,
            Indicator::Commercial => self.commercial = value,
            Indicator::Cost => self.cost = value,
        }
    }

    /// Replace a value while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, indicator: Indicator, value: T) -> Self {
        self.set(indicator, value);
        self
    }

    /// Iterate over `(indicator, value)` pairs in formula order.
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, T)> + '_ {
        Indicator::ALL
            .into_iter()
            .map(|indicator| (indicator, self.get(indicator)))
    }
}

/// Per-indicator weights. Defaults to equal weights of `1.0`.
pub type Weights = IndicatorSet<f64>;

/// Per-indicator enable toggles. Defaults to every indicator enabled.
pub type Statuses = IndicatorSet<bool>;

impl Default for Weights {
    fn default() -> Self {
        Self::splat(1.0)
    }
}

impl Default for Statuses {
    fn default() -> Self {
        Self::splat(true)
    }
}

impl Weights {
    /// Report whether every weight is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.iter()
            .all(|(_, weight)| weight.is_finite() && weight >= 0.0)
    }
}
