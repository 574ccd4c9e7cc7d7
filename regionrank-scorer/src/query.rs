//! Recommendation requests.
//!
//! The wire format mirrors the recommendation form: a three-level
//! administrative address for the reference location, four 0–10 preference
//! sliders, and budget bounds. The form's original field names
//! (`currentWorkplaceSido` and friends) are accepted as aliases.
//!
//! # Examples
//! ```
//! use regionrank_core::{Indicator, RentType};
//! use regionrank_scorer::RecommendationQuery;
//!
//! let query: RecommendationQuery = serde_json::from_str(r#"{
//!     "currentWorkplaceSido": "부산광역시",
//!     "currentWorkplaceSigungu": "부산진구",
//!     "currentWorkplaceEupmyeondong": "가야1동",
//!     "transportation": 8,
//!     "rentType": "deposit-only",
//!     "area": 33,
//!     "maxPrice": 30000
//! }"#).expect("valid query");
//!
//! assert_eq!(query.reference_name(), "부산광역시 부산진구 가야1동");
//! assert_eq!(query.rent_type, RentType::DepositOnly);
//! assert_eq!(query.preferences.weights().get(Indicator::Transit), 8.0);
//! assert_eq!(query.preferences.weights().get(Indicator::Cost), 5.0);
//! assert_eq!(query.max_distance, 3.0);
//! ```

use regionrank_core::{HousingType, RentType, Weights};
use serde::{Deserialize, Serialize};

const DEFAULT_SLIDER: f64 = 5.0;
const DEFAULT_MAX_DISTANCE_KM: f64 = 3.0;

const fn default_slider() -> f64 {
    DEFAULT_SLIDER
}

const fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE_KM
}

const fn unbounded() -> f64 {
    f64::INFINITY
}

/// Slider preferences, each nominally in `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Weight for single-person household concentration.
    #[serde(default = "default_slider")]
    pub single_household: f64,
    /// Weight for transit access.
    #[serde(default = "default_slider")]
    pub transportation: f64,
    /// Weight for commercial scale.
    #[serde(default = "default_slider")]
    pub commercial_scale: f64,
    /// Weight for affordability.
    #[serde(default = "default_slider")]
    pub rent_price: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            single_household: DEFAULT_SLIDER,
            transportation: DEFAULT_SLIDER,
            commercial_scale: DEFAULT_SLIDER,
            rent_price: DEFAULT_SLIDER,
        }
    }
}

impl Preferences {
    /// Map sliders onto composite-score weights.
    #[must_use]
    pub const fn weights(&self) -> Weights {
        Weights {
            population: self.single_household,
            transit: self.transportation,
            commercial: self.commercial_scale,
            cost: self.rent_price,
        }
    }
}

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetWindow {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl BudgetWindow {
    /// Report whether `value` lies within `min..=max`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A caller's reference location, budget, and distance bound.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationQuery {
    /// Province or metropolitan city.
    #[serde(alias = "currentWorkplaceSido")]
    pub sido: String,
    /// City, county, or district.
    #[serde(default, alias = "currentWorkplaceSigungu")]
    pub sigungu: String,
    /// Neighbourhood.
    #[serde(default, alias = "currentWorkplaceEupmyeondong")]
    pub eupmyeondong: String,
    /// Slider preferences that become the weight vector.
    #[serde(flatten)]
    pub preferences: Preferences,
    /// Whether the caller pays monthly rent or a lease-only deposit.
    #[serde(default)]
    pub rent_type: RentType,
    /// Dwelling type whose rent columns are used.
    #[serde(default)]
    pub housing_type: HousingType,
    /// Target floor area in the dataset's unit area.
    pub area: f64,
    /// Minimum acceptable monetised price.
    #[serde(default)]
    pub min_price: f64,
    /// Maximum acceptable monetised price.
    #[serde(default = "unbounded")]
    pub max_price: f64,
    /// Minimum acceptable deposit (monthly rent only).
    #[serde(default)]
    pub min_deposit: f64,
    /// Maximum acceptable deposit (monthly rent only).
    #[serde(default = "unbounded")]
    pub max_deposit: f64,
    /// Maximum centroid-to-centroid distance in kilometres.
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
}

impl RecommendationQuery {
    /// Administrative name of the reference region.
    ///
    /// Non-empty address parts are joined by a single space.
    #[must_use]
    pub fn reference_name(&self) -> String {
        [&self.sido, &self.sigungu, &self.eupmyeondong]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bounds applied to the monetised price.
    #[must_use]
    pub const fn price_window(&self) -> BudgetWindow {
        BudgetWindow {
            min: self.min_price,
            max: self.max_price,
        }
    }

    /// Bounds applied to the monetised deposit for monthly rent.
    #[must_use]
    pub const fn deposit_window(&self) -> BudgetWindow {
        BudgetWindow {
            min: self.min_deposit,
            max: self.max_deposit,
        }
    }
}
