//! Ranking and recommendation of administrative regions.
//!
//! The crate turns a [`RegionCollection`](regionrank_core::RegionCollection)
//! into a ranked list in two modes:
//! - **Full ranking** scores every region with caller-supplied weights and
//!   indicator toggles. See [`score_collection`].
//! - **Recommendation** locates a reference region by name, keeps the regions
//!   within a distance and budget, and scores the survivors among themselves
//!   with slider-derived weights. See [`recommend`].
//!
//! Scores are relative: normalisation statistics are recomputed for every
//! call, so values from different calls are not comparable.
//!
//! # Examples
//!
//! ```
//! use geo::{MultiPolygon, polygon};
//! use regionrank_core::{HousingType, RegionCollection, RegionRecord, Statuses, Weights, fields};
//! use regionrank_scorer::{ScoringProfile, score_collection};
//! use serde_json::{Map, json};
//!
//! let region = |transport: u32| {
//!     let mut properties = Map::new();
//!     properties.insert("count_transport".into(), json!(transport));
//!     RegionRecord::new(
//!         MultiPolygon(vec![polygon![(x: 0.0, y: 0.0), (x: 0.01, y: 0.0), (x: 0.0, y: 0.01)]]),
//!         properties,
//!     )
//! };
//! let regions = RegionCollection::from_records(vec![region(1), region(9), region(4)]);
//! let profile = ScoringProfile::full_dataset(HousingType::Apartment);
//!
//! let ranked = score_collection(regions, &Weights::default(), &Statuses::default(), &profile)
//!     .expect("valid inputs");
//! let scores: Vec<f64> = ranked
//!     .records
//!     .iter()
//!     .map(|record| record.number(fields::COMPUTED_VALUE))
//!     .collect();
//! assert_eq!(scores.first().copied(), Some(100.0));
//! assert_eq!(scores.last().copied(), Some(0.0));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod composite;
mod error;
mod filter;
pub mod normalize;
mod pipeline;
mod profile;
mod query;

pub use composite::{ScoreBreakdown, compute, price_sums, raw_score, rescale, score};
pub use error::PipelineError;
pub use filter::filter_candidates;
pub use pipeline::{RecommendOptions, recommend, score_collection};
pub use profile::{
    ColumnSource, DEFAULT_CAPITALISATION_RATE, DEFAULT_COMMERCIAL_COLUMN, DEFAULT_NAME_COLUMN,
    DEFAULT_POPULATION_COLUMN, DEFAULT_TRANSIT_COLUMN, IndicatorColumns, PriceColumns,
    ScoringProfile, density_field,
};
pub use query::{BudgetWindow, Preferences, RecommendationQuery};
