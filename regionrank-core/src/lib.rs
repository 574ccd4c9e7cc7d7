//! Core domain types for the regionrank engine.
//!
//! The crate models administrative regions as geotagged records with loosely
//! typed attributes, and provides the leaf building blocks of the ranking
//! pipeline:
//! - [`value`] coerces raw attribute values into numbers without failing.
//! - [`geometry`] computes centroids, great-circle distances, and areas.
//! - [`Indicator`] and [`IndicatorSet`] name the four scored dimensions so
//!   weights, toggles, and columns stay aligned.
//! - [`RegionCollection`] round-trips through GeoJSON.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geojson;
pub mod geometry;
mod housing;
mod indicator;
mod record;
pub mod value;

pub use geojson::RecordError;
pub use housing::{HousingType, RentType};
pub use indicator::{Indicator, IndicatorSet, Statuses, Weights};
pub use record::{RegionCollection, RegionRecord, fields, rank_by_score};
