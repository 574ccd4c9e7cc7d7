//! Facade crate for the regionrank engine.
//!
//! This crate re-exports the region model from `regionrank-core` and the
//! ranking and recommendation pipelines from `regionrank-scorer`.

#![forbid(unsafe_code)]

pub use regionrank_core::{
    HousingType, Indicator, IndicatorSet, RecordError, RegionCollection, RegionRecord, RentType,
    Statuses, Weights, fields, geometry, value,
};

pub use regionrank_scorer::{
    PipelineError, Preferences, RecommendOptions, RecommendationQuery, ScoringProfile,
    recommend, score_collection,
};
