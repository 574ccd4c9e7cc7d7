//! Error types raised while ranking or recommending regions.
#![forbid(unsafe_code)]

use regionrank_core::Weights;
use thiserror::Error;

/// Errors raised by the ranking and recommendation pipelines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// No region carries the requested reference name.
    #[error("reference region `{name}` not found in column `{column}`")]
    ReferenceNotFound {
        /// Joined administrative name that was searched for.
        name: String,
        /// Attribute column that was searched.
        column: String,
    },
    /// The reference region exists but has no usable geometry.
    #[error("reference region `{name}` has no geometry to take a centroid from")]
    ReferenceWithoutGeometry {
        /// Name of the reference region.
        name: String,
    },
    /// A weight was negative or not finite.
    #[error("weights must be finite and non-negative, got {weights:?}")]
    InvalidWeights {
        /// Rejected weight vector.
        weights: Weights,
    },
    /// The capitalisation rate could not annualise monthly rent.
    #[error("capitalisation rate must be finite and positive, got {rate}")]
    InvalidCapitalisationRate {
        /// Rejected rate.
        rate: f64,
    },
    /// The distance bound was negative or NaN.
    #[error("maximum distance must be non-negative, got {max_distance} km")]
    InvalidMaxDistance {
        /// Rejected bound in kilometres.
        max_distance: f64,
    },
    /// The target floor area is zero, negative, or not a number.
    #[error("target floor area must be positive, got {area}")]
    InvalidArea {
        /// Rejected floor area.
        area: f64,
    },
}
