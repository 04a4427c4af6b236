//! Error types raised while configuring or invoking the scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::Region;

/// Errors raised when constructing a [`NormalisationRange`](crate::NormalisationRange).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// A bound was NaN or infinite.
    #[error("normalisation bounds must be finite (got {min}..{max})")]
    NonFinite {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The lower bound exceeded the upper bound.
    #[error("normalisation lower bound {min} exceeds upper bound {max}")]
    Inverted {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

/// Errors raised by [`HabitabilityScorer::evaluate`](crate::HabitabilityScorer::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreError {
    /// A coordinate was NaN or infinite.
    #[error("coordinates must be finite (got lat {lat}, lon {lon})")]
    NonFiniteCoordinate {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
    },
    /// The point lies outside the region the datasets cover.
    #[error("({lat}, {lon}) lies outside the supported region {region}")]
    OutsideRegion {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
        /// Region configured on the scorer.
        region: Region,
    },
}
