//! Habitability scoring for arbitrary geographic points.
//!
//! The crate combines three signals into a bounded `0.0..=100.0` score:
//! - **Amenity score**: beneficial points of interest within 2 km, each
//!   weighted by category and a quadratic proximity decay.
//! - **Penalty score**: detrimental points of interest within 1.5 km,
//!   aggregated the same way with a separate category table.
//! - **Polygon score**: the zone attributes (air quality, crime, rent,
//!   schools, transit) of the polygons containing the point, normalised so
//!   that `1.0` always means more desirable.
//!
//! [`HabitabilityScorer`] mixes the three with a [`ScoreWeights`]
//! configuration held per scorer instance, and returns a [`ScoreResult`]
//! carrying the raw and weighted components alongside per-aspect details.
//!
//! # Examples
//!
//! ```
//! use habitat_core::{GridIndex, PointOfInterest, ZoneIndex};
//! use habitat_scorer::HabitabilityScorer;
//!
//! let amenities = vec![PointOfInterest::at("Bryant Park", "park", 40.7536, -73.9832)];
//! let index = GridIndex::with_default_cell_size(amenities).expect("default cell size");
//! let scorer = HabitabilityScorer::new(index, ZoneIndex::default());
//!
//! let result = scorer.compute_habitability(40.7540, -73.9840);
//! assert!(result.components.amenity > 90.0);
//! assert!((0.0..=100.0).contains(&result.final_score));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod categories;
mod error;
mod normalise;
mod result;
mod scorer;
mod weights;

pub use categories::{
    CategoryTable, DEFAULT_AMENITY_WEIGHT, DEFAULT_PENALTY_WEIGHT, NEGATIVE_CATEGORY_WEIGHTS,
    POSITIVE_CATEGORY_WEIGHTS,
};
pub use error::{RangeError, ScoreError};
pub use normalise::{AspectRanges, NormalisationRange};
pub use result::{AspectDetail, Components, PolygonScore, ScoreResult};
pub use scorer::{
    AMENITY_RADIUS_KM, HabitabilityScorer, PENALTY_RADIUS_KM, Region, ScorerConfig,
};
pub use weights::{ScoreWeights, WeightUpdate};

/// Quadratic falloff `(1 - d / max)^2`, reaching exactly zero at the cutoff.
///
/// Returns `1.0` at zero distance and `0.0` for any distance at or beyond
/// `max_distance_km` (including a non-positive cutoff).
///
/// # Examples
/// ```
/// use habitat_scorer::proximity_decay;
///
/// assert_eq!(proximity_decay(0.0, 2.0), 1.0);
/// assert_eq!(proximity_decay(1.0, 2.0), 0.25);
/// assert_eq!(proximity_decay(2.0, 2.0), 0.0);
/// assert_eq!(proximity_decay(3.0, 2.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "decay is a closed-form floating-point falloff"
)]
pub fn proximity_decay(distance_km: f64, max_distance_km: f64) -> f64 {
    if distance_km.is_nan() || distance_km >= max_distance_km {
        return 0.0;
    }
    let remaining = 1.0 - distance_km / max_distance_km;
    remaining * remaining
}

/// Clamp a score into `0.0..=100.0`, mapping non-finite values to `0.0`.
#[must_use]
pub(crate) fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
