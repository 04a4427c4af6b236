//! The habitability scorer.
//!
//! A scorer owns the amenity source, the zone polygons, its tables, and
//! its current weights. Everything except the weights is read-only after
//! construction, and every scoring call is a pure computation over that
//! state. Callers that share one scorer across requests should pass weights
//! per call with [`HabitabilityScorer::compute_with_weights`] rather than
//! mutating the instance.

use std::collections::BTreeMap;

use habitat_core::{Neighbour, ProximitySource, ZoneIndex};
use log::debug;

use crate::{
    AspectDetail, AspectRanges, CategoryTable, Components, PolygonScore, ScoreError,
    ScoreResult, ScoreWeights, WeightUpdate, proximity_decay, sanitise,
};

/// Search radius for beneficial amenities.
pub const AMENITY_RADIUS_KM: f64 = 2.0;

/// Search radius for detrimental points.
pub const PENALTY_RADIUS_KM: f64 = 1.5;

/// Inclusive latitude/longitude bounds that queries must fall inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Southern bound.
    pub min_lat: f64,
    /// Northern bound.
    pub max_lat: f64,
    /// Western bound.
    pub min_lon: f64,
    /// Eastern bound.
    pub max_lon: f64,
}

impl Region {
    /// Bounds covering the New York City datasets.
    #[must_use]
    pub const fn new_york() -> Self {
        Self {
            min_lat: 40.0,
            max_lat: 41.0,
            min_lon: -75.0,
            max_lon: -72.0,
        }
    }

    /// Whether `(lat, lon)` lies inside the bounds, edges included.
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat {}..{}, lon {}..{}",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

/// Tables and radii used by a [`HabitabilityScorer`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    /// Categories counted by the amenity component.
    pub amenity_categories: CategoryTable,
    /// Categories counted by the penalty component.
    pub penalty_categories: CategoryTable,
    /// Normalisation ranges for the polygon component.
    pub ranges: AspectRanges,
    /// Cutoff radius for amenities.
    pub amenity_radius_km: f64,
    /// Cutoff radius for penalties.
    pub penalty_radius_km: f64,
    /// Bounds enforced by [`HabitabilityScorer::evaluate`], if any.
    pub region: Option<Region>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            amenity_categories: CategoryTable::positive_defaults(),
            penalty_categories: CategoryTable::negative_defaults(),
            ranges: AspectRanges::default(),
            amenity_radius_km: AMENITY_RADIUS_KM,
            penalty_radius_km: PENALTY_RADIUS_KM,
            region: None,
        }
    }
}

/// Scores points for habitability against loaded amenities and zones.
///
/// `S` is any [`ProximitySource`]: a [`GridIndex`](habitat_core::GridIndex)
/// for indexed lookups, or a plain `Vec<PointOfInterest>` for the linear
/// scan fallback.
#[derive(Debug, Clone)]
pub struct HabitabilityScorer<S> {
    amenities: S,
    zones: ZoneIndex,
    config: ScorerConfig,
    weights: ScoreWeights,
}

impl<S: ProximitySource> HabitabilityScorer<S> {
    /// Create a scorer with default tables and weights.
    #[must_use]
    pub fn new(amenities: S, zones: ZoneIndex) -> Self {
        Self::with_config(amenities, zones, ScorerConfig::default())
    }

    /// Create a scorer with explicit tables and default weights.
    #[must_use]
    pub fn with_config(amenities: S, zones: ZoneIndex, config: ScorerConfig) -> Self {
        Self {
            amenities,
            zones,
            config,
            weights: ScoreWeights::default(),
        }
    }

    /// Replace the weights while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The scorer's tables and radii.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// The amenity source.
    #[must_use]
    pub const fn amenities(&self) -> &S {
        &self.amenities
    }

    /// The zone polygons.
    #[must_use]
    pub const fn zones(&self) -> &ZoneIndex {
        &self.zones
    }

    /// Snapshot of the current weights.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Merge a partial update into the current weights.
    ///
    /// Fields absent from `update` keep their values. No renormalisation is
    /// applied; weights that do not sum to `1.0` are used as given.
    #[expect(
        clippy::float_arithmetic,
        reason = "checks how far the weight total is from one"
    )]
    pub fn set_weights(&mut self, update: WeightUpdate) {
        self.weights = self.weights.merged(update);
        let total = self.weights.total();
        if (total - 1.0).abs() > 1e-9 {
            debug!("score weights sum to {total}; scores are not renormalised");
        }
    }

    /// Proximity-weighted amenity score in `0.0..=100.0`.
    #[must_use]
    pub fn amenity_score(&self, lat: f64, lon: f64) -> f64 {
        let radius = self.config.amenity_radius_km;
        weighted_proximity(
            &self.amenities.within(lat, lon, radius),
            &self.config.amenity_categories,
            radius,
        )
    }

    /// Proximity-weighted penalty score in `0.0..=100.0`.
    #[must_use]
    pub fn penalty_score(&self, lat: f64, lon: f64) -> f64 {
        let radius = self.config.penalty_radius_km;
        weighted_proximity(
            &self.amenities.within(lat, lon, radius),
            &self.config.penalty_categories,
            radius,
        )
    }

    /// Mean normalised zone attribute across resolved aspects, scaled to
    /// `0.0..=100.0`, with per-aspect details.
    ///
    /// Aspects that resolve to no zone, have no configured range, or carry
    /// a non-finite attribute are omitted from both the mean and the
    /// details.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging normalised aspects requires floating-point maths"
    )]
    pub fn polygon_score(&self, lat: f64, lon: f64) -> PolygonScore {
        let mut details = BTreeMap::new();
        for (aspect, found) in self.zones.classify(lat, lon) {
            let (Some(found), Some(range)) = (found, self.config.ranges.get(aspect)) else {
                continue;
            };
            let raw = found.polygon.value;
            if !raw.is_finite() {
                continue;
            }
            details.insert(
                aspect,
                AspectDetail {
                    raw,
                    normalized: range.normalise(raw),
                    zone_type: found.polygon.zone_type.clone(),
                    method: found.method,
                },
            );
        }
        let score = if details.is_empty() {
            0.0
        } else {
            let total: f64 = details.values().map(|detail| detail.normalized).sum();
            total / details.len() as f64 * 100.0
        };
        PolygonScore { score, details }
    }

    /// Score `(lat, lon)` with the scorer's current weights.
    #[must_use]
    pub fn compute_habitability(&self, lat: f64, lon: f64) -> ScoreResult {
        self.compute_with_weights(lat, lon, self.weights)
    }

    /// Score `(lat, lon)` with an explicit weight configuration.
    ///
    /// The final score is
    /// `amenity * w.amenity + polygons * w.polygons - penalty * w.penalty`
    /// clamped into `0.0..=100.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the composite is a weighted sum of component scores"
    )]
    pub fn compute_with_weights(
        &self,
        lat: f64,
        lon: f64,
        weights: ScoreWeights,
    ) -> ScoreResult {
        let amenity = self.amenity_score(lat, lon);
        let penalty = self.penalty_score(lat, lon);
        let PolygonScore {
            score: polygons,
            details,
        } = self.polygon_score(lat, lon);

        let weighted = Components {
            amenity: amenity * weights.amenity,
            polygons: polygons * weights.polygons,
            penalty: penalty * weights.penalty,
        };
        let final_score = sanitise(weighted.amenity + weighted.polygons - weighted.penalty);
        debug!(
            "scored ({lat}, {lon}): amenity {amenity:.1}, polygons {polygons:.1}, \
             penalty {penalty:.1}, final {final_score:.1}"
        );

        ScoreResult {
            lat,
            lon,
            final_score,
            components: Components {
                amenity,
                polygons,
                penalty,
            },
            weighted,
            poly_details: details,
            weights,
        }
    }

    /// Validate the coordinates, then score them with the current weights.
    ///
    /// # Errors
    /// Returns [`ScoreError::NonFiniteCoordinate`] for NaN or infinite input
    /// and [`ScoreError::OutsideRegion`] when a region is configured and the
    /// point falls outside it.
    pub fn evaluate(&self, lat: f64, lon: f64) -> Result<ScoreResult, ScoreError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ScoreError::NonFiniteCoordinate { lat, lon });
        }
        if let Some(region) = self.config.region
            && !region.contains(lat, lon)
        {
            return Err(ScoreError::OutsideRegion { lat, lon, region });
        }
        Ok(self.compute_habitability(lat, lon))
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "weighted averages require floating-point maths"
)]
fn weighted_proximity(
    candidates: &[Neighbour<'_>],
    table: &CategoryTable,
    max_distance_km: f64,
) -> f64 {
    let (total, weight_sum) = candidates
        .iter()
        .filter(|candidate| table.contains(&candidate.point.category))
        .fold((0.0, 0.0), |(total, weight_sum), candidate| {
            let weight = table.weight(&candidate.point.category);
            (
                total + proximity_decay(candidate.distance_km, max_distance_km) * weight,
                weight_sum + weight,
            )
        });
    if weight_sum == 0.0 {
        return 0.0;
    }
    sanitise(total / weight_sum * 100.0)
}
