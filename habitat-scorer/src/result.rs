//! Structured score output consumed by presentation layers.

use std::collections::BTreeMap;

use habitat_core::{Aspect, MatchMethod};
use serde::{Deserialize, Serialize};

use crate::ScoreWeights;

/// Amenity, polygon, and penalty values for one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Amenity component.
    pub amenity: f64,
    /// Polygon component.
    pub polygons: f64,
    /// Penalty component.
    pub penalty: f64,
}

/// How one aspect contributed to the polygon score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectDetail {
    /// Attribute value read from the resolved zone.
    pub raw: f64,
    /// Value after clamping, rescaling, and inversion.
    pub normalized: f64,
    /// Label of the resolved zone.
    pub zone_type: String,
    /// Whether the zone contains the point or was the nearest-centroid fallback.
    pub method: MatchMethod,
}

/// Polygon component with its per-aspect breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonScore {
    /// Mean normalised value across resolved aspects, scaled to `0.0..=100.0`.
    pub score: f64,
    /// Details for each aspect that resolved to a zone.
    pub details: BTreeMap<Aspect, AspectDetail>,
}

/// The auditable outcome of scoring one point.
///
/// Serialises with the field names `lat`, `lng`, `finalScore`,
/// `components`, `weighted`, `polyDetails`, and `weights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Query latitude.
    pub lat: f64,
    /// Query longitude.
    #[serde(rename = "lng")]
    pub lon: f64,
    /// Weighted composite clamped into `0.0..=100.0`.
    pub final_score: f64,
    /// Unweighted component scores, each in `0.0..=100.0`.
    pub components: Components,
    /// Components multiplied by their weights.
    pub weighted: Components,
    /// Per-aspect polygon details.
    pub poly_details: BTreeMap<Aspect, AspectDetail>,
    /// Snapshot of the weights used.
    pub weights: ScoreWeights,
}
