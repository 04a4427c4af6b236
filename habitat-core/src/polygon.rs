//! Zone polygons and the point-in-zone classifier.
//!
//! Each [`ZonePolygon`] belongs to exactly one [`Aspect`]. Classification
//! scans an aspect's polygons in input order and returns the first whose
//! ring contains the point; overlapping zones of one aspect therefore
//! resolve to whichever was loaded first. When no ring contains the point,
//! the zone whose vertex centroid is nearest by great-circle distance is
//! used instead and the match is tagged [`MatchMethod::NearestCentroid`].
//!
//! Containment is planar: rings are treated as flat `(lon, lat)` polygons,
//! which only holds at city scale.

use std::collections::BTreeMap;

use geo::{Coord, LineString};
use log::debug;

use crate::{Aspect, distance_km};

/// A zone of one aspect carrying that aspect's numeric attribute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZonePolygon {
    /// Dimension this zone describes.
    pub aspect: Aspect,
    /// Descriptive label; not used for scoring.
    pub zone_type: String,
    /// Outer ring of `(lon, lat)` vertices, implicitly closed.
    pub ring: LineString<f64>,
    /// Raw attribute value for [`ZonePolygon::aspect`].
    pub value: f64,
}

impl ZonePolygon {
    /// Construct a zone polygon.
    pub fn new(
        aspect: Aspect,
        zone_type: impl Into<String>,
        ring: impl Into<LineString<f64>>,
        value: f64,
    ) -> Self {
        Self {
            aspect,
            zone_type: zone_type.into(),
            ring: ring.into(),
            value,
        }
    }

    /// Whether the zone's ring contains `(lat, lon)`.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        contains_point(Coord { x: lon, y: lat }, &self.ring.0)
    }

    /// Arithmetic mean of the ring's vertices.
    pub fn centroid(&self) -> Option<Coord<f64>> {
        centroid(&self.ring.0)
    }
}

/// Ray-casting parity test of `point` against an implicitly closed ring.
///
/// An edge from `(xi, yi)` to `(xj, yj)` is crossed only when the point's
/// `y` lies in `[min(yi, yj), max(yi, yj))` and the point is strictly left
/// of the edge. With that half-open rule, points on the left or bottom edge
/// of an axis-aligned square count as inside while points on its right or
/// top edge count as outside. Degenerate and self-intersecting rings still
/// yield a well-defined parity answer.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use habitat_core::contains_point;
///
/// let square = [
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 0.0, y: 1.0 },
///     Coord { x: 1.0, y: 1.0 },
///     Coord { x: 1.0, y: 0.0 },
/// ];
/// assert!(contains_point(Coord { x: 0.5, y: 0.5 }, &square));
/// assert!(!contains_point(Coord { x: 2.0, y: 2.0 }, &square));
/// ```
pub fn contains_point(point: Coord<f64>, ring: &[Coord<f64>]) -> bool {
    let Some(mut previous) = ring.last() else {
        return false;
    };
    let mut inside = false;
    for current in ring {
        if (current.y > point.y) != (previous.y > point.y) {
            let crossing_x =
                (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

/// Arithmetic mean of a ring's vertices, or `None` for an empty ring.
///
/// A ring that repeats its first vertex at the end weights that vertex
/// twice.
pub fn centroid(ring: &[Coord<f64>]) -> Option<Coord<f64>> {
    if ring.is_empty() {
        return None;
    }
    let sum = ring.iter().fold(Coord { x: 0.0, y: 0.0 }, |acc, c| acc + *c);
    let count = ring.len() as f64;
    Some(Coord {
        x: sum.x / count,
        y: sum.y / count,
    })
}

/// How a zone was selected for a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MatchMethod {
    /// The zone's ring contains the point.
    Contained,
    /// No ring contained the point; the zone has the nearest centroid.
    NearestCentroid,
}

/// The zone chosen for one aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneMatch<'a> {
    /// The selected polygon.
    pub polygon: &'a ZonePolygon,
    /// Whether the polygon contains the point or was the centroid fallback.
    pub method: MatchMethod,
}

/// Zone polygons grouped by aspect, preserving input order within each group.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use habitat_core::{Aspect, MatchMethod, ZoneIndex, ZonePolygon};
///
/// let square = vec![
///     Coord { x: -74.0, y: 40.7 },
///     Coord { x: -74.0, y: 40.8 },
///     Coord { x: -73.9, y: 40.8 },
///     Coord { x: -73.9, y: 40.7 },
/// ];
/// let zones = ZoneIndex::new([ZonePolygon::new(Aspect::CrimeRate, "low", square, 3.1)]);
/// let matches = zones.classify(40.75, -73.95);
///
/// let crime = matches[&Aspect::CrimeRate].expect("crime zone");
/// assert_eq!(crime.method, MatchMethod::Contained);
/// assert!(matches[&Aspect::MedianRent].is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneIndex {
    by_aspect: BTreeMap<Aspect, Vec<ZonePolygon>>,
}

impl ZoneIndex {
    /// Group polygons by aspect.
    pub fn new(polygons: impl IntoIterator<Item = ZonePolygon>) -> Self {
        let mut by_aspect: BTreeMap<Aspect, Vec<ZonePolygon>> = BTreeMap::new();
        for polygon in polygons {
            by_aspect.entry(polygon.aspect).or_default().push(polygon);
        }
        Self { by_aspect }
    }

    /// Polygons registered for `aspect`, in input order.
    pub fn polygons(&self, aspect: Aspect) -> &[ZonePolygon] {
        self.by_aspect.get(&aspect).map_or(&[], Vec::as_slice)
    }

    /// Total number of polygons across all aspects.
    pub fn len(&self) -> usize {
        self.by_aspect.values().map(Vec::len).sum()
    }

    /// Whether no polygons are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the zone for every aspect in [`Aspect::ALL`].
    ///
    /// Aspects without polygons map to `None`.
    pub fn classify(&self, lat: f64, lon: f64) -> BTreeMap<Aspect, Option<ZoneMatch<'_>>> {
        Aspect::ALL
            .into_iter()
            .map(|aspect| (aspect, self.classify_aspect(aspect, lat, lon)))
            .collect()
    }

    /// Resolve the zone for a single aspect.
    pub fn classify_aspect(&self, aspect: Aspect, lat: f64, lon: f64) -> Option<ZoneMatch<'_>> {
        let polygons = self.polygons(aspect);
        if let Some(polygon) = polygons.iter().find(|polygon| polygon.contains(lat, lon)) {
            return Some(ZoneMatch {
                polygon,
                method: MatchMethod::Contained,
            });
        }
        let nearest = nearest_centroid(polygons, lat, lon)?;
        debug!(
            "no {aspect} zone contains ({lat}, {lon}); using nearest centroid zone '{}'",
            nearest.zone_type
        );
        Some(ZoneMatch {
            polygon: nearest,
            method: MatchMethod::NearestCentroid,
        })
    }
}

impl FromIterator<ZonePolygon> for ZoneIndex {
    fn from_iter<I: IntoIterator<Item = ZonePolygon>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn nearest_centroid(polygons: &[ZonePolygon], lat: f64, lon: f64) -> Option<&ZonePolygon> {
    let mut best: Option<(&ZonePolygon, f64)> = None;
    for polygon in polygons {
        let Some(centre) = polygon.centroid() else {
            continue;
        };
        let distance = distance_km(lat, lon, centre.y, centre.x);
        // Strict comparison keeps the earliest polygon on ties.
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((polygon, distance));
        }
    }
    best.map(|(polygon, _)| polygon)
}
