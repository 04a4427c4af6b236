//! Radius-bounded neighbour lookups over points of interest.
//!
//! The [`ProximitySource`] trait is the seam between the scorer and the way
//! candidates are found. [`GridIndex`](crate::GridIndex) answers queries from
//! a uniform grid; [`LinearScan`] measures every point and remains the
//! reference path for correctness testing and small datasets.

use crate::{PointOfInterest, distance_km};

/// A point found within a query radius, paired with its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a> {
    /// The matching point.
    pub point: &'a PointOfInterest,
    /// Great-circle distance from the query location in kilometres.
    pub distance_km: f64,
}

/// Find points of interest within a radius of a location.
///
/// Implementations must return every point whose haversine distance from
/// `(lat, lon)` is at most `radius_km`, each exactly once. Ordering is
/// unspecified.
///
/// # Examples
///
/// ```rust
/// use habitat_core::{LinearScan, PointOfInterest, ProximitySource};
///
/// let points = vec![PointOfInterest::at("Park", "park", 40.70, -73.99)];
/// let scan = LinearScan::new(&points);
/// let found = scan.within(40.70, -73.99, 0.5);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].distance_km, 0.0);
/// ```
pub trait ProximitySource: Send + Sync {
    /// Return the points within `radius_km` of `(lat, lon)`.
    fn within(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<Neighbour<'_>>;
}

/// Exhaustive scan over a borrowed point slice.
///
/// The inherent [`LinearScan::within`] ties its neighbours to the slice
/// rather than the wrapper, so a temporary scan can be queried inline.
/// Through [`ProximitySource`] the results borrow the wrapper instead, as
/// the trait signature requires.
#[derive(Debug, Clone, Copy)]
pub struct LinearScan<'a> {
    points: &'a [PointOfInterest],
}

impl<'a> LinearScan<'a> {
    /// Wrap a point slice for linear scanning.
    pub const fn new(points: &'a [PointOfInterest]) -> Self {
        Self { points }
    }

    /// Return the points within `radius_km` of `(lat, lon)`.
    pub fn within(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<Neighbour<'a>> {
        collect_within(self.points.iter(), lat, lon, radius_km)
    }
}

impl ProximitySource for LinearScan<'_> {
    fn within(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<Neighbour<'_>> {
        Self::within(self, lat, lon, radius_km)
    }
}

impl ProximitySource for Vec<PointOfInterest> {
    fn within(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<Neighbour<'_>> {
        collect_within(self.iter(), lat, lon, radius_km)
    }
}

pub(crate) fn collect_within<'a>(
    points: impl Iterator<Item = &'a PointOfInterest>,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> Vec<Neighbour<'a>> {
    points
        .filter_map(|point| {
            let distance = distance_km(lat, lon, point.latitude(), point.longitude());
            (distance <= radius_km).then_some(Neighbour {
                point,
                distance_km: distance,
            })
        })
        .collect()
}
