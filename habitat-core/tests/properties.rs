//! Property-based tests for the distance metric and grid index.
//!
//! # Invariants tested
//!
//! - **Identity:** distance from a point to itself is zero.
//! - **Symmetry:** swapping endpoints leaves the distance unchanged.
//! - **Monotonicity:** moving further north along a meridian increases distance.
//! - **Index equivalence:** grid queries return the same set as a linear scan.

use habitat_core::{GridIndex, LinearScan, PointOfInterest, ProximitySource, distance_km};
use proptest::prelude::*;

fn city_point() -> impl Strategy<Value = (f64, f64)> {
    (40.55_f64..40.90, -74.10_f64..-73.75)
}

fn sorted_names(points: Vec<habitat_core::Neighbour<'_>>) -> Vec<String> {
    let mut names: Vec<_> = points.into_iter().map(|n| n.point.name.clone()).collect();
    names.sort();
    names
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_to_self_is_zero((lat, lon) in city_point()) {
        prop_assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in city_point(), b in city_point()) {
        let forward = distance_km(a.0, a.1, b.0, b.1);
        let backward = distance_km(b.0, b.1, a.0, a.1);
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn distance_grows_with_separation(
        (lat, lon) in city_point(),
        near in 0.0001_f64..0.05,
        extra in 0.0001_f64..0.05,
    ) {
        let shorter = distance_km(lat, lon, lat + near, lon);
        let longer = distance_km(lat, lon, lat + near + extra, lon);
        prop_assert!(longer > shorter);
    }

    #[test]
    fn grid_query_matches_linear_scan(
        coords in prop::collection::vec(city_point(), 0..120),
        (lat, lon) in city_point(),
        radius in 0.1_f64..6.0,
        cell in prop_oneof![Just(0.005_f64), Just(0.01_f64), Just(0.02_f64)],
    ) {
        let points: Vec<_> = coords
            .into_iter()
            .enumerate()
            .map(|(i, (plat, plon))| PointOfInterest::at(format!("p{i}"), "park", plat, plon))
            .collect();
        let index = GridIndex::build(points.clone(), cell).expect("valid cell size");
        let indexed = sorted_names(index.within(lat, lon, radius));
        let scanned = sorted_names(LinearScan::new(&points).within(lat, lon, radius));
        prop_assert_eq!(indexed, scanned);
    }
}
