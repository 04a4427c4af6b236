#![expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "property tests fail fast and derive bounds inline"
)]

//! Property-based tests for the habitability scorer.
//!
//! # Invariants tested
//!
//! - **Bounded output:** the final score and every component stay within
//!   `0.0..=100.0` for any weights in `0.0..=1.0`.
//! - **Decay shape:** proximity decay lies in `0.0..=1.0` and never grows
//!   with distance.
//! - **Normalisation bounds:** normalised values always lie in `0.0..=1.0`.
//! - **Weight snapshots:** reading the weights twice yields equal values.

use geo::Coord;
use habitat_core::{Aspect, GridIndex, PointOfInterest, ZoneIndex, ZonePolygon};
use habitat_scorer::{
    HabitabilityScorer, NormalisationRange, POSITIVE_CATEGORY_WEIGHTS, ScoreWeights, WeightUpdate,
    proximity_decay,
};
use proptest::prelude::*;

const CATEGORIES: [&str; 6] = [
    "park",
    "grocery",
    "cafe",
    "landfill",
    "power_plant",
    "newsstand",
];

fn city_point() -> impl Strategy<Value = (f64, f64)> {
    (40.70_f64..40.80, -74.02_f64..-73.92)
}

fn amenity() -> impl Strategy<Value = PointOfInterest> {
    (city_point(), 0..CATEGORIES.len()).prop_map(|((lat, lon), index)| {
        let category = CATEGORIES.get(index).copied().unwrap_or("park");
        PointOfInterest::at(format!("{category} {lat:.4}"), category, lat, lon)
    })
}

fn weights() -> impl Strategy<Value = ScoreWeights> {
    (0.0_f64..=1.0, 0.0_f64..=1.0, 0.0_f64..=1.0).prop_map(|(amenity, polygons, penalty)| {
        ScoreWeights {
            amenity,
            polygons,
            penalty,
        }
    })
}

fn zones(values: (f64, f64, f64)) -> ZoneIndex {
    let ring = vec![
        Coord { x: -74.00, y: 40.72 },
        Coord { x: -74.00, y: 40.78 },
        Coord { x: -73.94, y: 40.78 },
        Coord { x: -73.94, y: 40.72 },
    ];
    ZoneIndex::new([
        ZonePolygon::new(Aspect::CrimeRate, "crime", ring.clone(), values.0),
        ZonePolygon::new(Aspect::MedianRent, "rent", ring.clone(), values.1),
        ZonePolygon::new(Aspect::AirQualityIndex, "air", ring, values.2),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn scores_stay_bounded(
        points in prop::collection::vec(amenity(), 0..40),
        raw in (0.0_f64..10.0, 1000.0_f64..8000.0, 0.0_f64..40.0),
        weights in weights(),
        (lat, lon) in city_point(),
    ) {
        let index = GridIndex::with_default_cell_size(points).expect("default cell size");
        let scorer = HabitabilityScorer::new(index, zones(raw));
        let result = scorer.compute_with_weights(lat, lon, weights);

        prop_assert!((0.0..=100.0).contains(&result.final_score));
        prop_assert!((0.0..=100.0).contains(&result.components.amenity));
        prop_assert!((0.0..=100.0).contains(&result.components.polygons));
        prop_assert!((0.0..=100.0).contains(&result.components.penalty));
        prop_assert_eq!(result.weights, weights);
    }

    #[test]
    fn decay_is_bounded_and_non_increasing(
        near in 0.0_f64..3.0,
        extra in 0.0_f64..3.0,
        max in 0.1_f64..5.0,
    ) {
        let closer = proximity_decay(near, max);
        let further = proximity_decay(near + extra, max);
        prop_assert!((0.0..=1.0).contains(&closer));
        prop_assert!(further <= closer);
    }

    #[test]
    fn normalised_values_stay_in_unit_interval(
        min in -100.0_f64..100.0,
        span in 0.0_f64..100.0,
        invert in any::<bool>(),
        value in -1000.0_f64..1000.0,
    ) {
        let range = NormalisationRange::new(min, min + span, invert).expect("ordered bounds");
        prop_assert!((0.0..=1.0).contains(&range.normalise(value)));
    }

    #[test]
    fn weight_snapshots_are_stable(update_amenity in proptest::option::of(0.0_f64..=1.0)) {
        let index = GridIndex::with_default_cell_size(Vec::new()).expect("default cell size");
        let mut scorer = HabitabilityScorer::new(index, ZoneIndex::default());
        scorer.set_weights(WeightUpdate {
            amenity: update_amenity,
            ..WeightUpdate::default()
        });
        prop_assert_eq!(scorer.weights(), scorer.weights());
        prop_assert_eq!(
            scorer.weights().amenity,
            update_amenity.unwrap_or(ScoreWeights::default().amenity)
        );
    }

    #[test]
    fn every_default_amenity_scores_fully_at_zero_distance(
        index in 0..POSITIVE_CATEGORY_WEIGHTS.len(),
        (lat, lon) in city_point(),
    ) {
        let (category, _) = POSITIVE_CATEGORY_WEIGHTS.get(index).copied().unwrap_or(("park", 1.0));
        let points = vec![PointOfInterest::at("only", category, lat, lon)];
        let grid = GridIndex::with_default_cell_size(points).expect("default cell size");
        let scorer = HabitabilityScorer::new(grid, ZoneIndex::default());
        prop_assert!((scorer.amenity_score(lat, lon) - 100.0).abs() < 1e-9);
    }
}
