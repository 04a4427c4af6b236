//! Facade crate for the habitability scoring engine.
//!
//! This crate re-exports the core geometry types and the scorer, and exposes
//! dataset loading behind the `data` feature.

#![forbid(unsafe_code)]

pub use habitat_core::{
    Aspect, DEFAULT_CELL_SIZE_DEG, EARTH_RADIUS_KM, GridIndex, GridIndexError, LinearScan,
    MatchMethod, Neighbour, PointOfInterest, ProximitySource, ZoneIndex, ZoneMatch, ZonePolygon,
    distance_km,
};
pub use habitat_scorer::{
    AspectDetail, AspectRanges, CategoryTable, Components, HabitabilityScorer,
    NormalisationRange, Region, ScoreError, ScoreResult, ScoreWeights, ScorerConfig,
    WeightUpdate,
};

#[cfg(feature = "data")]
pub use habitat_data::{AddressBook, DatasetError, Datasets};

/// Build a grid-indexed scorer over loaded datasets.
///
/// # Errors
/// Returns [`GridIndexError`] when `cell_size_deg` is not a positive finite
/// number.
#[cfg(feature = "data")]
pub fn scorer_for(
    datasets: Datasets,
    cell_size_deg: f64,
    config: ScorerConfig,
) -> Result<HabitabilityScorer<GridIndex>, GridIndexError> {
    let index = GridIndex::build(datasets.amenities, cell_size_deg)?;
    Ok(HabitabilityScorer::with_config(
        index,
        ZoneIndex::new(datasets.zones),
        config,
    ))
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "tests should fail fast")]
    fn scorer_for_indexes_loaded_amenities() {
        let datasets = Datasets {
            amenities: vec![PointOfInterest::at("Bryant Park", "park", 40.7536, -73.9832)],
            ..Datasets::default()
        };
        let scorer = scorer_for(datasets, DEFAULT_CELL_SIZE_DEG, ScorerConfig::default())
            .expect("valid cell size");

        assert_eq!(scorer.amenities().len(), 1);
        assert!(scorer.zones().is_empty());
        assert_eq!(scorer.amenity_score(40.7536, -73.9832), 100.0_f64);
    }

    #[test]
    fn scorer_for_rejects_bad_cell_sizes() {
        let result = scorer_for(Datasets::default(), -1.0, ScorerConfig::default());
        assert!(matches!(result, Err(GridIndexError::InvalidCellSize(_))));
    }
}
