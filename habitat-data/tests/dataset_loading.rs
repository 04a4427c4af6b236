#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Integration tests for loading a dataset directory from disk.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use habitat_core::Aspect;
use habitat_data::{
    ADDRESSES_FILE, AMENITIES_FILE, DatasetError, Datasets, POLYGONS_FILE, load_polygons,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const AMENITIES: &str = r#"[
    {"name": "Bryant Park", "type": "park", "latitude": 40.7536, "longitude": -73.9832},
    {"name": "Fresh Kills", "type": "landfill", "latitude": 40.5800, "longitude": -74.1800}
]"#;

const POLYGONS: &str = r#"[
    {"aspect": "crime_rate", "zone_type": "low", "crime_rate": 3.1,
     "coordinates": [[-74.0, 40.7], [-74.0, 40.8], [-73.9, 40.8], [-73.9, 40.7]]},
    {"aspect": "noise", "zone_type": "loud", "noise": 70,
     "coordinates": [[-74.0, 40.7], [-74.0, 40.8], [-73.9, 40.8]]},
    {"aspect": "transit_distance", "zone_type": "near", "transit_distance": 0.1,
     "coordinates": [[-74.0, 40.7], [-73.9, 40.8]]},
    {"aspect": "median_rent", "zone_type": "pricey", "transit_distance": 0.3,
     "coordinates": [[-74.0, 40.7], [-74.0, 40.8], [-73.9, 40.8]]}
]"#;

const ADDRESSES: &str = r#"[
    {"address": "Empire State Building", "latitude": 40.7484, "longitude": -73.9857}
]"#;

/// A temporary dataset directory and its UTF-8 path.
struct DatasetDir {
    _temp: TempDir,
    path: Utf8PathBuf,
}

impl DatasetDir {
    fn write(&self, name: &str, contents: &str) {
        fs::write(self.path.join(name).as_std_path(), contents).expect("write dataset file");
    }
}

#[fixture]
fn dataset_dir() -> DatasetDir {
    let temp = TempDir::new().expect("create tempdir");
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 tempdir");
    DatasetDir { _temp: temp, path }
}

#[fixture]
fn complete_dir(dataset_dir: DatasetDir) -> DatasetDir {
    dataset_dir.write(AMENITIES_FILE, AMENITIES);
    dataset_dir.write(POLYGONS_FILE, POLYGONS);
    dataset_dir.write(ADDRESSES_FILE, ADDRESSES);
    dataset_dir
}

#[rstest]
fn loads_all_three_files(complete_dir: DatasetDir) {
    let datasets = Datasets::load(&complete_dir.path).expect("load datasets");

    assert_eq!(datasets.amenities.len(), 2);
    assert_eq!(
        datasets.amenities.first().map(|point| point.name.as_str()),
        Some("Bryant Park")
    );
    assert_eq!(datasets.addresses.len(), 1);
    assert!(datasets.addresses.lookup("empire state building").is_some());
}

#[rstest]
fn skips_unusable_polygons(complete_dir: DatasetDir) {
    let zones = load_polygons(&complete_dir.path.join(POLYGONS_FILE)).expect("load polygons");

    let summary: Vec<_> = zones
        .iter()
        .map(|zone| (zone.aspect, zone.zone_type.as_str(), zone.value))
        .collect();
    assert_eq!(
        summary,
        [
            (Aspect::CrimeRate, "low", 3.1),
            (Aspect::MedianRent, "pricey", 0.3),
        ]
    );
}

#[rstest]
#[case(AMENITIES_FILE)]
#[case(POLYGONS_FILE)]
#[case(ADDRESSES_FILE)]
fn missing_files_fail_the_load(dataset_dir: DatasetDir, #[case] missing: &str) {
    for name in [AMENITIES_FILE, POLYGONS_FILE, ADDRESSES_FILE] {
        if name != missing {
            dataset_dir.write(name, "[]");
        }
    }

    let err = Datasets::load(&dataset_dir.path).expect_err("missing file");

    match err {
        DatasetError::Open { path, .. } => assert_eq!(path, dataset_dir.path.join(missing)),
        other => panic!("expected an open error, got {other:?}"),
    }
}

#[rstest]
fn malformed_json_reports_the_path(complete_dir: DatasetDir) {
    complete_dir.write(AMENITIES_FILE, "{ not json");

    let err = Datasets::load(&complete_dir.path).expect_err("malformed file");

    assert!(matches!(
        &err,
        DatasetError::Parse { path, .. } if path == &complete_dir.path.join(AMENITIES_FILE)
    ));
    assert!(err.to_string().contains(AMENITIES_FILE));
}

#[rstest]
fn nonexistent_directory_fails() {
    let err = Datasets::load(Utf8Path::new("/nonexistent/habitat/data")).expect_err("no dir");
    assert!(matches!(err, DatasetError::Open { .. }));
}
