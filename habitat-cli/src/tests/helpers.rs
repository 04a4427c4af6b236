//! Dataset fixtures shared by the CLI tests.

use std::fs;

use camino::Utf8PathBuf;
use rstest::fixture;
use tempfile::TempDir;

/// A temporary dataset directory populated with a small Manhattan sample.
pub(super) struct DatasetFiles {
    _temp: TempDir,
    pub(super) dir: Utf8PathBuf,
}

const AMENITIES: &str = r#"[
    {"name": "Bryant Park", "type": "park", "latitude": 40.7536, "longitude": -73.9832},
    {"name": "Whole Foods", "type": "grocery", "latitude": 40.7530, "longitude": -73.9860},
    {"name": "Con Ed Plant", "type": "power_plant", "latitude": 40.7280, "longitude": -73.9740}
]"#;

const POLYGONS: &str = r#"[
    {"aspect": "crime_rate", "zone_type": "low", "crime_rate": 2.8,
     "coordinates": [[-74.00, 40.74], [-74.00, 40.77], [-73.97, 40.77], [-73.97, 40.74]]},
    {"aspect": "air_quality_index", "zone_type": "moderate", "air_quality_index": 16.5,
     "coordinates": [[-74.00, 40.74], [-74.00, 40.77], [-73.97, 40.77], [-73.97, 40.74]]}
]"#;

const ADDRESSES: &str = r#"[
    {"address": "Empire State Building", "latitude": 40.7484, "longitude": -73.9857},
    {"address": "Times Square", "latitude": 40.7580, "longitude": -73.9855},
    {"address": "Big Ben", "latitude": 51.5007, "longitude": -0.1246}
]"#;

#[fixture]
pub(super) fn dataset_files() -> DatasetFiles {
    let temp = TempDir::new().expect("tempdir");
    let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf-8 tempdir");
    for (name, contents) in [
        (habitat_data::AMENITIES_FILE, AMENITIES),
        (habitat_data::POLYGONS_FILE, POLYGONS),
        (habitat_data::ADDRESSES_FILE, ADDRESSES),
    ] {
        fs::write(dir.join(name).as_std_path(), contents).expect("write dataset");
    }
    DatasetFiles { _temp: temp, dir }
}
