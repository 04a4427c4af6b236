//! Amenity point records.

use camino::Utf8Path;
use habitat_core::PointOfInterest;
use serde::{Deserialize, Serialize};

use crate::{DatasetError, fs::read_json};

/// One entry of the amenity dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityRecord {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Category label matched against the scorer's tables.
    #[serde(rename = "type")]
    pub category: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl From<AmenityRecord> for PointOfInterest {
    fn from(record: AmenityRecord) -> Self {
        Self::at(record.name, record.category, record.latitude, record.longitude)
    }
}

/// Load every amenity in `path`.
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened, read, or parsed.
pub fn load_amenities(path: &Utf8Path) -> Result<Vec<PointOfInterest>, DatasetError> {
    let records: Vec<AmenityRecord> = read_json(path)?;
    Ok(records.into_iter().map(PointOfInterest::from).collect())
}
