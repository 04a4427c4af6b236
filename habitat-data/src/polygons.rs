//! Zone polygon records.
//!
//! Each record carries its attribute under the field named after its
//! aspect, so the record keeps every non-structural field in a map and
//! resolves the value once the aspect is known.

use std::collections::BTreeMap;

use camino::Utf8Path;
use geo::{Coord, LineString};
use habitat_core::{Aspect, ZonePolygon};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DatasetError, PolygonRecordError, fs::read_json};

/// Attribute read when the aspect-named field is absent.
pub const FALLBACK_ATTRIBUTE: &str = "transit_distance";

/// One entry of the polygon dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonRecord {
    /// Aspect name, for example `crime_rate`.
    pub aspect: String,
    /// Zone label.
    #[serde(default)]
    pub zone_type: String,
    /// Ring vertices as `[longitude, latitude]` pairs.
    pub coordinates: Vec<[f64; 2]>,
    /// Remaining fields, including the attribute value.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl PolygonRecord {
    /// Convert the record into a zone polygon.
    ///
    /// # Errors
    /// Returns [`PolygonRecordError`] when the aspect is unknown, no numeric
    /// attribute is present, or the ring has fewer than three vertices.
    pub fn into_zone(self) -> Result<ZonePolygon, PolygonRecordError> {
        let aspect: Aspect = self.aspect.parse()?;
        if self.coordinates.len() < 3 {
            return Err(PolygonRecordError::TooFewVertices {
                zone_type: self.zone_type,
                count: self.coordinates.len(),
            });
        }
        let Some(value) = self.attribute(aspect) else {
            return Err(PolygonRecordError::MissingAttribute {
                aspect,
                zone_type: self.zone_type,
            });
        };
        let ring: LineString<f64> = self
            .coordinates
            .iter()
            .map(|&[x, y]| Coord { x, y })
            .collect();
        Ok(ZonePolygon::new(aspect, self.zone_type, ring, value))
    }

    fn attribute(&self, aspect: Aspect) -> Option<f64> {
        let numeric = |field: &str| self.attributes.get(field).and_then(Value::as_f64);
        numeric(aspect.attribute_field()).or_else(|| numeric(FALLBACK_ATTRIBUTE))
    }
}

/// Load the polygon dataset at `path`, skipping unusable records.
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened, read, or parsed.
/// Individual bad records are logged and skipped rather than failing the
/// load.
pub fn load_polygons(path: &Utf8Path) -> Result<Vec<ZonePolygon>, DatasetError> {
    let records: Vec<PolygonRecord> = read_json(path)?;
    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match record.into_zone() {
            Ok(zone) => Some(zone),
            Err(err) => {
                warn!("skipping polygon record {index} in {path}: {err}");
                None
            }
        })
        .collect())
}
