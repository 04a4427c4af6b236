//! Dataset loading for the habitability engine.
//!
//! Responsibilities:
//! - Read the amenity, polygon, and geocoding JSON files from a dataset
//!   directory.
//! - Map raw records onto `habitat-core` types.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `habitat-scorer`).
//!
//! Invariants:
//! - A missing or malformed file fails the whole load; individual unusable
//!   polygon records are skipped with a warning.

#![forbid(unsafe_code)]

mod addresses;
mod amenities;
mod error;
mod fs;
mod polygons;

use camino::Utf8Path;
use habitat_core::{PointOfInterest, ZonePolygon};
use log::info;

pub use addresses::{Address, AddressBook};
pub use amenities::{AmenityRecord, load_amenities};
pub use error::{DatasetError, PolygonRecordError};
pub use polygons::{FALLBACK_ATTRIBUTE, PolygonRecord, load_polygons};

/// File name of the amenity dataset.
pub const AMENITIES_FILE: &str = "features.json";
/// File name of the polygon dataset.
pub const POLYGONS_FILE: &str = "features_poly.json";
/// File name of the geocoding dataset.
pub const ADDRESSES_FILE: &str = "geocoding.json";

/// Every dataset the scorer needs, loaded from one directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    /// Amenity and hazard points.
    pub amenities: Vec<PointOfInterest>,
    /// Zone polygons in file order.
    pub zones: Vec<ZonePolygon>,
    /// Selectable addresses.
    pub addresses: AddressBook,
}

impl Datasets {
    /// Load the three dataset files from `dir`.
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] encountered; no partial result is
    /// returned.
    pub fn load(dir: &Utf8Path) -> Result<Self, DatasetError> {
        let amenities = load_amenities(&dir.join(AMENITIES_FILE))?;
        let zones = load_polygons(&dir.join(POLYGONS_FILE))?;
        let addresses = AddressBook::load(&dir.join(ADDRESSES_FILE))?;
        info!(
            "loaded {} amenities, {} zones, and {} addresses from {dir}",
            amenities.len(),
            zones.len(),
            addresses.len()
        );
        Ok(Self {
            amenities,
            zones,
            addresses,
        })
    }
}
