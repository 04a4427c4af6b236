//! Core spatial primitives for the habitability engine.
//!
//! The crate owns the geometry that the scorer leans on: great-circle
//! distance, a uniform grid index for radius queries over points of interest,
//! and the ray-casting zone classifier used to resolve polygon attributes.
//!
//! Coordinates follow the `geo` convention used throughout the workspace:
//! `x = longitude`, `y = latitude`, both in degrees.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aspect;
pub mod distance;
pub mod grid;
pub mod poi;
pub mod polygon;
pub mod proximity;

pub use aspect::{Aspect, UnknownAspect};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use grid::{DEFAULT_CELL_SIZE_DEG, GridIndex, GridIndexError};
pub use poi::PointOfInterest;
pub use polygon::{MatchMethod, ZoneIndex, ZoneMatch, ZonePolygon, centroid, contains_point};
pub use proximity::{LinearScan, Neighbour, ProximitySource};
