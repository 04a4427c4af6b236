//! Uniform grid spatial index for radius-bounded neighbour queries.
//!
//! Points are bucketed into square cells in degree space keyed by
//! `(floor(lon / cell), floor(lat / cell))`. A query visits the block of
//! cells around the query cell and measures the haversine distance to every
//! point found there, trading a one-off build for queries that only touch a
//! bounded neighbourhood.
//!
//! The search block is sized per query from the radius, the cell size and
//! the query latitude, and never shrinks below the classic 5x5 block. When
//! the block would cover more cells than the index has occupied buckets the
//! query walks the occupied buckets instead, so every radius returns a
//! complete answer. Longitudes are not wrapped at the antimeridian.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::distance::{EARTH_RADIUS_KM, KM_PER_DEGREE};
use crate::proximity::collect_within;
use crate::{Neighbour, PointOfInterest, ProximitySource};

/// Default cell edge in degrees (about 1.1 km north-south).
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.01;

/// Minimum number of cells searched on each side of the query cell.
const MIN_RINGS: i64 = 2;

/// Integer cell coordinate `(longitude cell, latitude cell)`.
pub type CellKey = (i64, i64);

/// Error returned by [`GridIndex::build`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridIndexError {
    /// The cell size was zero, negative, or not finite.
    #[error("cell size must be a positive, finite number of degrees (got {0})")]
    InvalidCellSize(f64),
}

/// Read-only grid over an owned set of points.
///
/// Every input point lives in exactly one cell bucket and the cell size is
/// fixed for the lifetime of the index.
///
/// # Examples
/// ```
/// use habitat_core::{GridIndex, PointOfInterest, ProximitySource};
///
/// # fn main() -> Result<(), habitat_core::GridIndexError> {
/// let index = GridIndex::build(
///     vec![
///         PointOfInterest::at("P1", "park", 40.70, -73.99),
///         PointOfInterest::at("P2", "school", 40.71, -73.98),
///     ],
///     0.01,
/// )?;
/// let found = index.within(40.705, -73.985, 2.0);
/// assert_eq!(found.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GridIndex {
    cell_size_deg: f64,
    points: Vec<PointOfInterest>,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl GridIndex {
    /// Bucket `points` into cells of `cell_size_deg` degrees.
    ///
    /// # Errors
    /// Returns [`GridIndexError::InvalidCellSize`] when the cell size is not a
    /// positive finite number.
    pub fn build(
        points: Vec<PointOfInterest>,
        cell_size_deg: f64,
    ) -> Result<Self, GridIndexError> {
        if !cell_size_deg.is_finite() || cell_size_deg <= 0.0 {
            return Err(GridIndexError::InvalidCellSize(cell_size_deg));
        }
        let mut cells: HashMap<CellKey, Vec<usize>> = HashMap::new();
        for (position, point) in points.iter().enumerate() {
            let key = key_for(point.latitude(), point.longitude(), cell_size_deg);
            cells.entry(key).or_default().push(position);
        }
        let index = Self {
            cell_size_deg,
            points,
            cells,
        };
        debug!(
            "built grid index with {} points in {} cells ({} deg cells, 5x5 block covers {:.2} km)",
            index.len(),
            index.cell_count(),
            cell_size_deg,
            index.fixed_window_safe_radius_km()
        );
        Ok(index)
    }

    /// Build an index with [`DEFAULT_CELL_SIZE_DEG`].
    ///
    /// # Errors
    /// Never fails for the default cell size; the `Result` mirrors
    /// [`GridIndex::build`].
    pub fn with_default_cell_size(points: Vec<PointOfInterest>) -> Result<Self, GridIndexError> {
        Self::build(points, DEFAULT_CELL_SIZE_DEG)
    }

    /// Cell edge length in degrees.
    pub const fn cell_size_deg(&self) -> f64 {
        self.cell_size_deg
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The indexed points in input order.
    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    /// Cell key for a latitude/longitude pair.
    pub fn cell_key(&self, lat: f64, lon: f64) -> CellKey {
        key_for(lat, lon, self.cell_size_deg)
    }

    /// Points stored in the cell with the given key.
    pub fn cell(&self, key: CellKey) -> impl Iterator<Item = &PointOfInterest> + '_ {
        self.cells
            .get(&key)
            .into_iter()
            .flatten()
            .filter_map(|&position| self.points.get(position))
    }

    /// Largest radius a fixed 5x5 block is guaranteed to cover.
    ///
    /// This is twice the north-south extent of one cell. Queries are not
    /// limited to it; it is reported so callers can size cells against the
    /// radii they use.
    pub fn fixed_window_safe_radius_km(&self) -> f64 {
        2.0 * self.cell_size_deg * KM_PER_DEGREE
    }

    /// Cells searched on each side of the query cell as
    /// `(longitude rings, latitude rings)`.
    ///
    /// Returns `None` when the radius reaches a pole or wraps the globe, in
    /// which case queries fall back to walking every occupied bucket.
    pub fn search_rings(&self, lat: f64, radius_km: f64) -> Option<(i64, i64)> {
        let lat_span_deg = radius_km.max(0.0) / KM_PER_DEGREE;
        let poleward = lat.abs() + lat_span_deg;
        if poleward >= 90.0 {
            return None;
        }
        // sin(d / 2R) >= cos(lat_max) * sin(dlon / 2) bounds the longitude
        // span of any point within the radius.
        let half_angle = radius_km.max(0.0) / (2.0 * EARTH_RADIUS_KM);
        let ratio = half_angle.sin() / poleward.to_radians().cos();
        if ratio.is_nan() || ratio >= 1.0 {
            return None;
        }
        let lon_span_deg = (2.0 * ratio.asin()).to_degrees();
        Some((self.rings_for(lon_span_deg), self.rings_for(lat_span_deg)))
    }

    fn rings_for(&self, span_deg: f64) -> i64 {
        let rings = (span_deg / self.cell_size_deg).ceil();
        if rings.is_finite() && rings < i64::MAX as f64 {
            (rings as i64).max(MIN_RINGS)
        } else {
            i64::MAX
        }
    }

    /// Return every point within `radius_km` of `(lat, lon)` with its distance.
    pub fn query(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<Neighbour<'_>> {
        let (gx, gy) = self.cell_key(lat, lon);
        match self.search_rings(lat, radius_km) {
            Some((lon_rings, lat_rings))
                if block_size(lon_rings, lat_rings) <= self.cells.len() =>
            {
                let mut found = Vec::new();
                for dx in -lon_rings..=lon_rings {
                    for dy in -lat_rings..=lat_rings {
                        let (Some(x), Some(y)) = (gx.checked_add(dx), gy.checked_add(dy)) else {
                            continue;
                        };
                        found.extend(collect_within(self.cell((x, y)), lat, lon, radius_km));
                    }
                }
                found
            }
            rings => self.scan_buckets(gx, gy, rings, lat, lon, radius_km),
        }
    }

    fn scan_buckets(
        &self,
        gx: i64,
        gy: i64,
        rings: Option<(i64, i64)>,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Vec<Neighbour<'_>> {
        let in_block = |&(x, y): &CellKey| match rings {
            Some((lon_rings, lat_rings)) => {
                x.abs_diff(gx) <= lon_rings.unsigned_abs()
                    && y.abs_diff(gy) <= lat_rings.unsigned_abs()
            }
            None => true,
        };
        let candidates = self
            .cells
            .iter()
            .filter(|&(key, _)| in_block(key))
            .flat_map(|(_, positions)| positions.iter())
            .filter_map(|&position| self.points.get(position));
        collect_within(candidates, lat, lon, radius_km)
    }
}

impl ProximitySource for GridIndex {
    fn within(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<Neighbour<'_>> {
        self.query(lat, lon, radius_km)
    }
}

fn key_for(lat: f64, lon: f64, cell_size_deg: f64) -> CellKey {
    (
        (lon / cell_size_deg).floor() as i64,
        (lat / cell_size_deg).floor() as i64,
    )
}

fn block_size(lon_rings: i64, lat_rings: i64) -> usize {
    let side = |rings: i64| {
        usize::try_from(rings)
            .unwrap_or(usize::MAX)
            .saturating_mul(2)
            .saturating_add(1)
    };
    side(lon_rings).saturating_mul(side(lat_rings))
}
