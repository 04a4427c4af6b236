//! Great-circle distance between WGS84 coordinates.

/// Mean Earth radius in kilometres used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres spanned by one degree of latitude on the mean sphere.
pub(crate) const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// Return the haversine distance in kilometres between two points.
///
/// The function is symmetric and yields `0.0` for coincident points.
/// Inputs are degrees and are assumed finite.
///
/// # Examples
/// ```
/// use habitat_core::distance_km;
///
/// let d = distance_km(40.70, -73.99, 40.71, -73.98);
/// assert!((d - 1.4).abs() < 0.05);
/// assert_eq!(distance_km(40.7, -73.9, 40.7, -73.9), 0.0);
/// ```
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
