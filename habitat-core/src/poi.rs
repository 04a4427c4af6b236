use geo::Coord;

/// A named location tagged with a category such as `park` or `landfill`.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Points are immutable once loaded; the scorer only reads them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use habitat_core::PointOfInterest;
///
/// let poi = PointOfInterest::new("Hudson Yards Park", "park", Coord { x: -74.0, y: 40.75 });
///
/// assert_eq!(poi.category, "park");
/// assert_eq!(poi.latitude(), 40.75);
/// assert_eq!(poi.longitude(), -74.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Display name.
    pub name: String,
    /// Category tag used to select scoring tables.
    pub category: String,
    /// Geospatial position.
    pub location: Coord<f64>,
}

impl PointOfInterest {
    /// Construct a `PointOfInterest`.
    pub fn new(name: impl Into<String>, category: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            location,
        }
    }

    /// Construct a `PointOfInterest` from latitude/longitude degrees.
    ///
    /// # Examples
    /// ```
    /// use habitat_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::at("Library", "library", 40.70, -73.99);
    /// assert_eq!(poi.location.x, -73.99);
    /// ```
    pub fn at(
        name: impl Into<String>,
        category: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self::new(
            name,
            category,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}
