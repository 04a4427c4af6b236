//! Aspects: the named scoring dimensions backed by zoned polygons.
//!
//! The enum offers compile-time safety for attribute and normalisation
//! lookups.
//!
//! # Examples
//! ```
//! use habitat_core::Aspect;
//!
//! assert_eq!(Aspect::CrimeRate.as_str(), "crime_rate");
//! assert_eq!("median_rent".parse::<Aspect>(), Ok(Aspect::MedianRent));
//! ```

use thiserror::Error;

/// A polygon-backed scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Aspect {
    /// Air quality index; higher readings are better in the source data.
    AirQualityIndex,
    /// Reported crime rate.
    CrimeRate,
    /// Median monthly rent.
    MedianRent,
    /// School quality rating.
    SchoolQuality,
    /// Distance to the nearest transit stop in kilometres.
    TransitDistance,
}

/// Error returned when parsing an unrecognised aspect name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown aspect '{0}'")]
pub struct UnknownAspect(pub String);

impl Aspect {
    /// Every aspect in canonical scoring order.
    pub const ALL: [Self; 5] = [
        Self::AirQualityIndex,
        Self::CrimeRate,
        Self::MedianRent,
        Self::SchoolQuality,
        Self::TransitDistance,
    ];

    /// Return the aspect as a `snake_case` `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AirQualityIndex => "air_quality_index",
            Self::CrimeRate => "crime_rate",
            Self::MedianRent => "median_rent",
            Self::SchoolQuality => "school_quality",
            Self::TransitDistance => "transit_distance",
        }
    }

    /// Name of the polygon attribute that carries this aspect's value.
    ///
    /// Attributes are named after the aspect itself; transit zones store
    /// their value under `transit_distance`.
    pub const fn attribute_field(self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Aspect {
    type Err = UnknownAspect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "air_quality_index" | "air_quality" => Ok(Self::AirQualityIndex),
            "crime_rate" | "crime" => Ok(Self::CrimeRate),
            "median_rent" | "rent" => Ok(Self::MedianRent),
            "school_quality" | "schools" => Ok(Self::SchoolQuality),
            "transit_distance" | "transit" => Ok(Self::TransitDistance),
            _ => Err(UnknownAspect(s.to_owned())),
        }
    }
}
