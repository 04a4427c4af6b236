//! Mixture coefficients for the final habitability score.

use serde::{Deserialize, Serialize};

/// Weights applied to the amenity, polygon, and penalty components.
///
/// Callers are expected to keep the three values summing to `1.0`; the
/// scorer applies them as given and never renormalises.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Multiplier for the amenity component.
    pub amenity: f64,
    /// Multiplier for the polygon component.
    pub polygons: f64,
    /// Multiplier for the penalty component, which is subtracted.
    pub penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            amenity: 0.4,
            polygons: 0.4,
            penalty: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Return a copy with the fields present in `update` replaced.
    ///
    /// # Examples
    /// ```
    /// use habitat_scorer::{ScoreWeights, WeightUpdate};
    ///
    /// let merged = ScoreWeights::default().merged(WeightUpdate {
    ///     penalty: Some(0.5),
    ///     ..WeightUpdate::default()
    /// });
    /// assert_eq!(merged.penalty, 0.5);
    /// assert_eq!(merged.amenity, 0.4);
    /// ```
    #[must_use]
    pub fn merged(self, update: WeightUpdate) -> Self {
        Self {
            amenity: update.amenity.unwrap_or(self.amenity),
            polygons: update.polygons.unwrap_or(self.polygons),
            penalty: update.penalty.unwrap_or(self.penalty),
        }
    }

    /// Build weights from raw slider magnitudes, dividing each by their sum.
    ///
    /// Returns `None` when the sliders sum to zero, so callers keep their
    /// current weights instead of zeroing every component.
    ///
    /// # Examples
    /// ```
    /// use habitat_scorer::ScoreWeights;
    ///
    /// let weights = ScoreWeights::from_sliders(2.0, 2.0, 1.0);
    /// assert_eq!(weights, Some(ScoreWeights { amenity: 0.4, polygons: 0.4, penalty: 0.2 }));
    /// assert_eq!(ScoreWeights::from_sliders(0.0, 0.0, 0.0), None);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "slider normalisation divides by the slider total"
    )]
    pub fn from_sliders(amenity: f64, polygons: f64, penalty: f64) -> Option<Self> {
        let sum = amenity + polygons + penalty;
        if sum == 0.0 {
            return None;
        }
        Some(Self {
            amenity: amenity / sum,
            polygons: polygons / sum,
            penalty: penalty / sum,
        })
    }

    /// Sum of the three weights.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "reports the weight total")]
    pub const fn total(self) -> f64 {
        self.amenity + self.polygons + self.penalty
    }
}

/// A partial weight update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightUpdate {
    /// New amenity weight, if changing.
    #[serde(default)]
    pub amenity: Option<f64>,
    /// New polygon weight, if changing.
    #[serde(default)]
    pub polygons: Option<f64>,
    /// New penalty weight, if changing.
    #[serde(default)]
    pub penalty: Option<f64>,
}

impl WeightUpdate {
    /// Whether the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amenity.is_none() && self.polygons.is_none() && self.penalty.is_none()
    }

    /// Update built from slider magnitudes; empty when they sum to zero.
    ///
    /// Missing sliders count as zero.
    #[must_use]
    pub fn from_sliders(
        amenity: Option<f64>,
        polygons: Option<f64>,
        penalty: Option<f64>,
    ) -> Self {
        ScoreWeights::from_sliders(
            amenity.unwrap_or_default(),
            polygons.unwrap_or_default(),
            penalty.unwrap_or_default(),
        )
        .map_or_else(Self::default, Self::from)
    }
}

impl From<ScoreWeights> for WeightUpdate {
    fn from(weights: ScoreWeights) -> Self {
        Self {
            amenity: Some(weights.amenity),
            polygons: Some(weights.polygons),
            penalty: Some(weights.penalty),
        }
    }
}
