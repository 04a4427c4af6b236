//! Per-aspect normalisation of raw zone attributes into `0.0..=1.0`.

use std::collections::BTreeMap;

use habitat_core::Aspect;

use crate::RangeError;

/// Linear rescaling bounds for one aspect.
///
/// Values are clamped into `[min, max]` and mapped onto `[0, 1]`. When
/// `invert` is set the result is flipped so that `1.0` always means more
/// desirable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisationRange {
    min: f64,
    max: f64,
    invert: bool,
}

impl NormalisationRange {
    /// Validate and construct a range.
    ///
    /// `min == max` is accepted; such a range maps every value to `0.0`
    /// (or `1.0` when inverted).
    ///
    /// # Errors
    /// Returns [`RangeError::NonFinite`] for NaN or infinite bounds and
    /// [`RangeError::Inverted`] when `min > max`.
    pub fn new(min: f64, max: f64, invert: bool) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite { min, max });
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max, invert })
    }

    const fn fixed(min: f64, max: f64, invert: bool) -> Self {
        Self { min, max, invert }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether higher raw values are less desirable.
    #[must_use]
    pub const fn invert(&self) -> bool {
        self.invert
    }

    /// Map a raw attribute onto `0.0..=1.0`.
    ///
    /// # Examples
    /// ```
    /// use habitat_scorer::NormalisationRange;
    ///
    /// let crime = NormalisationRange::new(2.8, 6.7, true).expect("valid range");
    /// assert_eq!(crime.normalise(2.8), 1.0);
    /// assert_eq!(crime.normalise(6.7), 0.0);
    /// assert_eq!(crime.normalise(100.0), 0.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "linear rescaling requires floating-point maths"
    )]
    pub fn normalise(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let span = self.max - self.min;
        let divisor = if span == 0.0 { 1.0 } else { span };
        let normalised = (clamped - self.min) / divisor;
        if self.invert {
            1.0 - normalised
        } else {
            normalised
        }
    }
}

/// Normalisation ranges keyed by aspect.
///
/// Aspects without a range are left out of the polygon score.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRanges {
    ranges: BTreeMap<Aspect, NormalisationRange>,
}

impl AspectRanges {
    /// A table with no ranges.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    /// Replace or add the range for `aspect`.
    #[must_use]
    pub fn with_range(mut self, aspect: Aspect, range: NormalisationRange) -> Self {
        self.ranges.insert(aspect, range);
        self
    }

    /// Range for `aspect`, if configured.
    #[must_use]
    pub fn get(&self, aspect: Aspect) -> Option<&NormalisationRange> {
        self.ranges.get(&aspect)
    }

    /// Iterate over the configured ranges in aspect order.
    pub fn iter(&self) -> impl Iterator<Item = (Aspect, &NormalisationRange)> {
        self.ranges.iter().map(|(aspect, range)| (*aspect, range))
    }
}

impl Default for AspectRanges {
    fn default() -> Self {
        Self::empty()
            .with_range(
                Aspect::AirQualityIndex,
                NormalisationRange::fixed(11.0, 22.0, false),
            )
            .with_range(Aspect::CrimeRate, NormalisationRange::fixed(2.8, 6.7, true))
            .with_range(
                Aspect::MedianRent,
                NormalisationRange::fixed(3400.0, 5800.0, true),
            )
            .with_range(
                Aspect::SchoolQuality,
                NormalisationRange::fixed(6.4, 9.1, false),
            )
            .with_range(
                Aspect::TransitDistance,
                NormalisationRange::fixed(0.05, 0.45, true),
            )
    }
}
