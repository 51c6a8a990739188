// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ScaleError;

/// Optional lower and upper limits applied to a computed scale factor.
///
/// Both limits are positive finite numbers when present, and `min <= max`
/// holds whenever both are set. The only way to build a `ScaleBounds` is
/// through the validating constructors, so [`crate::clamp_scale`] never sees
/// an inconsistent pair.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScaleBounds {
    min: Option<f64>,
    max: Option<f64>,
}

impl ScaleBounds {
    /// Bounds that leave every scale unchanged.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Creates bounds from optional limits.
    ///
    /// Returns [`ScaleError::InvalidBounds`] if a limit is not a positive
    /// finite number or if `min > max`.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, ScaleError> {
        let invalid = ScaleError::InvalidBounds { min, max };
        let valid = |v: Option<f64>| v.is_none_or(|v| v.is_finite() && v > 0.0);
        if !valid(min) || !valid(max) {
            return Err(invalid);
        }
        if let (Some(lo), Some(hi)) = (min, max)
            && lo > hi
        {
            return Err(invalid);
        }
        Ok(Self { min, max })
    }

    /// Creates bounds where a value `<= 0` or `+inf` means "no bound".
    ///
    /// Hosts that store limits as plain numbers with `-1` for "unset" can hand
    /// them over unchanged. An infinite limit never clamps anything, so it is
    /// treated as unset too. NaN is still rejected.
    pub fn from_sentinels(min: f64, max: f64) -> Result<Self, ScaleError> {
        let unset = |v: f64| ((v > 0.0 && v != f64::INFINITY) || v.is_nan()).then_some(v);
        Self::new(unset(min), unset(max))
    }

    /// Returns the lower limit, if any.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Returns the upper limit, if any.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Returns a copy with the lower limit replaced.
    pub fn with_min(self, min: Option<f64>) -> Result<Self, ScaleError> {
        Self::new(min, self.max)
    }

    /// Returns a copy with the upper limit replaced.
    pub fn with_max(self, max: Option<f64>) -> Result<Self, ScaleError> {
        Self::new(self.min, max)
    }

    /// Returns `true` if neither limit is set.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScaleBounds {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            #[serde(default)]
            min: Option<f64>,
            #[serde(default)]
            max: Option<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleBounds;
    use crate::error::ScaleError;

    #[test]
    fn rejects_inverted_bounds() {
        let err = ScaleBounds::new(Some(2.0), Some(1.0)).unwrap_err();
        assert_eq!(
            err,
            ScaleError::InvalidBounds {
                min: Some(2.0),
                max: Some(1.0)
            }
        );
    }

    #[test]
    fn rejects_non_positive_and_non_finite_limits() {
        assert!(ScaleBounds::new(Some(0.0), None).is_err());
        assert!(ScaleBounds::new(None, Some(-1.0)).is_err());
        assert!(ScaleBounds::new(Some(f64::NAN), None).is_err());
        assert!(ScaleBounds::new(None, Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn equal_limits_are_accepted() {
        let b = ScaleBounds::new(Some(1.5), Some(1.5)).unwrap();
        assert_eq!(b.min(), Some(1.5));
        assert_eq!(b.max(), Some(1.5));
    }

    #[test]
    fn sentinels_map_non_positive_to_unset() {
        let b = ScaleBounds::from_sentinels(-1.0, -1.0).unwrap();
        assert!(b.is_unbounded());

        let b = ScaleBounds::from_sentinels(0.5, 0.0).unwrap();
        assert_eq!(b.min(), Some(0.5));
        assert_eq!(b.max(), None);

        assert!(ScaleBounds::from_sentinels(f64::NAN, -1.0).is_err());
    }

    #[test]
    fn infinite_sentinel_means_unbounded() {
        let b = ScaleBounds::from_sentinels(-1.0, f64::INFINITY).unwrap();
        assert!(b.is_unbounded());

        let b = ScaleBounds::from_sentinels(f64::INFINITY, 2.0).unwrap();
        assert_eq!(b.min(), None);
        assert_eq!(b.max(), Some(2.0));

        // The explicit constructor still rejects infinite limits.
        assert!(ScaleBounds::new(None, Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn with_min_revalidates_against_existing_max() {
        let b = ScaleBounds::new(None, Some(2.0)).unwrap();
        assert!(b.with_min(Some(3.0)).is_err());
        assert_eq!(b.with_min(Some(1.0)).unwrap().min(), Some(1.0));
    }
}
