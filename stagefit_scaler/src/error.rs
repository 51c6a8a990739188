// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Configuration error rejected at the boundary of the scaler.
///
/// Neither variant is ever produced mid-computation: sizes and bounds are
/// validated when they are handed to a [`crate::ContentScaler`] or built into
/// [`crate::ScaleBounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleError {
    /// A content or screen size with a non-positive or non-finite dimension.
    InvalidSize {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
    /// Scale bounds where `min > max`, or where a bound is not a positive finite number.
    InvalidBounds {
        /// The rejected minimum, if any.
        min: Option<f64>,
        /// The rejected maximum, if any.
        max: Option<f64>,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid size {width}x{height}: dimensions must be positive")
            }
            Self::InvalidBounds { min, max } => {
                write!(f, "invalid scale bounds (min: {min:?}, max: {max:?})")
            }
        }
    }
}

impl core::error::Error for ScaleError {}
