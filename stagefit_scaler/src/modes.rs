// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How logical content is scaled to the screen.
///
/// This enum is consulted by [`crate::compute_scale`] and stored in
/// [`crate::ScalerConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleMode {
    /// Fit the content entirely inside the screen (contain).
    ///
    /// The scaled content never exceeds the screen, but bands of screen may
    /// remain uncovered on one axis.
    #[default]
    ShowAll,
    /// Fill the screen entirely (cover).
    ///
    /// The scaled content covers the whole screen and is cropped on one axis
    /// when the aspect ratios differ.
    NoBorder,
    /// Keep the scale factor fixed at `1.0`.
    NoScale,
}

/// Vertical placement of the scaled content within the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlign {
    /// Align the content's top edge with the top of the screen.
    Top,
    /// Center the content vertically.
    #[default]
    Middle,
    /// Align the content's bottom edge with the bottom of the screen.
    Bottom,
}

/// Horizontal placement of the scaled content within the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlign {
    /// Align the content's left edge with the left of the screen.
    Left,
    /// Center the content horizontally.
    #[default]
    Center,
    /// Align the content's right edge with the right of the screen.
    Right,
}

impl VerticalAlign {
    /// Offset along the vertical axis for content of `extent` in a screen of `available`.
    #[must_use]
    pub fn offset(self, available: f64, extent: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Middle => (available - extent) / 2.0,
            Self::Bottom => available - extent,
        }
    }
}

impl HorizontalAlign {
    /// Offset along the horizontal axis for content of `extent` in a screen of `available`.
    #[must_use]
    pub fn offset(self, available: f64, extent: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => (available - extent) / 2.0,
            Self::Right => available - extent,
        }
    }
}
