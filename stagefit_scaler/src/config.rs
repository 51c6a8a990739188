// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::bounds::ScaleBounds;
use crate::mask::MaskPolicy;
use crate::modes::{HorizontalAlign, ScaleMode, VerticalAlign};

/// Settings that control how content is fitted to the screen.
///
/// The default is `ShowAll`, centered on both axes, unbounded, with masking
/// disabled. With the `serde` feature, missing fields fall back to these
/// defaults when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScalerConfig {
    /// Scale policy.
    pub scale_mode: ScaleMode,
    /// Vertical placement.
    pub vertical_align: VerticalAlign,
    /// Horizontal placement.
    pub horizontal_align: HorizontalAlign,
    /// Limits applied after the scale mode.
    pub bounds: ScaleBounds,
    /// Letterbox masking.
    pub mask: MaskPolicy,
}

impl ScalerConfig {
    /// Sets the scale mode.
    #[must_use]
    pub fn with_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    /// Sets both alignments.
    #[must_use]
    pub fn with_align(mut self, vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        self.vertical_align = vertical;
        self.horizontal_align = horizontal;
        self
    }

    /// Sets the scale bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: ScaleBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Enables or disables the letterbox mask.
    #[must_use]
    pub fn with_mask_enabled(mut self, enabled: bool) -> Self {
        self.mask.enabled = enabled;
        self
    }

    /// Sets the letterbox color.
    #[must_use]
    pub fn with_mask_color(mut self, color: Color) -> Self {
        self.mask.color = color;
        self
    }
}
