// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use peniko::Color;
use smallvec::SmallVec;

/// Up to four letterbox bands.
pub type MaskRects = SmallVec<[Rect; 4]>;

/// Whether the screen outside the content should be covered, and with what color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskPolicy {
    /// Cover the area outside the content rectangle.
    pub enabled: bool,
    /// Fill color for the bands.
    pub color: Color,
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::BLACK,
        }
    }
}

impl MaskPolicy {
    /// An enabled mask with the given fill color.
    #[must_use]
    pub fn enabled(color: Color) -> Self {
        Self {
            enabled: true,
            color,
        }
    }
}

/// Letterbox bands to fill on top of the content.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    /// Fill color.
    pub color: Color,
    /// Bands in screen coordinates: top, left, right, bottom (empty ones omitted).
    pub rects: MaskRects,
}

impl Mask {
    /// Computes the mask for `content_rect` on `screen`, or `None` when `policy` is disabled.
    #[must_use]
    pub fn compute(policy: &MaskPolicy, screen: Size, content_rect: Rect) -> Option<Self> {
        policy.enabled.then(|| Self {
            color: policy.color,
            rects: mask_rects(screen, content_rect),
        })
    }

    /// Returns `true` if there is nothing to fill.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Computes the bands covering `screen` minus `content_rect`.
///
/// Bands are produced in the order top, left, right, bottom. The left and
/// right bands span the full screen height, so they overlap the top and bottom
/// bands at the corners; this is harmless for an opaque fill. Each band is
/// clipped to the screen and bands without area are dropped, so content that
/// overflows an edge yields no band for that edge.
#[must_use]
pub fn mask_rects(screen: Size, content_rect: Rect) -> MaskRects {
    let screen_rect = screen.to_rect();
    let x = content_rect.min_x();
    let y = content_rect.min_y();
    let right = content_rect.max_x();
    let bottom = content_rect.max_y();

    let bands = [
        Rect::from_origin_size((0.0, 0.0), (screen.width, y)),
        Rect::from_origin_size((0.0, 0.0), (x, screen.height)),
        Rect::from_origin_size((right, 0.0), (screen.width - right, screen.height)),
        Rect::from_origin_size((0.0, bottom), (screen.width, screen.height - bottom)),
    ];

    bands
        .into_iter()
        // `from_origin_size` normalizes negative sizes, so drop inverted bands first.
        .zip([y > 0.0, x > 0.0, right < screen.width, bottom < screen.height])
        .filter(|(_, present)| *present)
        .map(|(band, _)| band.intersect(screen_rect))
        .filter(|band| band.area() > 0.0)
        .collect()
}
