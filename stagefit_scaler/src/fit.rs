// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure content fit computations.
//!
//! Every function here is a stateless function of its arguments. Sizes are
//! expected to have been checked with [`validate_size`] first; the functions
//! themselves do not re-validate.

use kurbo::{Affine, Point, Rect, Size};

use crate::bounds::ScaleBounds;
use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::mask::Mask;
use crate::modes::{HorizontalAlign, ScaleMode, VerticalAlign};

/// Checks that both dimensions of `size` are finite and strictly positive.
pub fn validate_size(size: Size) -> Result<Size, ScaleError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(size)
    } else {
        Err(ScaleError::InvalidSize {
            width: size.width,
            height: size.height,
        })
    }
}

/// Computes the uniform scale mapping `content` onto `screen` under `mode`.
#[must_use]
pub fn compute_scale(content: Size, screen: Size, mode: ScaleMode) -> f64 {
    let sx = screen.width / content.width;
    let sy = screen.height / content.height;
    match mode {
        ScaleMode::ShowAll => sx.min(sy),
        ScaleMode::NoBorder => sx.max(sy),
        ScaleMode::NoScale => 1.0,
    }
}

/// Applies `bounds` to `scale`.
///
/// The lower limit is checked first; since `ScaleBounds` guarantees
/// `min <= max`, at most one limit ever applies.
#[must_use]
pub fn clamp_scale(scale: f64, bounds: ScaleBounds) -> f64 {
    match (bounds.min(), bounds.max()) {
        (Some(min), _) if scale < min => min,
        (_, Some(max)) if scale > max => max,
        _ => scale,
    }
}

/// Places `content` scaled by `scale` on `screen` according to the alignment.
///
/// The returned rectangle is in screen coordinates and is not clamped: it
/// lies partly off-screen whenever the scaled content is larger than the
/// screen on an axis.
#[must_use]
pub fn place(
    content: Size,
    screen: Size,
    scale: f64,
    v_align: VerticalAlign,
    h_align: HorizontalAlign,
) -> Rect {
    let scaled = content * scale;
    let x = h_align.offset(screen.width, scaled.width);
    let y = v_align.offset(screen.height, scaled.height);
    Rect::from_origin_size((x, y), scaled)
}

/// Maps the whole screen back into content coordinates.
///
/// The result tells which part of the logical content is visible; under
/// [`ScaleMode::NoBorder`] it is a sub-rectangle of the content, under
/// [`ScaleMode::ShowAll`] it extends past the content into the letterbox.
#[must_use]
pub fn visible_logical_rect(screen: Size, content_rect: Rect, scale: f64) -> Rect {
    let origin = Point::new(-content_rect.min_x() / scale, -content_rect.min_y() / scale);
    Rect::from_origin_size(origin, screen / scale)
}

/// The result of fitting content to a screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentLayout {
    /// Uniform scale factor after bounds were applied.
    pub scale: f64,
    /// Scaled and aligned content in screen coordinates.
    pub content_rect: Rect,
    /// Portion of the content visible on screen, in content coordinates.
    pub visible_rect: Rect,
    /// Letterbox bands, when masking is enabled.
    pub mask: Option<Mask>,
}

impl ContentLayout {
    /// Transform from content coordinates into screen coordinates.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        Affine::translate(self.content_rect.origin().to_vec2()) * Affine::scale(self.scale)
    }
}

/// Runs the full computation: scale, clamp, place, visible rect and mask.
#[must_use]
pub fn layout(content: Size, screen: Size, config: &ScalerConfig) -> ContentLayout {
    let scale = clamp_scale(
        compute_scale(content, screen, config.scale_mode),
        config.bounds,
    );
    let content_rect = place(
        content,
        screen,
        scale,
        config.vertical_align,
        config.horizontal_align,
    );
    ContentLayout {
        scale,
        content_rect,
        visible_rect: visible_logical_rect(screen, content_rect, scale),
        mask: Mask::compute(&config.mask, screen, content_rect),
    }
}
