// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

use crate::bounds::ScaleBounds;
use crate::config::ScalerConfig;
use crate::error::ScaleError;
use crate::fit::{ContentLayout, layout, validate_size};
use crate::mask::Mask;
use crate::modes::{HorizontalAlign, ScaleMode, VerticalAlign};

/// Keeps content with a fixed logical size fitted to a screen.
///
/// `ContentScaler` stores a content size, a screen size and a
/// [`ScalerConfig`], and recomputes its [`ContentLayout`] whenever any of
/// them changes. Setters that take sizes or bounds validate their input and
/// leave the scaler untouched on error.
#[derive(Clone, Debug)]
pub struct ContentScaler {
    content_size: Size,
    screen_size: Size,
    config: ScalerConfig,
    layout: ContentLayout,
    content_to_screen: Affine,
    screen_to_content: Affine,
}

impl Default for ContentScaler {
    /// A 100x100 content on a 100x100 screen with the default configuration.
    fn default() -> Self {
        let size = Size::new(100.0, 100.0);
        Self::from_parts(size, size, ScalerConfig::default())
    }
}

impl ContentScaler {
    /// Creates a scaler for content of the given logical size.
    ///
    /// The screen starts out as 100x100; call [`Self::set_screen_size`] once
    /// the real size is known.
    pub fn new(content_size: Size) -> Result<Self, ScaleError> {
        let mut scaler = Self::default();
        scaler.set_content_size(content_size)?;
        Ok(scaler)
    }

    /// Creates a scaler with explicit sizes and configuration.
    pub fn with_config(
        content_size: Size,
        screen_size: Size,
        config: ScalerConfig,
    ) -> Result<Self, ScaleError> {
        let content_size = validate_size(content_size)?;
        let screen_size = validate_size(screen_size)?;
        Ok(Self::from_parts(content_size, screen_size, config))
    }

    fn from_parts(content_size: Size, screen_size: Size, config: ScalerConfig) -> Self {
        let mut scaler = Self {
            content_size,
            screen_size,
            config,
            layout: layout(content_size, screen_size, &config),
            content_to_screen: Affine::IDENTITY,
            screen_to_content: Affine::IDENTITY,
        };
        scaler.rebuild_transforms();
        scaler
    }

    /// Returns the logical content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Sets the logical content size.
    pub fn set_content_size(&mut self, size: Size) -> Result<(), ScaleError> {
        let size = validate_size(size)?;
        if self.content_size != size {
            self.content_size = size;
            self.update();
        }
        Ok(())
    }

    /// Returns the screen size.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Sets the actual screen size.
    pub fn set_screen_size(&mut self, size: Size) -> Result<(), ScaleError> {
        let size = validate_size(size)?;
        if self.screen_size != size {
            self.screen_size = size;
            self.update();
        }
        Ok(())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: ScalerConfig) {
        if self.config != config {
            self.config = config;
            self.update();
        }
    }

    /// Returns the scale mode.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.config.scale_mode
    }

    /// Sets the scale mode.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.set_config(self.config.with_scale_mode(mode));
    }

    /// Returns the vertical alignment.
    #[must_use]
    pub fn vertical_align(&self) -> VerticalAlign {
        self.config.vertical_align
    }

    /// Sets how the content is aligned vertically on the screen.
    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        self.set_config(ScalerConfig {
            vertical_align: align,
            ..self.config
        });
    }

    /// Returns the horizontal alignment.
    #[must_use]
    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.config.horizontal_align
    }

    /// Sets how the content is aligned horizontally on the screen.
    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        self.set_config(ScalerConfig {
            horizontal_align: align,
            ..self.config
        });
    }

    /// Returns the scale bounds.
    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.config.bounds
    }

    /// Replaces both scale limits.
    pub fn set_bounds(&mut self, bounds: ScaleBounds) {
        self.set_config(self.config.with_bounds(bounds));
    }

    /// Sets the lower scale limit.
    ///
    /// Fails if the new limit is invalid or exceeds the current upper limit.
    pub fn set_min_scale(&mut self, min: Option<f64>) -> Result<(), ScaleError> {
        let bounds = self.config.bounds.with_min(min)?;
        self.set_bounds(bounds);
        Ok(())
    }

    /// Sets the upper scale limit.
    ///
    /// Fails if the new limit is invalid or is below the current lower limit.
    pub fn set_max_scale(&mut self, max: Option<f64>) -> Result<(), ScaleError> {
        let bounds = self.config.bounds.with_max(max)?;
        self.set_bounds(bounds);
        Ok(())
    }

    /// Returns whether the area outside the content is masked.
    #[must_use]
    pub fn mask_enabled(&self) -> bool {
        self.config.mask.enabled
    }

    /// Enables or disables masking of the area outside the content.
    pub fn set_mask_enabled(&mut self, enabled: bool) {
        self.set_config(self.config.with_mask_enabled(enabled));
    }

    /// Sets the letterbox fill color.
    pub fn set_mask_color(&mut self, color: Color) {
        self.set_config(self.config.with_mask_color(color));
    }

    /// Returns the last computed layout.
    #[must_use]
    pub fn layout(&self) -> &ContentLayout {
        &self.layout
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.layout.scale
    }

    /// Returns the scaled content rectangle in screen coordinates.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.layout.content_rect
    }

    /// Returns the visible part of the content, in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.layout.visible_rect
    }

    /// Returns the letterbox mask, if masking is enabled.
    #[must_use]
    pub fn mask(&self) -> Option<&Mask> {
        self.layout.mask.as_ref()
    }

    /// Returns the transform from content into screen coordinates.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        self.content_to_screen
    }

    /// Converts a content-space point into screen coordinates.
    #[must_use]
    pub fn content_to_screen_point(&self, pt: Point) -> Point {
        self.content_to_screen * pt
    }

    /// Converts a screen-space point into content coordinates.
    ///
    /// Useful for hit testing pointer input against the logical scene.
    #[must_use]
    pub fn screen_to_content_point(&self, pt: Point) -> Point {
        self.screen_to_content * pt
    }

    /// Snapshot of the current scaler state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ContentScalerDebugInfo {
        ContentScalerDebugInfo {
            content_size: self.content_size,
            screen_size: self.screen_size,
            scale: self.layout.scale,
            content_rect: self.layout.content_rect,
            visible_rect: self.layout.visible_rect,
            mask_band_count: self.layout.mask.as_ref().map_or(0, |m| m.rects.len()),
            config: self.config,
        }
    }

    fn update(&mut self) {
        self.layout = layout(self.content_size, self.screen_size, &self.config);
        self.rebuild_transforms();
    }

    fn rebuild_transforms(&mut self) {
        self.content_to_screen = self.layout.content_transform();
        self.screen_to_content = self.content_to_screen.inverse();
    }
}

/// Debug snapshot of a [`ContentScaler`] state.
#[derive(Clone, Copy, Debug)]
pub struct ContentScalerDebugInfo {
    /// Logical content size.
    pub content_size: Size,
    /// Screen size.
    pub screen_size: Size,
    /// Current scale factor.
    pub scale: f64,
    /// Content rectangle in screen coordinates.
    pub content_rect: Rect,
    /// Visible content rectangle in content coordinates.
    pub visible_rect: Rect,
    /// Number of letterbox bands (zero when masking is disabled).
    pub mask_band_count: usize,
    /// Active configuration.
    pub config: ScalerConfig,
}
