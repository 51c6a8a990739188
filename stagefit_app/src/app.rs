// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use log::{debug, info, trace};
use peniko::Color;
use stagefit_scaler::{
    ContentScaler, HorizontalAlign, ScaleMode, ScalerConfig, VerticalAlign, validate_size,
};

use crate::error::AppError;
use crate::surface::{Frame, Surface};

/// What [`App::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// The frame was rendered with the existing layout.
    Rendered,
    /// A pending resize was applied, then the frame was rendered.
    Resized,
    /// The surface reported an empty size; nothing was rendered and the
    /// resize stays pending.
    Skipped,
}

/// Drives a fixed-size logical application on a resizable [`Surface`].
///
/// The app owns the logical application size and a [`ContentScaler`]. It
/// attaches to one surface, is told about resizes through
/// [`App::on_resize`], and applies them lazily on the next call to
/// [`App::frame`], so any number of resize notifications between two frames
/// cost one recompute.
#[derive(Debug)]
pub struct App<S> {
    application_size: Size,
    scaler: ContentScaler,
    surface: Option<S>,
    size_dirty: bool,
    frames_rendered: u64,
}

impl<S: Surface> App<S> {
    /// Creates an unattached app with the given logical size.
    pub fn new(application_size: Size) -> Result<Self, AppError> {
        Self::with_config(application_size, ScalerConfig::default())
    }

    /// Creates an unattached app with the given logical size and scaler settings.
    pub fn with_config(application_size: Size, config: ScalerConfig) -> Result<Self, AppError> {
        let mut scaler = ContentScaler::new(application_size)?;
        scaler.set_config(config);
        Ok(Self {
            application_size,
            scaler,
            surface: None,
            size_dirty: false,
            frames_rendered: 0,
        })
    }

    /// Attaches to `surface`, fits the content to its size, and renders a first frame.
    ///
    /// An app can be attached only once.
    pub fn attach(&mut self, mut surface: S) -> Result<(), AppError> {
        if self.surface.is_some() {
            return Err(AppError::AlreadyAttached);
        }
        let screen = validate_size(surface.size())?;
        info!(
            "attaching to surface, w={} h={}",
            screen.width, screen.height
        );

        self.scaler.set_content_size(self.application_size)?;
        self.scaler.set_screen_size(screen)?;
        surface.resize(screen);
        Self::render(&mut surface, &self.scaler, 0.0, &mut self.frames_rendered);

        self.surface = Some(surface);
        self.size_dirty = false;
        Ok(())
    }

    /// Returns `true` once [`App::attach`] has succeeded.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns the attached surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Returns the attached surface mutably, if any.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Notes that the surface size may have changed.
    ///
    /// The new size is read and applied on the next [`App::frame`].
    pub fn on_resize(&mut self) {
        self.size_dirty = true;
    }

    /// Returns `true` if a resize is waiting for the next frame.
    #[must_use]
    pub fn is_size_dirty(&self) -> bool {
        self.size_dirty
    }

    /// Runs one frame: applies a pending resize, then renders.
    ///
    /// `time` is passed through to the surface untouched; hosts typically
    /// hand over their animation-frame timestamp.
    pub fn frame(&mut self, time: f64) -> Result<FrameStatus, AppError> {
        let Some(surface) = self.surface.as_mut() else {
            return Err(AppError::NotAttached);
        };

        let mut status = FrameStatus::Rendered;
        if self.size_dirty {
            let Ok(screen) = validate_size(surface.size()) else {
                trace!("surface has no area, skipping frame");
                return Ok(FrameStatus::Skipped);
            };
            self.scaler.set_content_size(self.application_size)?;
            self.scaler.set_screen_size(screen)?;
            surface.resize(screen);
            self.size_dirty = false;
            debug!(
                "resized to {}x{}, scale={}",
                screen.width,
                screen.height,
                self.scaler.scale()
            );
            status = FrameStatus::Resized;
        }

        Self::render(surface, &self.scaler, time, &mut self.frames_rendered);
        Ok(status)
    }

    fn render(surface: &mut S, scaler: &ContentScaler, time: f64, frames_rendered: &mut u64) {
        trace!("rendering frame {frames_rendered} at t={time}");
        surface.render(&Frame {
            time,
            index: *frames_rendered,
            screen_size: scaler.screen_size(),
            layout: scaler.layout(),
        });
        *frames_rendered += 1;
    }

    /// Returns the number of frames rendered so far, including the one rendered on attach.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Returns the logical application size.
    #[must_use]
    pub fn application_size(&self) -> Size {
        self.application_size
    }

    /// Sets the logical application size.
    ///
    /// Like a resize, the change is applied on the next frame.
    pub fn set_application_size(&mut self, size: Size) -> Result<(), AppError> {
        self.application_size = validate_size(size)?;
        self.size_dirty = true;
        Ok(())
    }

    /// Returns the scaler holding the current layout.
    #[must_use]
    pub fn scaler(&self) -> &ContentScaler {
        &self.scaler
    }

    /// Converts a surface point (for example a pointer position) into application coordinates.
    #[must_use]
    pub fn screen_to_application_point(&self, pt: Point) -> Point {
        self.scaler.screen_to_content_point(pt)
    }

    /// Returns the vertical alignment.
    #[must_use]
    pub fn vertical_align(&self) -> VerticalAlign {
        self.scaler.vertical_align()
    }

    /// Sets how the application is aligned vertically in the surface.
    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        self.scaler.set_vertical_align(align);
    }

    /// Returns the horizontal alignment.
    #[must_use]
    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.scaler.horizontal_align()
    }

    /// Sets how the application is aligned horizontally in the surface.
    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        self.scaler.set_horizontal_align(align);
    }

    /// Returns the scale mode.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scaler.scale_mode()
    }

    /// Sets how the application is scaled to fit the surface.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scaler.set_scale_mode(mode);
    }

    /// Sets the lower scale limit.
    pub fn set_min_scale(&mut self, min: Option<f64>) -> Result<(), AppError> {
        Ok(self.scaler.set_min_scale(min)?)
    }

    /// Sets the upper scale limit.
    pub fn set_max_scale(&mut self, max: Option<f64>) -> Result<(), AppError> {
        Ok(self.scaler.set_max_scale(max)?)
    }

    /// Enables or disables the letterbox mask.
    pub fn set_mask_enabled(&mut self, enabled: bool) {
        self.scaler.set_mask_enabled(enabled);
    }

    /// Sets the letterbox color.
    pub fn set_mask_color(&mut self, color: Color) {
        self.scaler.set_mask_color(color);
    }

    /// Replaces all scaler settings at once.
    pub fn set_config(&mut self, config: ScalerConfig) {
        self.scaler.set_config(config);
    }
}
