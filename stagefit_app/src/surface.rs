// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};
use stagefit_scaler::{ContentLayout, Mask};

/// A render target an [`crate::App`] can attach to.
///
/// Implementations wrap whatever the host provides: a window surface, a web
/// canvas, an offscreen buffer. The app only needs to know the current size,
/// tell the target when it should change its backing size, and hand over
/// each frame.
pub trait Surface {
    /// Current size of the area the surface occupies, in device pixels.
    ///
    /// For a surface that fills a window this is the window's inner size; for
    /// one embedded in a container it is the container's size.
    fn size(&self) -> Size;

    /// Resizes the backing store to `size`.
    ///
    /// Called on the first frame after a resize, before [`Self::render`].
    fn resize(&mut self, size: Size);

    /// Renders one frame.
    fn render(&mut self, frame: &Frame<'_>);
}

/// Everything a [`Surface`] needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Host-provided timestamp, passed through from [`crate::App::frame`].
    pub time: f64,
    /// Number of frames rendered before this one.
    pub index: u64,
    /// Screen size the layout was computed for.
    pub screen_size: Size,
    /// Current content layout.
    pub layout: &'a ContentLayout,
}

impl Frame<'_> {
    /// Transform to apply to the application's scene.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.layout.content_transform()
    }

    /// Letterbox bands to paint over the scene, if masking is enabled.
    #[must_use]
    pub fn mask(&self) -> Option<&Mask> {
        self.layout.mask.as_ref()
    }
}
