// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagefit_app --heading-base-level=0

//! Stagefit App: run a fixed-size logical application on a resizable surface.
//!
//! [`App`] owns the logical application size and a
//! [`stagefit_scaler::ContentScaler`]. A host attaches it to a [`Surface`]
//! once, forwards resize notifications to [`App::on_resize`], and calls
//! [`App::frame`] from its animation or redraw callback. Resizes are applied
//! lazily on the next frame: the scaler is recomputed, the surface is resized,
//! and then the frame is rendered with the fresh [`stagefit_scaler::ContentLayout`].
//!
//! The crate does not create windows or renderers. A `Surface` adapts whatever
//! the host has:
//!
//! ```rust
//! use kurbo::Size;
//! use stagefit_app::{App, Frame, FrameStatus, Surface};
//!
//! struct Offscreen {
//!     size: Size,
//!     last_scale: f64,
//! }
//!
//! impl Surface for Offscreen {
//!     fn size(&self) -> Size {
//!         self.size
//!     }
//!     fn resize(&mut self, _size: Size) {}
//!     fn render(&mut self, frame: &Frame<'_>) {
//!         self.last_scale = frame.layout.scale;
//!     }
//! }
//!
//! let mut app = App::new(Size::new(320.0, 240.0))?;
//! app.attach(Offscreen { size: Size::new(640.0, 480.0), last_scale: 0.0 })?;
//! assert_eq!(app.surface().map(|s| s.last_scale), Some(2.0));
//!
//! // The host window grew; the change is picked up on the next frame.
//! app.surface_mut().unwrap().size = Size::new(960.0, 720.0);
//! app.on_resize();
//! assert_eq!(app.frame(16.0)?, FrameStatus::Resized);
//! assert_eq!(app.surface().map(|s| s.last_scale), Some(3.0));
//! # Ok::<(), stagefit_app::AppError>(())
//! ```
//!
//! Diagnostics are emitted through the `log` facade.

mod app;
mod error;
mod surface;

pub use app::{App, FrameStatus};
pub use error::AppError;
pub use surface::{Frame, Surface};

pub use stagefit_scaler::{
    ContentLayout, HorizontalAlign, Mask, MaskPolicy, ScaleBounds, ScaleMode, ScalerConfig,
    VerticalAlign,
};
