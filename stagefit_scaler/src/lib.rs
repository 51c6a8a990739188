// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagefit_scaler --heading-base-level=0

//! Stagefit Scaler: fit fixed-size logical content into a variable screen.
//!
//! Given the logical size of a scene and the current size of the screen (or
//! window, or canvas), this crate computes:
//! - A uniform scale factor, according to a [`ScaleMode`] (contain, cover, or
//!   unscaled) and optional [`ScaleBounds`].
//! - The placement of the scaled content, according to a [`VerticalAlign`] and
//!   a [`HorizontalAlign`].
//! - The part of the logical content that is actually visible.
//! - Optional letterbox bands covering the screen outside the content.
//!
//! It does **not** own a renderer or a window. Callers are expected to:
//! - Obtain the screen size from their windowing or display system.
//! - Recompute on resize (or once per frame).
//! - Apply [`ContentLayout::content_transform`] to their scene and fill the
//!   [`Mask`] bands with their painting backend.
//!
//! ## Pure functions
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use stagefit_scaler::{HorizontalAlign, ScaleMode, VerticalAlign, compute_scale, place};
//!
//! let content = Size::new(200.0, 100.0);
//! let screen = Size::new(400.0, 100.0);
//!
//! let scale = compute_scale(content, screen, ScaleMode::ShowAll);
//! assert_eq!(scale, 1.0);
//!
//! let rect = place(content, screen, scale, VerticalAlign::Middle, HorizontalAlign::Center);
//! assert_eq!(rect, Rect::new(100.0, 0.0, 300.0, 100.0));
//! ```
//!
//! ## Stateful scaler
//!
//! [`ContentScaler`] keeps the sizes and a [`ScalerConfig`] together and
//! recomputes whenever one of them changes:
//!
//! ```rust
//! use kurbo::Size;
//! use stagefit_scaler::{ContentScaler, ScaleMode};
//!
//! let mut scaler = ContentScaler::new(Size::new(200.0, 100.0))?;
//! scaler.set_screen_size(Size::new(400.0, 100.0))?;
//! scaler.set_scale_mode(ScaleMode::NoBorder);
//! scaler.set_mask_enabled(true);
//!
//! assert_eq!(scaler.scale(), 2.0);
//! // Cover mode overflows vertically, so there is nothing to mask.
//! assert!(scaler.mask().is_some_and(|m| m.is_empty()));
//! # Ok::<(), stagefit_scaler::ScaleError>(())
//! ```
//!
//! ## Design notes
//!
//! - Scaling is always uniform.
//! - The content rectangle is never clamped to the screen; under
//!   [`ScaleMode::NoBorder`] or explicit bounds it may overflow.
//! - Mask bands overlap at the corners, which is fine for an opaque fill.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod error;
mod fit;
mod mask;
mod modes;
mod scaler;

pub use bounds::ScaleBounds;
pub use config::ScalerConfig;
pub use error::ScaleError;
pub use fit::{
    ContentLayout, clamp_scale, compute_scale, layout, place, validate_size, visible_logical_rect,
};
pub use mask::{Mask, MaskPolicy, MaskRects, mask_rects};
pub use modes::{HorizontalAlign, ScaleMode, VerticalAlign};
pub use scaler::{ContentScaler, ContentScalerDebugInfo};
