// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use stagefit_scaler::ScaleError;

/// Error returned by [`crate::App`] operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppError {
    /// [`crate::App::attach`] was called on an app that already has a surface.
    AlreadyAttached,
    /// A frame was requested before a surface was attached.
    NotAttached,
    /// An application size, screen size, or scale bound was rejected.
    Scale(ScaleError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAttached => f.write_str("app is already attached to a surface"),
            Self::NotAttached => f.write_str("app is not attached to a surface"),
            Self::Scale(err) => write!(f, "scaling configuration rejected: {err}"),
        }
    }
}

impl core::error::Error for AppError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Scale(err) => Some(err),
            Self::AlreadyAttached | Self::NotAttached => None,
        }
    }
}

impl From<ScaleError> for AppError {
    fn from(err: ScaleError) -> Self {
        Self::Scale(err)
    }
}
