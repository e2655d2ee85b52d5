// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use touchchart_domain::ConfigError;

/// Window dimensions used to normalise pinch distances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    size: Size,
}

impl ScreenMetrics {
    /// Validates a window size in pixels.
    ///
    /// Both dimensions must be finite and strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::NonPositiveScreen { width, height });
        }
        Ok(Self {
            size: Size::new(width, height),
        })
    }

    /// Window size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Length of the window diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        Vec2::new(self.size.width, self.size.height).hypot()
    }
}

impl TryFrom<Size> for ScreenMetrics {
    type Error = ConfigError;

    fn try_from(size: Size) -> Result<Self, Self::Error> {
        Self::new(size.width, size.height)
    }
}
