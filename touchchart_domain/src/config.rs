// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::interval::Axis;

/// Error returned when gesture configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A screen dimension was zero, negative or not finite.
    NonPositiveScreen {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// A minimum zoom extent was negative or not finite.
    NegativeMinimumZoom {
        /// Axis the extent was given for.
        axis: Axis,
        /// Offending extent.
        extent: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScreen { width, height } => {
                write!(f, "screen size {width}x{height} must be positive and finite")
            }
            Self::NegativeMinimumZoom { axis, extent } => {
                write!(f, "minimum zoom {extent} on {axis:?} must be a finite, non-negative extent")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Smallest domain extent, per axis, that pinch and wheel zoom may reach.
///
/// An unset or zero extent means "no floor"; the scaling routine then uses a
/// default of one thousandth of the original domain as its minimum extent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimumZoom {
    x: Option<f64>,
    y: Option<f64>,
}

impl MinimumZoom {
    /// No floor on either axis.
    pub const NONE: Self = Self { x: None, y: None };

    /// Creates floors for both axes, validating each extent.
    pub fn new(x: Option<f64>, y: Option<f64>) -> Result<Self, ConfigError> {
        Self::NONE.with_axis(Axis::X, x)?.with_axis(Axis::Y, y)
    }

    /// Returns a copy with the floor of `axis` replaced.
    pub fn with_axis(mut self, axis: Axis, extent: Option<f64>) -> Result<Self, ConfigError> {
        if let Some(extent) = extent {
            if !extent.is_finite() || extent < 0.0 {
                return Err(ConfigError::NegativeMinimumZoom { axis, extent });
            }
        }
        match axis {
            Axis::X => self.x = extent,
            Axis::Y => self.y = extent,
        }
        Ok(self)
    }

    /// Returns the effective floor of `axis`; zero counts as unset.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Option<f64> {
        let extent = match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        };
        extent.filter(|e| *e > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, MinimumZoom};
    use crate::Axis;

    #[test]
    fn zero_extent_counts_as_unset() {
        let mz = MinimumZoom::new(Some(0.0), Some(2.0)).unwrap();
        assert_eq!(mz.axis(Axis::X), None);
        assert_eq!(mz.axis(Axis::Y), Some(2.0));
    }

    #[test]
    fn negative_extent_is_rejected() {
        let err = MinimumZoom::new(None, Some(-1.0)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativeMinimumZoom {
                axis: Axis::Y,
                extent: -1.0
            }
        );
    }
}
