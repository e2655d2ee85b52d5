// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::interval::{Axis, Interval, ValueKind};

/// Affine mapping between one axis' domain and its pixel range.
///
/// The range is kept exactly as given, so a vertical axis is usually built
/// with an inverted range (`(height, 0.0)`) to put larger values at the top.
/// A degenerate domain maps every value to the middle of the range, and a
/// degenerate range inverts every pixel to the middle of the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: Interval,
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`.
    #[must_use]
    pub const fn new(domain: Interval, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the domain interval.
    #[must_use]
    pub fn domain(&self) -> Interval {
        self.domain
    }

    /// Returns the pixel range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the same range over a different domain.
    #[must_use]
    pub fn with_domain(&self, domain: Interval) -> Self {
        Self {
            domain,
            range: self.range,
        }
    }

    /// Absolute pixel length of the range.
    #[must_use]
    pub fn range_extent(&self) -> f64 {
        (self.range.0 - self.range.1).abs()
    }

    /// Maps a domain value to pixels.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        let span = self.domain.to - self.domain.from;
        if span == 0.0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - self.domain.from) * (r1 - r0) / span
    }

    /// Maps a pixel coordinate back to a domain value.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> f64 {
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (self.domain.from + self.domain.to) * 0.5;
        }
        self.domain.from + (pixel - r0) * (self.domain.to - self.domain.from) / span
    }

    /// Kind of the values this scale produces when inverting.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.domain.kind
    }
}

/// The horizontal and vertical scales of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    /// Horizontal scale.
    pub x: LinearScale,
    /// Vertical scale.
    pub y: LinearScale,
}

impl Scales {
    /// Bundles two axis scales.
    #[must_use]
    pub const fn new(x: LinearScale, y: LinearScale) -> Self {
        Self { x, y }
    }

    /// Returns the scale of `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &LinearScale {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}
