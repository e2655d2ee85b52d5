// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Kind of value an interval's endpoints carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Plain numbers.
    #[default]
    Number,
    /// Dates, stored as milliseconds since the Unix epoch.
    Date,
}

/// A continuous interval over one chart axis.
///
/// Endpoints are kept exactly as set: an interval may be inverted while a
/// gesture is in flight. Use [`Interval::normalized`] for `from <= to`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// First endpoint.
    pub from: f64,
    /// Second endpoint.
    pub to: f64,
    /// Whether the endpoints are numbers or dates.
    pub kind: ValueKind,
}

impl Interval {
    /// Creates a numeric interval.
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            kind: ValueKind::Number,
        }
    }

    /// Creates a date interval from epoch milliseconds.
    #[must_use]
    pub const fn dates(from_ms: f64, to_ms: f64) -> Self {
        Self {
            from: from_ms,
            to: to_ms,
            kind: ValueKind::Date,
        }
    }

    /// Returns the same endpoints tagged with `kind`.
    #[must_use]
    pub const fn with_kind(self, kind: ValueKind) -> Self {
        Self { kind, ..self }
    }

    /// Returns `true` when the endpoints are dates.
    #[must_use]
    pub fn is_date(&self) -> bool {
        self.kind == ValueKind::Date
    }

    /// Absolute width of the interval.
    #[must_use]
    pub fn range(&self) -> f64 {
        (self.to - self.from).abs()
    }

    /// Smaller endpoint.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.from.min(self.to)
    }

    /// Larger endpoint.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.from.max(self.to)
    }

    /// Returns the interval with `from <= to`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            from: self.min(),
            to: self.max(),
            kind: self.kind,
        }
    }
}

/// One of the two chart axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// Restricts a gesture to one axis, or lets it act on both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Both axes respond.
    #[default]
    Both,
    /// Only the horizontal axis responds.
    X,
    /// Only the vertical axis responds.
    Y,
}

impl Dimension {
    /// Returns `true` if gestures under this restriction touch `axis`.
    #[must_use]
    pub fn includes(self, axis: Axis) -> bool {
        !matches!((self, axis), (Self::X, Axis::Y) | (Self::Y, Axis::X))
    }
}

/// A pair of intervals, one per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Horizontal interval.
    pub x: Interval,
    /// Vertical interval.
    pub y: Interval,
}

impl Domain {
    /// Creates a domain from its two intervals.
    #[must_use]
    pub const fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Returns the interval of `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns a copy with the interval of `axis` replaced.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis, interval: Interval) -> Self {
        match axis {
            Axis::X => self.x = interval,
            Axis::Y => self.y = interval,
        }
        self
    }
}
