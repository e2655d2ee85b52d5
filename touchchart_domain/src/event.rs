// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

/// Active touch points of an event, in chart-local coordinates.
///
/// Two points are stored inline; that covers every gesture the engines read.
pub type Touches = SmallVec<[Point; 2]>;

/// A touch start/move/end event delivered by the host.
///
/// `location` is the event's primary point in chart-local coordinates; it is
/// what single-touch handlers and pinch pivots read. `touches` lists every
/// active touch point.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Primary location in chart-local coordinates.
    pub location: Point,
    /// All active touch points.
    pub touches: Touches,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: u64,
    default_prevented: bool,
}

impl TouchEvent {
    /// Single-touch event at `location`.
    #[must_use]
    pub fn new(location: Point, timestamp_ms: u64) -> Self {
        let mut touches = Touches::new();
        touches.push(location);
        Self {
            location,
            touches,
            timestamp_ms,
            default_prevented: false,
        }
    }

    /// Multi-touch event; the primary location is the first touch.
    ///
    /// An empty iterator yields an event at the origin with no touches.
    #[must_use]
    pub fn with_touches(touches: impl IntoIterator<Item = Point>, timestamp_ms: u64) -> Self {
        let touches: Touches = touches.into_iter().collect();
        Self {
            location: touches.first().copied().unwrap_or(Point::ORIGIN),
            touches,
            timestamp_ms,
            default_prevented: false,
        }
    }

    /// Suppresses the platform's default handling of this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` once [`TouchEvent::prevent_default`] has been called.
    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Number of active touches.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Distance between the first two touches, if there are two.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        match self.touches.as_slice() {
            [a, b, ..] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

/// A scroll-wheel style zoom request.
///
/// Positive `delta_y` zooms out, negative zooms in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pivot location in chart-local coordinates.
    pub location: Point,
    /// Vertical wheel delta in pixels.
    pub delta_y: f64,
}
