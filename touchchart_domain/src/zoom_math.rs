// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale and pan math shared by wheel, pinch and drag zoom gestures.
//!
//! All functions work on one axis at a time. Callers decide which axes a
//! gesture touches (see [`Dimension`](crate::Dimension)) and call these per
//! axis.
//!
//! ## Scaling an interval
//!
//! ```
//! use touchchart_domain::Interval;
//! use touchchart_domain::zoom_math::scale_interval;
//!
//! let original = Interval::new(0.0, 100.0);
//! let current = Interval::new(0.0, 100.0);
//!
//! // Zoom in by half around the middle.
//! let zoomed = scale_interval(current, original, 0.5, 0.5, None);
//! assert_eq!((zoomed.from, zoomed.to), (25.0, 75.0));
//!
//! // Zooming out past the original bounds falls back to them.
//! let out = scale_interval(zoomed, original, 4.0, 0.5, None);
//! assert_eq!((out.from, out.to), (0.0, 100.0));
//! ```

use crate::interval::{Domain, Interval, ValueKind};
use crate::scale::LinearScale;

/// Wheel deltas are divided by this before becoming a zoom step.
pub const WHEEL_DELTA_DIVISOR: f64 = 300.0;

/// Largest zoom step a single wheel event may produce.
pub const MAX_WHEEL_STEP: f64 = 0.5;

/// Default minimum extent is the original extent divided by this.
pub const DEFAULT_MINIMUM_EXTENT_DIVISOR: f64 = 1000.0;

/// Zoom factor for a wheel delta; positive deltas zoom out.
#[must_use]
pub fn wheel_scale_factor(delta_y: f64) -> f64 {
    let sign = if delta_y > 0.0 { 1.0 } else { -1.0 };
    let delta = (delta_y / WHEEL_DELTA_DIVISOR).abs().min(MAX_WHEEL_STEP);
    (1.0 + sign * delta).abs()
}

/// Fraction of `original` lying before the pixel `position`.
///
/// The pixel is inverted through `scale` re-targeted at `original`, so the
/// pivot stays anchored to the unzoomed chart. A degenerate `original` yields
/// `0.0`.
#[must_use]
pub fn scale_percent(position: f64, scale: &LinearScale, original: Interval) -> f64 {
    let span = original.to - original.from;
    if span == 0.0 {
        return 0.0;
    }
    let value = scale.with_domain(original).invert(position);
    (value - original.from) / span
}

/// Scales `current` by `factor`, keeping the point at `percent` in place.
#[must_use]
pub fn scaled_domain(current: Interval, factor: f64, percent: f64) -> (f64, f64) {
    let range = current.range();
    let diff = range - range * factor;
    let new_min = current.from + diff * percent;
    (new_min, new_min + range * factor)
}

/// The smallest interval zooming may produce, centred on `point`.
///
/// `minimum_zoom` overrides the default extent of one thousandth of the
/// original interval.
#[must_use]
pub fn minimum_domain(point: f64, original: Interval, minimum_zoom: Option<f64>) -> (f64, f64) {
    let default_extent = original.range() / DEFAULT_MINIMUM_EXTENT_DIVISOR;
    let extent = minimum_zoom.unwrap_or(default_extent);
    (point - extent / 2.0, point + extent / 2.0)
}

/// Scales one axis interval, honoring the zoom floor and the original bounds.
///
/// - If `minimum_zoom` is set, `current` is already at or below it and
///   `factor < 1`, `current` is returned unchanged.
/// - Each scaled bound that leaves `original` falls back to the matching
///   bound of `original`.
/// - If the result would be narrower than the minimum extent, the minimum
///   interval around the pivot is returned instead.
/// - The result is date-valued when `original` is.
#[must_use]
pub fn scale_interval(
    current: Interval,
    original: Interval,
    factor: f64,
    percent: f64,
    minimum_zoom: Option<f64>,
) -> Interval {
    let range = current.range();
    if let Some(floor) = minimum_zoom {
        if range <= floor && factor < 1.0 {
            return current;
        }
    }
    let (from_bound, to_bound) = (original.from, original.to);
    let point = factor * current.from + percent * (factor * range);
    let (min_from, min_to) = minimum_domain(point, original, minimum_zoom);
    let (new_min, new_max) = scaled_domain(current, factor, percent);
    let from = if new_min > from_bound && new_min < to_bound {
        new_min
    } else {
        from_bound
    };
    let to = if new_max < to_bound && new_max > from_bound {
        new_max
    } else {
        to_bound
    };
    let (from, to) = if (min_to - min_from).abs() > (to - from).abs() {
        (min_from, min_to)
    } else {
        (from, to)
    };
    let kind = if original.is_date() {
        ValueKind::Date
    } else {
        ValueKind::Number
    };
    Interval { from, to, kind }
}

/// Pans `current` by `delta` domain units without leaving `original`.
///
/// A pan that would cross a bound of `original` pins the interval to that
/// bound, preserving its width.
#[must_use]
pub fn pan_interval(current: Interval, original: Interval, delta: f64) -> Interval {
    let lower = current.from + delta;
    let upper = current.to + delta;
    let width = current.to - current.from;
    let (from, to) = if lower > original.from && upper < original.to {
        (lower, upper)
    } else if lower < original.from {
        (original.from, original.from + width)
    } else if upper > original.to {
        (original.to - width, original.to)
    } else {
        (current.from, current.to)
    };
    let kind = if current.is_date() || original.is_date() {
        ValueKind::Date
    } else {
        ValueKind::Number
    };
    Interval { from, to, kind }
}

/// Pixels per domain unit for `interval` drawn across `scale`'s range.
#[must_use]
pub fn domain_scale(interval: Interval, scale: &LinearScale) -> f64 {
    scale.range_extent() / (interval.to - interval.from)
}

/// The domain a zoom gesture should continue from.
///
/// A `zoom_domain` that differs from the one cached when the gesture last ran
/// was reset from outside and wins. Otherwise the gesture continues from its
/// own `current` domain, then from `zoom_domain`, then from `original`.
#[must_use]
pub fn last_domain(
    zoom_domain: Option<&Domain>,
    cached_zoom_domain: Option<&Domain>,
    current: Option<&Domain>,
    original: &Domain,
) -> Domain {
    if let Some(zoom) = zoom_domain {
        if Some(zoom) != cached_zoom_domain {
            return *zoom;
        }
    }
    current.or(zoom_domain).copied().unwrap_or(*original)
}
