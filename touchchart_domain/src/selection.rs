// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between chart domains and pixel-space selection boxes.

use crate::domain_box::DomainBox;
use crate::interval::{Axis, Dimension, Domain, Interval};
use crate::scale::Scales;

/// Projects `domain` into pixel space.
///
/// The result is not normalized: an inverted vertical range yields
/// `y1 > y2`.
#[must_use]
pub fn project_domain(scales: &Scales, domain: &Domain) -> DomainBox {
    DomainBox {
        x1: scales.x.map(domain.x.from),
        x2: scales.x.map(domain.x.to),
        y1: scales.y.map(domain.y.from),
        y2: scales.y.map(domain.y.to),
    }
}

/// Maps a pixel box back into domain units.
///
/// Each axis is sorted so that `from <= to`, and carries the value kind of its
/// scale.
#[must_use]
pub fn bounds(b: &DomainBox, scales: &Scales) -> Domain {
    let axis = |axis: Axis| {
        let scale = scales.axis(axis);
        let (p1, p2) = b.axis(axis);
        Interval::new(scale.invert(p1), scale.invert(p2))
            .normalized()
            .with_kind(scale.kind())
    };
    Domain::new(axis(Axis::X), axis(Axis::Y))
}

/// Builds the normalized pixel box of `selected`.
///
/// Axes that `dimension` excludes take their bounds from `full` instead, so a
/// one-dimensional brush always spans the full extent of the other axis.
#[must_use]
pub fn domain_box(
    dimension: Dimension,
    scales: &Scales,
    full: &Domain,
    selected: &Domain,
) -> DomainBox {
    let full = project_domain(scales, full).normalized();
    let selected = project_domain(scales, selected).normalized();
    let (x1, x2) = if dimension.includes(Axis::X) {
        (selected.x1, selected.x2)
    } else {
        (full.x1, full.x2)
    };
    let (y1, y2) = if dimension.includes(Axis::Y) {
        (selected.y1, selected.y2)
    } else {
        (full.y1, full.y2)
    };
    DomainBox { x1, x2, y1, y2 }
}

#[cfg(test)]
mod tests {
    use super::{bounds, domain_box, project_domain};
    use crate::{Dimension, Domain, DomainBox, Interval, LinearScale, Scales, ValueKind};

    fn scales() -> Scales {
        Scales::new(
            LinearScale::new(Interval::new(0.0, 10.0), (0.0, 100.0)),
            LinearScale::new(Interval::new(0.0, 10.0), (100.0, 0.0)),
        )
    }

    fn full() -> Domain {
        Domain::new(Interval::new(0.0, 10.0), Interval::new(0.0, 10.0))
    }

    #[test]
    fn project_keeps_orientation() {
        let b = project_domain(&scales(), &full());
        assert_eq!(
            b,
            DomainBox {
                x1: 0.0,
                x2: 100.0,
                y1: 100.0,
                y2: 0.0
            }
        );
    }

    #[test]
    fn bounds_sorts_each_axis() {
        let b = DomainBox {
            x1: 70.0,
            x2: 20.0,
            y1: 10.0,
            y2: 60.0,
        };
        let d = bounds(&b, &scales());
        assert_eq!(d.x, Interval::new(2.0, 7.0));
        assert_eq!(d.y, Interval::new(4.0, 9.0));
    }

    #[test]
    fn bounds_carries_date_kind() {
        let s = Scales::new(
            LinearScale::new(Interval::dates(0.0, 1000.0), (0.0, 100.0)),
            scales().y,
        );
        let d = bounds(&DomainBox::default(), &s);
        assert_eq!(d.x.kind, ValueKind::Date);
        assert_eq!(d.y.kind, ValueKind::Number);
    }

    #[test]
    fn restricted_axis_uses_full_bounds() {
        let selected = Domain::new(Interval::new(2.0, 4.0), Interval::new(5.0, 6.0));
        let b = domain_box(Dimension::X, &scales(), &full(), &selected);
        assert_eq!(
            b,
            DomainBox {
                x1: 20.0,
                x2: 40.0,
                y1: 0.0,
                y2: 100.0
            }
        );
        let b = domain_box(Dimension::Both, &scales(), &full(), &selected);
        assert_eq!((b.y1, b.y2), (40.0, 50.0));
    }
}
