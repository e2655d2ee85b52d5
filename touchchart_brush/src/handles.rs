// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use touchchart_domain::{Axis, Dimension, DomainBox};

bitflags::bitflags! {
    /// Edges of a brush selection that a resize gesture moves.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Handles: u8 {
        /// Smaller horizontal bound.
        const LEFT   = 0b0000_0001;
        /// Larger horizontal bound.
        const RIGHT  = 0b0000_0010;
        /// Smaller vertical bound.
        const TOP    = 0b0000_0100;
        /// Larger vertical bound.
        const BOTTOM = 0b0000_1000;
    }
}

impl Default for Handles {
    fn default() -> Self {
        Self::empty()
    }
}

impl Handles {
    /// The edges a freshly drawn selection drags on the active axes.
    #[must_use]
    pub fn drawing(dimension: Dimension) -> Self {
        let mut handles = Self::empty();
        if dimension.includes(Axis::X) {
            handles |= Self::RIGHT;
        }
        if dimension.includes(Axis::Y) {
            handles |= Self::BOTTOM;
        }
        handles
    }

    /// Returns `true` if an edge along `axis` is held.
    #[must_use]
    pub fn moves(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.intersects(Self::LEFT | Self::RIGHT),
            Axis::Y => self.intersects(Self::TOP | Self::BOTTOM),
        }
    }

    /// Finds the edges of `b` whose handle strip contains `pt`.
    ///
    /// Each strip is `handle_width` wide, centred on its edge and spanning the
    /// edge's length. Only edges along the active axes have handles. If a
    /// narrow box puts `pt` on both opposite strips, the larger bound wins.
    #[must_use]
    pub fn hit(pt: Point, b: &DomainBox, dimension: Dimension, handle_width: f64) -> Self {
        let r = b.to_rect();
        let half = handle_width / 2.0;
        let mut handles = Self::empty();
        if dimension.includes(Axis::X) {
            let strip = |x: f64| Rect::new(x - half, r.y0, x + half, r.y1);
            if within(strip(r.x1), pt) {
                handles |= Self::RIGHT;
            } else if within(strip(r.x0), pt) {
                handles |= Self::LEFT;
            }
        }
        if dimension.includes(Axis::Y) {
            let strip = |y: f64| Rect::new(r.x0, y - half, r.x1, y + half);
            if within(strip(r.y1), pt) {
                handles |= Self::BOTTOM;
            } else if within(strip(r.y0), pt) {
                handles |= Self::TOP;
            }
        }
        handles
    }

    /// Reorders `b` so the held edges become `x2`/`y2` and the opposite edges
    /// the fixed `x1`/`y1`.
    #[must_use]
    pub fn anchor(self, b: &DomainBox) -> DomainBox {
        let n = b.normalized();
        let (x1, x2) = if self.contains(Self::LEFT) {
            (n.x2, n.x1)
        } else {
            (n.x1, n.x2)
        };
        let (y1, y2) = if self.contains(Self::TOP) {
            (n.y2, n.y1)
        } else {
            (n.y1, n.y2)
        };
        DomainBox { x1, x2, y1, y2 }
    }
}

// Edges included; `Rect::contains` excludes the far edges.
fn within(r: Rect, pt: Point) -> bool {
    pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use touchchart_domain::{Axis, Dimension, DomainBox};

    use super::Handles;

    const B: DomainBox = DomainBox {
        x1: 20.0,
        x2: 60.0,
        y1: 10.0,
        y2: 50.0,
    };

    #[test]
    fn hit_finds_each_edge() {
        assert_eq!(
            Handles::hit(Point::new(21.0, 30.0), &B, Dimension::Both, 8.0),
            Handles::LEFT
        );
        assert_eq!(
            Handles::hit(Point::new(57.0, 30.0), &B, Dimension::Both, 8.0),
            Handles::RIGHT
        );
        assert_eq!(
            Handles::hit(Point::new(40.0, 13.0), &B, Dimension::Both, 8.0),
            Handles::TOP
        );
        assert_eq!(
            Handles::hit(Point::new(59.0, 49.0), &B, Dimension::Both, 8.0),
            Handles::RIGHT | Handles::BOTTOM
        );
        assert!(Handles::hit(Point::new(40.0, 30.0), &B, Dimension::Both, 8.0).is_empty());
    }

    #[test]
    fn hit_ignores_inactive_axis() {
        assert!(Handles::hit(Point::new(40.0, 12.0), &B, Dimension::X, 8.0).is_empty());
        assert_eq!(
            Handles::hit(Point::new(18.0, 12.0), &B, Dimension::X, 8.0),
            Handles::LEFT
        );
    }

    #[test]
    fn anchor_puts_held_edge_second() {
        let a = (Handles::LEFT | Handles::TOP).anchor(&B);
        assert_eq!(
            a,
            DomainBox {
                x1: 60.0,
                x2: 20.0,
                y1: 50.0,
                y2: 10.0
            }
        );
        assert_eq!(Handles::RIGHT.anchor(&B), B);
    }

    #[test]
    fn drawing_follows_dimension() {
        assert_eq!(Handles::drawing(Dimension::Both), Handles::RIGHT | Handles::BOTTOM);
        assert!(Handles::drawing(Dimension::Y).moves(Axis::Y));
        assert!(!Handles::drawing(Dimension::Y).moves(Axis::X));
    }
}
