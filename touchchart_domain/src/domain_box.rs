// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::interval::{Axis, Dimension};

/// Pixel-space bounds of a selection or of the full selectable region.
///
/// Unlike [`Rect`], the corners are named the way brush state names them and
/// are **not** normalized: a box may be inverted (`x1 > x2`) while a drag is in
/// progress. [`DomainBox::normalized`] and [`DomainBox::to_rect`] give the
/// ordered form.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainBox {
    /// First horizontal bound.
    pub x1: f64,
    /// Second horizontal bound.
    pub x2: f64,
    /// First vertical bound.
    pub y1: f64,
    /// Second vertical bound.
    pub y2: f64,
}

impl DomainBox {
    /// Degenerate box collapsed onto `pt`.
    #[must_use]
    pub const fn point(pt: Point) -> Self {
        Self {
            x1: pt.x,
            x2: pt.x,
            y1: pt.y,
            y2: pt.y,
        }
    }

    /// Creates a box from a Kurbo rectangle.
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self {
            x1: rect.x0,
            x2: rect.x1,
            y1: rect.y0,
            y2: rect.y1,
        }
    }

    /// Returns the ordered Kurbo rectangle covering this box.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x1, self.y1, self.x2, self.y2).abs()
    }

    /// Returns the box with `x1 <= x2` and `y1 <= y2`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            x2: self.x1.max(self.x2),
            y1: self.y1.min(self.y2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Absolute horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    /// Absolute vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    /// Returns the pair of bounds along `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.x1, self.x2),
            Axis::Y => (self.y1, self.y2),
        }
    }

    /// Returns `true` if `pt` lies inside the box, edges included.
    ///
    /// The test is performed on the normalized box, so inverted boxes work.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let b = self.normalized();
        pt.x >= b.x1 && pt.x <= b.x2 && pt.y >= b.y1 && pt.y <= b.y2
    }

    /// Clamps this box into `full` without letting it shrink against a wall.
    ///
    /// Each bound is pulled inward only when it would cross the matching bound
    /// of `full`. When the *opposite* bound overshoots instead, this bound is
    /// placed one box-width (or height) away from the wall, so a box pushed
    /// against an edge keeps its size.
    ///
    /// For a normalized box already inside `full` this is the identity.
    #[must_use]
    pub fn constrain(&self, full: &Self) -> Self {
        let width = (self.x2 - self.x1).abs();
        let height = (self.y2 - self.y1).abs();
        Self {
            x1: if self.x2 > full.x2 {
                full.x2 - width
            } else {
                self.x1.max(full.x1)
            },
            y1: if self.y2 > full.y2 {
                full.y2 - height
            } else {
                self.y1.max(full.y1)
            },
            x2: if self.x1 < full.x1 {
                full.x1 + width
            } else {
                self.x2.min(full.x2)
            },
            y2: if self.y1 < full.y1 {
                full.y1 + height
            } else {
                self.y2.min(full.y2)
            },
        }
    }

    /// Collapses the active axes of this box onto `pt`.
    ///
    /// Axes excluded by `dimension` keep their bounds, so a one-dimensional
    /// brush keeps spanning the whole other axis.
    #[must_use]
    pub fn collapse_to(&self, pt: Point, dimension: Dimension) -> Self {
        let (x1, x2) = if dimension.includes(Axis::X) {
            (pt.x, pt.x)
        } else {
            (self.x1, self.x2)
        };
        let (y1, y2) = if dimension.includes(Axis::Y) {
            (pt.y, pt.y)
        } else {
            (self.y1, self.y2)
        };
        Self { x1, x2, y1, y2 }
    }
}

impl From<Rect> for DomainBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::DomainBox;
    use crate::Dimension;

    const FULL: DomainBox = DomainBox {
        x1: 0.0,
        x2: 100.0,
        y1: 0.0,
        y2: 100.0,
    };

    #[test]
    fn constrain_inside_is_identity() {
        let b = DomainBox {
            x1: 10.0,
            x2: 40.0,
            y1: 5.0,
            y2: 95.0,
        };
        assert_eq!(b.constrain(&FULL), b);
        assert_eq!(FULL.constrain(&FULL), FULL);
    }

    #[test]
    fn constrain_preserves_width_against_each_wall() {
        let left = DomainBox {
            x1: -10.0,
            x2: 20.0,
            y1: 0.0,
            y2: 10.0,
        };
        let c = left.constrain(&FULL);
        assert_eq!((c.x1, c.x2), (0.0, 30.0));

        let right = DomainBox {
            x1: 90.0,
            x2: 125.0,
            y1: 0.0,
            y2: 10.0,
        };
        let c = right.constrain(&FULL);
        assert_eq!((c.x1, c.x2), (65.0, 100.0));
        assert_eq!(c.width(), right.width());
    }

    #[test]
    fn constrain_preserves_height_against_bottom() {
        let b = DomainBox {
            x1: 0.0,
            x2: 10.0,
            y1: 80.0,
            y2: 130.0,
        };
        let c = b.constrain(&FULL);
        assert_eq!((c.y1, c.y2), (50.0, 100.0));
    }

    #[test]
    fn contains_handles_inverted_boxes() {
        let b = DomainBox {
            x1: 50.0,
            x2: 10.0,
            y1: 30.0,
            y2: 0.0,
        };
        assert!(b.contains(Point::new(20.0, 20.0)));
        assert!(b.contains(Point::new(50.0, 0.0)));
        assert!(!b.contains(Point::new(60.0, 20.0)));
    }

    #[test]
    fn collapse_respects_dimension() {
        let pt = Point::new(40.0, 60.0);
        assert_eq!(FULL.collapse_to(pt, Dimension::Both), DomainBox::point(pt));

        let only_x = FULL.collapse_to(pt, Dimension::X);
        assert_eq!((only_x.x1, only_x.x2), (40.0, 40.0));
        assert_eq!((only_x.y1, only_x.y2), (0.0, 100.0));

        let only_y = FULL.collapse_to(pt, Dimension::Y);
        assert_eq!((only_y.x1, only_y.x2), (0.0, 100.0));
        assert_eq!((only_y.y1, only_y.y2), (60.0, 60.0));
    }

    #[test]
    fn rect_conversion_normalizes() {
        let b = DomainBox {
            x1: 30.0,
            x2: 10.0,
            y1: 5.0,
            y2: 1.0,
        };
        assert_eq!(b.to_rect(), Rect::new(10.0, 1.0, 30.0, 5.0));
        assert_eq!(DomainBox::from(b.to_rect()), b.normalized());
    }
}
