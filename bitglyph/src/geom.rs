// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry.
//!
//! Everything in this crate is measured in whole pixels, so these types stay in `i32`
//! rather than going through `kurbo`'s floating point primitives.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point, or a displacement between two points, in pixels.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// An axis-aligned rectangle in pixels.
///
/// The rectangle covers the columns `left()..right()` and the rows `top()..bottom()`, i.e.
/// `right` and `bottom` are exclusive.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; a rectangle with a non-positive width is empty.
    pub width: i32,
    /// Height; a rectangle with a non-positive height is empty.
    pub height: i32,
}

impl Rect {
    /// The rectangle `(0, 0, 0, 0)`, used for missing glyphs.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a top-left corner and a `(width, height)` pair.
    #[inline]
    pub const fn from_origin_size(top_left: Point, size: Point) -> Self {
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    /// Left edge (inclusive).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (inclusive).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The center point, rounded toward the top-left.
    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns `true` if the rectangle is exactly [`Rect::ZERO`].
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0 && self.width == 0 && self.height == 0
    }

    /// Returns `true` if the pixel at `pt` lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left() && pt.x < self.right() && pt.y >= self.top() && pt.y < self.bottom()
    }

    /// Returns the rectangle moved by `delta`.
    #[inline]
    #[must_use]
    pub const fn translate(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    ///
    /// Empty rectangles contribute nothing, so the union of an empty rectangle with `other`
    /// is `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    /// Returns the overlap of `self` and `other`, or [`Rect::ZERO`] if they don't overlap.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            Self::ZERO
        } else {
            Self::new(left, top, right - left, bottom - top)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn rect_edges_are_exclusive() {
        let r = Rect::new(320, 100, 60, 40);
        assert_eq!(r.right(), 380, "right edge");
        assert_eq!(r.bottom(), 140, "bottom edge");
        assert!(r.contains(Point::new(379, 139)), "last pixel is inside");
        assert!(!r.contains(Point::new(380, 139)), "right edge is outside");
    }

    #[test]
    fn rect_union_ignores_empty() {
        let a = Rect::new(0, -6, 5, 7);
        let space = Rect::new(40, 1, 0, 0);
        assert_eq!(a.union(space), a, "empty rhs");
        assert_eq!(space.union(a), a, "empty lhs");
        assert_eq!(
            a.union(Rect::new(8, -4, 4, 7)),
            Rect::new(0, -6, 12, 9),
            "overlapping union"
        );
    }

    #[test]
    fn rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(Rect::new(5, 5, 10, 10)),
            Rect::new(5, 5, 5, 5),
            "overlapping corner"
        );
        assert_eq!(
            a.intersect(Rect::new(10, 0, 3, 3)),
            Rect::ZERO,
            "touching edges don't overlap"
        );
    }

    #[test]
    fn point_arithmetic() {
        let mut p = Point::new(10, 10);
        p -= Point::new(3, -6);
        assert_eq!(p, Point::new(7, 16), "subtraction");
        p += -Point::new(7, 16);
        assert!(p.is_zero(), "back to zero");
    }
}
