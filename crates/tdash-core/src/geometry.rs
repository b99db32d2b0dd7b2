#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are signed so that a negative coordinate is representable and
//! can be rejected with an error instead of silently wrapping. Every API in
//! the rendering core expects non-negative coordinates.

use core::fmt;
use core::ops::{Add, Sub};

/// An integer `(x, y)` pair.
///
/// Used for cell and pixel coordinates, sizes, and `(numerator, denominator)`
/// ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// Column (or ratio numerator).
    pub x: i32,
    /// Row (or ratio denominator).
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale both components.
    #[inline]
    pub const fn scale(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Check whether the point lies inside `rect` (half-open).
    #[inline]
    pub const fn is_within(self, rect: &Rect) -> bool {
        rect.contains(self)
    }

    /// Whether either component is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.x < 0 || self.y < 0
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An axis-aligned half-open rectangle `[min, max)`.
///
/// # Invariants
///
/// `min.x <= max.x` and `min.y <= max.y`. A rectangle with `dx() == 0` or
/// `dy() == 0` is empty; [`Rect::ZERO`] is the canonical empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner (inclusive).
    pub min: Point,
    /// Bottom-right corner (exclusive).
    pub max: Point,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const ZERO: Self = Self {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Create a rectangle from two corners, swapping coordinates if needed so
    /// that `min <= max`.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Create a rectangle from its corner points.
    #[inline]
    pub const fn from_points(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x, max.y)
    }

    /// Create a zero-based rectangle of the given size.
    #[inline]
    pub const fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width.
    #[inline]
    pub const fn dx(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height.
    #[inline]
    pub const fn dy(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Width and height as a point.
    #[inline]
    pub const fn size(&self) -> Point {
        Point::new(self.dx(), self.dy())
    }

    /// Area in cells (or pixels).
    #[inline]
    pub const fn area(&self) -> i64 {
        self.dx() as i64 * self.dy() as i64
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.dx() <= 0 || self.dy() <= 0
    }

    /// Whether any coordinate is negative.
    #[inline]
    pub const fn has_negative(&self) -> bool {
        self.min.is_negative() || self.max.is_negative()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Check whether this rectangle lies entirely inside `other`.
    ///
    /// An empty rectangle lies inside every rectangle.
    #[inline]
    pub const fn is_within(&self, other: &Rect) -> bool {
        if self.is_empty() {
            return true;
        }
        other.min.x <= self.min.x
            && self.max.x <= other.max.x
            && other.min.y <= self.min.y
            && self.max.y <= other.max.y
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns [`Rect::ZERO`] if the rectangles don't overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.min.x.max(other.min.x);
        let y0 = self.min.y.max(other.min.y);
        let x1 = self.max.x.min(other.max.x);
        let y1 = self.max.y.min(other.max.y);
        if x0 < x1 && y0 < y1 {
            Rect::new(x0, y0, x1, y1)
        } else {
            Rect::ZERO
        }
    }

    /// The smallest rectangle containing both.
    ///
    /// Empty operands are ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::new(
            self.min.x.min(other.min.x),
            self.min.y.min(other.min.y),
            self.max.x.max(other.max.x),
            self.max.y.max(other.max.y),
        )
    }

    /// Translate by `offset`.
    #[inline]
    pub fn translate(&self, offset: Point) -> Rect {
        Rect::from_points(self.min + offset, self.max + offset)
    }

    /// Return [`Rect::ZERO`] for any empty rectangle, `self` otherwise.
    #[inline]
    pub fn canonical(&self) -> Rect {
        if self.is_empty() { Rect::ZERO } else { *self }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 6, 8);
        assert!(rect.contains(Point::new(2, 3)));
        assert!(rect.contains(Point::new(5, 7)));
        assert!(!rect.contains(Point::new(6, 3)));
        assert!(!rect.contains(Point::new(2, 8)));
    }

    #[test]
    fn rect_new_canonicalises_corners() {
        assert_eq!(Rect::new(4, 5, 1, 2), Rect::new(1, 2, 4, 5));
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 6, 6);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 4, 4));
    }

    #[test]
    fn rect_intersection_no_overlap_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(3, 3, 5, 5);
        assert_eq!(a.intersection(&b), Rect::ZERO);
    }

    #[test]
    fn rect_intersection_adjacent_no_overlap() {
        // Right edge is exclusive.
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 0, 10, 5);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn rect_union_basic() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(3, 3, 8, 8);
        assert_eq!(a.union(&b), Rect::new(0, 0, 8, 8));
    }

    #[test]
    fn rect_union_ignores_empty() {
        let a = Rect::new(3, 3, 5, 5);
        assert_eq!(a.union(&Rect::ZERO), a);
        assert_eq!(Rect::ZERO.union(&a), a);
    }

    #[test]
    fn rect_size_and_area() {
        let r = Rect::new(1, 1, 4, 3);
        assert_eq!(r.size(), Point::new(3, 2));
        assert_eq!(r.area(), 6);
    }

    #[test]
    fn rect_is_empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(5, 5, 5, 10).is_empty());
        assert!(Rect::new(5, 5, 10, 5).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn empty_rect_is_within_anything() {
        assert!(Rect::new(50, 50, 50, 60).is_within(&Rect::new(0, 0, 1, 1)));
    }

    #[test]
    fn rect_is_within_boundaries() {
        let outer = Rect::new(0, 0, 10, 10);
        assert!(outer.is_within(&outer));
        assert!(Rect::new(2, 2, 10, 10).is_within(&outer));
        assert!(!Rect::new(2, 2, 11, 10).is_within(&outer));
        assert!(!Rect::new(-1, 2, 3, 4).is_within(&outer));
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(1, 1, 3, 3).translate(Point::new(2, -1));
        assert_eq!(r, Rect::new(3, 0, 5, 2));
    }

    #[test]
    fn has_negative_detects_any_corner() {
        assert!(Rect::new(-1, 0, 2, 2).has_negative());
        assert!(!Rect::new(0, 0, 2, 2).has_negative());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Point::new(1, -2).to_string(), "(1,-2)");
        assert_eq!(Rect::new(0, 0, 3, 4).to_string(), "(0,0)-(3,4)");
    }

    #[test]
    fn canonical_collapses_empty() {
        assert_eq!(Rect::new(3, 4, 3, 9).canonical(), Rect::ZERO);
        let r = Rect::new(1, 1, 2, 2);
        assert_eq!(r.canonical(), r);
    }
}
