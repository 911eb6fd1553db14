// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: scalars, points, half-open regions, and quadrants.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};

use crate::error::Error;

/// Numeric scalar abstraction for quadtree coordinates.
///
/// This trait provides the minimal arithmetic needed to derive region sizes and
/// the center lines used for subdivision.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Midpoint between a and b (used for the subdivision center lines).
    fn mid(a: Self, b: Self) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        let m = 0.5 * (a + b);
        // The sum overflows for edges near the type's maximum.
        if m.is_finite() {
            m
        } else {
            0.5 * a + 0.5 * b
        }
    }
}

impl Scalar for f64 {
    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        let m = 0.5 * (a + b);
        // The sum overflows for edges near the type's maximum.
        if m.is_finite() {
            m
        } else {
            0.5 * a + 0.5 * b
        }
    }
}

impl Scalar for i64 {
    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }
}

/// A point in 2D. Two points are equal when their coordinates are equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate (grows downward, toward `bottom`).
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Debug> Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={:?}, y={:?})", self.x, self.y)
    }
}

/// One of the four quadrants produced by subdividing a [`Region`].
///
/// The declaration order is the order in which children are tried on insert
/// and visited on traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Left half of the top half.
    NorthWest,
    /// Right half of the top half.
    NorthEast,
    /// Left half of the bottom half.
    SouthWest,
    /// Right half of the bottom half.
    SouthEast,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned rectangle with half-open containment.
///
/// A region includes its `left` and `top` edges and excludes its `right` and
/// `bottom` edges, so the four quadrants of a region never share a point.
/// Regions always have positive width and height; see [`Region::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region<T> {
    left: T,
    top: T,
    right: T,
    bottom: T,
}

impl<T: Scalar> Region<T> {
    /// Create a region from its edges.
    ///
    /// Fails with [`Error::InvalidGeometry`] unless `left < right` and `top < bottom`.
    /// Unordered coordinates (NaN) also fail.
    pub fn new(left: T, top: T, right: T, bottom: T) -> Result<Self, Error<T>> {
        if lt(left, right) && lt(top, bottom) {
            Ok(Self {
                left,
                top,
                right,
                bottom,
            })
        } else {
            Err(Error::InvalidGeometry {
                left,
                top,
                right,
                bottom,
            })
        }
    }

    /// Left edge (inclusive).
    pub const fn left(&self) -> T {
        self.left
    }

    /// Top edge (inclusive).
    pub const fn top(&self) -> T {
        self.top
    }

    /// Right edge (exclusive).
    pub const fn right(&self) -> T {
        self.right
    }

    /// Bottom edge (exclusive).
    pub const fn bottom(&self) -> T {
        self.bottom
    }

    /// Width of the region.
    pub fn width(&self) -> T {
        T::sub(self.right, self.left)
    }

    /// Height of the region.
    pub fn height(&self) -> T {
        T::sub(self.bottom, self.top)
    }

    /// Vertical center line used for subdivision.
    pub fn center_x(&self) -> T {
        T::mid(self.left, self.right)
    }

    /// Horizontal center line used for subdivision.
    pub fn center_y(&self) -> T {
        T::mid(self.top, self.bottom)
    }

    /// Center point of the region.
    pub fn center(&self) -> Point<T> {
        Point::new(self.center_x(), self.center_y())
    }

    /// Whether the region contains the point: `left <= x < right` and `top <= y < bottom`.
    ///
    /// Points on the right or bottom edge are outside.
    pub fn contains(&self, point: Point<T>) -> bool {
        le(self.left, point.x)
            && lt(point.x, self.right)
            && le(self.top, point.y)
            && lt(point.y, self.bottom)
    }

    /// Whether two regions share at least one point under half-open containment.
    ///
    /// Regions that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        lt(self.left, other.right)
            && lt(other.left, self.right)
            && lt(self.top, other.bottom)
            && lt(other.top, self.bottom)
    }

    /// Whether both center lines fall strictly inside the region.
    ///
    /// When this is false, splitting would produce a quadrant with no area or
    /// one reaching past the region: an `i64` region of width 1, a float region
    /// so narrow that its midpoint rounds onto an edge, or a float region with
    /// an infinite edge.
    pub fn is_splittable(&self) -> bool {
        let (cx, cy) = (self.center_x(), self.center_y());
        lt(self.left, cx) && lt(cx, self.right) && lt(self.top, cy) && lt(cy, self.bottom)
    }

    /// The four quadrants in [`Quadrant::ALL`] order, or `None` if the region is
    /// not [splittable](Self::is_splittable).
    ///
    /// The quadrants share the center lines and exactly cover the region.
    pub fn split(&self) -> Option<[Self; 4]> {
        if !self.is_splittable() {
            return None;
        }
        let (cx, cy) = (self.center_x(), self.center_y());
        Some([
            Self::from_edges(self.left, self.top, cx, cy),
            Self::from_edges(cx, self.top, self.right, cy),
            Self::from_edges(self.left, cy, cx, self.bottom),
            Self::from_edges(cx, cy, self.right, self.bottom),
        ])
    }

    /// The region covered by one quadrant, or `None` if the region is not splittable.
    pub fn quadrant_region(&self, quadrant: Quadrant) -> Option<Self> {
        self.split().map(|quads| quads[quadrant.index()])
    }

    /// The quadrant whose region contains the point.
    ///
    /// Returns `None` if this region does not contain the point or is not splittable.
    pub fn quadrant_of(&self, point: Point<T>) -> Option<Quadrant> {
        if !self.contains(point) || !self.is_splittable() {
            return None;
        }
        let east = !lt(point.x, self.center_x());
        let south = !lt(point.y, self.center_y());
        Some(match (south, east) {
            (false, false) => Quadrant::NorthWest,
            (false, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::SouthWest,
            (true, true) => Quadrant::SouthEast,
        })
    }

    // Only called with edges derived from an already valid, splittable region.
    const fn from_edges(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl<T: Debug> Display for Region<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region(left={:?}, top={:?}, right={:?}, bottom={:?})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
