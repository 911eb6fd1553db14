// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between quadtree geometry and Kurbo types.
//!
//! A Kurbo-based renderer can draw [`Leaf::boundary`](crate::Leaf::boundary) as a
//! [`kurbo::Rect`] and feed pointer positions back in as [`Point`]s.

use crate::error::Error;
use crate::types::{Point, Region};

impl From<Region<f64>> for kurbo::Rect {
    fn from(r: Region<f64>) -> Self {
        Self::new(r.left(), r.top(), r.right(), r.bottom())
    }
}

impl TryFrom<kurbo::Rect> for Region<f64> {
    type Error = Error<f64>;

    /// Fails for rectangles with non-positive width or height, including
    /// rectangles whose corners are not in min/max order.
    fn try_from(r: kurbo::Rect) -> Result<Self, Self::Error> {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point<f64>> for kurbo::Point {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}
