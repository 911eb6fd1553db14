// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for region construction, configuration, and insertion.

use core::fmt::Debug;

use crate::types::{Point, Region};

/// Errors reported by the quadtree and its geometry primitives.
///
/// `InvalidGeometry` and `InvalidConfig` are caller errors raised at construction.
/// `InternalConsistency` is a defect: it means the exact-partition property of
/// subdivision did not hold for some point, and the tree should not be used further.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error<T: Debug> {
    /// A region was constructed with non-positive width or height.
    #[error(
        "region must have positive width and height \
         (left={left:?}, top={top:?}, right={right:?}, bottom={bottom:?})"
    )]
    InvalidGeometry {
        /// Requested left edge.
        left: T,
        /// Requested top edge.
        top: T,
        /// Requested right edge.
        right: T,
        /// Requested bottom edge.
        bottom: T,
    },

    /// Capacity or maximum depth was zero.
    #[error("capacity and max depth must be at least 1 (capacity={capacity}, max_depth={max_depth})")]
    InvalidConfig {
        /// Requested leaf capacity.
        capacity: usize,
        /// Requested maximum depth.
        max_depth: u32,
    },

    /// A subdivided node contains the point but none of its children accepted it.
    #[error("{point} can not be inserted into {boundary}")]
    InternalConsistency {
        /// The point that could not be placed.
        point: Point<T>,
        /// Boundary of the node whose children all rejected the point.
        boundary: Region<T>,
    },
}
