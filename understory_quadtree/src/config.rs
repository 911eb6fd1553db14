// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree-wide tuning: leaf capacity and recursion depth.

/// Capacity and depth settings shared by every node of a [`Quadtree`](crate::Quadtree).
///
/// Both values are fixed when the root is built and inherited by all children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadtreeConfig {
    /// Maximum number of points a leaf buffers before it subdivides.
    pub capacity: usize,
    /// Maximum number of levels, counting the root as level 1.
    ///
    /// Nodes on the last level never subdivide and accept any number of points.
    pub max_depth: u32,
}

impl QuadtreeConfig {
    /// Default leaf capacity.
    pub const DEFAULT_CAPACITY: usize = 4;
    /// Default maximum depth.
    pub const DEFAULT_MAX_DEPTH: u32 = 10;

    /// Create a config from explicit values. See [`QuadtreeConfig::is_valid`].
    pub const fn new(capacity: usize, max_depth: u32) -> Self {
        Self {
            capacity,
            max_depth,
        }
    }

    /// Replace the leaf capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether capacity and maximum depth are both at least 1.
    ///
    /// [`Quadtree::new`](crate::Quadtree::new) rejects invalid configs with
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig).
    pub const fn is_valid(&self) -> bool {
        self.capacity > 0 && self.max_depth > 0
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_MAX_DEPTH)
    }
}
