// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core quadtree: node arena, insertion, and subdivision.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::{debug, error, trace};

use crate::config::QuadtreeConfig;
use crate::error::Error;
use crate::types::{Point, Region, Scalar};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) boundary: Region<T>,
    /// Levels this node may still split; `0` makes it a permanent leaf.
    pub(crate) remaining_depth: u32,
    pub(crate) points: Vec<Point<T>>,
    /// NW, NE, SW, SE. Set once by subdivision and never cleared.
    pub(crate) children: Option<[NodeIdx; 4]>,
}

impl<T> Node<T> {
    fn new(boundary: Region<T>, remaining_depth: u32) -> Self {
        Self {
            boundary,
            remaining_depth,
            points: Vec::new(),
            children: None,
        }
    }
}

/// A point quadtree over a fixed root [`Region`].
///
/// Leaves buffer up to [`capacity`](QuadtreeConfig::capacity) points. Inserting
/// into a full leaf splits it into four quadrants and moves its points down,
/// until the depth budget ([`max_depth`](QuadtreeConfig::max_depth)) runs out;
/// leaves on the last level accept any number of points.
///
/// Nodes are stored in an arena owned by the tree. Only the tree can reach
/// them, and a subdivided node keeps its four children for the life of the tree.
#[derive(Clone)]
pub struct Quadtree<T> {
    config: QuadtreeConfig,
    pub(crate) arena: Vec<Node<T>>,
    len: usize,
}

impl<T: Debug> Debug for Quadtree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self.arena.iter().filter(|n| n.children.is_none()).count();
        f.debug_struct("Quadtree")
            .field("boundary", &self.arena[NodeIdx::ROOT.get()].boundary)
            .field("config", &self.config)
            .field("points", &self.len)
            .field("nodes", &self.arena.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> Quadtree<T> {
    /// Create an empty tree covering `boundary`.
    ///
    /// Fails with [`Error::InvalidConfig`] if capacity or max depth is zero.
    pub fn new(boundary: Region<T>, config: QuadtreeConfig) -> Result<Self, Error<T>> {
        if !config.is_valid() {
            return Err(Error::InvalidConfig {
                capacity: config.capacity,
                max_depth: config.max_depth,
            });
        }
        Ok(Self {
            config,
            // The root spends one level of the budget.
            arena: vec![Node::new(boundary, config.max_depth - 1)],
            len: 0,
        })
    }

    /// Create an empty tree from root edges, capacity, and max depth.
    ///
    /// ```
    /// use understory_quadtree::{Point, Quadtree};
    ///
    /// let mut tree = Quadtree::from_edges(0.0, 0.0, 1024.0, 768.0, 4, 10).unwrap();
    /// assert!(tree.insert(Point::new(12.0, 40.0)));
    /// assert!(!tree.insert(Point::new(1024.0, 40.0)));
    /// ```
    pub fn from_edges(
        left: T,
        top: T,
        right: T,
        bottom: T,
        capacity: usize,
        max_depth: u32,
    ) -> Result<Self, Error<T>> {
        let boundary = Region::new(left, top, right, bottom)?;
        Self::new(boundary, QuadtreeConfig::new(capacity, max_depth))
    }

    /// Insert a point.
    ///
    /// Returns `false` if the point lies outside the root region (including its
    /// right and bottom edges); this is not an error.
    ///
    /// # Panics
    ///
    /// Panics if a subdivided node contains the point but none of its children
    /// accept it. See [`Quadtree::try_insert`] for the non-panicking form.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        match self.try_insert(point) {
            Ok(inserted) => inserted,
            Err(err) => panic!("{err}"),
        }
    }

    /// Insert a point, reporting an internal consistency failure as an error.
    ///
    /// `Ok(false)` means the point lies outside the root region.
    /// [`Error::InternalConsistency`] means the tree's partition is broken; the
    /// tree should not be used further.
    pub fn try_insert(&mut self, point: Point<T>) -> Result<bool, Error<T>> {
        if !self.root().boundary.contains(point) {
            debug!(%point, boundary = %self.root().boundary, "point outside root region");
            return Ok(false);
        }
        self.insert_at(NodeIdx::ROOT, point)?;
        self.len += 1;
        Ok(true)
    }

    /// Place a point already known to lie inside the boundary of `start`.
    fn insert_at(&mut self, start: NodeIdx, point: Point<T>) -> Result<(), Error<T>> {
        let capacity = self.config.capacity;
        let mut idx = start;
        loop {
            let current = self.arena[idx.get()].children;
            let children = match current {
                Some(children) => children,
                None => {
                    let node = &mut self.arena[idx.get()];
                    if node.points.len() < capacity {
                        node.points.push(point);
                        return Ok(());
                    }
                    let quads = if node.remaining_depth > 0 {
                        node.boundary.split()
                    } else {
                        None
                    };
                    let Some(quads) = quads else {
                        if node.points.len() == capacity {
                            debug!(
                                boundary = %node.boundary,
                                remaining_depth = node.remaining_depth,
                                "leaf cannot subdivide, buffering past capacity"
                            );
                        }
                        node.points.push(point);
                        return Ok(());
                    };
                    self.subdivide(idx, quads)?
                }
            };
            let next = children
                .into_iter()
                .find(|c| self.arena[c.get()].boundary.contains(point));
            let Some(next) = next else {
                let boundary = self.arena[idx.get()].boundary;
                error!(%point, %boundary, "no quadrant accepted a contained point");
                return Err(Error::InternalConsistency { point, boundary });
            };
            idx = next;
        }
    }

    /// Split `idx` into `quads` and move its buffered points into the new children.
    fn subdivide(
        &mut self,
        idx: NodeIdx,
        quads: [Region<T>; 4],
    ) -> Result<[NodeIdx; 4], Error<T>> {
        let child_depth = self.arena[idx.get()].remaining_depth - 1;
        let first = self.arena.len();
        self.arena.extend(quads.into_iter().map(|q| Node::new(q, child_depth)));
        let children = [
            NodeIdx::new(first),
            NodeIdx::new(first + 1),
            NodeIdx::new(first + 2),
            NodeIdx::new(first + 3),
        ];

        let node = &mut self.arena[idx.get()];
        node.children = Some(children);
        let mut buffered = core::mem::take(&mut node.points);
        trace!(
            boundary = %node.boundary,
            child_depth,
            redistributed = buffered.len(),
            "subdivide"
        );
        while let Some(p) = buffered.pop() {
            self.insert_at(idx, p)?;
        }
        Ok(children)
    }

    /// Whether a point equal to `point` is stored in the tree.
    pub fn contains_point(&self, point: Point<T>) -> bool {
        let mut node = self.root();
        if !node.boundary.contains(point) {
            return false;
        }
        loop {
            let Some(children) = node.children else {
                return node.points.contains(&point);
            };
            match children
                .into_iter()
                .map(|c| &self.arena[c.get()])
                .find(|child| child.boundary.contains(point))
            {
                Some(child) => node = child,
                None => return false,
            }
        }
    }
}

impl<T> Quadtree<T> {
    fn root(&self) -> &Node<T> {
        &self.arena[NodeIdx::ROOT.get()]
    }

    /// The root region.
    pub fn boundary(&self) -> Region<T>
    where
        T: Copy,
    {
        self.root().boundary
    }

    /// The capacity and depth settings this tree was built with.
    pub const fn config(&self) -> QuadtreeConfig {
        self.config
    }

    /// Maximum number of points a leaf buffers before subdividing.
    pub const fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Maximum number of levels, counting the root.
    pub const fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Number of points stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no points are stored.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the root has split into quadrants.
    pub fn is_subdivided(&self) -> bool {
        self.root().children.is_some()
    }

    /// Number of nodes, internal and leaf.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of leaf nodes.
    pub fn leaf_count(&self) -> usize {
        self.arena.iter().filter(|n| n.children.is_none()).count()
    }
}

impl<T: Scalar> Extend<Point<T>> for Quadtree<T> {
    /// Inserts each point; points outside the root region are skipped.
    fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}
