// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf traversal and region queries.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::tree::{Node, NodeIdx, Quadtree};
use crate::types::{Point, Region, Scalar};

/// A leaf visited by [`Quadtree::traverse`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leaf<'a, T> {
    /// The leaf's region.
    pub boundary: Region<T>,
    /// Points buffered in the leaf, in insertion order.
    pub points: &'a [Point<T>],
    /// Level of the leaf; the root is level 1.
    pub depth: u32,
}

/// Depth-first iterator over the leaves of a [`Quadtree`].
///
/// Children are visited in [`Quadrant::ALL`](crate::Quadrant::ALL) order.
pub struct Leaves<'a, T> {
    arena: &'a [Node<T>],
    stack: Vec<(NodeIdx, u32)>,
}

impl<T> Debug for Leaves<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Leaves")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T: Copy> Iterator for Leaves<'a, T> {
    type Item = Leaf<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, depth)) = self.stack.pop() {
            let node = &self.arena[idx.get()];
            match node.children {
                // Reversed so the north-west child is popped first.
                Some(children) => self
                    .stack
                    .extend(children.iter().rev().map(|&c| (c, depth + 1))),
                None => {
                    return Some(Leaf {
                        boundary: node.boundary,
                        points: &node.points,
                        depth,
                    });
                }
            }
        }
        None
    }
}

impl<T: Copy> FusedIterator for Leaves<'_, T> {}

impl<T: Copy> Quadtree<T> {
    /// Visit every leaf depth-first, yielding its region and points.
    ///
    /// Two traversals with no insert in between yield the same leaves in the
    /// same order.
    ///
    /// ```
    /// use understory_quadtree::{Point, Quadtree};
    ///
    /// let mut tree = Quadtree::from_edges(0.0, 0.0, 100.0, 100.0, 1, 10).unwrap();
    /// tree.insert(Point::new(10.0, 10.0));
    /// tree.insert(Point::new(80.0, 80.0));
    ///
    /// let leaves: Vec<_> = tree.traverse().collect();
    /// assert_eq!(leaves.len(), 4);
    /// assert_eq!(leaves[0].points, &[Point::new(10.0, 10.0)]);
    /// assert_eq!(leaves[3].points, &[Point::new(80.0, 80.0)]);
    /// ```
    pub fn traverse(&self) -> Leaves<'_, T> {
        Leaves {
            arena: &self.arena,
            stack: vec![(NodeIdx::ROOT, 1)],
        }
    }

    /// All stored points, leaf by leaf in traversal order.
    pub fn points(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.traverse().flat_map(|leaf| leaf.points.iter().copied())
    }

    /// Number of levels from the root to the deepest leaf, counting the root.
    ///
    /// Never exceeds [`max_depth`](Self::max_depth).
    pub fn depth(&self) -> u32 {
        self.traverse().map(|leaf| leaf.depth).max().unwrap_or(1)
    }
}

impl<T: Scalar> Quadtree<T> {
    /// Points contained in `region`, skipping subtrees that do not intersect it.
    ///
    /// Results are in traversal order.
    pub fn query_region(&self, region: Region<T>) -> impl Iterator<Item = Point<T>> + '_ {
        let mut out = Vec::new();
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if !n.boundary.intersects(&region) {
                continue;
            }
            match n.children {
                Some(children) => stack.extend(children.iter().rev()),
                None => out.extend(n.points.iter().copied().filter(|p| region.contains(*p))),
            }
        }
        out.into_iter()
    }
}
