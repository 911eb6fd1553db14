// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a point quadtree over a half-open 2D region.
//!
//! The tree recursively partitions a root [`Region`] so that insertion and
//! containment stay cheap as the number of points grows.
//!
//! - Leaves buffer up to a fixed capacity of points, then split into four quadrants.
//! - Recursion is bounded by a maximum depth; leaves on the last level accept any number of points.
//! - A depth-first [`traverse`](Quadtree::traverse) yields each leaf's region and points, which is
//!   all a renderer needs to draw the partition.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, or `i64`) and does not depend on a
//! geometry crate. Enable the `kurbo` feature for conversions to and from Kurbo's `Rect` and `Point`.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Point, Quadtree, QuadtreeConfig, Region};
//!
//! let root = Region::new(0.0, 0.0, 100.0, 100.0).unwrap();
//! let mut tree = Quadtree::new(root, QuadtreeConfig::new(1, 10)).unwrap();
//!
//! assert!(tree.insert(Point::new(10.0, 10.0)));
//! assert!(!tree.is_subdivided());
//!
//! // The second point overflows the root, which splits; both points end up in the
//! // north-west quadrant.
//! assert!(tree.insert(Point::new(20.0, 20.0)));
//! assert!(tree.is_subdivided());
//!
//! let nw = Region::new(0.0, 0.0, 50.0, 50.0).unwrap();
//! assert_eq!(tree.query_region(nw).count(), 2);
//!
//! // Points on the right or bottom edge belong to no region.
//! assert!(!tree.insert(Point::new(100.0, 50.0)));
//! ```
//!
//! ## Region semantics
//!
//! A [`Region`] contains a point when `left <= x < right` and `top <= y < bottom`.
//! Its four quadrants share the center lines, and each point of the region falls in exactly
//! one of them, so inserting a point follows a single path from the root.
//! Callers must keep points strictly inside `[left, right) × [top, bottom)` of the root;
//! anything else is rejected by [`Quadtree::insert`] with `false`.
//!
//! ### Float semantics
//!
//! Floating-point coordinates are compared with partial ordering; NaN coordinates are outside
//! every region. Use `i64` when exact center lines matter, for example in tests.
//!
//! ## Errors and logging
//!
//! Construction reports [`Error::InvalidGeometry`] and [`Error::InvalidConfig`].
//! [`Quadtree::try_insert`] reports [`Error::InternalConsistency`] if the partition is ever
//! found broken; [`Quadtree::insert`] panics in that case.
//!
//! The crate emits [`tracing`] events (subdivision at `trace`, rejected points and overfull
//! leaves at `debug`) and never installs a subscriber.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
#[cfg(feature = "kurbo")]
mod kurbo_interop;
pub mod traverse;
pub mod tree;
pub mod types;

pub use config::QuadtreeConfig;
pub use error::Error;
pub use traverse::{Leaf, Leaves};
pub use tree::Quadtree;
pub use types::{Point, Quadrant, Region, Scalar};
