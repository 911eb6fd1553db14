// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: insert, traverse, and query.

use understory_quadtree::{Point, Quadtree, Region};

fn main() {
    let mut tree = Quadtree::from_edges(0.0, 0.0, 100.0, 100.0, 1, 10).unwrap();
    println!("insert (10,10): {}", tree.insert(Point::new(10.0, 10.0)));
    println!("subdivided: {}", tree.is_subdivided());

    // Overflows the root; both points move into the north-west quadrant.
    println!("insert (20,20): {}", tree.insert(Point::new(20.0, 20.0)));
    println!("subdivided: {}", tree.is_subdivided());

    // On the exclusive right edge.
    println!("insert (100,50): {}", tree.insert(Point::new(100.0, 50.0)));

    for leaf in tree.traverse() {
        println!("depth {} {}: {:?}", leaf.depth, leaf.boundary, leaf.points);
    }

    let nw = Region::new(0.0, 0.0, 50.0, 50.0).unwrap();
    let hits: Vec<_> = tree.query_region(nw).collect();
    println!("points in {nw}: {hits:?}");
}
