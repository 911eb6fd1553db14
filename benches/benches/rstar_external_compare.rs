// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Point, Quadtree, Region};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            // Offset by half a cell so no point sits on a center line.
            out.push(Point::new((x as f64 + 0.5) * cell, (y as f64 + 0.5) * cell));
        }
    }
    out
}

fn bench_rstar_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare_f64");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let extent = n as f64 * 10.0;
        let query = Region::new(100.0, 100.0, 500.0, 500.0).unwrap();
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::from_edges(0.0, 0.0, extent, extent, 4, 12).unwrap(),
                |mut tree| {
                    for p in points.iter().copied() {
                        let _ = tree.insert(p);
                    }
                    let hits: usize = tree.query_region(query).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                RTree::<[f64; 2]>::new,
                |mut tree| {
                    for p in points.iter() {
                        tree.insert([p.x, p.y]);
                    }
                    let aabb = AABB::from_corners(
                        [query.left(), query.top()],
                        [query.right(), query.bottom()],
                    );
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    let aabb = AABB::from_corners(
                        [query.left(), query.top()],
                        [query.right(), query.bottom()],
                    );
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare_f64);
criterion_main!(benches);
