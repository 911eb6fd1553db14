// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Point, Quadtree, QuadtreeConfig, Region};

const WIDTH: f64 = 2048.0;
const HEIGHT: f64 = 2048.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * WIDTH, rng.next_f64() * HEIGHT))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    for _ in 0..n_clusters {
        let cx = spread + rng.next_f64() * (WIDTH - 2.0 * spread);
        let cy = spread + rng.next_f64() * (HEIGHT - 2.0 * spread);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn gen_lattice_points_i64(n: i64, cell: i64) -> Vec<Point<i64>> {
    let mut out = Vec::new();
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x * cell, y * cell));
        }
    }
    out
}

fn root() -> Region<f64> {
    Region::new(0.0, 0.0, WIDTH, HEIGHT).unwrap()
}

fn build(points: &[Point<f64>], config: QuadtreeConfig) -> Quadtree<f64> {
    let mut tree = Quadtree::new(root(), config).unwrap();
    tree.extend(points.iter().copied());
    tree
}

fn bench_insert_by_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_uniform");
    let points = gen_uniform_points(16_384);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &capacity in &[1usize, 4, 16, 64] {
        let config = QuadtreeConfig::default()
            .with_capacity(capacity)
            .with_max_depth(12);
        group.bench_function(format!("capacity{}", capacity), |b| {
            b.iter_batched(
                || Quadtree::new(root(), config).unwrap(),
                |mut tree| {
                    for p in points.iter().copied() {
                        black_box(tree.insert(p));
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_insert_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_clustered");
    let points = gen_clustered_points(32, 512, 40.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &max_depth in &[6u32, 10, 16] {
        let config = QuadtreeConfig::default().with_max_depth(max_depth);
        group.bench_function(format!("max_depth{}", max_depth), |b| {
            b.iter_batched(
                || Quadtree::new(root(), config).unwrap(),
                |mut tree| {
                    for p in points.iter().copied() {
                        black_box(tree.insert(p));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_insert_lattice_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_lattice_i64");
    let points = gen_lattice_points_i64(128, 16);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("n128", |b| {
        b.iter_batched(
            || Quadtree::from_edges(0_i64, 0, 2048, 2048, 4, 12).unwrap(),
            |mut tree| {
                for p in points.iter().copied() {
                    black_box(tree.insert(p));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_traverse_and_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    let points = gen_uniform_points(16_384);
    let tree = build(&points, QuadtreeConfig::default());
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("traverse", |b| {
        b.iter(|| {
            let total: usize = tree.traverse().map(|leaf| leaf.points.len()).sum();
            black_box(total);
        })
    });
    let query = Region::new(512.0, 512.0, 896.0, 896.0).unwrap();
    group.bench_function("query_region", |b| {
        b.iter(|| black_box(tree.query_region(query).count()))
    });
    group.bench_function("contains_point", |b| {
        b.iter(|| {
            let hits = points[..1024]
                .iter()
                .filter(|p| tree.contains_point(**p))
                .count();
            black_box(hits);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_by_capacity,
    bench_insert_clustered,
    bench_insert_lattice_i64,
    bench_traverse_and_query
);
criterion_main!(benches);
