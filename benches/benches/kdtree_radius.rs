// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use thicket_kdtree::KdTree;
use thicket_picker::Picker;

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

fn gen_uniform_points(count: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| [rng.next_f64() - 0.5, rng.next_f64() - 0.5])
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<[f64; 2]> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() - 0.5, rng.next_f64() - 0.5));
    }
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push([cx + dx, cy + dy]);
        }
    }
    out
}

fn gen_query_centers(count: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| [rng.next_f64() - 0.5, rng.next_f64() - 0.5])
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter(|| {
                let tree = KdTree::build(black_box(&points)).unwrap();
                black_box(tree.depth());
            })
        });
    }
    let points = gen_clustered_points(16, 4_096, 0.05);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter(|| {
            let tree = KdTree::build(black_box(&points)).unwrap();
            black_box(tree.depth());
        })
    });
    group.finish();
}

fn bench_radius_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_query");
    let centers = gen_query_centers(256, 0xBADC_F00D_1234_5678);
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n, 0xFACE_FEED_CAFE_BABE);
        let tree = KdTree::build(&points).unwrap();
        let radius = 0.01;
        group.throughput(Throughput::Elements(centers.len() as u64));
        group.bench_function(format!("tree_n{}", n), |b| {
            b.iter(|| {
                let mut inside = 0usize;
                for &center in &centers {
                    tree.search_radius(center, radius, |id| {
                        let dx = points[id][0] - center[0];
                        let dy = points[id][1] - center[1];
                        if (dx * dx + dy * dy).sqrt() < radius {
                            inside += 1;
                        }
                    })
                    .unwrap();
                }
                black_box(inside);
            })
        });
        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| {
                let mut inside = 0usize;
                for &center in &centers {
                    for p in &points {
                        let dx = p[0] - center[0];
                        let dy = p[1] - center[1];
                        if (dx * dx + dy * dy).sqrt() < radius {
                            inside += 1;
                        }
                    }
                }
                black_box(inside);
            })
        });
    }
    group.finish();
}

fn bench_picker_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker");
    let points: Vec<Point> = gen_uniform_points(100_000, 0x9E37_79B9_7F4A_7C15)
        .into_iter()
        .map(|[x, y]| Point::new(x, y))
        .collect();
    group.bench_function("pick_moving_cursor", |b| {
        b.iter_batched(
            || Picker::new(points.clone()).unwrap(),
            |mut picker| {
                let mut total = 0usize;
                for i in 0..64 {
                    let t = i as f64 / 64.0 - 0.5;
                    total += picker.pick(Point::new(t, -t), 0.01).unwrap().len();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_radius_query, bench_picker_pick);
criterion_main!(benches);
