//! Criterion benchmarks for the monotone chain hull.
//! Focus sizes: n in {10, 1_000, 100_000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geohull::hull::{convex_hull, HullCfg, Point};
use geohull::sample::{draw_points, ReplayToken, SampleCfg, VertexCount};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn uniform_square(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("uniform_square", n), &n, |b, &n| {
            b.iter_batched(
                || uniform_square(n, 43),
                |pts| {
                    let _hull = convex_hull(&pts, HullCfg::default());
                },
                BatchSize::SmallInput,
            )
        });

        // Few hull vertices, many interior points.
        group.bench_with_input(BenchmarkId::new("sampled_polygon", n), &n, |b, &n| {
            let cfg = SampleCfg {
                vertex_count: VertexCount::Fixed(32),
                interior: n,
                ..SampleCfg::default()
            };
            b.iter_batched(
                || draw_points(cfg, ReplayToken { seed: 44, index: 0 }),
                |pts| {
                    let _hull = convex_hull(&pts, HullCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
