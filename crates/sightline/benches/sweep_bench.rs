//! Criterion benchmarks for the angular sweep.
//! Focus sizes: n blockers in {10, 50, 100, 200}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use sightline::scene::sample::{draw_segments, sample_bounds, ReplayToken, SceneCfg};
use sightline::sweep::{visibility_polygon, visibility_polygon_tracked, SortAlgo, SweepOpts};

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let origin = Vector2::new(0.0, 0.0);

    for &n in &[10usize, 50, 100, 200] {
        let cfg = SceneCfg {
            segments: n,
            ..SceneCfg::default()
        };
        let bbox = sample_bounds(cfg);

        group.bench_with_input(BenchmarkId::new("visibility_polygon", n), &n, |b, _| {
            b.iter_batched(
                || draw_segments(cfg, ReplayToken { seed: 43, index: 0 }),
                |segs| {
                    let _p = visibility_polygon(origin, &segs, bbox, &SweepOpts::default());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("tracked", n), &n, |b, _| {
            b.iter_batched(
                || draw_segments(cfg, ReplayToken { seed: 44, index: 0 }),
                |segs| {
                    let _r = visibility_polygon_tracked(origin, &segs, bbox, &SweepOpts::default());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("merge_sort_events", n), &n, |b, _| {
            let opts = SweepOpts {
                sort: SortAlgo::Merge,
                ..SweepOpts::default()
            };
            b.iter_batched(
                || draw_segments(cfg, ReplayToken { seed: 45, index: 0 }),
                |segs| {
                    let _p = visibility_polygon(origin, &segs, bbox, &opts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
