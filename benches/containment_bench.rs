//! Criterion benchmarks for even-odd containment.
//! Sizes: n in {3, 16, 128, 1024} vertices; query cost should grow linearly.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scene_region::{Polygon, Vertex};

fn regular_ngon(n: usize) -> Polygon {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            Vertex::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");
    for &n in &[3usize, 16, 128, 1024] {
        let polygon = regular_ngon(n);
        group.bench_with_input(BenchmarkId::new("inside", n), &polygon, |b, p| {
            b.iter(|| p.is_point_inside(black_box(0.1), black_box(-0.2)))
        });
        group.bench_with_input(BenchmarkId::new("outside", n), &polygon, |b, p| {
            b.iter(|| p.is_point_inside(black_box(3.0), black_box(0.5)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_containment);
criterion_main!(benches);
