//! Linear-scan ranking throughput at CLIP-like dimensionality.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use provenance_core::{ArtifactEmbedding, Vector};
use provenance_retrieval::ranking::similarity::rank_with_threshold;

const DIMS: usize = 512;

fn synthetic(seed: usize) -> Vector {
    let raw: Vec<f32> = (0..DIMS)
        .map(|i| (((seed * 31 + i * 17) % 97) as f32 - 48.0) / 48.0 + 0.01)
        .collect();
    Vector::new(raw).unwrap()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for size in [1_000usize, 10_000] {
        let corpus: Vec<_> = (0..size)
            .map(|i| ArtifactEmbedding::new(format!("a{i}"), synthetic(i)))
            .collect();
        let query = synthetic(size + 1);

        group.bench_with_input(BenchmarkId::new("sequential", size), &corpus, |b, corpus| {
            b.iter(|| rank_with_threshold(black_box(&query), corpus, usize::MAX).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &corpus, |b, corpus| {
            b.iter(|| rank_with_threshold(black_box(&query), corpus, 1).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
