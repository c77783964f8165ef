use criterion::{criterion_group, criterion_main, Criterion};
use idxgather::{build_descriptor, flatten, format_transform, gather, MatrixSource, RandomSource};

const SIZES: [usize; 3] = [16, 128, 512];

pub fn bench_descriptor(c: &mut Criterion) {
    let mut group = c.benchmark_group("Descriptor");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let name = format!("Size: {} x {}", *n, *n / 2);
        group.bench_function(&name, |b| b.iter(|| build_descriptor(*n, *n / 2)));
    }
    group.finish();
}

pub fn bench_gather(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gather");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let matrix = RandomSource::seeded(0).generate(*n, *n).unwrap();
        let flat = flatten(&matrix);
        let descriptor = build_descriptor(*n, *n).unwrap();
        let name = format!("Size: {} x {}", *n, *n);
        group.bench_function(&name, |b| b.iter(|| gather(&flat, &descriptor)));
        let gathered = gather(&flat, &descriptor).unwrap();
        let name = format!("Format: {} x {}", *n, *n);
        group.bench_function(&name, |b| b.iter(|| format_transform(&gathered, *n, *n)));
    }
    group.finish();
}

criterion_group!(benches, bench_descriptor, bench_gather);
criterion_main!(benches);
