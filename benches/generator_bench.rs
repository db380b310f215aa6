//! Generator throughput benchmarks: raw steps per second and full-sequence
//! emission.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use xorstar::{collect_outputs, Xorshift64Star, DEFAULT_SEED};

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    let steps = 1024u64;
    group.throughput(Throughput::Elements(steps));
    group.bench_function("next_u64_1024", |b| {
        b.iter(|| {
            let mut rng = Xorshift64Star::new(black_box(DEFAULT_SEED));
            let mut acc = 0u64;
            for _ in 0..steps {
                acc ^= rng.next_u64();
            }
            black_box(acc)
        })
    });

    group.throughput(Throughput::Elements(10));
    group.bench_function("collect_first_ten", |b| {
        b.iter(|| collect_outputs(black_box(DEFAULT_SEED), 10))
    });

    group.finish();
}

criterion_group!(benches, bench_generator);
criterion_main!(benches);
