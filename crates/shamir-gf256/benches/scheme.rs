//! split / join benchmarks
//!
//! Usage:
//!   cargo bench -p shamir-gf256                       # everything
//!   cargo bench -p shamir-gf256 -- split              # split only
//!   cargo bench -p shamir-gf256 --features parallel   # rayon fan-out

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use shamir_gf256::{join, split, Parts};

const SIZES: [usize; 3] = [32, 1024, 64 * 1024];

fn random_secret(len: usize) -> Vec<u8> {
    let mut secret = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut secret);
    secret
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    group.sample_size(20);

    for size in SIZES {
        let secret = random_secret(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("5-of-3", size), &secret, |b, secret| {
            let mut rng = rand::thread_rng();
            b.iter(|| black_box(split(&mut rng, 5, 3, black_box(secret)).unwrap()));
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");
    group.sample_size(20);

    for size in SIZES {
        let secret = random_secret(size);
        let parts = split(&mut rand::thread_rng(), 5, 3, &secret).unwrap();
        let quorum: Parts = parts.into_iter().take(3).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("3-parts", size), &quorum, |b, quorum| {
            b.iter(|| black_box(join(black_box(quorum)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_join);
criterion_main!(benches);
