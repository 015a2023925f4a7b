//! Benchmarks for the auxiliary hash battery

use auxhash_core::{Algorithm, INPUT_SIZE, Message};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_hash(c: &mut Criterion) {
    let input: Message = core::array::from_fn(|i| i as u8);

    let mut group = c.benchmark_group("auxhash_single");
    group.throughput(Throughput::Bytes(INPUT_SIZE as u64));
    for algorithm in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &input, |b, input| {
            b.iter(|| algorithm.hash(black_box(input)))
        });
    }
    group.finish();
}

fn bench_hash_varying_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("auxhash_varying");
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            let mut input = [0u8; INPUT_SIZE];
            let mut nonce: u64 = 0;
            b.iter(|| {
                input[..8].copy_from_slice(&nonce.to_le_bytes());
                nonce = nonce.wrapping_add(1);
                algorithm.hash(black_box(&input))
            })
        });
    }
    group.finish();
}

fn bench_hash_batch(c: &mut Criterion) {
    let inputs: Vec<Message> = (0..256u32)
        .map(|n| {
            let mut input = [0u8; INPUT_SIZE];
            input[..4].copy_from_slice(&n.to_le_bytes());
            input
        })
        .collect();

    let mut group = c.benchmark_group("auxhash_batch");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.hash_batch(black_box(&inputs)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hash, bench_hash_varying_input, bench_hash_batch);
criterion_main!(benches);
