// In benches/rice_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ricecomp::{compress, decompress, max_compressed_len};

// --- Mock Tile Generation ---

/// A random walk with bounded steps, the shape of a smooth image row.
fn generate_random_walk(size: usize, max_step: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut value: i32 = 10_000;
    (0..size)
        .map(|_| {
            value = value.wrapping_add(rng.random_range(-max_step..=max_step));
            value
        })
        .collect()
}

/// Full-range noise; every block falls back to the escape form.
fn generate_white_noise(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<i32>()).collect()
}

// --- Benchmark Suite ---

const BENCH_SAMPLES: usize = 65536;
const BLOCK_SIZE: usize = 32;

fn bench_rice_codec(c: &mut Criterion) {
    let tiles = [
        ("Smooth Walk", generate_random_walk(BENCH_SAMPLES, 4, 1)),
        ("Rough Walk", generate_random_walk(BENCH_SAMPLES, 2000, 2)),
        ("White Noise", generate_white_noise(BENCH_SAMPLES, 3)),
    ];

    let mut group = c.benchmark_group("Rice Codec");
    group.throughput(Throughput::Bytes((BENCH_SAMPLES * 4) as u64));

    for (label, tile) in &tiles {
        let mut compressed = vec![0u8; max_compressed_len::<i32>(tile.len(), BLOCK_SIZE)];
        let len = compress(tile, BLOCK_SIZE, &mut compressed).unwrap();
        compressed.truncate(len);

        group.bench_function(format!("Encode ({label})"), |b| {
            let mut out = vec![0u8; max_compressed_len::<i32>(tile.len(), BLOCK_SIZE)];
            b.iter(|| black_box(compress(black_box(tile), BLOCK_SIZE, &mut out)))
        });
        group.bench_function(format!("Decode ({label})"), |b| {
            let mut restored = vec![0i32; tile.len()];
            b.iter(|| black_box(decompress(black_box(&compressed), BLOCK_SIZE, &mut restored)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rice_codec);
criterion_main!(benches);
