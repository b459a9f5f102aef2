//! Benchmarks for lzfactor factorization and codec throughput.
//!
//! Compares the two substring indexes across data patterns and sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzfactor::huffman::{decode_frame, encode_frame};
use lzfactor::{decompress_bytes, encode_tokens, CompressConfig, Compressor, Factorizer, IndexKind};

/// Generate random (incompressible) data
fn generate_random_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    let pattern = b"ABCDABCDABCDABCD";
    pattern.iter().cycle().take(size).copied().collect()
}

/// Generate DNA-like data (4 character alphabet, some patterns)
fn generate_dna_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let bases = [b'A', b'C', b'G', b'T'];
    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    // Mix of random and repetitive regions
    let mut i = 0;
    while data.len() < size {
        if i % 1000 == 0 && data.len() + 50 <= size {
            for _ in 0..5 {
                data.extend_from_slice(b"ATATATATAT");
            }
        } else {
            i.hash(&mut hasher);
            data.push(bases[(hasher.finish() % 4) as usize]);
        }
        i += 1;
    }
    data.truncate(size);
    data
}

fn bench_index_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_kinds");

    // The trie grows quadratically, so keep sizes small enough for it
    for size in [256, 1024, 4096].iter() {
        let data = generate_dna_data(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        for kind in [IndexKind::Trie, IndexKind::SuffixTree] {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &data, |b, data| {
                let factorizer = Factorizer::new(kind);
                b.iter(|| factorizer.compress(data).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_suffix_tree_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_tree");

    for size in [64 * 1024, 256 * 1024, 1024 * 1024].iter() {
        let data = generate_dna_data(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("dna_data", size), &data, |b, data| {
            let factorizer = Factorizer::new(IndexKind::SuffixTree);
            b.iter(|| factorizer.compress(data).unwrap());
        });
    }

    group.finish();
}

fn bench_data_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_patterns");
    let size = 256 * 1024;

    let random_data = generate_random_data(size);
    let repetitive_data = generate_repetitive_data(size);
    let dna_data = generate_dna_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    let patterns = [("random", &random_data), ("repetitive", &repetitive_data), ("dna", &dna_data)];
    for (name, data) in patterns {
        for entropy in [false, true] {
            let id = if entropy { format!("{}_entropy", name) } else { name.to_string() };
            let config = CompressConfig { entropy, ..Default::default() };
            group.bench_function(id, |b| {
                b.iter(|| {
                    let mut output = Vec::new();
                    Compressor::new(config.clone()).compress(data.as_slice(), &mut output).unwrap();
                    output
                });
            });
        }
    }

    group.finish();
}

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");
    let size = 256 * 1024;
    let data = generate_dna_data(size);

    let tokens = Factorizer::new(IndexKind::SuffixTree).compress(&data).unwrap();
    let raw = encode_tokens(&tokens).unwrap();
    let framed = encode_frame(&raw);

    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("reconstruct", |b| {
        b.iter(|| decompress_bytes(&raw).unwrap());
    });

    group.bench_function("reconstruct_entropy", |b| {
        b.iter(|| decompress_bytes(&framed).unwrap());
    });

    group.bench_function("huffman_frame", |b| {
        b.iter(|| decode_frame(&framed).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_index_kinds,
    bench_suffix_tree_sizes,
    bench_data_patterns,
    bench_decoding,
);
criterion_main!(benches);
