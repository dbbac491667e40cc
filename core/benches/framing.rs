//! Framing benchmarks: block write and slice throughput at various payload
//! sizes and alignments.

use std::hint::black_box;

use blockframe_core::constants::NO_ALIGNMENT;
use blockframe_core::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 5] = [64, 1024, 10_240, 102_400, 1_048_576];
const BLOCKS: usize = 16;

/// Benchmark writing `BLOCKS` blocks into a reused buffer.
fn bench_write_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_blocks");

    for size in SIZES {
        let payload = vec![0xABu8; size];
        group.throughput(Throughput::Bytes((size * BLOCKS) as u64));

        for align in [NO_ALIGNMENT, 64] {
            let id = BenchmarkId::new(format!("align_{align}"), size);
            group.bench_with_input(id, &payload, |b, payload| {
                let mut buf = Vec::with_capacity((size + 128) * BLOCKS);
                b.iter(|| {
                    buf.clear();
                    let mut writer = BlockWriter::new(&mut buf);
                    for _ in 0..BLOCKS {
                        writer.write_block(black_box(payload), align).unwrap();
                    }
                    black_box(writer.bytes_written());
                });
            });
        }
    }

    group.finish();
}

/// Benchmark slicing a pre-encoded stream of `BLOCKS` blocks.
fn bench_slice_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_blocks");

    for size in SIZES {
        let payload = vec![0xABu8; size];
        let mut encoded = Vec::new();
        let mut writer = BlockWriter::new(&mut encoded);
        for _ in 0..BLOCKS {
            writer.write_block(&payload, 64).unwrap();
        }

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| {
                let mut total = 0usize;
                for payload in BlockSlicer::new(black_box(encoded)) {
                    total += payload.unwrap().len();
                }
                black_box(total);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_blocks, bench_slice_blocks);
criterion_main!(benches);
