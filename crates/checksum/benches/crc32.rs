//! CRC-32 (IEEE) benchmarks.
//!
//! Run: `cargo bench -p checksum -- crc32`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p checksum -- crc32`

use checksum::{Checksum, Crc32};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 7] = [64, 256, 1024, 4096, 16384, 65536, 1048576];

/// Benchmark the one-shot slice-by-8 path.
fn bench_oneshot(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/oneshot");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32::checksum(data)));
    });
  }

  group.finish();
}

/// Benchmark streaming updates in small chunks.
///
/// Exercises the head/tail byte-wise phases far more often than the one-shot
/// path does.
fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/streaming");

  for chunk in [13usize, 64, 1024] {
    let data = vec![0xABu8; 65536];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_with_input(BenchmarkId::from_parameter(chunk), &data, |b, data| {
      b.iter(|| {
        let mut hasher = Crc32::new();
        for part in data.chunks(chunk) {
          hasher.update(part);
        }
        core::hint::black_box(hasher.finalize())
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_oneshot, bench_streaming);
criterion_main!(benches);
