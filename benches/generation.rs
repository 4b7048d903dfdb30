// benches/generation.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Measures record generation throughput across line lengths, without the
// file-writing path.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use workload_gen::{LineGenerator, WorkloadConfig};

fn line_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_generation");

    for &line_length in &[16usize, 100, 1024] {
        let config = WorkloadConfig {
            lines: u64::MAX, // never completes within a benchmark run
            line_length,
            seed: Some(42),
        };
        let mut generator = LineGenerator::new(&config).unwrap();
        let mut buf = vec![0u8; generator.record_len()];

        group.throughput(Throughput::Bytes(generator.record_len() as u64));
        group.bench_function(format!("line_length_{line_length}"), |b| {
            b.iter(|| black_box(generator.fill_line(&mut buf)))
        });
    }

    group.finish();
}

criterion_group!(benches, line_generation);
criterion_main!(benches);
