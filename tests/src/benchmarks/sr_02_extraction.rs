//! # SR-02 Field Extraction Benchmarks
//!
//! Extraction is linear in report size; the scaled group checks that it
//! stays that way as reports grow.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use sr_02_scan_extraction::{extract_fields, extract_scan_timestamps};

use crate::fixtures::RKHUNTER_REPORT;

pub fn bench_extract_fixture(c: &mut Criterion) {
    let mut group = c.benchmark_group("sr-02/fixture");
    group.throughput(Throughput::Bytes(RKHUNTER_REPORT.len() as u64));

    group.bench_function("extract_fields", |b| {
        b.iter(|| extract_fields(black_box(RKHUNTER_REPORT)))
    });
    group.bench_function("extract_scan_timestamps", |b| {
        b.iter(|| extract_scan_timestamps(black_box(RKHUNTER_REPORT)))
    });
    group.finish();
}

pub fn bench_extract_scaled(c: &mut Criterion) {
    let mut group = c.benchmark_group("sr-02/scaled");

    for copies in [1usize, 10, 100] {
        let report = RKHUNTER_REPORT.repeat(copies);
        group.throughput(Throughput::Bytes(report.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract_fields", copies), &report, |b, r| {
            b.iter(|| extract_fields(black_box(r)))
        });
    }
    group.finish();
}
