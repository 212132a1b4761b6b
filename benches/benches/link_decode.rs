//! Benchmark suite for link string decoding
//!
//! This benchmark measures decode and encode throughput over synthetic link
//! strings and helps identify hot paths in the payload extraction.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use itemstring_benches::{generate_link, generate_markup_link, runs};
use itemstring_types::link::ItemString;
use std::hint::black_box;

/// Benchmark decoding bare payloads with varying bonus counts
fn bench_decode_bare(c: &mut Criterion) {
	let mut group = c.benchmark_group("link_decode_bare");

	let cases = [
		("no_bonus", runs::NONE),
		("typical", runs::TYPICAL),
		("heavy", runs::HEAVY),
	];

	for (name, bonus_ids) in cases {
		let link = generate_link(128955, bonus_ids);
		group.throughput(Throughput::Bytes(link.len() as u64));
		group.bench_with_input(BenchmarkId::new("decode", name), &link, |b, link| {
			b.iter(|| {
				let record = ItemString::parse(black_box(link));
				black_box(record)
			});
		});
	}

	group.finish();
}

/// Benchmark decoding decorated markup links
fn bench_decode_markup(c: &mut Criterion) {
	let mut group = c.benchmark_group("link_decode_markup");

	let link = generate_markup_link(&generate_link(128955, runs::TYPICAL));
	group.throughput(Throughput::Bytes(link.len() as u64));
	group.bench_function("decode", |b| {
		b.iter(|| {
			let record = ItemString::parse(black_box(&link));
			black_box(record)
		});
	});

	group.finish();
}

/// Benchmark decoding into a recycled record
fn bench_decode_recycled(c: &mut Criterion) {
	let mut group = c.benchmark_group("link_decode_recycled");

	let link = generate_link(128955, runs::TYPICAL);
	group.throughput(Throughput::Bytes(link.len() as u64));
	group.bench_function("parse_into", |b| {
		let mut record = ItemString::new();
		b.iter(|| {
			record.parse_into(black_box(&link));
			black_box(&record);
		});
	});

	group.finish();
}

/// Benchmark re-encoding decoded records
fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("link_encode");

	let record = ItemString::parse(&generate_link(128955, runs::HEAVY));
	group.bench_function("encode", |b| {
		b.iter(|| {
			let encoded = black_box(&record).encode();
			black_box(encoded)
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_decode_bare,
	bench_decode_markup,
	bench_decode_recycled,
	bench_encode
);
criterion_main!(benches);
