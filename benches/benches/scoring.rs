// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summed-area neighbourhood lookups against the direct window scan.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use qalam_benches::{ring_template, traced_drawing};
use qalam_raster::{InkMask, NearInk};
use qalam_score::{InkTally, ScoreParams};

fn bench_tally(c: &mut Criterion) {
    let template = ring_template();
    let drawing = traced_drawing();
    let params = ScoreParams::default();

    let mut group = c.benchmark_group("tally_600");
    group.sample_size(10);
    group.bench_function("summed_area", |b| {
        b.iter(|| InkTally::measure(black_box(&template), black_box(&drawing), &params));
    });
    group.bench_function("brute_force", |b| {
        b.iter(|| InkTally::measure_brute(black_box(&template), black_box(&drawing), &params));
    });
    group.finish();
}

fn bench_near_ink(c: &mut Criterion) {
    let mask = InkMask::from_buffer(&ring_template(), 50);
    c.bench_function("near_ink_build_600", |b| {
        b.iter(|| NearInk::new(black_box(&mask)));
    });

    let near = NearInk::new(&mask);
    let mut group = c.benchmark_group("any_within_r40");
    group.bench_function("summed_area", |b| {
        b.iter(|| near.any_within(black_box(20), black_box(20), 40));
    });
    group.bench_function("brute_force", |b| {
        b.iter(|| mask.any_within_brute(black_box(20), black_box(20), 40));
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("render_drawing_600", |b| b.iter(traced_drawing));
}

criterion_group!(benches, bench_tally, bench_near_ink, bench_render);
criterion_main!(benches);
