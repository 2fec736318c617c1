// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for preview layout and display formatting.
//!
//! Measures the performance of:
//! - Two-pass constrained-aspect fitting
//! - Time readout formatting

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_glance::ui::preview::{layout, playback_bar};
use std::hint::black_box;

fn bench_fit_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_layout");

    let bounds = layout::bounding_box(Size::new(800.0, 650.0));
    let naturals = [
        Size::new(3840.0, 2160.0),
        Size::new(720.0, 1280.0),
        Size::new(320.0, 240.0),
    ];

    group.bench_function("fit_preview", |b| {
        b.iter(|| {
            for natural in naturals {
                black_box(layout::fit_preview(black_box(natural), bounds));
            }
        });
    });

    group.finish();
}

fn bench_format_clock(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_layout");

    group.bench_function("format_clock", |b| {
        b.iter(|| {
            for seconds in [0.0, 65.0, 600.0, 3661.5] {
                black_box(playback_bar::format_clock(black_box(seconds)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit_preview, bench_format_clock);
criterion_main!(benches);
