//! Conversion Benchmarks
//!
//! Throughput of both conversion directions and of edit validation.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rgbhsl_core::{
    ConverterSession, HslColor, RgbChannel, RgbColor, hsl_to_rgb, parse_edit, rgb_to_hsl,
};

fn generate_rgb_colors(count: usize) -> Vec<RgbColor> {
    (0..count)
        .map(|i| RgbColor::new((i % 256) as u8, ((i * 37) % 256) as u8, ((i * 91) % 256) as u8))
        .collect()
}

fn generate_hsl_colors(count: usize) -> Vec<HslColor> {
    (0..count)
        .filter_map(|i| {
            HslColor::new((i % 361) as u16, ((i * 7) % 101) as u8, ((i * 13) % 101) as u8).ok()
        })
        .collect()
}

// ============================================================================
// Single Color
// ============================================================================

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    let rgb = RgbColor::new(200, 100, 50);
    let hsl = rgb_to_hsl(rgb);

    group.bench_function("rgb_to_hsl", |b| b.iter(|| rgb_to_hsl(black_box(rgb))));
    group.bench_function("hsl_to_rgb", |b| b.iter(|| hsl_to_rgb(black_box(hsl))));

    group.finish();
}

// ============================================================================
// Batches
// ============================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [100, 1000, 10000].iter() {
        let rgb = generate_rgb_colors(*size);
        let hsl = generate_hsl_colors(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("rgb_to_hsl", size), size, |b, _| {
            b.iter(|| {
                black_box(&rgb)
                    .iter()
                    .map(|&c| rgb_to_hsl(c))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("hsl_to_rgb", size), size, |b, _| {
            b.iter(|| {
                black_box(&hsl)
                    .iter()
                    .map(|&c| hsl_to_rgb(c))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

// ============================================================================
// Validation
// ============================================================================

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for raw in ["", "255", "256", "12.5", "abc"] {
        group.bench_with_input(BenchmarkId::new("parse_edit", raw), raw, |b, raw| {
            b.iter(|| parse_edit(RgbChannel::Red, black_box(raw)))
        });
    }

    group.bench_function("session_edit_and_convert", |b| {
        b.iter(|| {
            let mut session = ConverterSession::new();
            session.edit_rgb(RgbChannel::Red, black_box("255"));
            session.edit_rgb(RgbChannel::Green, black_box("128"));
            session.edit_rgb(RgbChannel::Blue, black_box("0"));
            session.convert_to_hsl()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch, bench_validation);

criterion_main!(benches);
