// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decimal Rendering - integer-only digit expansion vs. float formatting
// 2. Rounding - addend biasing across digit counts
// 3. Scaled Multiply-Divide - partitioning strategies vs. widened arithmetic
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qfixed::prelude::*;

// ============================================================================
// Decimal Rendering Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_format");

    let price = Q16_16::from_integer(510)
        .wrapping_mul_integer(3)
        .wrapping_div_integer(7);
    let price_f64 = 510.0 * 3.0 / 7.0;

    for digits in [1u32, 4, 6] {
        group.bench_with_input(
            BenchmarkId::new("FixedPoint", digits),
            &digits,
            |b, &digits| {
                b.iter(|| black_box(price).format(black_box(digits)));
            },
        );

        // Float formatting baseline for the same digit count
        group.bench_with_input(BenchmarkId::new("f64", digits), &digits, |b, &digits| {
            b.iter(|| format!("{:.*}", digits as usize, black_box(price_f64)));
        });
    }

    group.finish();
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");

    let price = Q16_16::from_integer(510)
        .wrapping_mul_integer(3)
        .wrapping_div_integer(7);

    for digits in [0u32, 2, 5] {
        group.bench_with_input(
            BenchmarkId::new("round_to_digits", digits),
            &digits,
            |b, &digits| {
                b.iter(|| black_box(price).round_to_digits(black_box(digits)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Scaled Multiply-Divide Benchmarks
// Strategies against the widened-arithmetic answer they approximate
// ============================================================================

fn benchmark_scaled_mul_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaled_mul_div_u16");

    let x: u16 = 65401;

    for strategy in [
        ScaleStrategy::DivideFirst,
        ScaleStrategy::SplitEdge,
        ScaleStrategy::SplitCenter,
    ] {
        group.bench_with_input(
            BenchmarkId::new("wrapping", format!("{:?}", strategy)),
            &strategy,
            |b, &strategy| {
                b.iter(|| black_box(x).wrapping_scaled_mul_div(16, 127, strategy));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("checked", format!("{:?}", strategy)),
            &strategy,
            |b, &strategy| {
                b.iter(|| black_box(x).scaled_mul_div(16, 127, strategy));
            },
        );
    }

    // Widened baseline: what the strategies avoid needing
    group.bench_function("widened_u32", |b| {
        b.iter(|| (black_box(x) as u32 * 16 / 127) as u16);
    });

    group.finish();

    let mut group = c.benchmark_group("scaled_mul_div_u64");
    let y: u64 = 18_000_000_000_000_000_000;

    group.bench_function("SplitEdge", |b| {
        b.iter(|| black_box(y).wrapping_scaled_mul_div(99_999, 900_000, ScaleStrategy::SplitEdge));
    });
    group.bench_function("widened_u128", |b| {
        b.iter(|| (black_box(y) as u128 * 99_999 / 900_000) as u64);
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_format,
    benchmark_rounding,
    benchmark_scaled_mul_div
);
criterion_main!(benches);
