//! Benchmarks for filtering, Burg estimation and extrapolation.
//!
//! Run with: cargo bench -p sensorcast-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sensorcast_math::ar::burg;
use sensorcast_math::extrapolation::{ArExtrapolator, Extrapolator};
use sensorcast_math::filter::FilterSpec;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn daily_signal(len: usize) -> Vec<f64> {
    // 15-second samples: 5760 per day
    (0..len)
        .map(|n| {
            let t = n as f64 / 5760.0;
            10.0 + 5.0 * (2.0 * std::f64::consts::PI * t).sin() + 0.3 * (n as f64 * 1.7).sin()
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_fir(c: &mut Criterion) {
    let mut group = c.benchmark_group("fir_lowpass");
    let filter = FilterSpec::new(1.0 / 15.0, 1.0 / 15.0 / 8640.0 * 100.0)
        .unwrap()
        .design()
        .unwrap();

    for len in [1_000, 10_000, 50_000] {
        let signal = daily_signal(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &signal, |b, s| {
            b.iter(|| filter.apply(black_box(s)));
        });
    }
    group.finish();
}

fn bench_burg(c: &mut Criterion) {
    let mut group = c.benchmark_group("burg");
    group.sample_size(20);
    let signal = daily_signal(5_000);

    for order in [200, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| burg(black_box(&signal), order).unwrap());
        });
    }
    group.finish();
}

fn bench_extrapolation(c: &mut Criterion) {
    let signal = daily_signal(5_000);
    let model = burg(&signal, 200).unwrap();
    let extrapolator = ArExtrapolator::new(&model);

    c.bench_function("ar_extend_5760", |b| {
        b.iter(|| extrapolator.extend(black_box(&signal), 5760).unwrap());
    });
}

criterion_group!(benches, bench_fir, bench_burg, bench_extrapolation);
criterion_main!(benches);
