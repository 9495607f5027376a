//! Criterion benchmarks for parameter mapping and the gain stage.
//!
//! Run with: cargo bench -p perilla-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use perilla_core::{GainStage, ParamSpec, Parameter, ParameterUnit, Processor};

const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn linear_param() -> Parameter {
    Parameter::new(
        ParamSpec::new("Gain", ParameterUnit::Generic, "Gain Param", 1.0).with_range(0.0, 5.0, 1.0),
    )
}

fn skewed_param() -> Parameter {
    Parameter::new(
        ParamSpec::new("Cutoff", ParameterUnit::Hertz, "Filter cutoff", 1000.0)
            .with_range(20.0, 20000.0, 1000.0)
            .with_skew(3.0),
    )
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parameter");

    let linear = linear_param();
    group.bench_function("normalize_linear", |b| {
        b.iter(|| black_box(linear.normalize(black_box(2.5))));
    });

    let skewed = skewed_param();
    group.bench_function("normalize_skewed", |b| {
        b.iter(|| black_box(skewed.normalize(black_box(1000.0))));
    });

    group.bench_function("denormalize_skewed", |b| {
        b.iter(|| black_box(skewed.denormalize(black_box(0.5))));
    });

    // Per-block cost on the audio thread
    group.bench_function("smooth", |b| {
        let mut param = linear_param();
        param.set_value(5.0);
        b.iter(|| {
            param.smooth();
            black_box(param.smoothed_value())
        });
    });

    group.finish();
}

fn bench_gain_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("GainStage");

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::new("process_block", block_size),
            &block_size,
            |b, &size| {
                let mut stage = GainStage::new();
                stage.set_gain(1.5);
                let mut left = vec![0.5f32; size];
                let mut right = vec![0.5f32; size];
                b.iter(|| {
                    let mut channels = [&mut left[..], &mut right[..]];
                    stage.process_block(black_box(&mut channels));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mapping, bench_gain_stage);
criterion_main!(benches);
