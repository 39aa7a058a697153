// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Affine, Point, Rect};
use understory_gesture::{GestureConfig, GestureSample, GestureSession, compose, decompose};

/// A pinch-and-twist gesture drifting across the content.
fn pinch_samples(len: usize) -> Vec<GestureSample> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            GestureSample::at(Point::new(400.0 - 100.0 * t, 300.0 - 50.0 * t))
                .with_scale(1.0 + 3.0 * t)
                .with_rotation(0.01 + 1.5 * t)
        })
        .collect()
}

fn new_session() -> GestureSession<Rect> {
    let content = Rect::new(0.0, 0.0, 800.0, 600.0);
    let config = GestureConfig::default().with_content_size(content.size());
    GestureSession::with_content_space(config, content)
}

fn bench_session_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/session_update");

    for len in [16usize, 128, 1_024] {
        let samples = pinch_samples(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("pinch", len), &samples, |b, samples| {
            b.iter_batched(
                new_session,
                |mut session| {
                    session.start();
                    for sample in samples {
                        black_box(session.update(sample).ok());
                    }
                    black_box(session.end());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_compose_and_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/compose");
    let pivot = Point::new(120.0, 80.0);

    group.bench_function("scale_rotate_about", |b| {
        b.iter(|| {
            let m = compose::apply(
                compose::scale_about(black_box(1.01), pivot),
                black_box(Affine::IDENTITY),
            );
            black_box(compose::apply(compose::rotate_about(black_box(0.02), pivot), m))
        });
    });

    group.bench_function("decompose", |b| {
        let m = compose::rotate_about(0.4, pivot) * compose::scale_about(2.0, pivot);
        b.iter(|| black_box(decompose(black_box(m))));
    });

    group.finish();
}

criterion_group!(benches, bench_session_updates, bench_compose_and_decompose);
criterion_main!(benches);
