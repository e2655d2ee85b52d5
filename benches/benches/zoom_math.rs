// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the per-axis zoom math and whole pinch/wheel steps.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use touchchart_domain::zoom_math::{pan_interval, scale_interval, wheel_scale_factor};
use touchchart_domain::{Domain, Hooks, Interval, LinearScale, Scales, TouchEvent, WheelEvent};
use touchchart_zoom::{ScreenMetrics, ZoomEngine, ZoomProps, ZoomState};

fn props() -> ZoomProps {
    let d = Domain::new(Interval::new(0.0, 1000.0), Interval::new(0.0, 1000.0));
    ZoomProps::new(
        d,
        Scales::new(
            LinearScale::new(d.x, (0.0, 400.0)),
            LinearScale::new(d.y, (400.0, 0.0)),
        ),
    )
}

fn bench_interval_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("touchchart_zoom_math");
    let original = Interval::new(0.0, 1000.0);

    for &factor in &[0.5_f64, 0.95, 1.05, 1.5] {
        group.bench_with_input(
            BenchmarkId::new("scale_interval", factor),
            &factor,
            |b, &factor| {
                let current = Interval::new(200.0, 600.0);
                b.iter(|| {
                    black_box(scale_interval(
                        black_box(current),
                        original,
                        factor,
                        0.25,
                        None,
                    ))
                });
            },
        );
    }

    group.bench_function("pan_interval", |b| {
        let current = Interval::new(200.0, 600.0);
        b.iter(|| black_box(pan_interval(black_box(current), original, black_box(37.5))));
    });

    group.bench_function("wheel_scale_factor", |b| {
        b.iter(|| black_box(wheel_scale_factor(black_box(-42.0))));
    });

    group.finish();
}

fn bench_engine_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("touchchart_zoom_engine");
    let engine = ZoomEngine::new(ScreenMetrics::new(1080.0, 1920.0).unwrap());
    let props = props();

    group.bench_function("pinch_step", |b| {
        let state = ZoomState {
            original_pinch_distance: Some(120.0),
            ..ZoomState::default()
        };
        b.iter(|| {
            let mut ev =
                TouchEvent::with_touches([Point::new(100.0, 200.0), Point::new(260.0, 200.0)], 0);
            black_box(engine.pinch(&mut ev, &props, &state, &mut Hooks::none()))
        });
    });

    group.bench_function("wheel_step", |b| {
        let state = ZoomState::default();
        let wheel = WheelEvent {
            location: Point::new(150.0, 150.0),
            delta_y: -30.0,
        };
        b.iter(|| black_box(engine.wheel(&wheel, &props, &state, &mut Hooks::none())));
    });

    group.bench_function("pan_session_64_moves", |b| {
        b.iter(|| {
            let mut state = ZoomState::default();
            let mut ev = TouchEvent::new(Point::new(200.0, 200.0), 0);
            state.apply(&engine.touch_start(&mut ev, &props, &state, &mut Hooks::none()).patch);
            for i in 0..64_u32 {
                let mut ev = TouchEvent::new(Point::new(200.0 - f64::from(i), 200.0), 0);
                let m = engine.touch_move(&mut ev, &props, &state, &mut Hooks::none());
                state.apply(&m.patch);
            }
            black_box(state)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_interval_math, bench_engine_steps);
criterion_main!(benches);
