// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for brush box clamping and whole brush gestures.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use touchchart_brush::{BrushProps, BrushState, touch, trackpad};
use touchchart_domain::{Domain, DomainBox, Hooks, Interval, LinearScale, Scales, TouchEvent};

fn props() -> BrushProps {
    let d = Domain::new(Interval::new(0.0, 100.0), Interval::new(0.0, 100.0));
    BrushProps::new(
        d,
        Scales::new(
            LinearScale::new(d.x, (0.0, 400.0)),
            LinearScale::new(d.y, (400.0, 0.0)),
        ),
    )
}

fn bench_constrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("touchchart_brush_box");
    let full = DomainBox {
        x1: 0.0,
        x2: 400.0,
        y1: 0.0,
        y2: 400.0,
    };
    for (name, b) in [
        (
            "inside",
            DomainBox {
                x1: 50.0,
                x2: 150.0,
                y1: 50.0,
                y2: 150.0,
            },
        ),
        (
            "past_right_wall",
            DomainBox {
                x1: 350.0,
                x2: 450.0,
                y1: 50.0,
                y2: 150.0,
            },
        ),
    ] {
        group.bench_function(format!("constrain_{name}"), |bench| {
            bench.iter(|| black_box(black_box(b).constrain(&full)));
        });
    }
    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("touchchart_brush_gesture");
    let props = props();

    group.bench_function("touch_draw_64_moves", |b| {
        b.iter(|| {
            let mut state = BrushState::default();
            let mut ev = TouchEvent::new(Point::new(40.0, 40.0), 0);
            state.apply(&touch::start(&mut ev, &props, &state, &mut Hooks::none()).patch);
            for i in 0..64_u32 {
                let p = Point::new(40.0 + f64::from(i) * 4.0, 40.0 + f64::from(i) * 2.0);
                let mut ev = TouchEvent::new(p, 0);
                state.apply(&touch::move_to(&mut ev, &props, &state, &mut Hooks::none()).patch);
            }
            black_box(state)
        });
    });

    group.bench_function("trackpad_64_moves", |b| {
        b.iter(|| {
            let mut state = BrushState::default();
            let mut ev = TouchEvent::new(Point::new(200.0, 200.0), 0);
            state.apply(&trackpad::start(&mut ev, &props, &state, &mut Hooks::none()).patch);
            for i in 0..64_u32 {
                let mut ev = TouchEvent::new(Point::new(200.0 + f64::from(i), 190.0), 0);
                state.apply(&trackpad::move_to(&mut ev, &props, &state, &mut Hooks::none()).patch);
            }
            black_box(state)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_constrain, bench_gestures);
criterion_main!(benches);
