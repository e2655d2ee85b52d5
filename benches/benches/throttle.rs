// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for throttled dispatch through the input adapters.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use touchchart_brush::{BrushProps, BrushState};
use touchchart_domain::{Domain, Hooks, Interval, LinearScale, Scales, TouchEvent};
use touchchart_input::{BrushAdapter, InputModality, Throttle, ThrottlePolicy};

fn bench_throttle(c: &mut Criterion) {
    let mut group = c.benchmark_group("touchchart_throttle");

    for (name, policy) in [
        ("leading", ThrottlePolicy::LEADING),
        ("leading_and_trailing", ThrottlePolicy::LEADING_AND_TRAILING),
    ] {
        group.bench_function(format!("admit_1000_{name}"), |b| {
            b.iter_batched(
                || Throttle::new(16, policy).unwrap(),
                |mut t| {
                    for now in 0..1000_u64 {
                        black_box(t.admit(now));
                        black_box(t.poll(now));
                    }
                    t
                },
                BatchSize::SmallInput,
            );
        });
    }

    let d = Domain::new(Interval::new(0.0, 100.0), Interval::new(0.0, 100.0));
    let props = BrushProps::new(
        d,
        Scales::new(
            LinearScale::new(d.x, (0.0, 400.0)),
            LinearScale::new(d.y, (400.0, 0.0)),
        ),
    );
    group.bench_function("brush_adapter_burst_of_256", |b| {
        b.iter_batched(
            || {
                let mut adapter = BrushAdapter::new(&InputModality::Trackpad);
                let mut state = BrushState::default();
                let mut ev = TouchEvent::new(Point::new(200.0, 200.0), 0);
                let m = adapter.on_touch_start(&mut ev, &props, &state, &mut Hooks::none());
                state.apply(&m.patch);
                (adapter, state)
            },
            |(mut adapter, mut state)| {
                for t in 0..256_u64 {
                    let mut ev = TouchEvent::new(Point::new(200.0 + t as f64, 200.0), t);
                    if let Some(m) =
                        adapter.on_touch_move(&mut ev, &props, &state, &mut Hooks::none())
                    {
                        state.apply(&m.patch);
                    }
                }
                black_box(state)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_throttle);
criterion_main!(benches);
