// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-step zoom sessions against a host-owned state.

use kurbo::Point;
use touchchart_domain::{Domain, Hooks, Interval, LinearScale, Scales, TouchEvent, WheelEvent};
use touchchart_zoom::{ScreenMetrics, ZoomEngine, ZoomProps, ZoomState};

fn props() -> ZoomProps {
    let d = Domain::new(Interval::new(0.0, 1000.0), Interval::new(0.0, 1000.0));
    ZoomProps::new(
        d,
        Scales::new(
            LinearScale::new(d.x, (0.0, 200.0)),
            LinearScale::new(d.y, (200.0, 0.0)),
        ),
    )
}

fn engine() -> ZoomEngine {
    ZoomEngine::new(ScreenMetrics::new(600.0, 800.0).unwrap())
}

#[test]
fn pinch_then_release_then_pinch_again_rebases() {
    let engine = engine();
    let props = props();
    let mut state = ZoomState::default();
    let step = |state: &mut ZoomState, a: f64, b: f64| {
        let mut ev = TouchEvent::with_touches([Point::new(a, 100.0), Point::new(b, 100.0)], 0);
        let m = engine.pinch(&mut ev, &props, state, &mut Hooks::none());
        state.apply(&m.patch);
    };

    step(&mut state, 50.0, 100.0);
    step(&mut state, 50.0, 150.0);
    let after_first = state.current_domain.unwrap();
    assert!(after_first.x.range() < 1000.0);

    let mut end = TouchEvent::new(Point::new(50.0, 100.0), 0);
    state.apply(&engine.touch_end(&mut end, &props, &state, &mut Hooks::none()).patch);
    assert_eq!(state.original_pinch_distance, None);

    // A new pinch starts from a fresh baseline: its first frame is a no-op.
    step(&mut state, 10.0, 190.0);
    assert_eq!(state.current_domain, Some(after_first));
    assert_eq!(state.original_pinch_distance, Some(180.0));
}

#[test]
fn owner_reset_of_zoom_domain_wins_for_pan() {
    let engine = engine();
    let mut props = props();
    let mut state = ZoomState::default();

    let mut ev = TouchEvent::new(Point::new(100.0, 100.0), 0);
    state.apply(&engine.touch_start(&mut ev, &props, &state, &mut Hooks::none()).patch);
    state.current_domain = Some(Domain::new(
        Interval::new(100.0, 200.0),
        Interval::new(100.0, 200.0),
    ));

    let reset = Domain::new(Interval::new(500.0, 600.0), Interval::new(500.0, 600.0));
    props = props.with_zoom_domain(Some(reset));
    let mut ev = TouchEvent::new(Point::new(100.0, 100.0), 16);
    let m = engine.touch_move(&mut ev, &props, &state, &mut Hooks::none());
    assert_eq!(m.patch.current_domain, Some(reset));
    assert_eq!(m.patch.cached_zoom_domain, Some(Some(reset)));
}

#[test]
fn wheel_out_never_leaves_original_domain() {
    let engine = engine();
    let props = props();
    let mut state = ZoomState::default();
    for _ in 0..5 {
        let wheel = WheelEvent {
            location: Point::new(30.0, 170.0),
            delta_y: 300.0,
        };
        state.apply(&engine.wheel(&wheel, &props, &state, &mut Hooks::none()).patch);
    }
    assert_eq!(state.current_domain, Some(props.domain));
}

#[test]
fn cleared_then_restored_zoom_domain_resets_the_pan() {
    let engine = engine();
    let zoomed = Domain::new(Interval::new(500.0, 600.0), Interval::new(500.0, 600.0));
    let mut state = ZoomState::default();
    let pan = |state: &mut ZoomState, props: &ZoomProps| {
        let mut ev = TouchEvent::new(Point::new(100.0, 100.0), 0);
        let m = engine.touch_start(&mut ev, props, state, &mut Hooks::none());
        state.apply(&m.patch);
        // 6 px left at 2 px per unit.
        let mut ev = TouchEvent::new(Point::new(94.0, 100.0), 16);
        let m = engine.touch_move(&mut ev, props, state, &mut Hooks::none());
        state.apply(&m.patch);
    };

    let owned = props().with_zoom_domain(Some(zoomed));
    pan(&mut state, &owned);
    assert_eq!(state.current_domain.unwrap().x, Interval::new(503.0, 603.0));
    assert_eq!(state.cached_zoom_domain, Some(zoomed));

    pan(&mut state, &props());
    assert_eq!(state.current_domain.unwrap().x, Interval::new(506.0, 606.0));
    assert_eq!(state.cached_zoom_domain, None);

    // Handing back the same zoom domain is a reset, not a continuation.
    pan(&mut state, &owned);
    assert_eq!(state.current_domain.unwrap().x, Interval::new(503.0, 603.0));
}
