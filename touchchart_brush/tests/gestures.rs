// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-gesture runs against a host-owned brush state.

use kurbo::Point;
use touchchart_brush::{BrushPatch, BrushProps, BrushState, touch, trackpad};
use touchchart_domain::{Domain, Hooks, Interval, LinearScale, Mutation, Scales, TouchEvent};

type Handler =
    fn(&mut TouchEvent, &BrushProps, &BrushState, &mut Hooks<'_>) -> Mutation<BrushPatch>;

struct Host {
    props: BrushProps,
    state: BrushState,
    reported: Vec<Domain>,
}

impl Host {
    fn new() -> Self {
        let domain = Domain::new(Interval::new(0.0, 10.0), Interval::new(0.0, 10.0));
        Self {
            props: BrushProps::new(
                domain,
                Scales::new(
                    LinearScale::new(domain.x, (0.0, 100.0)),
                    LinearScale::new(domain.y, (100.0, 0.0)),
                ),
            ),
            state: BrushState::default(),
            reported: Vec::new(),
        }
    }

    fn send(&mut self, handler: Handler, x: f64, y: f64) -> Mutation<BrushPatch> {
        let mut event = TouchEvent::new(Point::new(x, y), 0);
        let reported = &mut self.reported;
        let mut listener = |d: &Domain| reported.push(*d);
        let m = handler(
            &mut event,
            &self.props,
            &self.state,
            &mut Hooks::notify_with(&mut listener),
        );
        self.state.apply(&m.patch);
        m
    }
}

#[test]
fn trackpad_gesture_reports_each_move_and_ends_neutral() {
    let mut host = Host::new();
    host.send(trackpad::start, 50.0, 50.0);
    host.send(trackpad::move_to, 60.0, 45.0);
    host.send(trackpad::move_to, 62.0, 45.0);
    assert_eq!(host.reported.len(), 2);
    assert_eq!((host.state.selection.x1, host.state.selection.x2), (67.0, 57.0));

    let m = host.send(trackpad::end, 62.0, 45.0);
    assert_eq!(m.patch, BrushPatch::neutral());
    assert!(!host.state.is_selecting);

    // Moves after the end are ignored again.
    assert!(host.send(trackpad::move_to, 70.0, 45.0).is_noop());
}

#[test]
fn direct_touch_selection_maps_back_to_domain() {
    let mut host = Host::new();
    host.send(touch::start, 20.0, 80.0);
    host.send(touch::move_to, 60.0, 40.0);
    host.send(touch::end, 60.0, 40.0);

    let current = host.state.current_domain.unwrap();
    assert_eq!(current.x, Interval::new(2.0, 6.0));
    assert_eq!(current.y, Interval::new(2.0, 6.0));
    assert_eq!(host.reported.last(), Some(&current));
}

#[test]
fn next_gesture_continues_from_own_selection() {
    let mut host = Host::new();
    host.send(touch::start, 20.0, 80.0);
    host.send(touch::move_to, 60.0, 40.0);
    host.send(touch::end, 60.0, 40.0);

    // Inside the selection: a drag, not a new selection.
    host.send(touch::start, 40.0, 60.0);
    assert!(host.state.is_panning);
    host.send(touch::move_to, 50.0, 60.0);
    let current = host.state.current_domain.unwrap();
    assert_eq!(current.x, Interval::new(3.0, 7.0));
}

#[test]
fn owner_reset_wins_over_own_selection() {
    let mut host = Host::new();
    host.send(touch::start, 20.0, 80.0);
    host.send(touch::move_to, 60.0, 40.0);
    host.send(touch::end, 60.0, 40.0);

    let reset = Domain::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0));
    host.props = host.props.with_selected_domain(Some(reset));
    host.send(touch::start, 40.0, 60.0);
    // The owner's tiny selection does not contain the touch: new selection.
    assert!(host.state.is_selecting);
    assert_eq!(host.state.cached_selected_domain, Some(reset));
}
