// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containers driven through the responder and focus entry points.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use touchchart_brush::BrushProps;
use touchchart_container::{
    BRUSH_GROUP_KEY, Border, BrushContainer, ContainerProps, EventName, Node, NodeKind, TvEvent,
    TvEventKind,
};
use touchchart_domain::{Domain, Interval, LinearScale, Scales, TouchEvent};
use touchchart_input::{InputModality, PlatformCapabilities};

fn props() -> BrushProps {
    let d = Domain::new(Interval::new(0.0, 100.0), Interval::new(0.0, 100.0));
    BrushProps::new(
        d,
        Scales::new(
            LinearScale::new(d.x, (0.0, 100.0)),
            LinearScale::new(d.y, (0.0, 100.0)),
        ),
    )
}

fn at(x: f64, y: f64, t: u64) -> TouchEvent {
    TouchEvent::new(Point::new(x, y), t)
}

#[test]
fn tv_brush_container_focuses_and_draws_remote_selection() {
    let tv = PlatformCapabilities { is_tv: true };
    let mut brush = BrushContainer::new(42, &tv, props());
    assert_eq!(
        brush.session().adapter().modality(),
        InputModality::Trackpad
    );

    let c = brush.container_mut();
    c.mount();
    c.handle_tv_event(&TvEvent {
        tag: 42,
        kind: TvEventKind::Focus,
    });
    c.grant(&mut at(50.0, 50.0, 0));
    c.responder_move(&mut at(60.0, 45.0, 20));
    assert!(c.handlers().state().is_selecting);

    let tree = brush.render(&ContainerProps::default(), vec![Node::web("path")]);
    let NodeKind::View(view) = &tree.kind else {
        panic!("standalone containers render a view");
    };
    assert_eq!(view.border, Some(Border::FOCUS));

    let group = tree.find_key(BRUSH_GROUP_KEY).unwrap();
    let NodeKind::Rect { rect, .. } = &group.children[0].kind else {
        panic!("the selection is drawn first");
    };
    assert_eq!((rect.x0, rect.x1), (55.0, 65.0));
}

#[test]
fn optional_callbacks_fire_after_the_brush_handlers() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut brush = BrushContainer::new(1, &InputModality::DirectTouch, props());
    for name in ["onTouchStart", "onTouchMove", "onTouchPinch", "onTouchEnd"] {
        let event = EventName::from_name(name).unwrap();
        let log = Rc::clone(&log);
        let _ = brush.container_mut().set_callback(
            event,
            Box::new(move |e: &TouchEvent| log.borrow_mut().push((event, e.touch_count()))),
        );
    }

    let c = brush.container_mut();
    c.grant(&mut at(10.0, 10.0, 0));
    c.responder_move(&mut at(30.0, 30.0, 20));
    c.responder_move(&mut TouchEvent::with_touches(
        [Point::new(30.0, 30.0), Point::new(60.0, 60.0)],
        40,
    ));
    c.release(&mut at(30.0, 30.0, 60));

    assert_eq!(
        *log.borrow(),
        [
            (EventName::TouchStart, 1),
            (EventName::TouchMove, 1),
            (EventName::TouchPinch, 2),
            (EventName::TouchEnd, 1),
        ]
    );
    // The brush ignores pinches; the single-touch drag stands.
    assert_eq!(brush.session().state().selection.x2, 30.0);
}

#[test]
fn nested_brush_keeps_overlay_in_the_group() {
    let brush = BrushContainer::new(1, &InputModality::DirectTouch, props());
    let nested = ContainerProps {
        standalone: false,
        ..ContainerProps::default()
    };
    let tree = brush.render(&nested, vec![Node::web("path")]);
    assert!(matches!(tree.kind, NodeKind::Group(_)));
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[1].key.as_deref(), Some(BRUSH_GROUP_KEY));
    // Idle brush: nothing to draw yet.
    assert!(tree.children[1].children.is_empty());
}
