// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush handlers for direct touch.
//!
//! A touch that lands on a handle resizes the selection from the opposite
//! edge. A touch inside a partial selection drags it. Anywhere else a new
//! selection is drawn from the touch point.

use kurbo::Point;
use touchchart_domain::{Axis, DomainBox, Hooks, Mutation, TouchEvent, selection};

use crate::handles::Handles;
use crate::state::{BrushPatch, BrushProps, BrushState, resolve_domains};

/// Starts a resize, a drag or a new selection.
pub fn start(
    event: &mut TouchEvent,
    props: &BrushProps,
    state: &BrushState,
    _hooks: &mut Hooks<'_>,
) -> Mutation<BrushPatch> {
    event.prevent_default();
    if !props.allow_resize && !props.allow_drag {
        return Mutation::none();
    }
    let at = event.location;
    let (selected, current) = resolve_domains(props, state);
    let full_domain_box = state
        .full_domain_box
        .unwrap_or_else(|| props.domain_box(None));
    let domain_box = props.domain_box(Some(&current));
    let base = BrushPatch {
        domain_box: Some(domain_box),
        full_domain_box: Some(full_domain_box),
        current_domain: Some(current),
        cached_selected_domain: Some(selected),
        ..BrushPatch::default()
    };

    let handles = Handles::hit(at, &domain_box, props.dimension, props.handle_width);
    let patch = if !handles.is_empty() && props.allow_resize {
        BrushPatch {
            is_selecting: Some(true),
            active_handles: Some(handles),
            ..base
        }
        .with_selection(handles.anchor(&domain_box))
    } else if domain_box.contains(at) && current != props.domain {
        BrushPatch {
            is_panning: Some(props.allow_drag),
            start: Some(at),
            ..base
        }
        .with_selection(domain_box)
    } else if props.allow_resize {
        BrushPatch {
            is_selecting: Some(true),
            start: Some(at),
            active_handles: Some(Handles::drawing(props.dimension)),
            ..base
        }
        .with_selection(domain_box.collapse_to(at, props.dimension))
    } else {
        return Mutation::none();
    };
    Mutation::parent(patch)
}

/// Drags or reshapes the selection.
///
/// Ignored unless a gesture is in progress and the touch is inside the
/// selectable region.
pub fn move_to(
    event: &mut TouchEvent,
    props: &BrushProps,
    state: &BrushState,
    hooks: &mut Hooks<'_>,
) -> Mutation<BrushPatch> {
    if (!props.allow_resize && !props.allow_drag) || !(state.is_panning || state.is_selecting) {
        return Mutation::none();
    }
    let at = event.location;
    let full = state
        .full_domain_box
        .unwrap_or_else(|| props.domain_box(None));
    if !full.contains(at) {
        return Mutation::none();
    }

    let patch = if state.is_panning {
        let panned = pan_box(&state.selection, state.start, at, props);
        let clamped = panned.constrain(&full);
        let current = selection::bounds(&clamped, &props.scales);
        hooks.notify(&current);
        // The anchor only follows the touch while the box is clear of a wall.
        let start = Point::new(
            if panned.x2 >= full.x2 || panned.x1 <= full.x1 {
                state.start.x
            } else {
                at.x
            },
            if panned.y2 >= full.y2 || panned.y1 <= full.y1 {
                state.start.y
            } else {
                at.y
            },
        );
        BrushPatch {
            start: Some(start),
            current_domain: Some(current),
            ..BrushPatch::default()
        }
        .with_selection(clamped)
    } else {
        let handles = state.active_handles;
        let s = state.selection;
        let resized = DomainBox {
            x2: if handles.moves(Axis::X) { at.x } else { s.x2 },
            y2: if handles.moves(Axis::Y) { at.y } else { s.y2 },
            ..s
        };
        let current = selection::bounds(&resized, &props.scales);
        hooks.notify(&current);
        BrushPatch {
            x2: Some(resized.x2),
            y2: Some(resized.y2),
            current_domain: Some(current),
            ..BrushPatch::default()
        }
    };
    Mutation::parent(patch)
}

/// Ends the gesture.
///
/// A tap that left a zero-width or zero-height selection clears the
/// selection back to the whole domain.
pub fn end(
    _event: &mut TouchEvent,
    props: &BrushProps,
    state: &BrushState,
    hooks: &mut Hooks<'_>,
) -> Mutation<BrushPatch> {
    let mut patch = BrushPatch::neutral();
    let s = state.selection;
    if props.allow_resize && (s.x1 == s.x2 || s.y1 == s.y2) {
        patch.current_domain = Some(props.domain);
        hooks.notify(&props.domain);
    }
    Mutation::parent(patch)
}

/// Translates the normalized selection by the touch displacement on the
/// active axes.
fn pan_box(selection: &DomainBox, anchor: Point, at: Point, props: &BrushProps) -> DomainBox {
    let s = selection.normalized();
    let d = at - anchor;
    let (dx, dy) = (
        if props.dimension.includes(Axis::X) { d.x } else { 0.0 },
        if props.dimension.includes(Axis::Y) { d.y } else { 0.0 },
    );
    DomainBox {
        x1: s.x1 + dx,
        x2: s.x2 + dx,
        y1: s.y1 + dy,
        y2: s.y2 + dy,
    }
}
