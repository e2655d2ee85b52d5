// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush handlers for remote and trackpad input.
//!
//! A press starts a selection collapsed at the press point. Moving then
//! reshapes the horizontal bounds from both deltas at once: the horizontal
//! displacement plus the vertical one moves `x1`, their difference moves `x2`.
//! Vertical bounds are never touched by a move.

use touchchart_domain::{DomainBox, Hooks, Mutation, TouchEvent, selection};

use crate::state::{BrushPatch, BrushProps, BrushState, resolve_domains};

/// Starts a trackpad selection at the event location.
pub fn start(
    event: &mut TouchEvent,
    props: &BrushProps,
    state: &BrushState,
    _hooks: &mut Hooks<'_>,
) -> Mutation<BrushPatch> {
    event.prevent_default();
    let at = event.location;
    let (selected, current) = resolve_domains(props, state);
    let full_domain_box = state
        .full_domain_box
        .unwrap_or_else(|| props.domain_box(None));
    let domain_box = props
        .domain_box(Some(&current))
        .collapse_to(at, props.dimension);
    Mutation::parent(
        BrushPatch {
            is_selecting: Some(true),
            start: Some(at),
            domain_box: Some(domain_box),
            full_domain_box: Some(full_domain_box),
            current_domain: Some(current),
            cached_selected_domain: Some(selected),
            ..BrushPatch::default()
        }
        .with_selection(domain_box),
    )
}

/// Reshapes the selection; ignored until [`start`] has run.
pub fn move_to(
    event: &mut TouchEvent,
    props: &BrushProps,
    state: &BrushState,
    hooks: &mut Hooks<'_>,
) -> Mutation<BrushPatch> {
    if !state.is_selecting {
        return Mutation::none();
    }
    let base = state.domain_box.unwrap_or(state.selection);
    let full = state
        .full_domain_box
        .unwrap_or_else(|| props.domain_box(None));
    let dx = event.location.x - state.start.x;
    let dy = state.start.y - event.location.y;
    let moved = DomainBox {
        x1: base.x1 + dx + dy,
        x2: base.x2 + dx - dy,
        y1: base.y1,
        y2: base.y2,
    }
    .constrain(&full);
    let current = selection::bounds(&moved, &props.scales);
    hooks.notify(&current);
    Mutation::parent(BrushPatch {
        x1: Some(moved.x1),
        x2: Some(moved.x2),
        current_domain: Some(current),
        ..BrushPatch::default()
    })
}

/// Ends the gesture.
pub fn end(
    _event: &mut TouchEvent,
    _props: &BrushProps,
    _state: &BrushState,
    _hooks: &mut Hooks<'_>,
) -> Mutation<BrushPatch> {
    Mutation::parent(BrushPatch::neutral())
}
