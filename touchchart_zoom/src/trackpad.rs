// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom handlers for remote and trackpad input.
//!
//! A press only records the anchor. The first move decides what the gesture
//! is: a mostly horizontal move commits to panning, anything else to scaling.
//! Later moves pan, or zoom as if the vertical displacement from the anchor
//! were a wheel delta.

use touchchart_domain::{Hooks, Mutation, TouchEvent, WheelEvent};

use crate::engine::ZoomEngine;
use crate::state::{ControlledProps, ZoomPatch, ZoomProps, ZoomState};

impl ZoomEngine {
    /// Records the anchor without choosing between pan and zoom.
    pub fn trackpad_start(
        &self,
        event: &mut TouchEvent,
        _props: &ZoomProps,
        _state: &ZoomState,
        _hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        event.prevent_default();
        Mutation::parent(ZoomPatch {
            start: Some(event.location),
            panning: Some(false),
            scaling: Some(false),
            controlled: Some(ControlledProps::DOMAIN),
            ..ZoomPatch::default()
        })
    }

    /// Commits the gesture on its first move, then pans or zooms.
    pub fn trackpad_move(
        &self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        if state.panning {
            return self.touch_move(event, props, state, hooks);
        }
        let at = event.location;
        if state.scaling {
            let wheel = WheelEvent {
                location: at,
                delta_y: at.y - state.start.y,
            };
            return self.wheel(&wheel, props, state, hooks);
        }
        let d = at - state.start;
        let panning = d.x.abs() > d.y.abs();
        Mutation::parent(ZoomPatch {
            panning: Some(panning),
            scaling: Some(!panning),
            ..ZoomPatch::default()
        })
    }

    /// Ends the gesture, uncommitting it.
    pub fn trackpad_end(
        &self,
        _event: &mut TouchEvent,
        _props: &ZoomProps,
        _state: &ZoomState,
        _hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        Mutation::parent(ZoomPatch {
            panning: Some(false),
            scaling: Some(false),
            original_pinch_distance: Some(None),
            ..ZoomPatch::default()
        })
    }
}
