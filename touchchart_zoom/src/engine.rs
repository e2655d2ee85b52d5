// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use touchchart_domain::{
    Axis, Dimension, Domain, Hooks, Interval, Mutation, TouchEvent, WheelEvent, zoom_math,
};

use crate::screen::ScreenMetrics;
use crate::state::{ControlledProps, ZoomPatch, ZoomProps, ZoomState};

/// Pan and zoom handlers for one screen.
///
/// The engine holds nothing but the screen diagonal that pinch distances are
/// measured against. All gesture state lives in the host's [`ZoomState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomEngine {
    screen_diagonal: f64,
}

impl ZoomEngine {
    /// Creates an engine for a validated screen.
    #[must_use]
    pub fn new(screen: ScreenMetrics) -> Self {
        Self {
            screen_diagonal: screen.diagonal(),
        }
    }

    /// Diagonal that pinch distance changes are divided by.
    #[must_use]
    pub fn screen_diagonal(&self) -> f64 {
        self.screen_diagonal
    }

    /// Starts a single-touch pan at the event location.
    pub fn touch_start(
        &self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        _hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        event.prevent_default();
        if !props.allow_pan {
            return Mutation::none();
        }
        Mutation::parent(ZoomPatch {
            start: Some(event.location),
            panning: Some(true),
            original_domain: Some(state.original(props)),
            current_domain: Some(state.last_domain(props)),
            cached_zoom_domain: Some(props.zoom_domain),
            controlled: Some(ControlledProps::DOMAIN),
            ..ZoomPatch::default()
        })
    }

    /// Pans by the displacement since the last anchor.
    ///
    /// Ignored unless a pan is in progress and panning is allowed.
    pub fn touch_move(
        &self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        if !(state.panning && props.allow_pan) {
            return Mutation::none();
        }
        let at = event.location;
        let original = state.original(props);
        let last = state.last_domain(props);
        let dx = (state.start.x - at.x) / zoom_math::domain_scale(last.x, &props.scales.x);
        let dy = (at.y - state.start.y) / zoom_math::domain_scale(last.y, &props.scales.y);
        let current = per_axis(
            props.dimension,
            |axis| {
                let delta = match axis {
                    Axis::X => dx,
                    Axis::Y => dy,
                };
                zoom_math::pan_interval(last.axis(axis), original.axis(axis), delta)
            },
            |axis| original.axis(axis),
        );
        let callback = hooks.handle_animation();
        hooks.notify(&current);
        Mutation::parent(ZoomPatch {
            start: Some(at),
            ..ZoomPatch::zoomed(current, original, props)
        })
        .with_callback(callback)
    }

    /// Zooms around the wheel location.
    pub fn wheel(
        &self,
        event: &WheelEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        if !props.allow_zoom {
            return Mutation::none();
        }
        let factor = zoom_math::wheel_scale_factor(event.delta_y);
        let original = state.original(props);
        let last = state.last_domain(props);
        let current = Self::scale_domain(last, original, factor, event.location, props);
        let callback = hooks.handle_animation();
        hooks.notify(&current);
        Mutation::parent(ZoomPatch {
            panning: Some(false),
            ..ZoomPatch::zoomed(current, original, props)
        })
        .with_callback(callback)
    }

    /// Zooms by the change in two-finger distance.
    ///
    /// The first frame of a pinch only records the baseline distance and
    /// leaves the domain as it is.
    pub fn pinch(
        &self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        if !props.allow_zoom {
            return Mutation::none();
        }
        let original = state.original(props);
        let last = state
            .current_domain
            .or(props.zoom_domain)
            .unwrap_or(original);
        let factor = self.scale_factor(event, state);
        let current = Self::scale_domain(last, original, factor, event.location, props);
        let callback = hooks.handle_animation();
        let baseline = state
            .original_pinch_distance
            .filter(|d| *d != 0.0)
            .or_else(|| event.pinch_distance());
        hooks.notify(&current);
        Mutation::parent(ZoomPatch {
            panning: Some(false),
            original_pinch_distance: Some(baseline),
            ..ZoomPatch::zoomed(current, original, props)
        })
        .with_callback(callback)
    }

    /// Ends a pan or pinch.
    pub fn touch_end(
        &self,
        _event: &mut TouchEvent,
        _props: &ZoomProps,
        _state: &ZoomState,
        _hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        Mutation::parent(ZoomPatch {
            panning: Some(false),
            original_pinch_distance: Some(None),
            ..ZoomPatch::default()
        })
    }

    /// Pinch zoom factor for `event`.
    ///
    /// `1 - (current - baseline) / screen_diagonal`, or exactly `1.0` when no
    /// baseline has been recorded yet or the event lacks two touches.
    #[must_use]
    pub fn scale_factor(&self, event: &TouchEvent, state: &ZoomState) -> f64 {
        let baseline = match state.original_pinch_distance {
            Some(d) if d != 0.0 => d,
            _ => return 1.0,
        };
        match event.pinch_distance() {
            Some(current) => 1.0 - (current - baseline) / self.screen_diagonal,
            None => 1.0,
        }
    }

    /// Scales every active axis of `last` around the pixel `pivot`.
    fn scale_domain(
        last: Domain,
        original: Domain,
        factor: f64,
        pivot: Point,
        props: &ZoomProps,
    ) -> Domain {
        per_axis(
            props.dimension,
            |axis| {
                let position = match axis {
                    Axis::X => pivot.x,
                    Axis::Y => pivot.y,
                };
                let percent = zoom_math::scale_percent(
                    position,
                    props.scales.axis(axis),
                    original.axis(axis),
                );
                zoom_math::scale_interval(
                    last.axis(axis),
                    original.axis(axis),
                    factor,
                    percent,
                    props.minimum_zoom.axis(axis),
                )
            },
            |axis| last.axis(axis),
        )
    }
}

/// Builds a domain from `active` on the axes `dimension` includes and from
/// `inactive` on the others.
fn per_axis(
    dimension: Dimension,
    mut active: impl FnMut(Axis) -> Interval,
    mut inactive: impl FnMut(Axis) -> Interval,
) -> Domain {
    let mut pick = |axis| {
        if dimension.includes(axis) {
            active(axis)
        } else {
            inactive(axis)
        }
    };
    Domain::new(pick(Axis::X), pick(Axis::Y))
}
