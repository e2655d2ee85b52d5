// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use touchchart_domain::{AnimationTimer, Hooks, Mutation, TouchEvent, WheelEvent};
use touchchart_input::{ModalityProbe, ZoomAdapter};
use touchchart_zoom::{ZoomEngine, ZoomPatch, ZoomProps, ZoomState};

use crate::container::{ChartContainer, DomainListener, GestureHandlers, listener_hooks};

/// A chart container driving pan and zoom.
pub type ZoomContainer = ChartContainer<ZoomSession>;

/// Zoom gesture state hosted by a container.
///
/// Applies every patch the adapter returns to its own [`ZoomState`], then
/// runs the mutation's callback against the session's animation timer.
pub struct ZoomSession {
    adapter: ZoomAdapter,
    props: ZoomProps,
    state: ZoomState,
    listener: Option<DomainListener>,
    timer: Option<Box<dyn AnimationTimer>>,
}

impl fmt::Debug for ZoomSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomSession")
            .field("adapter", &self.adapter)
            .field("props", &self.props)
            .field("state", &self.state)
            .field("listener", &self.listener.is_some())
            .field("timer", &self.timer.is_some())
            .finish()
    }
}

impl ZoomSession {
    /// Creates a session for the modality `probe` reports.
    #[must_use]
    pub fn new(engine: ZoomEngine, probe: &dyn ModalityProbe, props: ZoomProps) -> Self {
        Self {
            adapter: ZoomAdapter::new(engine, probe),
            props,
            state: ZoomState::default(),
            listener: None,
            timer: None,
        }
    }

    /// Reports every zoomed domain to `listener`.
    #[must_use]
    pub fn with_listener(mut self, listener: DomainListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Bypasses `timer`'s animation while a gesture runs.
    #[must_use]
    pub fn with_timer(mut self, timer: Box<dyn AnimationTimer>) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Chart props.
    #[must_use]
    pub fn props(&self) -> &ZoomProps {
        &self.props
    }

    /// Replaces the chart props, as after a re-render by the owner.
    pub fn set_props(&mut self, props: ZoomProps) {
        self.props = props;
    }

    /// Session state.
    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    /// The dispatching adapter.
    #[must_use]
    pub fn adapter(&self) -> &ZoomAdapter {
        &self.adapter
    }

    /// Zooms by a wheel step at host time `at_ms`.
    pub fn on_wheel(&mut self, event: &WheelEvent, at_ms: u64) {
        let mut hooks = session_hooks(&mut self.listener, &mut self.timer);
        let m = self
            .adapter
            .on_wheel(event, at_ms, &self.props, &self.state, &mut hooks);
        self.commit(m);
    }

    /// Replays a trailing move or pinch due by `now_ms`.
    pub fn poll_trailing(&mut self, now_ms: u64) {
        let mut hooks = session_hooks(&mut self.listener, &mut self.timer);
        if let Some(m) = self
            .adapter
            .poll_trailing(now_ms, &self.props, &self.state, &mut hooks)
        {
            self.commit(m);
        }
    }

    fn commit(&mut self, m: Mutation<ZoomPatch>) {
        self.state.apply(&m.patch);
        if let (Some(callback), Some(timer)) = (m.callback, self.timer.as_mut()) {
            callback.run(&mut **timer);
        }
    }
}

fn session_hooks<'a>(
    listener: &'a mut Option<DomainListener>,
    timer: &'a mut Option<Box<dyn AnimationTimer>>,
) -> Hooks<'a> {
    let hooks = listener_hooks(listener);
    match timer {
        Some(t) => hooks.with_timer(&mut **t),
        None => hooks,
    }
}

impl GestureHandlers for ZoomSession {
    fn on_touch_start(&mut self, event: &mut TouchEvent) {
        let mut hooks = session_hooks(&mut self.listener, &mut self.timer);
        let m = self
            .adapter
            .on_touch_start(event, &self.props, &self.state, &mut hooks);
        self.commit(m);
    }

    fn on_touch_move(&mut self, event: &mut TouchEvent) {
        let mut hooks = session_hooks(&mut self.listener, &mut self.timer);
        if let Some(m) = self
            .adapter
            .on_touch_move(event, &self.props, &self.state, &mut hooks)
        {
            self.commit(m);
        }
    }

    fn on_touch_pinch(&mut self, event: &mut TouchEvent) {
        let mut hooks = session_hooks(&mut self.listener, &mut self.timer);
        if let Some(m) = self
            .adapter
            .on_touch_pinch(event, &self.props, &self.state, &mut hooks)
        {
            self.commit(m);
        }
    }

    fn on_touch_end(&mut self, event: &mut TouchEvent) {
        let mut hooks = session_hooks(&mut self.listener, &mut self.timer);
        let m = self
            .adapter
            .on_touch_end(event, &self.props, &self.state, &mut hooks);
        self.commit(m);
    }
}
