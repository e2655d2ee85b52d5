// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use touchchart_brush::{BrushPatch, BrushProps, BrushState};
use touchchart_domain::{Hooks, Mutation, TouchEvent, WheelEvent};
use touchchart_zoom::{ZoomEngine, ZoomPatch, ZoomProps, ZoomState};

use crate::modality::{InputModality, ModalityProbe};
use crate::strategy::{BrushStrategy, ZoomStrategy, brush_strategy, zoom_strategy};
use crate::throttle::{Admit, Throttle};
use crate::trace::{GestureCall, GestureTrace, NoopTrace, TraceOutcome, emit};

/// Snapshot of an adapter's dispatch state, for debugging overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterDebugInfo {
    /// Modality picked at construction.
    pub modality: InputModality,
    /// Throttle on single-touch moves.
    pub move_throttle: Throttle,
    /// Throttle on pinches, for zoom adapters.
    pub pinch_throttle: Option<Throttle>,
    /// Number of stored calls waiting for their window to close.
    pub pending_trailing: usize,
}

/// A throttled call slot: the throttle plus the event it deferred.
#[derive(Clone, Debug, Default)]
struct Gate {
    throttle: Throttle,
    deferred: Option<TouchEvent>,
}

impl Gate {
    fn new(throttle: Throttle) -> Self {
        Self {
            throttle,
            deferred: None,
        }
    }

    /// Admits `event`; returns it back only when it should run now.
    fn admit<'e, T: GestureTrace>(
        &mut self,
        event: &'e mut TouchEvent,
        call: GestureCall,
        trace: &mut T,
    ) -> Option<&'e mut TouchEvent> {
        let admit = self.throttle.admit(event.timestamp_ms);
        emit(trace, call, admit.into(), event.timestamp_ms);
        match admit {
            Admit::Run => Some(event),
            Admit::Defer => {
                self.deferred = Some(event.clone());
                None
            }
            Admit::Discard => None,
        }
    }

    /// Takes the deferred event if its window closed by `now_ms`.
    fn due<T: GestureTrace>(
        &mut self,
        now_ms: u64,
        call: GestureCall,
        trace: &mut T,
    ) -> Option<TouchEvent> {
        if !self.throttle.poll(now_ms) {
            return None;
        }
        let event = self.deferred.take()?;
        emit(trace, call, TraceOutcome::Replayed, now_ms);
        Some(event)
    }

    fn cancel(&mut self) {
        self.throttle.cancel();
        self.deferred = None;
    }

    fn pending(&self) -> usize {
        usize::from(self.deferred.is_some())
    }
}

/// Routes brush gestures to the handlers of one input modality.
///
/// Start and end pass straight through. Moves are throttled: a call the
/// throttle does not run returns `None`, so the host applies each patch once.
#[derive(Debug)]
pub struct BrushAdapter<T = NoopTrace> {
    strategy: &'static dyn BrushStrategy,
    moves: Gate,
    trace: T,
}

impl BrushAdapter {
    /// Creates an adapter for the modality `probe` reports.
    #[must_use]
    pub fn new(probe: &dyn ModalityProbe) -> Self {
        Self::with_strategy(brush_strategy(probe.modality()))
    }

    /// Creates an adapter around explicit handlers.
    #[must_use]
    pub fn with_strategy(strategy: &'static dyn BrushStrategy) -> Self {
        Self {
            strategy,
            moves: Gate::default(),
            trace: NoopTrace,
        }
    }
}

impl<T: GestureTrace> BrushAdapter<T> {
    /// Replaces the trace sink.
    #[must_use]
    pub fn with_trace<U: GestureTrace>(self, trace: U) -> BrushAdapter<U> {
        BrushAdapter {
            strategy: self.strategy,
            moves: self.moves,
            trace,
        }
    }

    /// Replaces the move throttle.
    #[must_use]
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.moves = Gate::new(throttle);
        self
    }

    /// Modality picked at construction.
    #[must_use]
    pub fn modality(&self) -> InputModality {
        self.strategy.modality()
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Mutable access to the trace sink.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Gesture start.
    pub fn on_touch_start(
        &mut self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        emit(
            &mut self.trace,
            GestureCall::BrushStart,
            TraceOutcome::Passed,
            event.timestamp_ms,
        );
        self.strategy.start(event, props, state, hooks)
    }

    /// Throttled gesture move; `None` when the call did not run.
    pub fn on_touch_move(
        &mut self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Option<Mutation<BrushPatch>> {
        let event = self
            .moves
            .admit(event, GestureCall::BrushMove, &mut self.trace)?;
        Some(self.strategy.move_to(event, props, state, hooks))
    }

    /// Gesture end. Drops any move still waiting for the trailing edge.
    pub fn on_touch_end(
        &mut self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        self.moves.cancel();
        emit(
            &mut self.trace,
            GestureCall::BrushEnd,
            TraceOutcome::Passed,
            event.timestamp_ms,
        );
        self.strategy.end(event, props, state, hooks)
    }

    /// Runs a deferred move whose window has closed by `now_ms`.
    pub fn poll_trailing(
        &mut self,
        now_ms: u64,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Option<Mutation<BrushPatch>> {
        let mut event = self
            .moves
            .due(now_ms, GestureCall::BrushMove, &mut self.trace)?;
        Some(self.strategy.move_to(&mut event, props, state, hooks))
    }

    /// Snapshot for debugging.
    #[must_use]
    pub fn debug_info(&self) -> AdapterDebugInfo {
        AdapterDebugInfo {
            modality: self.modality(),
            move_throttle: self.moves.throttle,
            pinch_throttle: None,
            pending_trailing: self.moves.pending(),
        }
    }
}

/// Routes zoom gestures to the handlers of one input modality.
///
/// Moves and pinches are throttled independently.
#[derive(Debug)]
pub struct ZoomAdapter<T = NoopTrace> {
    engine: ZoomEngine,
    strategy: &'static dyn ZoomStrategy,
    moves: Gate,
    pinches: Gate,
    trace: T,
}

impl ZoomAdapter {
    /// Creates an adapter for the modality `probe` reports.
    #[must_use]
    pub fn new(engine: ZoomEngine, probe: &dyn ModalityProbe) -> Self {
        Self::with_strategy(engine, zoom_strategy(probe.modality()))
    }

    /// Creates an adapter around explicit handlers.
    #[must_use]
    pub fn with_strategy(engine: ZoomEngine, strategy: &'static dyn ZoomStrategy) -> Self {
        Self {
            engine,
            strategy,
            moves: Gate::default(),
            pinches: Gate::default(),
            trace: NoopTrace,
        }
    }
}

impl<T: GestureTrace> ZoomAdapter<T> {
    /// Replaces the trace sink.
    #[must_use]
    pub fn with_trace<U: GestureTrace>(self, trace: U) -> ZoomAdapter<U> {
        ZoomAdapter {
            engine: self.engine,
            strategy: self.strategy,
            moves: self.moves,
            pinches: self.pinches,
            trace,
        }
    }

    /// Replaces both throttles with copies of `throttle`.
    #[must_use]
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.moves = Gate::new(throttle);
        self.pinches = Gate::new(throttle);
        self
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &ZoomEngine {
        &self.engine
    }

    /// Modality picked at construction.
    #[must_use]
    pub fn modality(&self) -> InputModality {
        self.strategy.modality()
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Mutable access to the trace sink.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Gesture start.
    pub fn on_touch_start(
        &mut self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        emit(
            &mut self.trace,
            GestureCall::ZoomStart,
            TraceOutcome::Passed,
            event.timestamp_ms,
        );
        self.strategy.start(&self.engine, event, props, state, hooks)
    }

    /// Throttled single-touch move; `None` when the call did not run.
    pub fn on_touch_move(
        &mut self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Option<Mutation<ZoomPatch>> {
        let event = self
            .moves
            .admit(event, GestureCall::ZoomMove, &mut self.trace)?;
        Some(
            self.strategy
                .move_to(&self.engine, event, props, state, hooks),
        )
    }

    /// Throttled pinch; `None` when the call did not run.
    pub fn on_touch_pinch(
        &mut self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Option<Mutation<ZoomPatch>> {
        let event = self
            .pinches
            .admit(event, GestureCall::ZoomPinch, &mut self.trace)?;
        Some(self.engine.pinch(event, props, state, hooks))
    }

    /// Routes a move with exactly two touches to the pinch path, and any
    /// other move to the single-touch path.
    pub fn on_multi_touch_move(
        &mut self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Option<Mutation<ZoomPatch>> {
        if event.touch_count() == 2 {
            self.on_touch_pinch(event, props, state, hooks)
        } else {
            self.on_touch_move(event, props, state, hooks)
        }
    }

    /// Wheel zoom; never throttled.
    pub fn on_wheel(
        &mut self,
        event: &WheelEvent,
        at_ms: u64,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        emit(
            &mut self.trace,
            GestureCall::ZoomWheel,
            TraceOutcome::Passed,
            at_ms,
        );
        self.engine.wheel(event, props, state, hooks)
    }

    /// Gesture end. Drops any move or pinch still waiting for the trailing
    /// edge.
    pub fn on_touch_end(
        &mut self,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        self.moves.cancel();
        self.pinches.cancel();
        emit(
            &mut self.trace,
            GestureCall::ZoomEnd,
            TraceOutcome::Passed,
            event.timestamp_ms,
        );
        self.strategy.end(&self.engine, event, props, state, hooks)
    }

    /// Runs one deferred move or pinch whose window has closed by `now_ms`.
    ///
    /// Moves are replayed before pinches. Apply the returned patch and poll
    /// again to drain both.
    pub fn poll_trailing(
        &mut self,
        now_ms: u64,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Option<Mutation<ZoomPatch>> {
        if let Some(mut event) = self
            .moves
            .due(now_ms, GestureCall::ZoomMove, &mut self.trace)
        {
            return Some(
                self.strategy
                    .move_to(&self.engine, &mut event, props, state, hooks),
            );
        }
        let mut event = self
            .pinches
            .due(now_ms, GestureCall::ZoomPinch, &mut self.trace)?;
        Some(self.engine.pinch(&mut event, props, state, hooks))
    }

    /// Snapshot for debugging.
    #[must_use]
    pub fn debug_info(&self) -> AdapterDebugInfo {
        AdapterDebugInfo {
            modality: self.modality(),
            move_throttle: self.moves.throttle,
            pinch_throttle: Some(self.pinches.throttle),
            pending_trailing: self.moves.pending() + self.pinches.pending(),
        }
    }
}
