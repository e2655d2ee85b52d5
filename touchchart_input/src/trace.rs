// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for adapter dispatch.
//!
//! Adapters report every call they receive, and what became of it, to a
//! [`GestureTrace`]. The default [`NoopTrace`] compiles away;
//! [`RecordingTrace`] keeps an in-memory log for tests and debugging
//! overlays. With the `tracing` feature the same events are also emitted as
//! `tracing` events at `TRACE` level.

use alloc::vec::Vec;

use crate::throttle::Admit;

/// A handler an adapter dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureCall {
    /// Brush gesture start.
    BrushStart,
    /// Brush gesture move.
    BrushMove,
    /// Brush gesture end.
    BrushEnd,
    /// Zoom gesture start.
    ZoomStart,
    /// Zoom gesture move.
    ZoomMove,
    /// Zoom wheel step.
    ZoomWheel,
    /// Two-finger pinch step.
    ZoomPinch,
    /// Zoom gesture end.
    ZoomEnd,
}

/// What an adapter did with a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceOutcome {
    /// Not throttled; dispatched directly.
    Passed,
    /// Throttled and run on the leading edge.
    Run,
    /// Throttled and kept for the trailing edge.
    Deferred,
    /// Throttled and dropped.
    Discarded,
    /// A deferred call run when its window closed.
    Replayed,
}

impl From<Admit> for TraceOutcome {
    fn from(admit: Admit) -> Self {
        match admit {
            Admit::Run => Self::Run,
            Admit::Defer => Self::Deferred,
            Admit::Discard => Self::Discarded,
        }
    }
}

/// A callback sink for adapter dispatch.
pub trait GestureTrace {
    /// Called once per call an adapter receives or replays.
    fn record(&mut self, call: GestureCall, outcome: TraceOutcome, at_ms: u64);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopTrace;

impl GestureTrace for NoopTrace {
    #[inline]
    fn record(&mut self, _call: GestureCall, _outcome: TraceOutcome, _at_ms: u64) {}
}

/// One recorded dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// Handler addressed.
    pub call: GestureCall,
    /// What happened to the call.
    pub outcome: TraceOutcome,
    /// Host timestamp of the call.
    pub at_ms: u64,
}

/// Keeps every recorded dispatch in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingTrace {
    entries: Vec<TraceEntry>,
}

impl RecordingTrace {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Number of entries for `call` that ended in `outcome`.
    #[must_use]
    pub fn count(&self, call: GestureCall, outcome: TraceOutcome) -> usize {
        self.entries
            .iter()
            .filter(|e| e.call == call && e.outcome == outcome)
            .count()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl GestureTrace for RecordingTrace {
    fn record(&mut self, call: GestureCall, outcome: TraceOutcome, at_ms: u64) {
        self.entries.push(TraceEntry {
            call,
            outcome,
            at_ms,
        });
    }
}

impl<T: GestureTrace + ?Sized> GestureTrace for &mut T {
    fn record(&mut self, call: GestureCall, outcome: TraceOutcome, at_ms: u64) {
        (**self).record(call, outcome, at_ms);
    }
}

/// Reports to `trace` and, when enabled, to `tracing`.
pub(crate) fn emit<T: GestureTrace>(
    trace: &mut T,
    call: GestureCall,
    outcome: TraceOutcome,
    at_ms: u64,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!(?call, ?outcome, at_ms, "gesture dispatch");
    trace.record(call, outcome, at_ms);
}

#[cfg(test)]
mod tests {
    use super::{GestureCall, GestureTrace, RecordingTrace, TraceOutcome};
    use crate::Admit;

    #[test]
    fn recording_counts_by_call_and_outcome() {
        let mut rec = RecordingTrace::new();
        rec.record(GestureCall::BrushMove, Admit::Run.into(), 0);
        rec.record(GestureCall::BrushMove, Admit::Discard.into(), 4);
        rec.record(GestureCall::BrushMove, Admit::Discard.into(), 8);
        rec.record(GestureCall::BrushEnd, TraceOutcome::Passed, 9);
        assert_eq!(rec.count(GestureCall::BrushMove, TraceOutcome::Discarded), 2);
        assert_eq!(rec.count(GestureCall::BrushMove, TraceOutcome::Run), 1);
        assert_eq!(rec.entries().len(), 4);
        rec.clear();
        assert!(rec.entries().is_empty());
    }
}
