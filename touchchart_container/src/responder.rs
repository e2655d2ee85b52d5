// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Answers a chart container gives the platform's touch responder system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResponderPolicy {
    /// Become responder when a touch starts on the container.
    pub start_should_set: bool,
    /// Steal touch starts from children.
    pub start_should_set_capture: bool,
    /// Become responder when a touch moves over the container.
    pub move_should_set: bool,
    /// Steal touch moves from children.
    pub move_should_set_capture: bool,
    /// Block native scroll views while responding.
    pub block_native: bool,
    /// Hand over the responder when another view asks.
    pub termination_request: bool,
}

impl ResponderPolicy {
    /// Claims every gesture except a start that a child wants, and gives it
    /// up when asked.
    pub const CHART: Self = Self {
        start_should_set: true,
        start_should_set_capture: false,
        move_should_set: true,
        move_should_set_capture: true,
        block_native: true,
        termination_request: true,
    };
}

impl Default for ResponderPolicy {
    fn default() -> Self {
        Self::CHART
    }
}

/// Optional event callbacks a chart may register on its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    /// The container was granted the responder.
    TouchStart,
    /// A single touch moved.
    TouchMove,
    /// Exactly two touches moved.
    TouchPinch,
    /// The responder was released or terminated.
    TouchEnd,
}

impl EventName {
    /// The prop name charts use for this event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TouchStart => "onTouchStart",
            Self::TouchMove => "onTouchMove",
            Self::TouchPinch => "onTouchPinch",
            Self::TouchEnd => "onTouchEnd",
        }
    }

    /// Looks up an event by its prop name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::TouchStart,
            Self::TouchMove,
            Self::TouchPinch,
            Self::TouchEnd,
        ]
        .into_iter()
        .find(|e| e.as_str() == name)
    }
}

/// Kind of a TV remote event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TvEventKind {
    /// A view gained focus.
    Focus,
    /// A view lost focus.
    Blur,
    /// Any other remote event (select, swipes, presses).
    Other,
}

/// A TV remote event, addressed to the native view with tag `tag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TvEvent {
    /// Native view tag.
    pub tag: u64,
    /// What happened.
    pub kind: TvEventKind,
}
