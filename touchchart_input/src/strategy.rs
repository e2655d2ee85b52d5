// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-modality handler sets.
//!
//! A strategy is picked once from the [`InputModality`] and shared as a
//! `&'static dyn` reference, so dispatch never re-checks the platform.

use core::fmt;

use touchchart_brush::{BrushPatch, BrushProps, BrushState};
use touchchart_domain::{Hooks, Mutation, TouchEvent};
use touchchart_zoom::{ZoomEngine, ZoomPatch, ZoomProps, ZoomState};

use crate::modality::InputModality;

/// Brush handlers for one input modality.
pub trait BrushStrategy: Sync {
    /// Modality these handlers serve.
    fn modality(&self) -> InputModality;

    /// Gesture start.
    fn start(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch>;

    /// Gesture move.
    fn move_to(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch>;

    /// Gesture end.
    fn end(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch>;
}

/// Zoom handlers for one input modality.
///
/// Pinch and wheel are the same for every modality and are called on the
/// engine directly.
pub trait ZoomStrategy: Sync {
    /// Modality these handlers serve.
    fn modality(&self) -> InputModality;

    /// Gesture start.
    fn start(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch>;

    /// Gesture move.
    fn move_to(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch>;

    /// Gesture end.
    fn end(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch>;
}

impl fmt::Debug for dyn BrushStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BrushStrategy")
            .field(&self.modality())
            .finish()
    }
}

impl fmt::Debug for dyn ZoomStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ZoomStrategy")
            .field(&self.modality())
            .finish()
    }
}

/// Direct-touch handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectTouch;

/// Remote and trackpad handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trackpad;

impl BrushStrategy for DirectTouch {
    fn modality(&self) -> InputModality {
        InputModality::DirectTouch
    }

    fn start(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        touchchart_brush::touch::start(event, props, state, hooks)
    }

    fn move_to(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        touchchart_brush::touch::move_to(event, props, state, hooks)
    }

    fn end(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        touchchart_brush::touch::end(event, props, state, hooks)
    }
}

impl BrushStrategy for Trackpad {
    fn modality(&self) -> InputModality {
        InputModality::Trackpad
    }

    fn start(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        touchchart_brush::trackpad::start(event, props, state, hooks)
    }

    fn move_to(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        touchchart_brush::trackpad::move_to(event, props, state, hooks)
    }

    fn end(
        &self,
        event: &mut TouchEvent,
        props: &BrushProps,
        state: &BrushState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<BrushPatch> {
        touchchart_brush::trackpad::end(event, props, state, hooks)
    }
}

impl ZoomStrategy for DirectTouch {
    fn modality(&self) -> InputModality {
        InputModality::DirectTouch
    }

    fn start(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        engine.touch_start(event, props, state, hooks)
    }

    fn move_to(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        engine.touch_move(event, props, state, hooks)
    }

    fn end(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        engine.touch_end(event, props, state, hooks)
    }
}

impl ZoomStrategy for Trackpad {
    fn modality(&self) -> InputModality {
        InputModality::Trackpad
    }

    fn start(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        engine.trackpad_start(event, props, state, hooks)
    }

    fn move_to(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        engine.trackpad_move(event, props, state, hooks)
    }

    fn end(
        &self,
        engine: &ZoomEngine,
        event: &mut TouchEvent,
        props: &ZoomProps,
        state: &ZoomState,
        hooks: &mut Hooks<'_>,
    ) -> Mutation<ZoomPatch> {
        engine.trackpad_end(event, props, state, hooks)
    }
}

/// The brush handlers for `modality`.
#[must_use]
pub fn brush_strategy(modality: InputModality) -> &'static dyn BrushStrategy {
    match modality {
        InputModality::DirectTouch => &DirectTouch,
        InputModality::Trackpad => &Trackpad,
    }
}

/// The zoom handlers for `modality`.
#[must_use]
pub fn zoom_strategy(modality: InputModality) -> &'static dyn ZoomStrategy {
    match modality {
        InputModality::DirectTouch => &DirectTouch,
        InputModality::Trackpad => &Trackpad,
    }
}

#[cfg(test)]
mod tests {
    use super::{brush_strategy, zoom_strategy};
    use crate::InputModality;

    #[test]
    fn strategies_match_modality() {
        for m in [InputModality::DirectTouch, InputModality::Trackpad] {
            assert_eq!(brush_strategy(m).modality(), m);
            assert_eq!(zoom_strategy(m).modality(), m);
        }
    }
}
