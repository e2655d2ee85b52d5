// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchchart Input: routes gestures to the brush and zoom engines.
//!
//! The host's input modality is resolved once, through a [`ModalityProbe`],
//! when an adapter is built. The adapter then forwards each event to the
//! matching handler set:
//! - [`DirectTouch`]: fingers on the chart.
//! - [`Trackpad`]: a remote's touch surface, as found on TV platforms.
//!
//! Move and pinch handlers are rate limited by a [`Throttle`]. By default at
//! most one call runs per 16 ms window, on its leading edge, and the rest are
//! dropped. A [`ThrottlePolicy::LEADING_AND_TRAILING`] throttle keeps the last
//! suppressed call instead; the host replays it through `poll_trailing` once
//! the window has closed. Ending a gesture drops anything still pending.
//!
//! Every dispatch is reported to a [`GestureTrace`]. The default
//! [`NoopTrace`] does nothing; [`RecordingTrace`] keeps a log.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use touchchart_brush::{BrushProps, BrushState};
//! use touchchart_domain::{Domain, Hooks, Interval, LinearScale, Scales, TouchEvent};
//! use touchchart_input::{BrushAdapter, PlatformCapabilities};
//!
//! let domain = Domain::new(Interval::new(0.0, 100.0), Interval::new(0.0, 100.0));
//! let props = BrushProps::new(
//!     domain,
//!     Scales::new(
//!         LinearScale::new(domain.x, (0.0, 100.0)),
//!         LinearScale::new(domain.y, (0.0, 100.0)),
//!     ),
//! );
//! let mut state = BrushState::default();
//! let mut adapter = BrushAdapter::new(&PlatformCapabilities { is_tv: true });
//!
//! let mut press = TouchEvent::new(Point::new(50.0, 50.0), 0);
//! state.apply(&adapter.on_touch_start(&mut press, &props, &state, &mut Hooks::none()).patch);
//!
//! // Two moves inside one frame: only the first reaches the engine.
//! let mut a = TouchEvent::new(Point::new(60.0, 45.0), 100);
//! let mut b = TouchEvent::new(Point::new(70.0, 45.0), 108);
//! assert!(adapter.on_touch_move(&mut a, &props, &state, &mut Hooks::none()).is_some());
//! assert!(adapter.on_touch_move(&mut b, &props, &state, &mut Hooks::none()).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod modality;
mod strategy;
mod throttle;
mod trace;

pub use adapter::{AdapterDebugInfo, BrushAdapter, ZoomAdapter};
pub use modality::{InputModality, ModalityProbe, PlatformCapabilities};
pub use strategy::{
    BrushStrategy, DirectTouch, Trackpad, ZoomStrategy, brush_strategy, zoom_strategy,
};
pub use throttle::{Admit, DEFAULT_WINDOW_MS, Throttle, ThrottleError, ThrottlePolicy};
pub use trace::{GestureCall, GestureTrace, NoopTrace, RecordingTrace, TraceEntry, TraceOutcome};
