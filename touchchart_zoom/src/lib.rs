// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchchart Zoom: pan, pinch, wheel and trackpad zoom for chart domains.
//!
//! [`ZoomEngine`] turns gesture events into [`ZoomPatch`]es against a
//! host-owned [`ZoomState`]. The engine keeps no state between calls beyond
//! the screen diagonal it was built with.
//!
//! Direct touch:
//! - [`ZoomEngine::touch_start`] and [`ZoomEngine::touch_move`] pan.
//! - [`ZoomEngine::pinch`] zooms by the change in two-finger distance,
//!   relative to the distance at the first pinch frame and normalised by the
//!   screen diagonal.
//! - [`ZoomEngine::touch_end`] clears the pan and the pinch baseline.
//!
//! Trackpad input uses the `trackpad_*` handlers, which decide between
//! panning and zooming on the first move.
//!
//! Every step that changes the domain marks it as
//! [`ControlledProps::DOMAIN`], reports it through
//! [`Hooks::notify`](touchchart_domain::Hooks::notify), and returns a
//! [`Callback::ResumeAnimation`](touchchart_domain::Callback) when an
//! animation timer was bypassed.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use touchchart_domain::{Domain, Hooks, Interval, LinearScale, Scales, TouchEvent};
//! use touchchart_zoom::{ScreenMetrics, ZoomEngine, ZoomProps, ZoomState};
//!
//! let domain = Domain::new(Interval::new(0.0, 100.0), Interval::new(0.0, 100.0));
//! let props = ZoomProps::new(
//!     domain,
//!     Scales::new(
//!         LinearScale::new(domain.x, (0.0, 100.0)),
//!         LinearScale::new(domain.y, (100.0, 0.0)),
//!     ),
//! );
//! let engine = ZoomEngine::new(ScreenMetrics::new(300.0, 400.0)?);
//! let mut state = ZoomState::default();
//!
//! let pinch = |a: f64, b: f64, t| {
//!     TouchEvent::with_touches([Point::new(a, 50.0), Point::new(b, 50.0)], t)
//! };
//!
//! // First frame: baseline only.
//! let m = engine.pinch(&mut pinch(50.0, 100.0, 0), &props, &state, &mut Hooks::none());
//! state.apply(&m.patch);
//! assert_eq!(state.current_domain, Some(domain));
//!
//! // Fingers spread: zoom in.
//! let m = engine.pinch(&mut pinch(50.0, 200.0, 16), &props, &state, &mut Hooks::none());
//! state.apply(&m.patch);
//! assert!(state.current_domain.unwrap().x.range() < 100.0);
//! # Ok::<(), touchchart_domain::ConfigError>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod engine;
mod screen;
mod state;
mod trackpad;

pub use engine::ZoomEngine;
pub use screen::ScreenMetrics;
pub use state::{ControlledProps, ZoomPatch, ZoomProps, ZoomState};
