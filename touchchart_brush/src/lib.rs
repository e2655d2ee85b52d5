// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchchart Brush: rectangular selection over one or two chart axes.
//!
//! The brush engine owns no state. Each handler receives the host's
//! [`BrushState`] and read-only [`BrushProps`] and answers with a
//! [`Mutation`](touchchart_domain::Mutation) whose [`BrushPatch`] the host
//! applies to its state before the next event.
//!
//! Two input modalities are supported:
//! - [`touch`]: direct touch. Draw a new selection, drag an existing one, or
//!   resize it by its edge handles.
//! - [`trackpad`]: remote and trackpad input. A press starts a selection and
//!   moves reshape it from the press point.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use touchchart_brush::{BrushProps, BrushState, trackpad};
//! use touchchart_domain::{Domain, Hooks, Interval, LinearScale, Scales, TouchEvent};
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
//!
//! let mut press = TouchEvent::new(Point::new(50.0, 50.0), 0);
//! let m = trackpad::start(&mut press, &props, &state, &mut Hooks::none());
//! state.apply(&m.patch);
//! assert!(state.is_selecting);
//!
//! let mut drag = TouchEvent::new(Point::new(60.0, 45.0), 16);
//! let m = trackpad::move_to(&mut drag, &props, &state, &mut Hooks::none());
//! state.apply(&m.patch);
//! assert_eq!((state.selection.x1, state.selection.x2), (65.0, 55.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod handles;
mod state;

pub mod touch;
pub mod trackpad;

pub use handles::Handles;
pub use state::{BrushPatch, BrushProps, BrushState, DEFAULT_HANDLE_WIDTH};
