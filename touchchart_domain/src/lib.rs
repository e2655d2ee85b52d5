// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchchart Domain: the domain-math layer shared by the touch gesture engines.
//!
//! This crate provides small, headless models of chart domains and the
//! coordinate math that maps them to and from pixel space. It focuses on:
//! - Domain intervals (numeric or date-valued) and two-axis [`Domain`]s.
//! - [`DomainBox`] pixel rectangles, including the width-preserving clamp used
//!   by brush selections.
//! - [`LinearScale`] mapping between domain values and pixel ranges.
//! - Wheel/pan/scale math in [`zoom_math`], shared by every zoom gesture.
//! - The [`Mutation`] channel through which engines report partial state
//!   updates to their host.
//!
//! It does **not** own any gesture state. Engines built on top of this crate
//! receive the host's state by reference and answer with a patch.
//!
//! ## Minimal example
//!
//! ```rust
//! use touchchart_domain::{Domain, DomainBox, Interval, LinearScale, Scales, selection};
//!
//! let domain = Domain::new(Interval::new(0.0, 10.0), Interval::new(0.0, 10.0));
//! let scales = Scales::new(
//!     LinearScale::new(domain.x, (0.0, 100.0)),
//!     LinearScale::new(domain.y, (100.0, 0.0)),
//! );
//!
//! // Pixel box covering the whole domain.
//! let full = selection::project_domain(&scales, &domain).normalized();
//! assert_eq!(full, DomainBox { x1: 0.0, x2: 100.0, y1: 0.0, y2: 100.0 });
//!
//! // A selection box dragged partly outside is pulled back without shrinking.
//! let dragged = DomainBox { x1: 90.0, x2: 120.0, y1: 10.0, y2: 20.0 };
//! let clamped = dragged.constrain(&full);
//! assert_eq!(clamped.width(), 30.0);
//!
//! // Back to domain units.
//! let picked = selection::bounds(&clamped, &scales);
//! assert_eq!(picked.x.from, 7.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod domain_box;
mod event;
mod interval;
mod mutation;
mod scale;

pub mod selection;
pub mod zoom_math;

pub use config::{ConfigError, MinimumZoom};
pub use domain_box::DomainBox;
pub use event::{TouchEvent, Touches, WheelEvent};
pub use interval::{Axis, Dimension, Domain, Interval, ValueKind};
pub use mutation::{AnimationTimer, Callback, Hooks, Mutation, Patch, Target};
pub use scale::{LinearScale, Scales};
