// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touchchart Container: the headless chart container that touch gestures
//! enter through.
//!
//! A [`ChartContainer`] stands in for the native view a chart draws into. It
//! - answers the platform's touch responder questions with a fixed
//!   [`ResponderPolicy`];
//! - forwards grant, move, release and terminate to its [`GestureHandlers`],
//!   routing two-touch moves to the pinch handler, and then to any optional
//!   callback the chart registered for that [`EventName`];
//! - tracks TV focus from remote [`TvEvent`]s addressed to its own tag;
//! - renders a [`Node`] tree: a touchable view holding the drawing root, or
//!   a plain group when nested inside another chart.
//!
//! [`BrushSession`] and [`ZoomSession`] host the brush and zoom engines as
//! gesture handlers. [`BrushContainer`] decorates a container with the brush
//! overlay. [`NativeStyle::from_web`] turns web style records into typed
//! native paint.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use touchchart_brush::BrushProps;
//! use touchchart_container::{BRUSH_GROUP_KEY, BrushContainer, ContainerProps};
//! use touchchart_domain::{Domain, Interval, LinearScale, Scales, TouchEvent};
//! use touchchart_input::InputModality;
//!
//! let domain = Domain::new(Interval::new(0.0, 100.0), Interval::new(0.0, 100.0));
//! let props = BrushProps::new(
//!     domain,
//!     Scales::new(
//!         LinearScale::new(domain.x, (0.0, 100.0)),
//!         LinearScale::new(domain.y, (0.0, 100.0)),
//!     ),
//! );
//! let mut brush = BrushContainer::new(1, &InputModality::DirectTouch, props);
//!
//! let c = brush.container_mut();
//! c.grant(&mut TouchEvent::new(Point::new(10.0, 10.0), 0));
//! c.responder_move(&mut TouchEvent::new(Point::new(40.0, 30.0), 20));
//! c.release(&mut TouchEvent::new(Point::new(40.0, 30.0), 40));
//!
//! let tree = brush.render(&ContainerProps::default(), Vec::new());
//! assert!(tree.find_key(BRUSH_GROUP_KEY).is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod brush;
mod container;
mod node;
mod responder;
mod style;
mod zoom;

pub use brush::{BRUSH_GROUP_KEY, BrushContainer, BrushSession, BrushStyle, native_children};
pub use container::{
    ChartContainer, ContainerProps, DomainListener, EventCallback, GestureHandlers,
};
pub use node::{Border, Node, NodeKind, SvgProps, ViewProps};
pub use responder::{EventName, ResponderPolicy, TvEvent, TvEventKind};
pub use style::{DashArray, NativeStyle, StyleError, StyleValue, WebStyle};
pub use zoom::{ZoomContainer, ZoomSession};
