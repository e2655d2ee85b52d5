// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use peniko::Color;
use touchchart_brush::{BrushProps, BrushState};
use touchchart_domain::{Axis, TouchEvent};
use touchchart_input::{BrushAdapter, ModalityProbe};

use crate::container::{
    ChartContainer, ContainerProps, DomainListener, GestureHandlers, listener_hooks,
};
use crate::node::{Node, NodeKind, SvgProps};
use crate::style::NativeStyle;

/// Key of the native group holding the selection and its handles.
pub const BRUSH_GROUP_KEY: &str = "brush-group";

/// Paint of the brush overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushStyle {
    /// Selection rectangle.
    pub selection: NativeStyle,
    /// Edge handles.
    pub handle: NativeStyle,
}

impl Default for BrushStyle {
    /// A faint black selection without outline, and invisible handles.
    fn default() -> Self {
        let transparent = Color::from_rgba8(0, 0, 0, 0);
        Self {
            selection: NativeStyle::default()
                .with_stroke(transparent)
                .with_fill(Color::from_rgba8(0, 0, 0, 255))
                .with_fill_opacity(0.1),
            handle: NativeStyle::default()
                .with_stroke(transparent)
                .with_fill(transparent),
        }
    }
}

/// Brush gesture state hosted by a container.
///
/// Applies every patch the adapter returns to its own [`BrushState`]. Moves
/// the throttle suppresses never reach the state.
pub struct BrushSession {
    adapter: BrushAdapter,
    props: BrushProps,
    state: BrushState,
    listener: Option<DomainListener>,
}

impl fmt::Debug for BrushSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrushSession")
            .field("adapter", &self.adapter)
            .field("props", &self.props)
            .field("state", &self.state)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl BrushSession {
    /// Creates a session with an idle state.
    #[must_use]
    pub fn new(adapter: BrushAdapter, props: BrushProps) -> Self {
        Self {
            adapter,
            props,
            state: BrushState::default(),
            listener: None,
        }
    }

    /// Reports every selected domain to `listener`.
    #[must_use]
    pub fn with_listener(mut self, listener: DomainListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Chart props.
    #[must_use]
    pub fn props(&self) -> &BrushProps {
        &self.props
    }

    /// Replaces the chart props, as after a re-render by the owner.
    pub fn set_props(&mut self, props: BrushProps) {
        self.props = props;
    }

    /// Session state.
    #[must_use]
    pub fn state(&self) -> &BrushState {
        &self.state
    }

    /// Mutable session state.
    pub fn state_mut(&mut self) -> &mut BrushState {
        &mut self.state
    }

    /// The dispatching adapter.
    #[must_use]
    pub fn adapter(&self) -> &BrushAdapter {
        &self.adapter
    }
}

impl GestureHandlers for BrushSession {
    fn on_touch_start(&mut self, event: &mut TouchEvent) {
        let mut hooks = listener_hooks(&mut self.listener);
        let m = self
            .adapter
            .on_touch_start(event, &self.props, &self.state, &mut hooks);
        self.state.apply(&m.patch);
    }

    fn on_touch_move(&mut self, event: &mut TouchEvent) {
        let mut hooks = listener_hooks(&mut self.listener);
        if let Some(m) = self
            .adapter
            .on_touch_move(event, &self.props, &self.state, &mut hooks)
        {
            self.state.apply(&m.patch);
        }
    }

    fn on_touch_end(&mut self, event: &mut TouchEvent) {
        let mut hooks = listener_hooks(&mut self.listener);
        let m = self
            .adapter
            .on_touch_end(event, &self.props, &self.state, &mut hooks);
        self.state.apply(&m.patch);
    }
}

/// A chart container that draws and drives a brush selection.
#[derive(Debug)]
pub struct BrushContainer {
    container: ChartContainer<BrushSession>,
    style: BrushStyle,
}

impl BrushContainer {
    /// Creates a brush container for the native view with tag `tag`.
    #[must_use]
    pub fn new(tag: u64, probe: &dyn ModalityProbe, props: BrushProps) -> Self {
        let session = BrushSession::new(BrushAdapter::new(probe), props);
        Self {
            container: ChartContainer::new(tag, session),
            style: BrushStyle::default(),
        }
    }

    /// Replaces the overlay paint.
    #[must_use]
    pub fn with_style(mut self, style: BrushStyle) -> Self {
        self.style = style;
        self
    }

    /// Overlay paint.
    #[must_use]
    pub fn style(&self) -> &BrushStyle {
        &self.style
    }

    /// The wrapped container.
    #[must_use]
    pub fn container(&self) -> &ChartContainer<BrushSession> {
        &self.container
    }

    /// The wrapped container, for responder and focus events.
    pub fn container_mut(&mut self) -> &mut ChartContainer<BrushSession> {
        &mut self.container
    }

    /// The brush session.
    #[must_use]
    pub fn session(&self) -> &BrushSession {
        self.container.handlers()
    }

    /// Renders the chart `children` followed by the brush overlay.
    #[must_use]
    pub fn render(&self, props: &ContainerProps, mut children: Vec<Node>) -> Node {
        children.push(Node::web("g").with_children(self.overlay()));
        self.container.render(props, native_children(children))
    }

    /// Selection and handle rectangles for the current state.
    fn overlay(&self) -> Vec<Node> {
        let session = self.session();
        let sel = session.state.selection.normalized();
        if sel.width() == 0.0 && sel.height() == 0.0 {
            return Vec::new();
        }
        let rect = |rect: Rect, style: &NativeStyle| {
            Node::new(NodeKind::Rect {
                rect,
                style: style.clone(),
            })
        };
        let mut nodes = Vec::with_capacity(5);
        nodes.push(rect(sel.to_rect(), &self.style.selection));

        let w = session.props.handle_width;
        let half = w / 2.0;
        let dimension = session.props.dimension;
        if dimension.includes(Axis::X) {
            for x in [sel.x1, sel.x2] {
                let r = Rect::new(x - half, sel.y1, x + half, sel.y2);
                nodes.push(rect(r, &self.style.handle));
            }
        }
        if dimension.includes(Axis::Y) {
            for y in [sel.y1, sel.y2] {
                let r = Rect::new(sel.x1, y - half, sel.x2, y + half);
                nodes.push(rect(r, &self.style.handle));
            }
        }
        nodes
    }
}

/// Replaces a trailing web `g` group with a native group keyed
/// [`BRUSH_GROUP_KEY`], keeping its children.
#[must_use]
pub fn native_children(mut children: Vec<Node>) -> Vec<Node> {
    if children.last().is_some_and(|n| n.is_web("g")) {
        if let Some(last) = children.pop() {
            children.push(
                Node::new(NodeKind::Group(SvgProps::default()))
                    .with_key(BRUSH_GROUP_KEY)
                    .with_children(last.children),
            );
        }
    }
    children
}
