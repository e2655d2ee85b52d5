// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Size;
use touchchart_domain::{Domain, Hooks, TouchEvent};

use crate::node::{Border, Node, NodeKind, SvgProps, ViewProps};
use crate::responder::{EventName, ResponderPolicy, TvEvent, TvEventKind};
use crate::style::NativeStyle;

/// An optional chart event callback.
pub type EventCallback = Box<dyn FnMut(&TouchEvent)>;

/// A listener for domains computed by a gesture.
pub type DomainListener = Box<dyn FnMut(&Domain)>;

/// Builds engine hooks around an optional boxed listener.
pub(crate) fn listener_hooks(listener: &mut Option<DomainListener>) -> Hooks<'_> {
    match listener {
        Some(f) => Hooks::notify_with(&mut **f),
        None => Hooks::none(),
    }
}

/// Gesture behavior a container forwards responder events to.
///
/// Every method defaults to doing nothing.
pub trait GestureHandlers {
    /// The container was granted the responder.
    fn on_touch_start(&mut self, event: &mut TouchEvent) {
        let _ = event;
    }

    /// A single touch moved.
    fn on_touch_move(&mut self, event: &mut TouchEvent) {
        let _ = event;
    }

    /// Exactly two touches moved.
    fn on_touch_pinch(&mut self, event: &mut TouchEvent) {
        let _ = event;
    }

    /// The responder was released or terminated.
    fn on_touch_end(&mut self, event: &mut TouchEvent) {
        let _ = event;
    }
}

impl GestureHandlers for () {}

/// Props the chart renders its container with.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerProps {
    /// Render as the chart's own touchable root; otherwise as a group inside
    /// a parent chart.
    pub standalone: bool,
    /// Accessible title.
    pub title: Option<String>,
    /// Accessible description.
    pub desc: Option<String>,
    /// Class name forwarded to the drawing root.
    pub class_name: Option<String>,
    /// Drawing size.
    pub size: Option<Size>,
    /// Paint props of the drawing root.
    pub style: NativeStyle,
    /// Group to render into when not standalone; a plain `G` if unset.
    pub group_component: Option<Node>,
}

impl Default for ContainerProps {
    fn default() -> Self {
        Self {
            standalone: true,
            title: None,
            desc: None,
            class_name: None,
            size: None,
            style: NativeStyle::default(),
            group_component: None,
        }
    }
}

/// Headless chart container.
///
/// Owns the responder wiring, the TV focus flag and the chart's optional
/// event callbacks. Gesture behavior comes from `H`.
pub struct ChartContainer<H = ()> {
    tag: u64,
    handlers: H,
    callbacks: HashMap<EventName, EventCallback>,
    policy: ResponderPolicy,
    focused: bool,
    mounted: bool,
}

impl<H: fmt::Debug> fmt::Debug for ChartContainer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let callbacks: Vec<_> = self.callbacks.keys().collect();
        f.debug_struct("ChartContainer")
            .field("tag", &self.tag)
            .field("handlers", &self.handlers)
            .field("callbacks", &callbacks)
            .field("policy", &self.policy)
            .field("focused", &self.focused)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl<H: GestureHandlers> ChartContainer<H> {
    /// Creates a container for the native view with tag `tag`.
    #[must_use]
    pub fn new(tag: u64, handlers: H) -> Self {
        Self {
            tag,
            handlers,
            callbacks: HashMap::new(),
            policy: ResponderPolicy::CHART,
            focused: false,
            mounted: false,
        }
    }

    /// Registers an optional event callback, replacing an earlier one.
    #[must_use]
    pub fn with_callback(mut self, name: EventName, callback: EventCallback) -> Self {
        self.set_callback(name, callback);
        self
    }

    /// Registers an optional event callback, returning the one it replaced.
    pub fn set_callback(
        &mut self,
        name: EventName,
        callback: EventCallback,
    ) -> Option<EventCallback> {
        self.callbacks.insert(name, callback)
    }

    /// Removes an optional event callback.
    pub fn remove_callback(&mut self, name: EventName) -> Option<EventCallback> {
        self.callbacks.remove(&name)
    }

    /// Native view tag.
    #[must_use]
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// Responder answers.
    #[must_use]
    pub fn policy(&self) -> ResponderPolicy {
        self.policy
    }

    /// Gesture behavior.
    #[must_use]
    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    /// Mutable gesture behavior.
    pub fn handlers_mut(&mut self) -> &mut H {
        &mut self.handlers
    }

    /// Returns `true` while the view holds TV focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Starts listening for TV remote events.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Stops listening for TV remote events.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Tracks focus from remote events addressed to this view.
    ///
    /// Ignored while unmounted.
    pub fn handle_tv_event(&mut self, event: &TvEvent) {
        if !self.mounted || event.tag != self.tag {
            return;
        }
        match event.kind {
            TvEventKind::Focus => self.focused = true,
            TvEventKind::Blur => self.focused = false,
            TvEventKind::Other => {}
        }
    }

    /// The container became the touch responder.
    pub fn grant(&mut self, event: &mut TouchEvent) {
        self.handlers.on_touch_start(event);
        self.call(EventName::TouchStart, event);
    }

    /// Active touches moved. Two touches are a pinch.
    pub fn responder_move(&mut self, event: &mut TouchEvent) {
        if event.touch_count() == 2 {
            self.handlers.on_touch_pinch(event);
            self.call(EventName::TouchPinch, event);
        } else {
            self.handlers.on_touch_move(event);
            self.call(EventName::TouchMove, event);
        }
    }

    /// All touches were lifted.
    pub fn release(&mut self, event: &mut TouchEvent) {
        self.end(event);
    }

    /// Another view took the responder.
    pub fn terminate(&mut self, event: &mut TouchEvent) {
        self.end(event);
    }

    fn end(&mut self, event: &mut TouchEvent) {
        self.handlers.on_touch_end(event);
        self.call(EventName::TouchEnd, event);
    }

    fn call(&mut self, name: EventName, event: &TouchEvent) {
        if let Some(callback) = self.callbacks.get_mut(&name) {
            callback(event);
        }
    }

    /// Renders the container around `children`.
    ///
    /// A standalone container is a touchable view holding the drawing root:
    /// title and description first, then the children, then the overlay
    /// portal. Otherwise the children go into the group component.
    #[must_use]
    pub fn render(&self, props: &ContainerProps, children: Vec<Node>) -> Node {
        let svg = SvgProps {
            class_name: props.class_name.clone(),
            size: props.size,
            style: props.style.clone(),
        };
        if !props.standalone {
            let mut group = props
                .group_component
                .clone()
                .unwrap_or_else(|| Node::new(NodeKind::Group(SvgProps::default())));
            if let NodeKind::Group(group_props) = &mut group.kind {
                *group_props = svg;
            }
            return group.with_children(children);
        }

        let mut inner = Vec::with_capacity(children.len() + 3);
        if let Some(text) = props.title.as_ref().filter(|t| !t.is_empty()) {
            inner.push(Node::new(NodeKind::Title {
                id: "title",
                text: text.clone(),
            }));
        }
        if let Some(text) = props.desc.as_ref().filter(|t| !t.is_empty()) {
            inner.push(Node::new(NodeKind::Desc {
                id: "desc",
                text: text.clone(),
            }));
        }
        inner.extend(children);
        inner.push(Node::new(NodeKind::Portal));

        let view = ViewProps {
            border: self.focused.then_some(Border::FOCUS),
            responder: self.policy,
            tv_selectable: true,
            sends_tv_touch_events: true,
        };
        Node::new(NodeKind::View(view))
            .with_children(alloc::vec![Node::new(NodeKind::Svg(svg)).with_children(inner)])
    }
}
