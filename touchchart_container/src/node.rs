// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use peniko::Color;

use crate::responder::ResponderPolicy;
use crate::style::NativeStyle;

/// Border drawn around a focused container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Width in pixels.
    pub width: f64,
    /// Colour.
    pub color: Color,
}

impl Border {
    /// The focus highlight: 2 px of `#ccccff`.
    pub const FOCUS: Self = Self {
        width: 2.0,
        color: Color::from_rgb8(0xcc, 0xcc, 0xff),
    };
}

/// Props of the outer native view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewProps {
    /// Focus border, when focused.
    pub border: Option<Border>,
    /// Touch responder answers.
    pub responder: ResponderPolicy,
    /// The view can take TV focus.
    pub tv_selectable: bool,
    /// The view forwards remote touches as touch events.
    pub sends_tv_touch_events: bool,
}

/// Props shared by the SVG root and groups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgProps {
    /// Class name forwarded from the chart.
    pub class_name: Option<String>,
    /// Drawing size.
    pub size: Option<Size>,
    /// Paint props.
    pub style: NativeStyle,
}

/// What a [`Node`] draws.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Outer touchable view.
    View(ViewProps),
    /// SVG drawing root.
    Svg(SvgProps),
    /// Accessible title.
    Title {
        /// Element id.
        id: &'static str,
        /// Title text.
        text: String,
    },
    /// Accessible description.
    Desc {
        /// Element id.
        id: &'static str,
        /// Description text.
        text: String,
    },
    /// Mount point for tooltips and other overlays.
    Portal,
    /// Native `G` group.
    Group(SvgProps),
    /// Native rectangle.
    Rect {
        /// Geometry in chart pixels.
        rect: Rect,
        /// Paint props.
        style: NativeStyle,
    },
    /// A web element that has not been translated, by tag name.
    Web(String),
}

/// An element of the native drawing tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// What the node draws.
    pub kind: NodeKind,
    /// Reconciliation key.
    pub key: Option<Cow<'static, str>>,
    /// Child elements, in paint order.
    pub children: Vec<Self>,
}

impl Node {
    /// A childless, unkeyed node.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            children: Vec::new(),
        }
    }

    /// An untranslated web element.
    #[must_use]
    pub fn web(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Web(tag.into()))
    }

    /// Sets the key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Returns `true` for an untranslated web element named `tag`.
    #[must_use]
    pub fn is_web(&self, tag: &str) -> bool {
        matches!(&self.kind, NodeKind::Web(t) if t == tag)
    }

    /// First node keyed `key`, depth first.
    #[must_use]
    pub fn find_key(&self, key: &str) -> Option<&Self> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_key(key))
    }
}
