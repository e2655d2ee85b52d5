// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use touchchart_domain::{Dimension, Domain, MinimumZoom, Patch, Scales, zoom_math};

bitflags::bitflags! {
    /// Chart props a gesture has taken over from the chart's own layout.
    ///
    /// Once `DOMAIN` is set the renderer must use the state's domain instead
    /// of recomputing one from data.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlledProps: u8 {
        /// The visible domain.
        const DOMAIN = 0b0000_0001;
    }
}

impl Default for ControlledProps {
    fn default() -> Self {
        Self::empty()
    }
}

/// Read-only chart configuration a zoom gesture consults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomProps {
    /// Domain the chart computed from its data.
    pub domain: Domain,
    /// Zoomed domain supplied by the chart's owner, if any.
    pub zoom_domain: Option<Domain>,
    /// Scales mapping the visible domain to pixels.
    pub scales: Scales,
    /// Axes the gestures act on.
    pub dimension: Dimension,
    /// Whether wheel and pinch zoom are enabled.
    pub allow_zoom: bool,
    /// Whether panning is enabled.
    pub allow_pan: bool,
    /// Per-axis floor on the zoomed extent.
    pub minimum_zoom: MinimumZoom,
}

impl ZoomProps {
    /// Props with zoom and pan enabled on both axes and no zoom floor.
    #[must_use]
    pub fn new(domain: Domain, scales: Scales) -> Self {
        Self {
            domain,
            zoom_domain: None,
            scales,
            dimension: Dimension::Both,
            allow_zoom: true,
            allow_pan: true,
            minimum_zoom: MinimumZoom::NONE,
        }
    }

    /// Sets the owner's zoom domain.
    #[must_use]
    pub fn with_zoom_domain(mut self, zoom_domain: Option<Domain>) -> Self {
        self.zoom_domain = zoom_domain;
        self
    }

    /// Restricts gestures to one axis.
    #[must_use]
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Enables or disables zooming and panning.
    #[must_use]
    pub fn with_interaction(mut self, allow_zoom: bool, allow_pan: bool) -> Self {
        self.allow_zoom = allow_zoom;
        self.allow_pan = allow_pan;
        self
    }

    /// Sets the zoom floor.
    #[must_use]
    pub fn with_minimum_zoom(mut self, minimum_zoom: MinimumZoom) -> Self {
        self.minimum_zoom = minimum_zoom;
        self
    }
}

/// Zoom session state, owned by the host and replaced field-wise by patches.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ZoomState {
    /// Domain to render while [`ControlledProps::DOMAIN`] is set.
    pub domain: Option<Domain>,
    /// Domain after the most recent gesture step.
    pub current_domain: Option<Domain>,
    /// Unzoomed domain that pans and zooms are clamped to.
    pub original_domain: Option<Domain>,
    /// Owner zoom domain seen by the most recent gesture step.
    pub cached_zoom_domain: Option<Domain>,
    /// Props the gestures have taken over.
    pub controlled: ControlledProps,
    /// A pan is in progress.
    pub panning: bool,
    /// A trackpad gesture committed to scaling.
    pub scaling: bool,
    /// Gesture anchor in pixels.
    pub start: Point,
    /// Two-finger distance at the first pinch frame.
    pub original_pinch_distance: Option<f64>,
}

impl ZoomState {
    /// Overwrites every field `patch` names.
    pub fn apply(&mut self, patch: &ZoomPatch) {
        if patch.domain.is_some() {
            self.domain = patch.domain;
        }
        if patch.current_domain.is_some() {
            self.current_domain = patch.current_domain;
        }
        if patch.original_domain.is_some() {
            self.original_domain = patch.original_domain;
        }
        if let Some(v) = patch.cached_zoom_domain {
            self.cached_zoom_domain = v;
        }
        if let Some(v) = patch.controlled {
            self.controlled = v;
        }
        if let Some(v) = patch.panning {
            self.panning = v;
        }
        if let Some(v) = patch.scaling {
            self.scaling = v;
        }
        if let Some(v) = patch.start {
            self.start = v;
        }
        if let Some(v) = patch.original_pinch_distance {
            self.original_pinch_distance = v;
        }
    }

    /// The unzoomed domain, falling back to the chart's data domain.
    #[must_use]
    pub fn original(&self, props: &ZoomProps) -> Domain {
        self.original_domain.unwrap_or(props.domain)
    }

    /// The domain the next pan or wheel step continues from.
    #[must_use]
    pub fn last_domain(&self, props: &ZoomProps) -> Domain {
        zoom_math::last_domain(
            props.zoom_domain.as_ref(),
            self.cached_zoom_domain.as_ref(),
            self.current_domain.as_ref(),
            &self.original(props),
        )
    }
}

/// Partial update of a [`ZoomState`]; `None` leaves a field untouched.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ZoomPatch {
    /// New rendered domain.
    pub domain: Option<Domain>,
    /// New current domain.
    pub current_domain: Option<Domain>,
    /// New original domain.
    pub original_domain: Option<Domain>,
    /// New cached owner zoom domain; `Some(None)` clears it.
    pub cached_zoom_domain: Option<Option<Domain>>,
    /// New set of controlled props.
    pub controlled: Option<ControlledProps>,
    /// New `panning`.
    pub panning: Option<bool>,
    /// New `scaling`.
    pub scaling: Option<bool>,
    /// New anchor.
    pub start: Option<Point>,
    /// New pinch baseline; `Some(None)` clears it.
    pub original_pinch_distance: Option<Option<f64>>,
}

impl ZoomPatch {
    /// Patch carrying a freshly zoomed or panned domain.
    pub(crate) fn zoomed(current: Domain, original: Domain, props: &ZoomProps) -> Self {
        Self {
            domain: Some(current),
            current_domain: Some(current),
            original_domain: Some(original),
            cached_zoom_domain: Some(props.zoom_domain),
            controlled: Some(ControlledProps::DOMAIN),
            ..Self::default()
        }
    }
}

impl Patch for ZoomPatch {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
