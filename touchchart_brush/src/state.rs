// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use touchchart_domain::{Dimension, Domain, DomainBox, Patch, Scales, selection};

use crate::handles::Handles;

/// Default width in pixels of the resize strips on each brush edge.
pub const DEFAULT_HANDLE_WIDTH: f64 = 8.0;

/// Read-only chart configuration a brush gesture consults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushProps {
    /// Full chart domain.
    pub domain: Domain,
    /// Selected domain supplied by the chart's owner, if any.
    pub selected_domain: Option<Domain>,
    /// Scales mapping the chart domain to pixels.
    pub scales: Scales,
    /// Axes the brush acts on.
    pub dimension: Dimension,
    /// Width of the resize strips on each edge.
    pub handle_width: f64,
    /// Whether the selection may be created or resized.
    pub allow_resize: bool,
    /// Whether an existing selection may be dragged.
    pub allow_drag: bool,
}

impl BrushProps {
    /// Props for a two-dimensional brush with resize and drag enabled.
    #[must_use]
    pub fn new(domain: Domain, scales: Scales) -> Self {
        Self {
            domain,
            selected_domain: None,
            scales,
            dimension: Dimension::Both,
            handle_width: DEFAULT_HANDLE_WIDTH,
            allow_resize: true,
            allow_drag: true,
        }
    }

    /// Sets the externally selected domain.
    #[must_use]
    pub fn with_selected_domain(mut self, selected: Option<Domain>) -> Self {
        self.selected_domain = selected;
        self
    }

    /// Restricts the brush to one axis.
    #[must_use]
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the resize strip width.
    #[must_use]
    pub fn with_handle_width(mut self, handle_width: f64) -> Self {
        self.handle_width = handle_width;
        self
    }

    /// Enables or disables resizing and dragging.
    #[must_use]
    pub fn with_interaction(mut self, allow_resize: bool, allow_drag: bool) -> Self {
        self.allow_resize = allow_resize;
        self.allow_drag = allow_drag;
        self
    }

    /// Pixel box of `selected`, or of the whole domain when `None`.
    #[must_use]
    pub fn domain_box(&self, selected: Option<&Domain>) -> DomainBox {
        selection::domain_box(
            self.dimension,
            &self.scales,
            &self.domain,
            selected.unwrap_or(&self.domain),
        )
    }
}

/// Brush session state, owned by the host and replaced field-wise by patches.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BrushState {
    /// A selection is being drawn or resized.
    pub is_selecting: bool,
    /// An existing selection is being dragged.
    pub is_panning: bool,
    /// Gesture anchor in pixels.
    pub start: Point,
    /// Edges a direct-touch selection gesture drags.
    pub active_handles: Handles,
    /// Current selection corners in pixels.
    pub selection: DomainBox,
    /// Box the current gesture started from.
    pub domain_box: Option<DomainBox>,
    /// Region the selection is clamped to.
    pub full_domain_box: Option<DomainBox>,
    /// Domain of the current selection.
    pub current_domain: Option<Domain>,
    /// Selected domain seen when the last gesture started.
    pub cached_selected_domain: Option<Domain>,
}

impl BrushState {
    /// Overwrites every field `patch` names.
    pub fn apply(&mut self, patch: &BrushPatch) {
        if let Some(v) = patch.is_selecting {
            self.is_selecting = v;
        }
        if let Some(v) = patch.is_panning {
            self.is_panning = v;
        }
        if let Some(v) = patch.start {
            self.start = v;
        }
        if let Some(v) = patch.active_handles {
            self.active_handles = v;
        }
        if let Some(v) = patch.x1 {
            self.selection.x1 = v;
        }
        if let Some(v) = patch.x2 {
            self.selection.x2 = v;
        }
        if let Some(v) = patch.y1 {
            self.selection.y1 = v;
        }
        if let Some(v) = patch.y2 {
            self.selection.y2 = v;
        }
        if patch.domain_box.is_some() {
            self.domain_box = patch.domain_box;
        }
        if patch.full_domain_box.is_some() {
            self.full_domain_box = patch.full_domain_box;
        }
        if patch.current_domain.is_some() {
            self.current_domain = patch.current_domain;
        }
        if patch.cached_selected_domain.is_some() {
            self.cached_selected_domain = patch.cached_selected_domain;
        }
    }

    /// Ordered selection rectangle, for drawing.
    #[must_use]
    pub fn selection_rect(&self) -> Rect {
        self.selection.to_rect()
    }
}

/// Partial update of a [`BrushState`]; `None` leaves a field untouched.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BrushPatch {
    /// New `is_selecting`.
    pub is_selecting: Option<bool>,
    /// New `is_panning`.
    pub is_panning: Option<bool>,
    /// New anchor.
    pub start: Option<Point>,
    /// New dragged edges.
    pub active_handles: Option<Handles>,
    /// New first horizontal selection bound.
    pub x1: Option<f64>,
    /// New second horizontal selection bound.
    pub x2: Option<f64>,
    /// New first vertical selection bound.
    pub y1: Option<f64>,
    /// New second vertical selection bound.
    pub y2: Option<f64>,
    /// New gesture base box.
    pub domain_box: Option<DomainBox>,
    /// New clamp region.
    pub full_domain_box: Option<DomainBox>,
    /// New selected domain.
    pub current_domain: Option<Domain>,
    /// New cached selected domain.
    pub cached_selected_domain: Option<Domain>,
}

impl BrushPatch {
    /// Patch that only ends the gesture.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            is_panning: Some(false),
            is_selecting: Some(false),
            ..Self::default()
        }
    }

    /// Sets all four selection corners.
    #[must_use]
    pub fn with_selection(mut self, b: DomainBox) -> Self {
        self.x1 = Some(b.x1);
        self.x2 = Some(b.x2);
        self.y1 = Some(b.y1);
        self.y2 = Some(b.y2);
        self
    }
}

impl Patch for BrushPatch {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Selected and current domains a new gesture starts from.
///
/// The owner's selected domain (defaulting to the full domain) is compared to
/// the one cached at the previous gesture start. If it is unchanged, the
/// brush continues from its own current domain; otherwise the owner reset the
/// selection and it wins.
pub(crate) fn resolve_domains(props: &BrushProps, state: &BrushState) -> (Domain, Domain) {
    let selected = props.selected_domain.unwrap_or(props.domain);
    let current = if Some(selected) == state.cached_selected_domain {
        state.current_domain.unwrap_or(selected)
    } else {
        selected
    };
    (selected, current)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use touchchart_domain::{Domain, DomainBox, Interval, LinearScale, Patch, Scales};

    use super::{BrushPatch, BrushProps, BrushState, resolve_domains};

    fn props() -> BrushProps {
        let domain = Domain::new(Interval::new(0.0, 10.0), Interval::new(0.0, 10.0));
        BrushProps::new(
            domain,
            Scales::new(
                LinearScale::new(domain.x, (0.0, 100.0)),
                LinearScale::new(domain.y, (0.0, 100.0)),
            ),
        )
    }

    #[test]
    fn apply_only_touches_named_fields() {
        let mut state = BrushState {
            is_selecting: true,
            start: Point::new(1.0, 2.0),
            ..BrushState::default()
        };
        state.apply(&BrushPatch {
            x1: Some(5.0),
            ..BrushPatch::default()
        });
        assert!(state.is_selecting);
        assert_eq!(state.start, Point::new(1.0, 2.0));
        assert_eq!(
            state.selection,
            DomainBox {
                x1: 5.0,
                ..DomainBox::default()
            }
        );
    }

    #[test]
    fn neutral_patch_is_not_empty() {
        assert!(BrushPatch::default().is_empty());
        assert!(!BrushPatch::neutral().is_empty());
    }

    #[test]
    fn resolve_prefers_own_domain_until_owner_resets() {
        let p = props();
        let own = Domain::new(Interval::new(2.0, 3.0), Interval::new(0.0, 10.0));
        let state = BrushState {
            cached_selected_domain: Some(p.domain),
            current_domain: Some(own),
            ..BrushState::default()
        };
        assert_eq!(resolve_domains(&p, &state), (p.domain, own));

        let reset = Domain::new(Interval::new(5.0, 6.0), Interval::new(0.0, 10.0));
        let p = p.with_selected_domain(Some(reset));
        assert_eq!(resolve_domains(&p, &state), (reset, reset));
    }
}
