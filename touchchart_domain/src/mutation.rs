// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The patch channel between gesture engines and their host.

use core::fmt;

use crate::interval::Domain;

/// Scope a mutation is aimed at.
///
/// Every gesture in this workspace mutates the chart container itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// The container that owns the gesture state.
    #[default]
    Parent,
}

/// Work the host performs after it has applied a patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Callback {
    /// Resume the animation that was bypassed while handling the event.
    ResumeAnimation,
}

impl Callback {
    /// Runs the callback against the host's animation timer.
    pub fn run(self, timer: &mut dyn AnimationTimer) {
        match self {
            Self::ResumeAnimation => timer.resume_animation(),
        }
    }
}

/// Host animation clock that gestures may pause.
pub trait AnimationTimer {
    /// Skips any running transition so the next state renders immediately.
    fn bypass_animation(&mut self);
    /// Re-enables transitions after a bypass.
    fn resume_animation(&mut self);
}

/// A partial update of an engine's session state.
pub trait Patch: Default {
    /// Returns `true` if applying the patch changes nothing.
    fn is_empty(&self) -> bool;
}

/// A patch addressed to a target, plus an optional post-apply callback.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Mutation<P> {
    /// Where the patch applies.
    pub target: Target,
    /// Fields to overwrite.
    pub patch: P,
    /// Work to run once the patch has been applied.
    pub callback: Option<Callback>,
}

impl<P: Patch> Mutation<P> {
    /// The no-op mutation returned by ignored events.
    #[must_use]
    pub fn none() -> Self {
        Self::parent(P::default())
    }

    /// A mutation of the parent container.
    #[must_use]
    pub fn parent(patch: P) -> Self {
        Self {
            target: Target::Parent,
            patch,
            callback: None,
        }
    }

    /// Attaches a post-apply callback.
    #[must_use]
    pub fn with_callback(mut self, callback: Option<Callback>) -> Self {
        self.callback = callback;
        self
    }

    /// Returns `true` if the mutation carries neither fields nor a callback.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.patch.is_empty() && self.callback.is_none()
    }
}

/// Optional host collaborators handed to each engine call.
#[derive(Default)]
pub struct Hooks<'a> {
    /// Invoked synchronously with every newly computed domain.
    pub on_domain_change: Option<&'a mut dyn FnMut(&Domain)>,
    /// Animation clock to bypass while a gesture mutates the domain.
    pub timer: Option<&'a mut dyn AnimationTimer>,
}

impl<'a> Hooks<'a> {
    /// No notification, no animation.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Hooks that only report domain changes.
    #[must_use]
    pub fn notify_with(on_domain_change: &'a mut dyn FnMut(&Domain)) -> Self {
        Self {
            on_domain_change: Some(on_domain_change),
            timer: None,
        }
    }

    /// Adds an animation timer.
    #[must_use]
    pub fn with_timer(mut self, timer: &'a mut dyn AnimationTimer) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Reports `domain` to the listener, if any.
    pub fn notify(&mut self, domain: &Domain) {
        if let Some(listener) = self.on_domain_change.as_deref_mut() {
            listener(domain);
        }
    }

    /// Bypasses a running animation and returns the callback that resumes it.
    pub fn handle_animation(&mut self) -> Option<Callback> {
        let timer = self.timer.as_deref_mut()?;
        timer.bypass_animation();
        Some(Callback::ResumeAnimation)
    }
}

impl fmt::Debug for Hooks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_domain_change", &self.on_domain_change.is_some())
            .field("timer", &self.timer.is_some())
            .finish()
    }
}
