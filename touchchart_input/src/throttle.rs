// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Default throttle window: one frame at 60 Hz.
pub const DEFAULT_WINDOW_MS: u64 = 16;

/// Error returned when a throttle configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleError {
    /// The window was zero milliseconds long.
    ZeroWindow,
    /// Neither edge of the window runs calls, so nothing would ever run.
    NoEdge,
}

impl fmt::Display for ThrottleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindow => f.write_str("throttle window must be at least 1 ms"),
            Self::NoEdge => f.write_str("throttle must run calls on the leading or trailing edge"),
        }
    }
}

impl core::error::Error for ThrottleError {}

/// Which edges of a window run a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottlePolicy {
    /// Run the first call of a window immediately.
    pub leading: bool,
    /// Run the last suppressed call of a window once it closes.
    pub trailing: bool,
}

impl ThrottlePolicy {
    /// First call runs, the rest of the window is dropped.
    pub const LEADING: Self = Self {
        leading: true,
        trailing: false,
    };

    /// First call runs and the last suppressed one runs when the window closes.
    pub const LEADING_AND_TRAILING: Self = Self {
        leading: true,
        trailing: true,
    };
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self::LEADING
    }
}

/// What the caller should do with a call offered to [`Throttle::admit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Admit {
    /// Run it now.
    Run,
    /// Keep it; [`Throttle::poll`] reports when to run it.
    Defer,
    /// Drop it.
    Discard,
}

/// A rate limiter driven by host timestamps.
///
/// At most one call runs on the leading edge of each window of `window_ms`.
/// With a trailing policy, the last call suppressed inside a window is
/// reported by [`Throttle::poll`] once the window has elapsed, and running it
/// opens the next window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    window_ms: u64,
    policy: ThrottlePolicy,
    window_start: Option<u64>,
    pending: bool,
}

impl Throttle {
    /// Creates a throttle, rejecting windows that could never admit a call.
    pub fn new(window_ms: u64, policy: ThrottlePolicy) -> Result<Self, ThrottleError> {
        if window_ms == 0 {
            return Err(ThrottleError::ZeroWindow);
        }
        if !policy.leading && !policy.trailing {
            return Err(ThrottleError::NoEdge);
        }
        Ok(Self {
            window_ms,
            policy,
            window_start: None,
            pending: false,
        })
    }

    /// Window length in milliseconds.
    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Edge policy.
    #[must_use]
    pub fn policy(&self) -> ThrottlePolicy {
        self.policy
    }

    /// Start of the current window, if one is open.
    #[must_use]
    pub fn window_start(&self) -> Option<u64> {
        self.window_start
    }

    /// Returns `true` if a trailing call is waiting for its window to close.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Decides the fate of a call made at `now_ms`.
    pub fn admit(&mut self, now_ms: u64) -> Admit {
        if self.is_open(now_ms) {
            if self.policy.trailing {
                self.pending = true;
                Admit::Defer
            } else {
                Admit::Discard
            }
        } else {
            self.window_start = Some(now_ms);
            if self.policy.leading {
                self.pending = false;
                Admit::Run
            } else {
                self.pending = true;
                Admit::Defer
            }
        }
    }

    /// Returns `true` once per deferred call whose window has closed.
    ///
    /// The trailing run opens a new window at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.pending || self.is_open(now_ms) {
            return false;
        }
        self.pending = false;
        self.window_start = Some(now_ms);
        true
    }

    /// Forgets the current window and any pending call.
    pub fn cancel(&mut self) {
        self.window_start = None;
        self.pending = false;
    }

    fn is_open(&self, now_ms: u64) -> bool {
        self.window_start
            .is_some_and(|start| now_ms.saturating_sub(start) < self.window_ms)
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_WINDOW_MS,
            policy: ThrottlePolicy::LEADING,
            window_start: None,
            pending: false,
        }
    }
}
