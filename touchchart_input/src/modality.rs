// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the device delivers gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InputModality {
    /// Fingers on the chart itself.
    #[default]
    DirectTouch,
    /// A remote's touch surface or a directional pad.
    Trackpad,
}

/// Resolves the input modality of the current platform.
///
/// Adapters ask once, at construction, and keep the answer.
pub trait ModalityProbe {
    /// The modality gestures will arrive in.
    fn modality(&self) -> InputModality;
}

impl ModalityProbe for InputModality {
    fn modality(&self) -> InputModality {
        *self
    }
}

/// Platform facts relevant to gesture input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PlatformCapabilities {
    /// The app runs on a television, driven by a remote.
    pub is_tv: bool,
}

impl ModalityProbe for PlatformCapabilities {
    fn modality(&self) -> InputModality {
        if self.is_tv {
            InputModality::Trackpad
        } else {
            InputModality::DirectTouch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InputModality, ModalityProbe, PlatformCapabilities};

    #[test]
    fn tv_uses_trackpad() {
        assert_eq!(
            PlatformCapabilities { is_tv: true }.modality(),
            InputModality::Trackpad
        );
        assert_eq!(
            PlatformCapabilities::default().modality(),
            InputModality::DirectTouch
        );
    }
}
