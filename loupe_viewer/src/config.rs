// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

bitflags::bitflags! {
    /// Recognizers declared up front as allowed to run simultaneously.
    ///
    /// This is a pure interoperability declaration, not behavior: the engine
    /// itself always accepts interleaved streams. Embedders hand the set to
    /// their gesture-recognition layer so that, for example, a two-finger
    /// pinch can produce concurrent pan activity, or a sibling horizontal
    /// pager may keep recognizing while this viewer is neutral.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GestureSet: u8 {
        /// The viewer's own pan recognizer.
        const PAN = 1 << 0;
        /// The viewer's own pinch recognizer.
        const PINCH = 1 << 1;
        /// The viewer's own tap recognizer.
        const TAP = 1 << 2;
        /// An external sibling pager (for example a horizontal swiper).
        const PAGER = 1 << 3;
    }
}

impl Default for GestureSet {
    /// Pan and pinch cooperate for two-finger gestures, and the external
    /// pager is allowed alongside; tap stays exclusive.
    fn default() -> Self {
        Self::PAN | Self::PINCH | Self::PAGER
    }
}

/// Construction-time configuration for a [`Viewer`](crate::Viewer).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Opaque image locator, passed through untouched to the image-loading
    /// collaborator. The engine never interprets it.
    pub uri: String,
    /// Intrinsic size of the source image in pixels.
    pub source: Size,
    /// Device display size in pixels, fixed for the viewer's lifetime.
    pub viewport: Size,
    /// Which recognizers may run simultaneously.
    pub simultaneous: GestureSet,
}

impl ViewerConfig {
    /// Creates a config with the default simultaneity declaration.
    #[must_use]
    pub fn new(uri: impl Into<String>, source: Size, viewport: Size) -> Self {
        Self {
            uri: uri.into(),
            source,
            viewport,
            simultaneous: GestureSet::default(),
        }
    }
}
