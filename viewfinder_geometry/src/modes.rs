// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Orientation of a sensor, derived from its physical dimensions.
///
/// The orientation picks the primary axis for both the mm-to-pixel scale
/// (see [`crate::scale_mm_to_px`]) and the letterbox fit (see
/// [`crate::letterbox_rect`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Width is greater than or equal to height.
    ///
    /// A square sensor counts as landscape.
    #[default]
    Landscape,
    /// Height is strictly greater than width.
    Portrait,
}

impl Orientation {
    /// Classifies a `width` × `height` pair.
    #[must_use]
    pub fn of(width: f64, height: f64) -> Self {
        if width >= height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Returns `true` for [`Orientation::Landscape`].
    #[must_use]
    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }
}

/// How the subject silhouette was positioned vertically.
///
/// This is reported alongside the placement so that callers (and tests) can
/// tell the overflow policy apart from plain centering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// Centered in the frame; no letterbox is active.
    FrameCenter,
    /// Taller than the frame; pinned to the frame top so the head stays visible.
    FrameTop,
    /// Centered inside the letterbox band.
    LetterboxCenter,
    /// Taller than the letterbox band; pinned to the band top and the excess
    /// spills into the surrounding frame.
    LetterboxTop,
}
