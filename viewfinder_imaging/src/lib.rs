// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewfinder_imaging --heading-base-level=0

//! Viewfinder Imaging: drawing commands for framing diagrams.
//!
//! This crate turns a [`LayoutResult`] into a short, backend-agnostic
//! sequence of imaging operations and defines the traits a rendering surface
//! implements to consume them.
//!
//! # Position in the stack
//!
//! - **Geometry** (`viewfinder_geometry`): physical framing and pixel layout.
//! - **Imaging (this crate)**: state and draw operations ([`StateOp`],
//!   [`DrawOp`]), image resources ([`ImageId`]), and [`paint_layout`], which
//!   emits the diagram.
//! - **Backends**: anything implementing [`DiagramBackend`], such as the
//!   [`RecordingBackend`] here (for tests and debugging) or the SVG exporter in
//!   `viewfinder_imaging_svg`. A canvas 2D context, Vello, or Skia adapter would
//!   sit at the same level.
//!
//! # Example
//!
//! ```rust
//! use viewfinder_geometry::{CanvasSize, SensorSpec, ShotParameters, layout};
//! use viewfinder_imaging::{
//!     DiagramStyle, ImageDesc, ImagingOp, RecordingBackend, ResourceBackend, Silhouette, paint_layout,
//! };
//!
//! let mut backend = RecordingBackend::default();
//! let desc = ImageDesc { width: 120, height: 300 };
//! let silhouette = Silhouette { image: backend.create_image(desc), desc };
//!
//! let result = layout(
//!     SensorSpec::FULL_FRAME,
//!     ShotParameters::default(),
//!     CanvasSize::new(500.0, 500.0),
//!     silhouette.aspect(),
//! );
//! assert!(paint_layout(&mut backend, &result, &DiagramStyle::default(), Some(&silhouette)));
//!
//! let draws = backend
//!     .ops()
//!     .iter()
//!     .filter(|op| matches!(op, ImagingOp::Draw(_)))
//!     .count();
//! // Background, silhouette, frame.
//! assert_eq!(draws, 3);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod paint;
mod recording;

use kurbo::Rect;
use peniko::Color;

pub use paint::{DiagramStyle, Silhouette, paint_layout};
pub use recording::{Event, RecordingBackend, StateSnapshot};

#[doc(no_inline)]
pub use viewfinder_geometry::LayoutResult;

/// Identifier for an image resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Description of an image resource.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageDesc {
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

impl ImageDesc {
    /// Width over height, or `1.0` for a zero-height image.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Stroke style used by [`StateOp::SetStroke`].
///
/// This is a re-export of [`kurbo::Stroke`], which captures width, joins,
/// caps, and dashes.
pub type StrokeStyle = kurbo::Stroke;

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the color used by subsequent fills and strokes.
    SetPaint(Color),
    /// Set the stroke style used by subsequent strokes.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect(Rect),
    /// Stroke an axis-aligned rectangle with the current stroke and paint.
    StrokeRect(Rect),
    /// Draw an image stretched to a destination rectangle.
    DrawImageRect {
        /// Image resource to draw.
        image: ImageId,
        /// Destination rectangle.
        dst: Rect,
    },
}

/// Unified imaging operation, as recorded by backends.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State operation.
    State(StateOp),
    /// Draw operation.
    Draw(DrawOp),
}

/// Resource lifetime interface.
///
/// Implementations must keep an [`ImageId`] valid until the corresponding
/// `destroy_image` call.
pub trait ResourceBackend {
    /// Register an image and return its handle.
    fn create_image(&mut self, desc: ImageDesc) -> ImageId;

    /// Release an image. Unknown IDs are ignored.
    fn destroy_image(&mut self, id: ImageId);
}

/// A rendering surface for framing diagrams.
pub trait DiagramBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation using the current state.
    fn draw(&mut self, op: DrawOp);
}

#[cfg(test)]
mod tests {
    use super::ImageDesc;

    #[test]
    fn image_aspect() {
        let portrait = ImageDesc {
            width: 100,
            height: 250,
        };
        assert_eq!(portrait.aspect(), 0.4);

        let empty = ImageDesc {
            width: 100,
            height: 0,
        };
        assert_eq!(empty.aspect(), 1.0);
    }
}
