// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewfinder_geometry --heading-base-level=0

//! Viewfinder Geometry: field-of-view framing math.
//!
//! Given a camera sensor, a lens focal length, and a subject's distance and
//! height, this crate computes:
//! - The real-world area framed at the subject distance ([`physical_area`]).
//! - The horizontal field of view ([`field_of_view_degrees`]).
//! - The pixel geometry of a framing diagram for a canvas of any size
//!   ([`layout`]): the sensor frame, an optional letterbox band, and the
//!   placement of a subject silhouette.
//!
//! Everything here is pure and headless. Callers are expected to:
//! - Measure their drawing surface and pass its size as a [`CanvasSize`].
//! - Re-run [`layout`] whenever any input or the canvas size changes.
//! - Skip drawing while [`LayoutResult::is_renderable`] is `false` (for
//!   example before the container has been measured).
//!
//! ## Minimal example
//!
//! ```rust
//! use viewfinder_geometry::{CanvasSize, SensorSpec, ShotParameters, layout, Letterbox};
//!
//! let shot = ShotParameters {
//!     focal_length_mm: 50.0,
//!     subject_distance_m: 2.0,
//!     subject_height_cm: 170.0,
//!     letterbox_ratio: Letterbox::Cinemascope.ratio(),
//! };
//! let result = layout(SensorSpec::FULL_FRAME, shot, CanvasSize::new(500.0, 500.0), 0.4);
//!
//! assert!(result.is_renderable());
//! // 1.44 m x 0.96 m framed at 2 m.
//! assert!((result.area.width_m() - 1.44).abs() < 1e-9);
//! // The frame spans the canvas width.
//! assert!((result.frame.width() - 500.0).abs() < 1e-9);
//! let band = result.letterbox.unwrap();
//! assert!((band.width() / band.height() - 2.39).abs() < 1e-9);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`physical_area`]: sensor size scaled by distance over focal length.
//! 2. [`scale_mm_to_px`]: the physical dimension matching the sensor
//!    orientation fills the matching canvas dimension.
//! 3. [`frame_rect`]: the scaled area, shrunk if needed so it fits the canvas
//!    on both axes, centered.
//! 4. [`letterbox_rect`]: the target aspect expanded along the primary axis,
//!    refit into the frame, centered.
//! 5. [`subject_placement`]: the silhouette, centered in the frame or band, or
//!    pinned to the top when it overflows.
//!
//! This crate is `no_std` when built without its default `std` feature; enable
//! `libm` in that case.

#![cfg_attr(not(feature = "std"), no_std)]

mod layout;
mod modes;
mod optics;
pub mod presets;
mod types;

pub use layout::{
    FALLBACK_SUBJECT_ASPECT, LayoutResult, SubjectPlacement, frame_rect, layout, letterbox_rect,
    scale_mm_to_px, subject_placement,
};
pub use modes::{Orientation, VerticalAnchor};
pub use optics::{field_of_view_degrees, physical_area};
pub use presets::{Letterbox, SensorPreset};
pub use types::{CanvasSize, ParameterError, PhysicalArea, SensorSpec, ShotParameters};
