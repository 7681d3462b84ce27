// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewfinder_session --heading-base-level=0

//! Viewfinder Session: interactive state around the framing geometry.
//!
//! [`viewfinder_geometry`] is a set of pure functions. A UI around it still
//! needs a little state, and this crate provides it in small, host-agnostic
//! pieces:
//!
//! - [`Framer`]: holds the current inputs and the last measured canvas size,
//!   re-runs the layout on every effective change, and reports "not ready"
//!   until the canvas has been measured.
//! - [`AdjustableRange`]: slider bounds whose maximum can be widened or
//!   narrowed in steps.
//! - [`Debounce`]: trailing-edge coalescing of rapid input, driven by a clock
//!   the host supplies.
//! - [`Readout`]: the framed area and FOV as a one-line string.
//!
//! None of these assume a particular UI framework, timer, or reactivity
//! model; the host calls them explicitly.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use viewfinder_geometry::CanvasSize;
//! use viewfinder_session::{Debounce, Framer};
//!
//! let mut framer = Framer::default();
//! assert!(framer.layout().is_none());
//!
//! // The container has been measured.
//! framer.set_canvas(CanvasSize::new(500.0, 500.0));
//!
//! // A slider drag, coalesced.
//! let mut focal = Debounce::default();
//! for (t, value) in [(0, 60.0), (4, 70.0), (9, 85.0)] {
//!     focal.push(value, Duration::from_millis(t));
//! }
//! if let Some(value) = focal.poll(Duration::from_millis(30)) {
//!     framer.set_focal_length(value);
//! }
//!
//! let layout = framer.layout().unwrap();
//! assert!(layout.frame.width() <= 500.0 + 1e-9);
//! assert_eq!(framer.readout().to_string(), "0.85 m x 0.56 m | FOV 23.91\u{b0}");
//! ```
//!
//! Logging goes through the [`log`] facade: readiness transitions at `debug`,
//! every relayout at `trace`.
//!
//! This crate is `no_std` when built without its default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

mod debounce;
mod framer;
mod range;
mod readout;

pub use debounce::{DEFAULT_DEBOUNCE, Debounce};
pub use framer::Framer;
pub use range::AdjustableRange;
pub use readout::Readout;
