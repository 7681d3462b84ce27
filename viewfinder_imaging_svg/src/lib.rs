// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=viewfinder_imaging_svg --heading-base-level=0

//! SVG export backend for viewfinder framing diagrams.
//!
//! [`SvgBackend`] implements [`DiagramBackend`] and [`ResourceBackend`],
//! records the operations it receives, and writes them out as a standalone
//! SVG document with [`SvgBackend::to_svg`].
//!
//! Images are referenced, not embedded. Give an image a URL or data URI with
//! [`SvgBackend::set_image_href`] and it is emitted as an `<image>` element;
//! without one it is drawn as a translucent placeholder rectangle.
//!
//! ```rust
//! use viewfinder_geometry::{CanvasSize, SensorSpec, ShotParameters, layout};
//! use viewfinder_imaging::{DiagramStyle, paint_layout};
//! use viewfinder_imaging_svg::SvgBackend;
//!
//! let result = layout(
//!     SensorSpec::FULL_FRAME,
//!     ShotParameters::default(),
//!     CanvasSize::new(500.0, 500.0),
//!     0.4,
//! );
//! let mut backend = SvgBackend::default();
//! paint_layout(&mut backend, &result, &DiagramStyle::default(), None);
//!
//! let svg = backend.to_svg(500, 500);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("stroke=\"#5a3fb5\""));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::Rect;
use peniko::Color;
use viewfinder_imaging::{
    DiagramBackend, DrawOp, ImageDesc, ImageId, ImagingOp, ResourceBackend, StateOp, StrokeStyle,
};

#[derive(Clone, Debug, Default)]
struct SvgState {
    paint: Option<Color>,
    stroke: Option<StrokeStyle>,
}

#[derive(Clone, Debug)]
struct SvgImage {
    desc: ImageDesc,
    href: Option<String>,
}

/// A recording SVG backend.
#[derive(Clone, Debug, Default)]
pub struct SvgBackend {
    images: Vec<Option<SvgImage>>,
    ops: Vec<ImagingOp>,
}

impl SvgBackend {
    /// Clears recorded operations but keeps images.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Recorded operations, in application order.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Attaches an `href` (URL or data URI) to a live image.
    ///
    /// Returns `false` if the image does not exist.
    pub fn set_image_href(&mut self, id: ImageId, href: impl Into<String>) -> bool {
        match self.images.get_mut(id.0 as usize) {
            Some(Some(image)) => {
                image.href = Some(href.into());
                true
            }
            _ => false,
        }
    }

    /// Renders the recorded operations as an SVG document of the given size.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut body = String::new();
        let mut state = SvgState::default();
        for op in &self.ops {
            match op {
                ImagingOp::State(StateOp::SetPaint(color)) => state.paint = Some(*color),
                ImagingOp::State(StateOp::SetStroke(stroke)) => {
                    state.stroke = Some(stroke.clone());
                }
                ImagingOp::Draw(draw) => self.write_draw_op(&mut body, &state, draw),
            }
        }
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">{body}</svg>"
        )
    }

    fn write_draw_op(&self, out: &mut String, state: &SvgState, op: &DrawOp) {
        match op {
            DrawOp::FillRect(rect) => {
                write_rect(out, *rect);
                let (fill, opacity) = state.paint.map_or_else(
                    || (String::from("#000000"), 1.0),
                    color_to_svg,
                );
                let _ = write!(out, " fill=\"{fill}\"");
                write_opacity(out, "fill-opacity", opacity);
                out.push_str("/>");
            }
            DrawOp::StrokeRect(rect) => {
                write_rect(out, *rect);
                let (stroke, opacity) = state.paint.map_or_else(
                    || (String::from("#000000"), 1.0),
                    color_to_svg,
                );
                let width = state.stroke.as_ref().map_or(1.0, |s| s.width);
                let _ = write!(
                    out,
                    " fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{}\"",
                    fmt_f64_to_f32(width)
                );
                write_opacity(out, "stroke-opacity", opacity);
                out.push_str("/>");
            }
            DrawOp::DrawImageRect { image, dst } => {
                let Some(Some(entry)) = self.images.get(image.0 as usize) else {
                    return;
                };
                match &entry.href {
                    Some(href) => {
                        let _ = write!(
                            out,
                            "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
                             preserveAspectRatio=\"none\" href=\"{}\"/>",
                            fmt_f64_to_f32(dst.x0),
                            fmt_f64_to_f32(dst.y0),
                            fmt_f64_to_f32(dst.width()),
                            fmt_f64_to_f32(dst.height()),
                            escape_attr(href),
                        );
                    }
                    None => {
                        // Placeholder sized to the destination and labeled.
                        write_rect(out, *dst);
                        out.push_str(
                            " fill=\"#ff00ff\" fill-opacity=\"0.25\" stroke=\"#ff00ff\" stroke-width=\"1\"/>",
                        );
                        let _ = write!(
                            out,
                            "<text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"#ff00ff\">image#{} {}x{}</text>",
                            fmt_f64_to_f32(dst.x0 + 4.0),
                            fmt_f64_to_f32(dst.y0 + 14.0),
                            image.0,
                            entry.desc.width,
                            entry.desc.height,
                        );
                    }
                }
            }
        }
    }
}

impl ResourceBackend for SvgBackend {
    fn create_image(&mut self, desc: ImageDesc) -> ImageId {
        let id = u32::try_from(self.images.len()).unwrap_or(u32::MAX);
        self.images.push(Some(SvgImage { desc, href: None }));
        ImageId(id)
    }

    fn destroy_image(&mut self, id: ImageId) {
        if let Some(slot) = self.images.get_mut(id.0 as usize) {
            *slot = None;
        }
    }
}

impl DiagramBackend for SvgBackend {
    fn state(&mut self, op: StateOp) {
        self.ops.push(ImagingOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op));
    }
}

/// Writes an unterminated `<rect` element; the caller appends paint
/// attributes and closes it.
fn write_rect(out: &mut String, rect: Rect) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        fmt_f64_to_f32(rect.x0),
        fmt_f64_to_f32(rect.y0),
        fmt_f64_to_f32(rect.width()),
        fmt_f64_to_f32(rect.height()),
    );
}

fn write_opacity(out: &mut String, attr: &str, opacity: f32) {
    if opacity < 1.0 {
        let _ = write!(out, " {attr}=\"{}\"", fmt_f32(opacity));
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "SVG uses f32-like scalar formatting"
)]
fn fmt_f64_to_f32(v: f64) -> String {
    fmt_f32(v as f32)
}

fn fmt_f32(v: f32) -> String {
    // Keep output readable and stable across runs.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i32;
        let diff = (i as f32) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
