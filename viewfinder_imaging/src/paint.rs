// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use peniko::Color;

use crate::{DiagramBackend, DrawOp, ImageDesc, ImageId, LayoutResult, StateOp, StrokeStyle};

/// Colors and stroke width of a framing diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramStyle {
    /// Canvas background; `None` leaves the surface untouched.
    pub background: Option<Color>,
    /// Sensor frame outline.
    pub frame: Color,
    /// Letterbox band outline.
    pub letterbox: Color,
    /// Outline width in pixels.
    pub stroke_width: f64,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            background: Some(Color::from_rgb8(0xdd, 0xdd, 0xdd)),
            frame: Color::from_rgb8(0x5a, 0x3f, 0xb5),
            letterbox: Color::from_rgb8(0xef, 0x5a, 0x5a),
            stroke_width: 2.0,
        }
    }
}

/// A registered silhouette image and its intrinsic size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Silhouette {
    /// Image handle in the backend.
    pub image: ImageId,
    /// Intrinsic size, used for the aspect ratio.
    pub desc: ImageDesc,
}

impl Silhouette {
    /// Width over height of the silhouette.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.desc.aspect()
    }
}

/// Emits the diagram for `layout` into `backend`.
///
/// Draw order is background, silhouette, frame outline, letterbox outline, so
/// the outlines stay visible on top of an overflowing subject. Without a
/// silhouette only the outlines are drawn.
///
/// Returns `false` and emits nothing when the layout is not renderable.
pub fn paint_layout<B: DiagramBackend + ?Sized>(
    backend: &mut B,
    layout: &LayoutResult,
    style: &DiagramStyle,
    silhouette: Option<&Silhouette>,
) -> bool {
    if !layout.is_renderable() {
        return false;
    }

    if let Some(background) = style.background {
        let canvas = Rect::new(0.0, 0.0, layout.canvas.width_px, layout.canvas.height_px);
        backend.state(StateOp::SetPaint(background));
        backend.draw(DrawOp::FillRect(canvas));
    }

    if let Some(silhouette) = silhouette {
        backend.draw(DrawOp::DrawImageRect {
            image: silhouette.image,
            dst: layout.subject.bounds(),
        });
    }

    backend.state(StateOp::SetStroke(StrokeStyle::new(style.stroke_width)));
    backend.state(StateOp::SetPaint(style.frame));
    backend.draw(DrawOp::StrokeRect(layout.frame));

    if let Some(band) = layout.letterbox {
        backend.state(StateOp::SetPaint(style.letterbox));
        backend.draw(DrawOp::StrokeRect(band));
    }
    true
}
