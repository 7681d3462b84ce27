// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from millimeter space into canvas pixels.

use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::{Orientation, VerticalAnchor};
use crate::optics::physical_area;
use crate::types::{CanvasSize, PhysicalArea, SensorSpec, ShotParameters};

const MM_PER_CM: f64 = 10.0;

/// Aspect ratio used for the silhouette before its image has been loaded.
pub const FALLBACK_SUBJECT_ASPECT: f64 = 1.0;

/// Placement of the subject silhouette image.
///
/// The image is drawn at `anchor - offset` with the given `size`; the
/// horizontal offset is half the width so that `anchor.x` is the image's
/// horizontal center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubjectPlacement {
    /// Draw position in canvas pixels.
    pub anchor: Point,
    /// Image size in canvas pixels.
    pub size: Size,
    /// Offset subtracted from `anchor` to get the image's top-left corner.
    pub offset: Vec2,
    /// Which vertical rule produced `anchor.y`.
    pub vertical: VerticalAnchor,
}

impl SubjectPlacement {
    /// Returns the image bounds in canvas pixels.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.anchor - self.offset, self.size)
    }
}

/// Everything a renderer needs to draw one framing diagram.
///
/// Produced fresh by [`layout`] on every input or canvas change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutResult {
    /// Canvas the pixel geometry was laid out in.
    pub canvas: CanvasSize,
    /// Physical area the pixel geometry was derived from.
    pub area: PhysicalArea,
    /// Millimeters to canvas pixels.
    pub scale_mm_to_px: f64,
    /// Sensor frame, centered in the canvas.
    pub frame: Rect,
    /// Letterbox band, centered in the frame, if a letterbox is active.
    pub letterbox: Option<Rect>,
    /// Subject silhouette placement.
    pub subject: SubjectPlacement,
}

impl LayoutResult {
    /// Returns `true` if the result can be drawn.
    ///
    /// An empty canvas (either dimension zero, as before the container has
    /// been measured), a zero or non-finite scale (zero focal length, zero
    /// subject distance), or any non-finite coordinate means "do not render
    /// yet". Zero-sized rectangles on a measured canvas are renderable.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        let scale_ok = self.scale_mm_to_px.is_finite() && self.scale_mm_to_px > 0.0;
        !self.canvas.is_empty()
            && scale_ok
            && rect_is_finite(self.frame)
            && self.letterbox.is_none_or(rect_is_finite)
            && rect_is_finite(self.subject.bounds())
    }
}

/// Chooses the millimeter-to-pixel scale.
///
/// The physical dimension matching the sensor orientation fills the
/// corresponding canvas dimension: width for landscape, height for portrait.
/// A zero or non-finite result means the layout is not ready to render.
#[must_use]
pub fn scale_mm_to_px(area: PhysicalArea, canvas: CanvasSize, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Landscape => canvas.width_px / area.width_mm,
        Orientation::Portrait => canvas.height_px / area.height_mm,
    }
}

/// Computes the sensor frame rectangle, centered in the canvas.
///
/// The scaled area is shrunk uniformly if it would overflow the canvas along
/// either axis; [`scale_mm_to_px`] only guarantees a fit along one axis.
///
/// The fit factor is capped at `1.0`, so this only ever shrinks: a `scale`
/// smaller than the canvas allows gives a frame smaller than the canvas.
#[must_use]
pub fn frame_rect(area: PhysicalArea, scale: f64, canvas: CanvasSize) -> Rect {
    let width = area.width_mm * scale;
    let height = area.height_mm * scale;

    let fit = (canvas.width_px / width).min(canvas.height_px / height);
    let fit = if fit.is_finite() { fit.min(1.0) } else { 1.0 };
    let width = width * fit;
    let height = height * fit;

    Rect::from_origin_size(
        ((canvas.width_px - width) / 2.0, (canvas.height_px - height) / 2.0),
        (width, height),
    )
}

/// Computes the letterbox band inside `frame`.
///
/// Returns `None` for a ratio of exactly `1.0`. The ratio is width over
/// height for landscape sensors and height over width for portrait sensors.
///
/// Two passes: an ideal box is expanded along the primary axis to the target
/// ratio (ignoring bounds), then rescaled uniformly to fit the frame and
/// centered in it.
#[must_use]
pub fn letterbox_rect(frame: Rect, ratio: f64, orientation: Orientation) -> Option<Rect> {
    if ratio == ShotParameters::NO_LETTERBOX {
        return None;
    }
    let frame_w = frame.width();
    let frame_h = frame.height();

    let (ideal_w, ideal_h) = match orientation {
        Orientation::Landscape => {
            let w = frame_w.max(frame_h * ratio);
            (w, (w / ratio).min(frame_h))
        }
        Orientation::Portrait => {
            let h = frame_h.max(frame_w * ratio);
            ((h / ratio).min(frame_w), h)
        }
    };

    let fit = (frame_w / ideal_w).min(frame_h / ideal_h);
    let fit = if fit.is_finite() { fit } else { 1.0 };
    let width = ideal_w * fit;
    let height = ideal_h * fit;

    Some(Rect::from_origin_size(
        (
            frame.x0 + (frame_w - width) / 2.0,
            frame.y0 + (frame_h - height) / 2.0,
        ),
        (width, height),
    ))
}

/// Sizes and positions the subject silhouette.
///
/// The silhouette is `subject_height_cm` tall at `scale`, with its width
/// derived from `image_aspect` (width over height), and is centered
/// horizontally on the frame.
///
/// `scale` is the orientation scale, before [`frame_rect`] shrinks the frame
/// to fit the canvas. When that shrink applies, the silhouette is larger
/// relative to the frame than the physical proportions suggest.
///
/// Vertically:
/// - Without a letterbox it is centered in the frame, or pinned to the frame
///   top when taller than the frame.
/// - With a letterbox it is centered in the band, or pinned to the band top
///   when taller than the band; the excess spills into the frame below.
#[must_use]
pub fn subject_placement(
    subject_height_cm: f64,
    scale: f64,
    frame: Rect,
    letterbox: Option<Rect>,
    image_aspect: f64,
) -> SubjectPlacement {
    let height = subject_height_cm * MM_PER_CM * scale;
    let width = height * image_aspect;
    let x = frame.x0 + frame.width() / 2.0;

    let (y, vertical) = match letterbox {
        None if height > frame.height() => (frame.y0, VerticalAnchor::FrameTop),
        None => (
            frame.y0 + (frame.height() - height) / 2.0,
            VerticalAnchor::FrameCenter,
        ),
        Some(band) if height > band.height() => (band.y0, VerticalAnchor::LetterboxTop),
        Some(band) => (
            band.y0 + (band.height() - height) / 2.0,
            VerticalAnchor::LetterboxCenter,
        ),
    };

    SubjectPlacement {
        anchor: Point::new(x, y),
        size: Size::new(width, height),
        offset: Vec2::new(width / 2.0, 0.0),
        vertical,
    }
}

/// Runs the full pipeline for one set of inputs.
///
/// This is a pure function: identical inputs give bit-identical results.
/// Degenerate inputs produce degenerate (zero-sized or non-finite) geometry,
/// never a panic; check [`LayoutResult::is_renderable`] before drawing.
#[must_use]
pub fn layout(
    sensor: SensorSpec,
    shot: ShotParameters,
    canvas: CanvasSize,
    image_aspect: f64,
) -> LayoutResult {
    let orientation = sensor.orientation();
    let area = physical_area(sensor, shot.focal_length_mm, shot.subject_distance_m);
    let scale = scale_mm_to_px(area, canvas, orientation);
    let frame = frame_rect(area, scale, canvas);
    let letterbox = letterbox_rect(frame, shot.letterbox_ratio, orientation);
    let subject = subject_placement(
        shot.subject_height_cm,
        scale,
        frame,
        letterbox,
        image_aspect,
    );
    LayoutResult {
        canvas,
        area,
        scale_mm_to_px: scale,
        frame,
        letterbox,
        subject,
    }
}

fn rect_is_finite(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}
