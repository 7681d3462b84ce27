// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use viewfinder_geometry::{
    CanvasSize, FALLBACK_SUBJECT_ASPECT, LayoutResult, Letterbox, SensorSpec, ShotParameters,
    layout,
};

use crate::readout::Readout;

/// Current inputs for one framing diagram plus its derived layout.
///
/// `Framer` is the glue between a host UI and the pure geometry:
/// - The host forwards every input change and every measured canvas size.
/// - Each effective change re-runs the full layout from scratch and bumps
///   [`Framer::revision`], so the host knows when to redraw.
/// - Setting a value equal to the current one is a no-op. Equality is
///   bitwise, so repeating a NaN is a no-op too.
///
/// The last measured canvas size is retained across input changes. Until the
/// host reports a non-empty size, [`Framer::layout`] returns `None`.
#[derive(Clone, Debug)]
pub struct Framer {
    sensor: SensorSpec,
    shot: ShotParameters,
    canvas: CanvasSize,
    subject_aspect: f64,
    revision: u64,
    current: LayoutResult,
    ready: bool,
}

impl Framer {
    /// Creates a framer for `sensor` and `shot` with an unmeasured canvas.
    #[must_use]
    pub fn new(sensor: SensorSpec, shot: ShotParameters) -> Self {
        let canvas = CanvasSize::default();
        let current = layout(sensor, shot, canvas, FALLBACK_SUBJECT_ASPECT);
        Self {
            sensor,
            shot,
            canvas,
            subject_aspect: FALLBACK_SUBJECT_ASPECT,
            revision: 0,
            ready: current.is_renderable(),
            current,
        }
    }

    /// Current sensor.
    #[must_use]
    pub fn sensor(&self) -> SensorSpec {
        self.sensor
    }

    /// Current shot parameters.
    #[must_use]
    pub fn shot(&self) -> ShotParameters {
        self.shot
    }

    /// Last canvas size reported by the host.
    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Width over height of the subject silhouette image.
    #[must_use]
    pub fn subject_aspect(&self) -> f64 {
        self.subject_aspect
    }

    /// Number of effective changes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the layout, or `None` if it is not ready to render.
    #[must_use]
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.ready.then_some(&self.current)
    }

    /// Returns the layout even when it is degenerate.
    #[must_use]
    pub fn raw_layout(&self) -> &LayoutResult {
        &self.current
    }

    /// Returns the area/FOV readout for the current inputs.
    ///
    /// The readout does not depend on the canvas and is available before the
    /// first measurement.
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout::new(self.sensor, &self.shot)
    }

    /// Sets the sensor dimensions.
    pub fn set_sensor(&mut self, sensor: SensorSpec) {
        if sensor_bits(&self.sensor) == sensor_bits(&sensor) {
            return;
        }
        self.sensor = sensor;
        self.relayout();
    }

    /// Replaces all shot parameters at once.
    pub fn set_shot(&mut self, shot: ShotParameters) {
        if shot_bits(&self.shot) == shot_bits(&shot) {
            return;
        }
        self.shot = shot;
        self.relayout();
    }

    /// Sets the focal length in millimeters.
    pub fn set_focal_length(&mut self, focal_length_mm: f64) {
        self.set_shot(ShotParameters {
            focal_length_mm,
            ..self.shot
        });
    }

    /// Sets the subject distance in meters.
    pub fn set_subject_distance(&mut self, subject_distance_m: f64) {
        self.set_shot(ShotParameters {
            subject_distance_m,
            ..self.shot
        });
    }

    /// Sets the subject height in centimeters.
    pub fn set_subject_height(&mut self, subject_height_cm: f64) {
        self.set_shot(ShotParameters {
            subject_height_cm,
            ..self.shot
        });
    }

    /// Sets the letterbox from a preset.
    pub fn set_letterbox(&mut self, letterbox: Letterbox) {
        self.set_letterbox_ratio(letterbox.ratio());
    }

    /// Sets an arbitrary letterbox ratio; `1.0` disables the letterbox.
    pub fn set_letterbox_ratio(&mut self, letterbox_ratio: f64) {
        self.set_shot(ShotParameters {
            letterbox_ratio,
            ..self.shot
        });
    }

    /// Records a newly measured canvas size.
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        if canvas_bits(&self.canvas) == canvas_bits(&canvas) {
            return;
        }
        self.canvas = canvas;
        self.relayout();
    }

    /// Sets the silhouette aspect ratio once its image is known.
    pub fn set_subject_aspect(&mut self, aspect: f64) {
        if self.subject_aspect.to_bits() == aspect.to_bits() {
            return;
        }
        self.subject_aspect = aspect;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.revision += 1;
        self.current = layout(self.sensor, self.shot, self.canvas, self.subject_aspect);

        let ready = self.current.is_renderable();
        if ready != self.ready {
            if ready {
                log::debug!(
                    "layout ready at revision {} (scale {} px/mm)",
                    self.revision,
                    self.current.scale_mm_to_px
                );
            } else {
                log::debug!(
                    "layout not ready at revision {} (canvas {}x{}, scale {})",
                    self.revision,
                    self.canvas.width_px,
                    self.canvas.height_px,
                    self.current.scale_mm_to_px
                );
            }
            self.ready = ready;
        }
        log::trace!("relayout {}: {:?}", self.revision, self.current);
    }
}

fn sensor_bits(sensor: &SensorSpec) -> [u64; 2] {
    [sensor.width_mm.to_bits(), sensor.height_mm.to_bits()]
}

fn shot_bits(shot: &ShotParameters) -> [u64; 4] {
    [
        shot.focal_length_mm.to_bits(),
        shot.subject_distance_m.to_bits(),
        shot.subject_height_cm.to_bits(),
        shot.letterbox_ratio.to_bits(),
    ]
}

fn canvas_bits(canvas: &CanvasSize) -> [u64; 2] {
    [canvas.width_px.to_bits(), canvas.height_px.to_bits()]
}

impl Default for Framer {
    fn default() -> Self {
        Self::new(SensorSpec::default(), ShotParameters::default())
    }
}
