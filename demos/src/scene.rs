// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene files: the full set of inputs for one diagram, as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;
use viewfinder_geometry::presets::sensor_preset;
use viewfinder_geometry::{CanvasSize, SensorSpec, ShotParameters};

/// Canvas used when neither the scene nor the command line names one.
pub(crate) const DEFAULT_CANVAS: CanvasSize = CanvasSize::new(500.0, 500.0);

/// A silhouette image referenced from the diagram.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct SilhouetteImage {
    /// URL or path written into the SVG `href`.
    pub(crate) href: String,
    /// Intrinsic width in pixels.
    pub(crate) width: u32,
    /// Intrinsic height in pixels.
    pub(crate) height: u32,
}

/// Inputs read from a scene file. Every field is optional.
///
/// ```json
/// {
///   "sensor": "aps-c",
///   "shot": { "focal_length_mm": 85, "letterbox_ratio": 2.39 },
///   "canvas": { "width_px": 800, "height_px": 450 },
///   "silhouette": { "href": "person.png", "width": 120, "height": 300 }
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Scene {
    /// Preset name; ignored when `sensor_size` is present.
    pub(crate) sensor: Option<String>,
    /// Explicit sensor dimensions.
    pub(crate) sensor_size: Option<SensorSpec>,
    pub(crate) shot: ShotParameters,
    pub(crate) canvas: Option<CanvasSize>,
    pub(crate) silhouette: Option<SilhouetteImage>,
}

impl Scene {
    /// Reads and parses a scene file.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sensor named by this scene, or full frame.
    pub(crate) fn resolve_sensor(&self) -> anyhow::Result<SensorSpec> {
        if let Some(size) = self.sensor_size {
            return Ok(size);
        }
        match self.sensor.as_deref() {
            Some(name) => resolve_preset(name),
            None => Ok(SensorSpec::FULL_FRAME),
        }
    }
}

/// Looks up a sensor preset by name.
pub(crate) fn resolve_preset(name: &str) -> anyhow::Result<SensorSpec> {
    match sensor_preset(name) {
        Some(preset) => Ok(preset.sensor),
        None => bail!("Unknown sensor preset '{name}' (try --list-presets)"),
    }
}

/// Parses `WIDTHxHEIGHT` into a canvas size.
pub(crate) fn parse_canvas(value: &str) -> Result<CanvasSize, String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if !(w >= 0.0 && h >= 0.0 && w.is_finite() && h.is_finite()) {
        return Err(format!("canvas dimensions must be non-negative, got '{value}'"));
    }
    Ok(CanvasSize::new(w, h))
}
