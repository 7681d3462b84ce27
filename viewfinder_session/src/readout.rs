// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use viewfinder_geometry::{SensorSpec, ShotParameters, field_of_view_degrees, physical_area};

/// Numbers shown next to the diagram: framed area in meters and FOV.
///
/// `Display` renders two decimals, for example
/// `1.44 m x 0.96 m | FOV 39.60°`. Values that are not finite (zero focal
/// length) render as `--`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    /// Framed width in meters.
    pub width_m: f64,
    /// Framed height in meters.
    pub height_m: f64,
    /// Horizontal field of view in degrees.
    pub fov_degrees: f64,
}

impl Readout {
    /// Computes the readout for a sensor and shot.
    #[must_use]
    pub fn new(sensor: SensorSpec, shot: &ShotParameters) -> Self {
        let area = physical_area(sensor, shot.focal_length_mm, shot.subject_distance_m);
        Self {
            width_m: area.width_m(),
            height_m: area.height_m(),
            fov_degrees: field_of_view_degrees(shot.focal_length_mm, sensor.width_mm),
        }
    }
}

struct Fixed2(f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            write!(f, "{:.2}", self.0)
        } else {
            f.write_str("--")
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} m x {} m | FOV {}\u{b0}",
            Fixed2(self.width_m),
            Fixed2(self.height_m),
            Fixed2(self.fov_degrees)
        )
    }
}
