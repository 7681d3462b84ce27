// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical framing: shooting area and field of view.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`

use crate::types::{PhysicalArea, SensorSpec};

const MM_PER_M: f64 = 1000.0;

/// Computes the real-world area framed at `subject_distance_m`.
///
/// Uses the magnification-ratio approximation: each sensor dimension is
/// scaled by `distance / focal_length`, with the distance converted to
/// millimeters. The result is linear in distance and inversely proportional
/// to focal length.
///
/// A zero focal length yields infinite (or NaN) dimensions rather than a
/// panic; callers should treat that as "nothing to render".
#[must_use]
pub fn physical_area(
    sensor: SensorSpec,
    focal_length_mm: f64,
    subject_distance_m: f64,
) -> PhysicalArea {
    let distance_mm = subject_distance_m * MM_PER_M;
    PhysicalArea {
        width_mm: sensor.width_mm * distance_mm / focal_length_mm,
        height_mm: sensor.height_mm * distance_mm / focal_length_mm,
    }
}

/// Computes the horizontal field of view in degrees.
///
/// `2 · atan(sensor_width / (2 · focal_length))`. Returns NaN when the focal
/// length is not strictly positive or either input is not finite, so the
/// value can never be mistaken for a real angle.
#[must_use]
pub fn field_of_view_degrees(focal_length_mm: f64, sensor_width_mm: f64) -> f64 {
    if !(focal_length_mm.is_finite() && focal_length_mm > 0.0) || !sensor_width_mm.is_finite() {
        return f64::NAN;
    }
    // atan2(w, 2f) == atan(w / 2f) for f > 0.
    (2.0 * sensor_width_mm.atan2(2.0 * focal_length_mm)).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_frame_fifty_at_two_meters() {
        let area = physical_area(SensorSpec::FULL_FRAME, 50.0, 2.0);
        assert!((area.width_mm - 1440.0).abs() < 1e-9);
        assert!((area.height_mm - 960.0).abs() < 1e-9);
        assert!((area.width_m() - 1.44).abs() < 1e-12);

        let fov = field_of_view_degrees(50.0, 36.0);
        assert!((fov - 39.597_752).abs() < 1e-5, "fov was {fov}");
    }

    #[test]
    fn zero_distance_is_zero_area() {
        let area = physical_area(SensorSpec::FULL_FRAME, 50.0, 0.0);
        assert_eq!(area, PhysicalArea::default());
    }

    #[test]
    fn zero_focal_length_does_not_panic() {
        let area = physical_area(SensorSpec::FULL_FRAME, 0.0, 2.0);
        assert!(area.width_mm.is_infinite());
        assert!(field_of_view_degrees(0.0, 36.0).is_nan());
        assert!(field_of_view_degrees(-10.0, 36.0).is_nan());
        assert!(field_of_view_degrees(50.0, f64::INFINITY).is_nan());
    }

    #[test]
    fn fov_limits() {
        let wide = field_of_view_degrees(1e-9, 36.0);
        let tele = field_of_view_degrees(1e9, 36.0);
        assert!(wide < 180.0 && wide > 179.0);
        assert!(tele > 0.0 && tele < 1e-3);
    }
}
