// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `viewfinder_geometry` crate.
//!
//! These exercise the geometric invariants of the full pipeline across the
//! built-in presets, custom sensors, lenses, distances, and ratios on a
//! handful of canvas shapes, plus the worked full-frame scenarios.

use kurbo::Rect;
use viewfinder_geometry::presets::SENSOR_PRESETS;
use viewfinder_geometry::{
    CanvasSize, Letterbox, Orientation, SensorSpec, ShotParameters, VerticalAnchor,
    field_of_view_degrees, layout, physical_area,
};

const SLACK: f64 = 1e-6;

const CANVASES: [CanvasSize; 4] = [
    CanvasSize::new(500.0, 500.0),
    CanvasSize::new(1280.0, 720.0),
    CanvasSize::new(320.0, 900.0),
    CanvasSize::new(250.0, 251.0),
];

fn contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 - SLACK
        && inner.y0 >= outer.y0 - SLACK
        && inner.x1 <= outer.x1 + SLACK
        && inner.y1 <= outer.y1 + SLACK
}

fn canvas_rect(canvas: CanvasSize) -> Rect {
    Rect::new(0.0, 0.0, canvas.width_px, canvas.height_px)
}

#[test]
fn area_is_linear_in_distance_and_inverse_in_focal_length() {
    for preset in SENSOR_PRESETS {
        for focal in [8.0, 24.0, 50.0, 135.0, 600.0] {
            for distance in [0.5, 2.0, 7.3, 120.0] {
                let base = physical_area(preset.sensor, focal, distance);
                let far = physical_area(preset.sensor, focal, 2.0 * distance);
                let long = physical_area(preset.sensor, 2.0 * focal, distance);

                assert!((far.width_mm - 2.0 * base.width_mm).abs() <= 1e-9 * far.width_mm);
                assert!((far.height_mm - 2.0 * base.height_mm).abs() <= 1e-9 * far.height_mm);
                assert!((long.width_mm * 2.0 - base.width_mm).abs() <= 1e-9 * base.width_mm);
                assert!((long.height_mm * 2.0 - base.height_mm).abs() <= 1e-9 * base.height_mm);
            }
        }
    }
}

#[test]
fn fov_is_strictly_decreasing_and_bounded() {
    for preset in SENSOR_PRESETS {
        let width = preset.sensor.width_mm;
        let mut previous = 180.0;
        for focal in [1.0, 4.5, 10.0, 18.0, 35.0, 50.0, 85.0, 200.0, 800.0] {
            let fov = field_of_view_degrees(focal, width);
            assert!(fov > 0.0 && fov < 180.0, "fov {fov} out of range");
            assert!(fov < previous, "fov not decreasing at {focal} mm");
            previous = fov;
        }
    }
}

#[test]
fn frame_stays_inside_canvas() {
    for preset in SENSOR_PRESETS {
        for canvas in CANVASES {
            let result = layout(preset.sensor, ShotParameters::default(), canvas, 0.4);
            assert!(result.is_renderable());
            assert!(
                contains(canvas_rect(canvas), result.frame),
                "{} frame {:?} escapes {canvas:?}",
                preset.name,
                result.frame
            );
            // Centered on both axes.
            assert!((result.frame.center().x - canvas.width_px / 2.0).abs() < SLACK);
            assert!((result.frame.center().y - canvas.height_px / 2.0).abs() < SLACK);
        }
    }
}

#[test]
fn letterbox_keeps_ratio_and_stays_inside_frame() {
    for preset in SENSOR_PRESETS {
        for canvas in CANVASES {
            for letterbox in Letterbox::ALL {
                let shot = ShotParameters {
                    letterbox_ratio: letterbox.ratio(),
                    ..ShotParameters::default()
                };
                let result = layout(preset.sensor, shot, canvas, 0.4);
                let Some(band) = result.letterbox else {
                    assert_eq!(letterbox, Letterbox::None);
                    continue;
                };
                let aspect = match preset.sensor.orientation() {
                    Orientation::Landscape => band.width() / band.height(),
                    Orientation::Portrait => band.height() / band.width(),
                };
                assert!(
                    (aspect - letterbox.ratio()).abs() < 1e-9,
                    "{} / {}: aspect {aspect}",
                    preset.name,
                    letterbox.name()
                );
                assert!(contains(result.frame, band));
                assert!((band.center().x - result.frame.center().x).abs() < SLACK);
                assert!((band.center().y - result.frame.center().y).abs() < SLACK);
            }
        }
    }
}

#[test]
fn pipeline_is_idempotent() {
    let sensor = SensorSpec::new(23.6, 15.8);
    let shot = ShotParameters {
        focal_length_mm: 35.0,
        subject_distance_m: 3.7,
        subject_height_cm: 182.0,
        letterbox_ratio: Letterbox::AmericanVista.ratio(),
    };
    let canvas = CanvasSize::new(613.0, 401.0);
    let a = layout(sensor, shot, canvas, 0.37);
    let b = layout(sensor, shot, canvas, 0.37);
    assert_eq!(a, b);
    assert_eq!(a.frame.x0.to_bits(), b.frame.x0.to_bits());
    assert_eq!(
        a.subject.anchor.y.to_bits(),
        b.subject.anchor.y.to_bits()
    );
}

#[test]
fn full_frame_on_square_canvas() {
    let result = layout(
        SensorSpec::FULL_FRAME,
        ShotParameters::default(),
        CanvasSize::new(500.0, 500.0),
        0.4,
    );
    assert!((result.area.width_mm - 1440.0).abs() < 1e-9);
    assert!((result.area.height_mm - 960.0).abs() < 1e-9);
    assert!((result.scale_mm_to_px - 0.347_222_222).abs() < 1e-9);
    assert!((result.frame.width() - 500.0).abs() < SLACK);
    assert!((result.frame.height() - 333.333_333).abs() < 1e-5);
    assert!(result.letterbox.is_none());
}

#[test]
fn full_frame_cinemascope_band() {
    let shot = ShotParameters {
        letterbox_ratio: 2.39,
        ..ShotParameters::default()
    };
    let result = layout(SensorSpec::FULL_FRAME, shot, CanvasSize::new(500.0, 500.0), 0.4);
    let band = result.letterbox.unwrap();
    assert!((band.width() - 500.0).abs() < SLACK);
    assert!((band.height() - 209.205_021).abs() < 1e-5);
}

#[test]
fn three_meter_subject_overflows_from_the_top() {
    let shot = ShotParameters {
        subject_height_cm: 300.0,
        ..ShotParameters::default()
    };
    let result = layout(SensorSpec::FULL_FRAME, shot, CanvasSize::new(500.0, 500.0), 0.4);
    assert!(result.subject.size.height > result.frame.height());
    assert_eq!(result.subject.vertical, VerticalAnchor::FrameTop);
    assert_eq!(result.subject.anchor.y, result.frame.y0);
    assert!((result.subject.anchor.x - 250.0).abs() < SLACK);
}

#[test]
fn tall_subject_in_letterbox_pins_to_band_top() {
    let shot = ShotParameters {
        subject_height_cm: 120.0,
        letterbox_ratio: Letterbox::Cinemascope.ratio(),
        ..ShotParameters::default()
    };
    let result = layout(SensorSpec::FULL_FRAME, shot, CanvasSize::new(500.0, 500.0), 0.4);
    let band = result.letterbox.unwrap();
    // 1200 mm at 0.347 px/mm is about 417 px, taller than the 209 px band.
    assert!(result.subject.size.height > band.height());
    assert_eq!(result.subject.vertical, VerticalAnchor::LetterboxTop);
    assert_eq!(result.subject.anchor.y, band.y0);
}

#[test]
fn short_subject_centers_in_letterbox() {
    let shot = ShotParameters {
        subject_height_cm: 30.0,
        letterbox_ratio: Letterbox::Cinemascope.ratio(),
        ..ShotParameters::default()
    };
    let result = layout(SensorSpec::FULL_FRAME, shot, CanvasSize::new(500.0, 500.0), 0.4);
    let band = result.letterbox.unwrap();
    let bounds = result.subject.bounds();
    assert_eq!(result.subject.vertical, VerticalAnchor::LetterboxCenter);
    assert!((bounds.center().y - band.center().y).abs() < SLACK);
    assert!((bounds.center().x - band.center().x).abs() < SLACK);
}

const CUSTOM_SENSORS: [SensorSpec; 4] = [
    SensorSpec::new(60.0, 20.0),
    SensorSpec::new(5.0, 40.0),
    SensorSpec::new(30.0, 30.0),
    SensorSpec::new(7.1, 3.3),
];

const RATIOS: [f64; 6] = [0.8, 1.3, 1.77, 2.0, 2.39, 4.0];

#[test]
fn frame_stays_inside_canvas_for_any_lens_and_distance() {
    let canvases = [CanvasSize::new(1000.0, 300.0), CanvasSize::new(1.0, 1.0)];
    let sensors = SENSOR_PRESETS.iter().map(|p| p.sensor).chain(CUSTOM_SENSORS);
    for sensor in sensors {
        for focal in [3.7, 14.0, 35.0, 85.0, 400.0, 1200.0] {
            for distance in [0.25, 1.0, 3.3, 40.0, 900.0] {
                for canvas in CANVASES.into_iter().chain(canvases) {
                    let shot = ShotParameters {
                        focal_length_mm: focal,
                        subject_distance_m: distance,
                        ..ShotParameters::default()
                    };
                    let result = layout(sensor, shot, canvas, 0.4);
                    assert!(result.is_renderable());
                    assert!(
                        contains(canvas_rect(canvas), result.frame),
                        "{sensor:?} {focal} mm {distance} m: frame {:?} escapes {canvas:?}",
                        result.frame
                    );
                    let center = result.frame.center();
                    assert!((center.x - canvas.width_px / 2.0).abs() < SLACK);
                    assert!((center.y - canvas.height_px / 2.0).abs() < SLACK);
                }
            }
        }
    }
}

#[test]
fn letterbox_keeps_ratio_or_covers_frame_for_custom_inputs() {
    let sensors = SENSOR_PRESETS.iter().map(|p| p.sensor).chain(CUSTOM_SENSORS);
    for sensor in sensors {
        for canvas in CANVASES {
            for ratio in RATIOS {
                let shot = ShotParameters {
                    focal_length_mm: 28.0,
                    subject_distance_m: 6.5,
                    letterbox_ratio: ratio,
                    ..ShotParameters::default()
                };
                let result = layout(sensor, shot, canvas, 0.4);
                let band = result.letterbox.unwrap();
                let frame = result.frame;
                let (band_aspect, frame_aspect) = match sensor.orientation() {
                    Orientation::Landscape => {
                        (band.width() / band.height(), frame.width() / frame.height())
                    }
                    Orientation::Portrait => {
                        (band.height() / band.width(), frame.height() / frame.width())
                    }
                };

                assert!(contains(frame, band), "{sensor:?} {ratio}: {band:?}");
                assert!((band.center().x - frame.center().x).abs() < SLACK);
                assert!((band.center().y - frame.center().y).abs() < SLACK);
                if ratio >= frame_aspect * (1.0 + 1e-9) {
                    assert!(
                        (band_aspect - ratio).abs() < 1e-9 * ratio,
                        "{sensor:?} {ratio}: aspect {band_aspect}"
                    );
                } else if ratio < frame_aspect * (1.0 - 1e-9) {
                    // Narrower than the frame itself: the band is the frame.
                    assert!((band.width() - frame.width()).abs() < SLACK);
                    assert!((band.height() - frame.height()).abs() < SLACK);
                }
            }
        }
    }
}

#[test]
fn narrow_ratio_on_wide_sensor_is_full_frame() {
    let shot = ShotParameters {
        letterbox_ratio: Letterbox::Cinemascope.ratio(),
        ..ShotParameters::default()
    };
    // 60 x 20 is 3:1, wider than 2.39:1.
    let result = layout(
        SensorSpec::new(60.0, 20.0),
        shot,
        CanvasSize::new(600.0, 600.0),
        0.4,
    );
    let band = result.letterbox.unwrap();
    assert!((result.frame.width() - 600.0).abs() < SLACK);
    assert!((result.frame.height() - 200.0).abs() < SLACK);
    assert!((band.width() - result.frame.width()).abs() < SLACK);
    assert!((band.height() - result.frame.height()).abs() < SLACK);
    assert!((band.y0 - result.frame.y0).abs() < SLACK);
}

#[test]
fn subject_uses_unclamped_scale_when_frame_is_shrunk() {
    // Width-matched scale is 1000 / 1440; the frame is shrunk to 300 px tall.
    let shot = ShotParameters {
        subject_height_cm: 96.0,
        ..ShotParameters::default()
    };
    let canvas = CanvasSize::new(1000.0, 300.0);
    let result = layout(SensorSpec::FULL_FRAME, shot, canvas, 0.5);
    assert!(result.is_renderable());
    assert!((result.scale_mm_to_px - 1000.0 / 1440.0).abs() < 1e-12);
    assert!((result.frame.height() - 300.0).abs() < SLACK);
    assert!((result.frame.width() - 450.0).abs() < SLACK);

    let subject = result.subject;
    assert!((subject.size.height - 960.0 * 1000.0 / 1440.0).abs() < SLACK);
    assert!((subject.size.width - subject.size.height * 0.5).abs() < SLACK);
    assert_eq!(subject.vertical, VerticalAnchor::FrameTop);
    assert!((subject.anchor.x - 500.0).abs() < SLACK);
    assert!(subject.anchor.y.abs() < SLACK);
}
