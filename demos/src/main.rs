// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `viewfinder`: computes a framing diagram and exports it as SVG.
//!
//! Inputs come from an optional JSON scene file; command-line flags override
//! individual values. The readout line goes to stdout. Logging is controlled
//! with `RUST_LOG` (default `info`).

mod scene;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};
use viewfinder_geometry::presets::SENSOR_PRESETS;
use viewfinder_geometry::{CanvasSize, Letterbox, SensorSpec, ShotParameters};
use viewfinder_imaging::{DiagramStyle, ImageDesc, ResourceBackend, Silhouette, paint_layout};
use viewfinder_imaging_svg::SvgBackend;
use viewfinder_session::{AdjustableRange, Framer};

use crate::scene::{DEFAULT_CANVAS, Scene, SilhouetteImage, parse_canvas, resolve_preset};

#[derive(Parser, Debug)]
#[command(name = "viewfinder", version, about = "Camera framing calculator")]
struct Cli {
    /// JSON scene file with default inputs.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Sensor preset name (see --list-presets).
    #[arg(long, conflicts_with_all = ["width_mm", "height_mm"])]
    sensor: Option<String>,

    /// Sensor width in millimeters.
    #[arg(long, requires = "height_mm")]
    width_mm: Option<f64>,

    /// Sensor height in millimeters.
    #[arg(long, requires = "width_mm")]
    height_mm: Option<f64>,

    /// Focal length in millimeters.
    #[arg(long)]
    focal: Option<f64>,

    /// Subject distance in meters.
    #[arg(long)]
    distance: Option<f64>,

    /// Subject height in centimeters.
    #[arg(long)]
    height_cm: Option<f64>,

    /// Letterbox preset name or ratio (for example `cinemascope` or `2.39`).
    #[arg(long, value_parser = parse_letterbox)]
    letterbox: Option<f64>,

    /// Canvas size in pixels, as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_canvas)]
    canvas: Option<CanvasSize>,

    /// Silhouette image URL or path, referenced from the SVG.
    #[arg(long, requires = "silhouette_size")]
    silhouette: Option<String>,

    /// Intrinsic silhouette size in pixels, as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_image_size, requires = "silhouette")]
    silhouette_size: Option<(u32, u32)>,

    /// Where to write the SVG diagram.
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Print the sensor and letterbox presets and exit.
    #[arg(long)]
    list_presets: bool,
}

fn parse_letterbox(value: &str) -> Result<f64, String> {
    if let Some(letterbox) = Letterbox::from_name(value) {
        return Ok(letterbox.ratio());
    }
    match value.parse::<f64>() {
        Ok(ratio) if ratio > 0.0 && ratio.is_finite() => Ok(ratio),
        Ok(_) => Err(format!("letterbox ratio must be positive, got '{value}'")),
        Err(_) => Err(format!("unknown letterbox '{value}'")),
    }
}

fn parse_image_size(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

/// Widens `range` in steps until `value` fits, the way a user would press
/// the "+" button next to a slider.
fn fit_range(label: &str, mut range: AdjustableRange, value: f64) -> AdjustableRange {
    while value > range.max() && range.increase_max() {}
    if value > range.max() {
        warn!(
            "{label} {value} is beyond the largest slider range (max {})",
            range.max()
        );
    } else {
        debug!("{label} slider range {}..={}", range.min(), range.max());
    }
    range
}

fn print_presets() {
    println!("Sensors:");
    for preset in SENSOR_PRESETS {
        println!(
            "  {:<28} {:>5} x {:<5} mm  {}",
            preset.name, preset.sensor.width_mm, preset.sensor.height_mm, preset.label
        );
    }
    println!("Letterboxes:");
    for letterbox in Letterbox::ALL {
        println!(
            "  {:<28} {:>5}  {}",
            letterbox.name(),
            letterbox.ratio(),
            letterbox.label()
        );
    }
}

/// Inputs after applying command-line overrides to the scene.
#[derive(Debug)]
struct Inputs {
    sensor: SensorSpec,
    shot: ShotParameters,
    canvas: CanvasSize,
    silhouette: Option<SilhouetteImage>,
}

fn merge(cli: &Cli, scene: Scene) -> anyhow::Result<Inputs> {
    let sensor = match (&cli.sensor, cli.width_mm, cli.height_mm) {
        (Some(name), _, _) => resolve_preset(name)?,
        (None, Some(w), Some(h)) => SensorSpec::new(w, h),
        _ => scene.resolve_sensor()?,
    };

    let mut shot = scene.shot;
    if let Some(focal) = cli.focal {
        shot.focal_length_mm = focal;
    }
    if let Some(distance) = cli.distance {
        shot.subject_distance_m = distance;
    }
    if let Some(height) = cli.height_cm {
        shot.subject_height_cm = height;
    }
    if let Some(ratio) = cli.letterbox {
        shot.letterbox_ratio = ratio;
    }

    let canvas = cli.canvas.or(scene.canvas).unwrap_or(DEFAULT_CANVAS);

    let silhouette = match (&cli.silhouette, cli.silhouette_size) {
        (Some(href), Some((width, height))) => Some(SilhouetteImage {
            href: href.clone(),
            width,
            height,
        }),
        _ => scene.silhouette,
    };
    Ok(Inputs {
        sensor,
        shot,
        canvas,
        silhouette,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    if cli.list_presets {
        print_presets();
        return Ok(());
    }

    let scene = match &cli.scene {
        Some(path) => {
            let scene = Scene::load(path)?;
            info!("Loaded scene from {}", path.display());
            scene
        }
        None => Scene::default(),
    };
    let Inputs {
        sensor,
        shot,
        canvas,
        silhouette: silhouette_image,
    } = merge(&cli, scene)?;

    if let Err(e) = sensor.validate() {
        warn!("Sensor: {e}");
    }
    if let Err(e) = shot.validate() {
        warn!("Shot: {e}");
    }
    fit_range(
        "Focal length (mm)",
        AdjustableRange::FOCAL_LENGTH,
        shot.focal_length_mm,
    );
    fit_range(
        "Subject distance (m)",
        AdjustableRange::SUBJECT_DISTANCE,
        shot.subject_distance_m,
    );
    fit_range(
        "Subject height (cm)",
        AdjustableRange::SUBJECT_HEIGHT,
        shot.subject_height_cm,
    );

    let mut backend = SvgBackend::default();
    let silhouette = silhouette_image.map(|image_ref| {
        let desc = ImageDesc {
            width: image_ref.width,
            height: image_ref.height,
        };
        let image = backend.create_image(desc);
        backend.set_image_href(image, image_ref.href);
        Silhouette { image, desc }
    });

    let mut framer = Framer::new(sensor, shot);
    if let Some(silhouette) = &silhouette {
        framer.set_subject_aspect(silhouette.aspect());
    }
    framer.set_canvas(canvas);

    println!("{}", framer.readout());

    let Some(layout) = framer.layout() else {
        warn!(
            "Nothing to draw for a {}x{} canvas with these inputs",
            canvas.width_px, canvas.height_px
        );
        return Ok(());
    };
    info!(
        "Frame {:.1}x{:.1} px at {:.4} px/mm, subject anchored {:?}",
        layout.frame.width(),
        layout.frame.height(),
        layout.scale_mm_to_px,
        layout.subject.vertical
    );
    if let Some(band) = layout.letterbox {
        info!("Letterbox {:.1}x{:.1} px", band.width(), band.height());
    }

    let Some(out) = &cli.out else {
        return Ok(());
    };
    paint_layout(&mut backend, layout, &DiagramStyle::default(), silhouette.as_ref());

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "canvas sizes are small, non-negative pixel counts"
    )]
    let svg = backend.to_svg(
        canvas.width_px.ceil() as u32,
        canvas.height_px.ceil() as u32,
    );
    fs::write(out, svg).with_context(|| format!("Failed to write {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("viewfinder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn letterbox_by_name_or_ratio() {
        assert_eq!(parse_letterbox("cinemascope"), Ok(2.39));
        assert_eq!(parse_letterbox("1.5"), Ok(1.5));
        assert!(parse_letterbox("0").is_err());
        assert!(parse_letterbox("imax").is_err());
    }

    #[test]
    fn flags_override_scene() {
        let scene = Scene::parse(
            r#"{ "sensor": "aps-c", "shot": { "focal_length_mm": 85 }, "canvas": { "width_px": 800, "height_px": 450 } }"#,
        )
        .unwrap();
        let args = cli(&["--focal", "35", "--letterbox", "hd"]);
        let inputs = merge(&args, scene).unwrap();
        assert_eq!(inputs.sensor, SensorSpec::new(23.6, 15.8));
        assert_eq!(inputs.shot.focal_length_mm, 35.0);
        assert_eq!(inputs.shot.letterbox_ratio, 1.77);
        assert_eq!(inputs.canvas, CanvasSize::new(800.0, 450.0));
        assert!(inputs.silhouette.is_none());
    }

    #[test]
    fn explicit_sensor_size() {
        let args = cli(&["--width-mm", "24", "--height-mm", "36", "--canvas", "300x600"]);
        let inputs = merge(&args, Scene::default()).unwrap();
        assert_eq!(inputs.sensor, SensorSpec::new(24.0, 36.0));
        assert_eq!(inputs.canvas, CanvasSize::new(300.0, 600.0));
    }

    #[test]
    fn preset_conflicts_with_size() {
        let parsed = Cli::try_parse_from([
            "viewfinder",
            "--sensor",
            "aps-c",
            "--width-mm",
            "10",
            "--height-mm",
            "10",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ranges_widen_to_fit() {
        let range = fit_range("focal", AdjustableRange::FOCAL_LENGTH, 400.0);
        assert_eq!(range.max(), 400.0);
        let range = fit_range("focal", AdjustableRange::FOCAL_LENGTH, 5000.0);
        assert_eq!(range.max(), 1000.0);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
