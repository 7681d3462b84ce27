// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named sensor sizes and letterbox ratios.
//!
//! These are plain data tables; no computation lives here.

use crate::types::{SensorSpec, ShotParameters};

/// A named sensor size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorPreset {
    /// Stable, lowercase identifier (for example `"full-frame"`).
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Sensor dimensions.
    pub sensor: SensorSpec,
}

const fn preset(name: &'static str, label: &'static str, w: f64, h: f64) -> SensorPreset {
    SensorPreset {
        name,
        label,
        sensor: SensorSpec::new(w, h),
    }
}

/// Built-in sensor sizes, landscape first, then their portrait counterparts.
pub const SENSOR_PRESETS: &[SensorPreset] = &[
    preset("medium-format", "Medium format", 43.8, 32.9),
    preset("full-frame", "35mm full frame", 36.0, 24.0),
    preset("aps-c", "APS-C (Sony, Nikon)", 23.6, 15.8),
    preset("aps-c-canon", "APS-C (Canon)", 22.3, 14.9),
    preset("micro-four-thirds", "Micro Four Thirds", 17.3, 13.0),
    preset("1-inch", "1-inch", 13.2, 8.8),
    preset("2/3-inch", "2/3-inch", 8.8, 6.8),
    preset("1/2.3-inch", "1/2.3-inch", 6.2, 4.6),
    preset("medium-format-portrait", "Medium format (portrait)", 32.9, 43.8),
    preset("full-frame-portrait", "35mm full frame (portrait)", 24.0, 36.0),
    preset("aps-c-portrait", "APS-C (Sony, Nikon) (portrait)", 15.8, 23.6),
    preset("aps-c-canon-portrait", "APS-C (Canon) (portrait)", 14.9, 22.3),
    preset("micro-four-thirds-portrait", "Micro Four Thirds (portrait)", 13.0, 17.3),
    preset("1-inch-portrait", "1-inch (portrait)", 8.8, 13.2),
    preset("2/3-inch-portrait", "2/3-inch (portrait)", 6.8, 8.8),
    preset("1/2.3-inch-portrait", "1/2.3-inch (portrait)", 4.6, 6.2),
];

/// Looks up a sensor preset by its [`SensorPreset::name`].
#[must_use]
pub fn sensor_preset(name: &str) -> Option<&'static SensorPreset> {
    SENSOR_PRESETS.iter().find(|p| p.name == name)
}

/// Letterbox presets for common cinema and video formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Letterbox {
    /// No letterbox; the full sensor frame is used.
    #[default]
    None,
    /// HD / wide movie, 16:9.
    HdWide,
    /// European vista, 1.66:1.
    EuropeanVista,
    /// American vista, 1.85:1.
    AmericanVista,
    /// Cinemascope, 2.39:1.
    Cinemascope,
}

impl Letterbox {
    /// All presets in menu order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::HdWide,
        Self::EuropeanVista,
        Self::AmericanVista,
        Self::Cinemascope,
    ];

    /// Aspect ratio of the preset (long side over short side).
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            Self::None => ShotParameters::NO_LETTERBOX,
            Self::HdWide => 1.77,
            Self::EuropeanVista => 1.66,
            Self::AmericanVista => 1.85,
            Self::Cinemascope => 2.39,
        }
    }

    /// Stable, lowercase identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HdWide => "hd",
            Self::EuropeanVista => "european-vista",
            Self::AmericanVista => "american-vista",
            Self::Cinemascope => "cinemascope",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No letterbox",
            Self::HdWide => "HD / wide movie - 1.78:1 (16:9)",
            Self::EuropeanVista => "European vista - 1.66:1",
            Self::AmericanVista => "American vista - 1.85:1",
            Self::Cinemascope => "Cinemascope - 2.39:1",
        }
    }

    /// Looks up a preset by its [`Letterbox::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_are_unique() {
        for (i, a) in SENSOR_PRESETS.iter().enumerate() {
            for b in &SENSOR_PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn portrait_presets_mirror_landscape_ones() {
        let (landscape, portrait) = SENSOR_PRESETS.split_at(SENSOR_PRESETS.len() / 2);
        for (l, p) in landscape.iter().zip(portrait) {
            assert!(l.sensor.orientation().is_landscape());
            assert!(!p.sensor.orientation().is_landscape());
            assert_eq!(l.sensor.rotated(), p.sensor);
            assert!(p.name.starts_with(l.name));
        }
    }

    #[test]
    fn lookup_by_name() {
        let ff = sensor_preset("full-frame").unwrap();
        assert_eq!(ff.sensor, SensorSpec::FULL_FRAME);
        assert!(sensor_preset("super-35").is_none());

        assert_eq!(Letterbox::from_name("cinemascope"), Some(Letterbox::Cinemascope));
        assert_eq!(Letterbox::from_name("none").map(Letterbox::ratio), Some(1.0));
        assert_eq!(Letterbox::from_name("imax"), None);
    }
}
