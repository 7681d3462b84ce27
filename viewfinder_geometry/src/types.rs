// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::modes::Orientation;

/// Physical dimensions of a camera sensor, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSpec {
    /// Sensor width in millimeters.
    pub width_mm: f64,
    /// Sensor height in millimeters.
    pub height_mm: f64,
}

impl SensorSpec {
    /// 35mm full frame, 36 × 24 mm.
    pub const FULL_FRAME: Self = Self::new(36.0, 24.0);

    /// Creates a sensor from its width and height in millimeters.
    #[must_use]
    pub const fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Returns the sensor orientation; landscape iff `width_mm >= height_mm`.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width_mm, self.height_mm)
    }

    /// Returns the same sensor turned by a quarter turn.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self::new(self.height_mm, self.width_mm)
    }

    /// Checks that both dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if is_positive(self.width_mm) && is_positive(self.height_mm) {
            Ok(())
        } else {
            Err(ParameterError::SensorDimensions {
                width_mm: self.width_mm,
                height_mm: self.height_mm,
            })
        }
    }
}

impl Default for SensorSpec {
    fn default() -> Self {
        Self::FULL_FRAME
    }
}

/// Lens and subject parameters for one shot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShotParameters {
    /// Lens focal length in millimeters. Must be `> 0` to be meaningful.
    pub focal_length_mm: f64,
    /// Distance from the lens to the subject, in meters.
    pub subject_distance_m: f64,
    /// Subject height, in centimeters.
    pub subject_height_cm: f64,
    /// Target letterbox aspect ratio; `1.0` means no letterbox.
    pub letterbox_ratio: f64,
}

impl ShotParameters {
    /// Letterbox ratio meaning "no letterbox".
    pub const NO_LETTERBOX: f64 = 1.0;

    /// Checks the parameters against their domains.
    ///
    /// The geometry functions never fail on bad input; this is for callers
    /// that want to reject input before it reaches the engine.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !is_positive(self.focal_length_mm) {
            return Err(ParameterError::FocalLength(self.focal_length_mm));
        }
        if !is_non_negative(self.subject_distance_m) {
            return Err(ParameterError::SubjectDistance(self.subject_distance_m));
        }
        if !is_non_negative(self.subject_height_cm) {
            return Err(ParameterError::SubjectHeight(self.subject_height_cm));
        }
        if !is_positive(self.letterbox_ratio) {
            return Err(ParameterError::LetterboxRatio(self.letterbox_ratio));
        }
        Ok(())
    }

    /// Returns `true` when a letterbox overlay is requested.
    #[must_use]
    pub fn has_letterbox(&self) -> bool {
        self.letterbox_ratio != Self::NO_LETTERBOX
    }
}

impl Default for ShotParameters {
    fn default() -> Self {
        Self {
            focal_length_mm: 50.0,
            subject_distance_m: 2.0,
            subject_height_cm: 160.0,
            letterbox_ratio: Self::NO_LETTERBOX,
        }
    }
}

/// Real-world area framed by the camera at the subject distance, in millimeters.
///
/// This is always derived via [`crate::physical_area`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PhysicalArea {
    /// Framed width in millimeters.
    pub width_mm: f64,
    /// Framed height in millimeters.
    pub height_mm: f64,
}

impl PhysicalArea {
    /// Framed width in meters.
    #[must_use]
    pub fn width_m(&self) -> f64 {
        self.width_mm / 1000.0
    }

    /// Framed height in meters.
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_mm / 1000.0
    }
}

/// Pixel size of the drawing surface.
///
/// A zero size is valid and means the container has not been measured yet.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSize {
    /// Width in pixels.
    pub width_px: f64,
    /// Height in pixels.
    pub height_px: f64,
}

impl CanvasSize {
    /// Creates a canvas size from pixel width and height.
    #[must_use]
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Returns `true` if either dimension is zero, negative, or not finite.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(is_positive(self.width_px) && is_positive(self.height_px))
    }
}

impl From<kurbo::Size> for CanvasSize {
    fn from(size: kurbo::Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Input outside of the domain the geometry is defined for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterError {
    /// A sensor dimension is zero, negative, or not finite.
    SensorDimensions {
        /// Offending width.
        width_mm: f64,
        /// Offending height.
        height_mm: f64,
    },
    /// Focal length is zero, negative, or not finite.
    FocalLength(f64),
    /// Subject distance is negative or not finite.
    SubjectDistance(f64),
    /// Subject height is negative or not finite.
    SubjectHeight(f64),
    /// Letterbox ratio is zero, negative, or not finite.
    LetterboxRatio(f64),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorDimensions {
                width_mm,
                height_mm,
            } => write!(
                f,
                "sensor dimensions must be positive, got {width_mm} x {height_mm} mm"
            ),
            Self::FocalLength(v) => write!(f, "focal length must be positive, got {v} mm"),
            Self::SubjectDistance(v) => {
                write!(f, "subject distance must not be negative, got {v} m")
            }
            Self::SubjectHeight(v) => {
                write!(f, "subject height must not be negative, got {v} cm")
            }
            Self::LetterboxRatio(v) => write!(f, "letterbox ratio must be positive, got {v}"),
        }
    }
}

impl core::error::Error for ParameterError {}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
