// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider ranges whose upper bound can be stepped up and down.
//!
//! Long lenses and far subjects need a wider slider than everyday values, so
//! each numeric input exposes "widen" and "narrow" controls that move the
//! slider maximum by a fixed step inside hard limits.
//!
//! ```
//! use viewfinder_session::AdjustableRange;
//!
//! let mut focal = AdjustableRange::FOCAL_LENGTH;
//! assert_eq!(focal.max(), 100.0);
//! assert!(!focal.can_decrease());
//!
//! assert!(focal.increase_max());
//! assert_eq!(focal.max(), 200.0);
//! assert_eq!(focal.clamp(350.0), 200.0);
//! ```

/// A `[min, max]` slider range with an adjustable `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjustableRange {
    min: f64,
    max: f64,
    max_floor: f64,
    max_ceiling: f64,
    step: f64,
}

impl AdjustableRange {
    /// Focal length in millimeters: `0..=100`, maximum adjustable in steps of
    /// 100 up to 1000.
    pub const FOCAL_LENGTH: Self = Self::new(0.0, 100.0, 100.0, 1000.0, 100.0);

    /// Subject distance in meters: `0..=10`, maximum adjustable in steps of
    /// 10 up to 1000.
    pub const SUBJECT_DISTANCE: Self = Self::new(0.0, 10.0, 10.0, 1000.0, 10.0);

    /// Subject height in centimeters: `0..=200`, maximum adjustable in steps
    /// of 100 between 100 and 2000.
    pub const SUBJECT_HEIGHT: Self = Self::new(0.0, 200.0, 100.0, 2000.0, 100.0);

    /// Creates a range.
    ///
    /// `max` may move within `[max_floor, max_ceiling]` in increments of `step`.
    #[must_use]
    pub const fn new(min: f64, max: f64, max_floor: f64, max_ceiling: f64, step: f64) -> Self {
        Self {
            min,
            max,
            max_floor,
            max_ceiling,
            step,
        }
    }

    /// Lower bound of the slider.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Current upper bound of the slider.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if [`AdjustableRange::increase_max`] would change anything.
    #[must_use]
    pub fn can_increase(&self) -> bool {
        self.max < self.max_ceiling
    }

    /// Returns `true` if [`AdjustableRange::decrease_max`] would change anything.
    #[must_use]
    pub fn can_decrease(&self) -> bool {
        self.max > self.max_floor
    }

    /// Widens the range by one step. Returns `true` if the maximum changed.
    pub fn increase_max(&mut self) -> bool {
        self.step_max(self.step)
    }

    /// Narrows the range by one step. Returns `true` if the maximum changed.
    pub fn decrease_max(&mut self) -> bool {
        self.step_max(-self.step)
    }

    /// Clamps `value` into the current `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn step_max(&mut self, delta: f64) -> bool {
        let next = (self.max + delta).clamp(self.max_floor, self.max_ceiling);
        if next == self.max {
            return false;
        }
        self.max = next;
        true
    }
}
