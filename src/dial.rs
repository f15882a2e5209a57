//! Value model for a rotary dial: range, step quantization and the
//! value-to-rotation mapping.

use crate::constants::{
    DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, DEFAULT_VALUE, DEFAULT_ZOOM_FACTOR, FULL_TURN,
};
use crate::error::{DialError, Result};

/// Numeric state of a dial.
///
/// Holds the inclusive `[min, max]` range, the quantization step and the
/// current value. The overlay rotation is recomputed synchronously inside
/// every mutator, so `rotation_degrees` is always in sync with `value`.
#[derive(Debug, Clone)]
pub struct DialModel {
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    zoom_factor: f32,
    rotation: f32,
}

impl Default for DialModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DialModel {
    /// Create a model with default range `[0, 360]`, step 1 and value 0.
    pub fn new() -> Self {
        let mut model = Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            value: DEFAULT_VALUE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            rotation: 0.0,
        };
        model.update_rotation();
        model
    }

    /// Create a model with the given range and defaults for the rest.
    pub fn with_range(min: f32, max: f32) -> Self {
        let mut model = Self::new();
        model.set_range(min, max);
        model
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    /// Replace the bounds and re-clamp the current value into them.
    ///
    /// `min > max` is accepted but normalization is degenerate for such a
    /// range; `max == min` pins the normalized value to 0.
    pub fn set_range(&mut self, min: f32, max: f32) {
        self.min = min;
        self.max = max;
        self.set_value(self.value);
    }

    /// Set the quantization step. Zero disables snapping.
    pub fn set_step(&mut self, step: f32) -> Result<()> {
        if step < 0.0 {
            log::warn!("rejecting negative dial step {}", step);
            return Err(DialError::NegativeStep(step));
        }
        self.step = step;
        Ok(())
    }

    /// Set the current value, clamped into `[min, max]`.
    ///
    /// The lower bound is applied before the upper bound, so a degenerate
    /// `min > max` range resolves to `max` instead of panicking.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.max(self.min).min(self.max);
        self.update_rotation();
    }

    pub fn set_zoom_factor(&mut self, zoom_factor: f32) {
        self.zoom_factor = zoom_factor;
    }

    /// Current value rescaled to `[0, 1]`; 0 when the range is empty.
    pub fn normalized_value(&self) -> f32 {
        let span = self.max - self.min;
        if span.abs() < f32::EPSILON {
            0.0
        } else {
            (self.value - self.min) / span
        }
    }

    /// Set the value from a normalized position.
    ///
    /// With a non-zero step the candidate snaps to the nearest step multiple
    /// relative to `min` before the upper clamp; both bounds are enforced on
    /// the stored value.
    pub fn set_normalized_value(&mut self, normalized: f32) {
        let candidate = normalized * (self.max - self.min) + self.min;
        if self.step == 0.0 {
            self.set_value(candidate);
        } else {
            let snapped = ((candidate - self.min) / self.step).round() * self.step + self.min;
            self.set_value(snapped.min(self.max));
        }
    }

    /// Overlay rotation for the current value: `360 * normalized_value()`
    /// degrees.
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation
    }

    fn update_rotation(&mut self) {
        self.rotation = FULL_TURN * self.normalized_value();
    }
}
