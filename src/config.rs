//! Recognized configuration options for the dial widget.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, DEFAULT_VALUE, DEFAULT_ZOOM_FACTOR,
};
use crate::dial::DialModel;
use crate::error::Result;

/// Dial options as they appear in persisted configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Minimum value
    pub min: f32,
    /// Maximum value
    pub max: f32,
    /// Step size (0 for continuous)
    pub step: f32,
    /// Initial value
    pub value: f32,
    /// Scale multiplier while pressed
    pub zoom_factor: f32,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            value: DEFAULT_VALUE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

impl DialConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum value.
    pub fn min(mut self, min: f32) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum value.
    pub fn max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    /// Set the step size.
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the initial value.
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set the press zoom factor.
    pub fn zoom_factor(mut self, zoom_factor: f32) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    /// Apply the options to a model through its setters.
    ///
    /// A negative configured step surfaces the setter's error and leaves the
    /// model's previous step in place.
    pub fn apply(&self, model: &mut DialModel) -> Result<()> {
        model.set_range(self.min, self.max);
        model.set_step(self.step)?;
        model.set_zoom_factor(self.zoom_factor);
        model.set_value(self.value);
        Ok(())
    }

    /// Build a fresh model from these options.
    pub fn build(&self) -> Result<DialModel> {
        let mut model = DialModel::new();
        self.apply(&mut model)?;
        Ok(model)
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize options to a JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
