//! Read-only slider display model
//!
//! For hosts that render the slider themselves and only need the derived
//! geometry: a value over an arbitrary `min..max` range normalized into fill
//! width, knob offset and value text.

use crate::units::{Percent, Ratio, ThumbOffset};

/// Display-only slider state over an arbitrary value range.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderDisplay {
    value: f32,
    min: f32,
    max: f32,
    label: String,
}

impl SliderDisplay {
    /// Pixel correction for the display variant's larger knob
    const KNOB_CORRECTION_PX: f32 = 18.0;

    /// Create a display model for `value` within `min..max`.
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        Self {
            value,
            min,
            max,
            label: String::new(),
        }
    }

    /// Set the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The raw value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The label text.
    pub fn label_text(&self) -> &str {
        &self.label
    }

    /// Normalized position of the value within the range.
    ///
    /// An empty or inverted range yields zero.
    pub fn ratio(&self) -> Ratio {
        if self.max > self.min {
            Ratio::new((self.value - self.min) / (self.max - self.min))
        } else {
            Ratio::ZERO
        }
    }

    /// Fill width as a percent string source.
    pub fn fill_width(&self) -> Percent {
        self.ratio().as_percent()
    }

    /// Knob offset aligned with the fill edge.
    pub fn knob_offset(&self) -> ThumbOffset {
        self.fill_width().offset(Self::KNOB_CORRECTION_PX)
    }

    /// Value text with one decimal (`42.0` -> `"42.0"`).
    pub fn value_text(&self) -> String {
        format!("{:.1}", self.value)
    }
}
