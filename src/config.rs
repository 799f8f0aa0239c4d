//! Slider configuration for customizable appearance and behavior.
//!
//! Centralizes the hardcoded values of the jelly slider so hosts can tune
//! them (or load them from a settings file via serde) without touching the
//! binder.

use serde::{Deserialize, Serialize};

use crate::units::{Percent, ThumbOffset};

/// Configuration for the slider binder and the host's visual treatment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Minimum accepted control value
    pub min: f32,
    /// Maximum accepted control value
    pub max: f32,
    /// Pixel correction subtracted from the thumb's percentage offset so the
    /// thumb's visual center stays on the fill edge
    pub thumb_correction_px: f32,
    /// Height of the slider track
    pub track_height_px: f32,
    /// Diameter of the thumb
    pub thumb_size_px: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            thumb_correction_px: 19.0,
            track_height_px: 24.0,
            thumb_size_px: 36.0,
        }
    }
}

impl SliderConfig {
    /// Create a new slider configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum control value.
    pub fn min(mut self, min: f32) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum control value.
    pub fn max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    /// Set the thumb pixel correction.
    pub fn thumb_correction_px(mut self, px: f32) -> Self {
        self.thumb_correction_px = px;
        self
    }

    /// Set the track height.
    pub fn track_height_px(mut self, px: f32) -> Self {
        self.track_height_px = px;
        self
    }

    /// Set the thumb size.
    pub fn thumb_size_px(mut self, px: f32) -> Self {
        self.thumb_size_px = px;
        self
    }

    /// Clamp a raw control value to the configured range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// The thumb offset for a given percentage, with the configured
    /// correction applied.
    pub fn thumb_offset(&self, percent: Percent) -> ThumbOffset {
        ThumbOffset::new(percent, self.thumb_correction_px)
    }
}
