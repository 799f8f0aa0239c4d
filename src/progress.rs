//! Jelly progress model
//!
//! Pure derived state for the jelly progress bar: a normalized ratio plus the
//! quantities the host needs to style the fill, glow and bubble. Nothing to
//! bind here since a progress bar takes no input.

use crate::units::{Percent, Ratio, ThumbOffset};

/// A jelly progress bar's derived display state.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    ratio: Ratio,
    label: String,
}

impl Progress {
    /// Base glow intensity at zero progress
    const GLOW_BASE: f32 = 0.3;
    /// Additional glow gained at full progress
    const GLOW_SPAN: f32 = 0.5;
    /// Pixel correction parking the bubble at the fill edge
    const BUBBLE_CORRECTION_PX: f32 = 16.0;

    /// Create a progress model from a ratio in [0, 1] (clamped).
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio: Ratio::new(ratio),
            label: String::new(),
        }
    }

    /// Set the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The normalized ratio.
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// The label text.
    pub fn label_text(&self) -> &str {
        &self.label
    }

    /// Whole-number percentage of the ratio (`0.5` -> `50`).
    pub fn percentage(&self) -> u8 {
        (self.ratio.value() * 100.0) as u8
    }

    /// Fill width as a percent string source.
    pub fn fill_width(&self) -> Percent {
        Percent::new(f32::from(self.percentage()))
    }

    /// Glow intensity scales with progress, from 0.3 up to 0.8.
    pub fn glow_intensity(&self) -> f32 {
        Self::GLOW_BASE + self.ratio.value() * Self::GLOW_SPAN
    }

    /// Trailing-edge offset that parks the bubble at the fill edge,
    /// measured from the far end (`50%` -> `calc(50% - 16px)`).
    pub fn bubble_offset(&self) -> ThumbOffset {
        self.fill_width()
            .inverted()
            .offset(Self::BUBBLE_CORRECTION_PX)
    }
}
