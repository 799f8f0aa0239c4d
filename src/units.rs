//! Type-safe wrappers for slider display quantities
//!
//! This module provides newtype wrappers that add compile-time distinction
//! between the values flowing through the binder, preventing bugs like mixing
//! a normalized ratio with a percentage or a raw pixel count.

use std::fmt;

// =============================================================================
// Percent
// =============================================================================

/// A control value expressed as a percentage in [0, 100].
///
/// The `Display` impl renders the percent string (`75.0` -> `"75%"`) that is
/// used both as the fill width and as the label text, so the two can never
/// disagree.
///
/// # Example
///
/// ```
/// use jelly_ui::Percent;
///
/// let percent = Percent::new(75.0);
/// assert_eq!(percent.to_string(), "75%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(pub f32);

impl Percent {
    /// Empty fill
    pub const ZERO: Self = Self(0.0);

    /// Full fill
    pub const FULL: Self = Self(100.0);

    /// Create a new percentage, clamped to [0, 100].
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw f32 value
    pub const fn value(self) -> f32 {
        self.0
    }

    /// The remaining portion (`75%` -> `25%`), used for trailing-edge offsets.
    pub fn inverted(self) -> Self {
        Self(100.0 - self.0)
    }

    /// Pair this percentage with a pixel correction to form a thumb offset.
    pub const fn offset(self, correction_px: f32) -> ThumbOffset {
        ThumbOffset {
            percent: self,
            correction_px,
        }
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for Percent {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Percent> for f32 {
    fn from(percent: Percent) -> f32 {
        percent.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

// =============================================================================
// ThumbOffset
// =============================================================================

/// A thumb's horizontal offset: a percentage minus a fixed pixel correction.
///
/// The correction keeps the thumb's visual center on the fill edge instead of
/// trailing past it. Renders as a CSS-style calc expression:
///
/// ```
/// use jelly_ui::Percent;
///
/// let offset = Percent::new(75.0).offset(19.0);
/// assert_eq!(offset.to_string(), "calc(75% - 19px)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbOffset {
    percent: Percent,
    correction_px: f32,
}

impl ThumbOffset {
    /// Create a new thumb offset.
    pub const fn new(percent: Percent, correction_px: f32) -> Self {
        Self {
            percent,
            correction_px,
        }
    }

    /// The percentage component.
    pub const fn percent(self) -> Percent {
        self.percent
    }

    /// The pixel correction component.
    pub const fn correction_px(self) -> f32 {
        self.correction_px
    }
}

impl fmt::Display for ThumbOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calc({:.0}% - {:.0}px)",
            self.percent.value(),
            self.correction_px
        )
    }
}

// =============================================================================
// Ratio
// =============================================================================

/// A normalized quantity in [0, 1], as used by the progress and display
/// models before conversion to a [`Percent`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ratio(pub f32);

impl Ratio {
    /// Nothing
    pub const ZERO: Self = Self(0.0);

    /// Everything
    pub const ONE: Self = Self(1.0);

    /// Create a new ratio, clamped to [0, 1].
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f32 value
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to a percentage (`0.75` -> `75%`).
    pub fn as_percent(self) -> Percent {
        Percent::new(self.0 * 100.0)
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f32> for Ratio {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
