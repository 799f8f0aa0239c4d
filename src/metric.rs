//! Jelly metric card model
//!
//! Derived state for the jelly metric card: a label, a main value and an
//! optional delta whose sign picks the trend arrow and color the host renders
//! with.

use crate::theme::Color;

/// Direction of a metric's change, derived from the delta's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// A delta counts as down only when it carries an explicit minus sign.
    fn of(delta: &str) -> Self {
        if delta.starts_with('-') {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    /// The arrow glyph shown next to the delta.
    pub fn arrow(self) -> char {
        match self {
            Trend::Up => '↑',
            Trend::Down => '↓',
        }
    }

    /// The delta text color (green up, red down).
    pub fn color(self) -> Color {
        match self {
            Trend::Up => Color::rgb(0x00, 0xff, 0x88),
            Trend::Down => Color::rgb(0xff, 0x44, 0x66),
        }
    }
}

/// A jelly metric card's derived display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    label: String,
    value: String,
    delta: Option<String>,
}

impl Metric {
    /// Create a metric card with a label and its main value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    /// Set the delta/change value.
    pub fn delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }

    /// The metric label.
    pub fn label_text(&self) -> &str {
        &self.label
    }

    /// The main value.
    pub fn value_text(&self) -> &str {
        &self.value
    }

    /// The raw delta, if set.
    pub fn delta_text(&self) -> Option<&str> {
        self.delta.as_deref()
    }

    /// The trend derived from the delta's sign, if a delta is set.
    pub fn trend(&self) -> Option<Trend> {
        self.delta.as_deref().map(Trend::of)
    }

    /// The delta line as the host shows it (`"+56"` -> `"↑ +56"`).
    pub fn delta_display(&self) -> Option<String> {
        let delta = self.delta.as_deref()?;
        Some(format!("{} {}", Trend::of(delta).arrow(), delta))
    }
}
