//! jelly_ui - jelly-themed slider display binding
//!
//! This crate mirrors a range control's value into the display state of a
//! custom-styled "jelly" slider: a fill bar width, a thumb offset kept on the
//! fill edge, and a percent label. The host view hands the binder opaque
//! element handles and a single ready signal; everything else is derived.

mod binder;
mod callback;
mod config;
mod display;
mod element;
mod metric;
mod progress;
mod theme;
mod units;

pub use binder::{BindError, BindState, SliderBinder};
pub use callback::SyncHook;
pub use config::SliderConfig;
pub use display::SliderDisplay;
pub use element::{
    ControlHandle, FillElement, FillHandle, InputHandler, LabelHandle, RangeControl, ThumbElement,
    ThumbHandle, ValueLabel,
};
pub use metric::{Metric, Trend};
pub use progress::Progress;
pub use theme::{Color, ParseColorError, Theme};
pub use units::{Percent, Ratio, ThumbOffset};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::binder::{BindError, BindState, SliderBinder};
    pub use crate::config::SliderConfig;
    pub use crate::display::SliderDisplay;
    pub use crate::element::{
        ControlHandle, FillElement, FillHandle, InputHandler, LabelHandle, RangeControl,
        ThumbElement, ThumbHandle, ValueLabel,
    };
    pub use crate::metric::{Metric, Trend};
    pub use crate::progress::Progress;
    pub use crate::theme::{Color, Theme};
    pub use crate::units::{Percent, Ratio, ThumbOffset};
}
