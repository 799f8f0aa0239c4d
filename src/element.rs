//! Opaque element handles for the host view
//!
//! The binder never looks elements up itself; the host hands it capabilities
//! for the four collaborators it mutates. This keeps the existence check and
//! the binding logic testable without a live view, and leaves lookup keys,
//! markup and styling entirely to the host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::units::{Percent, ThumbOffset};

/// Handler the control invokes on every value change.
///
/// Registering a new handler replaces any previous one.
pub type InputHandler = Box<dyn FnMut(f32)>;

/// The interactive range control that owns the value.
pub trait RangeControl {
    /// Current value of the control, expected in [0, 100].
    fn value(&self) -> f32;

    /// Register the handler called on every value change.
    fn set_on_input(&mut self, handler: InputHandler);
}

/// The fill bar whose width tracks the control's percentage.
pub trait FillElement {
    fn set_width(&mut self, width: Percent);
}

/// The draggable indicator kept visually aligned with the fill edge.
pub trait ThumbElement {
    fn set_offset(&mut self, offset: ThumbOffset);
}

/// The text element echoing the percent string.
pub trait ValueLabel {
    fn set_text(&mut self, text: &str);
}

/// Shared handle to the range control.
pub type ControlHandle = Rc<RefCell<dyn RangeControl>>;

/// Shared handle to the fill element.
pub type FillHandle = Rc<RefCell<dyn FillElement>>;

/// Shared handle to the thumb element.
pub type ThumbHandle = Rc<RefCell<dyn ThumbElement>>;

/// Shared handle to the value label.
pub type LabelHandle = Rc<RefCell<dyn ValueLabel>>;
