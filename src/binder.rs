//! Binds a range control to its jelly fill, thumb and value label.
//!
//! The binder owns no elements and draws nothing: it is handed opaque handles
//! by the host, and once the host signals that the view is attached it
//! registers an input handler on the control that mirrors every value change
//! into three derived display properties (fill width, thumb offset, label
//! text). All three are recomputed in full on every event, so repeated values
//! are idempotent by construction.

use std::rc::Rc;

use thiserror::Error;

use crate::callback::SyncHook;
use crate::config::SliderConfig;
use crate::element::{ControlHandle, FillHandle, LabelHandle, ThumbHandle};
use crate::units::Percent;

/// Why binding could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("range control not present in the view")]
    MissingControl,
    #[error("fill element not present in the view")]
    MissingFill,
    #[error("thumb element not present in the view")]
    MissingThumb,
    #[error("value label not present in the view")]
    MissingLabel,
}

/// Whether the binder has attached its input handler.
///
/// The transition is one-way: once bound there is no teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindState {
    /// No handler registered yet (or ever, if the view is incomplete)
    #[default]
    Unbound,
    /// Handler registered on the control
    Bound,
}

/// Mirrors a range control's value into fill width, thumb offset and label
/// text.
///
/// Every handle is optional because an absent element is a legal state of the
/// host view, not an error the host must pre-check; binding simply does not
/// happen unless all four are present.
///
/// # Example
///
/// ```ignore
/// let mut binder = SliderBinder::new(control, fill, thumb, label)
///     .on_sync(|percent| log::info!("slider at {percent}"));
///
/// // Called by the host once the view is attached.
/// binder.ready();
/// ```
pub struct SliderBinder {
    control: Option<ControlHandle>,
    fill: Option<FillHandle>,
    thumb: Option<ThumbHandle>,
    label: Option<LabelHandle>,
    config: SliderConfig,
    on_sync: Rc<SyncHook>,
    state: BindState,
}

impl SliderBinder {
    /// Create a binder from the host's element handles.
    pub fn new(
        control: Option<ControlHandle>,
        fill: Option<FillHandle>,
        thumb: Option<ThumbHandle>,
        label: Option<LabelHandle>,
    ) -> Self {
        Self {
            control,
            fill,
            thumb,
            label,
            config: SliderConfig::default(),
            on_sync: Rc::new(SyncHook::none()),
            state: BindState::Unbound,
        }
    }

    /// Set the slider configuration.
    pub fn config(mut self, config: SliderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the hook invoked with the applied percentage after each update.
    pub fn on_sync<F>(mut self, f: F) -> Self
    where
        F: Fn(Percent) + 'static,
    {
        self.on_sync = Rc::new(SyncHook::new(f));
        self
    }

    /// Current bind state.
    pub fn state(&self) -> BindState {
        self.state
    }

    /// Whether the input handler has been registered.
    pub fn is_bound(&self) -> bool {
        self.state == BindState::Bound
    }

    /// Ready signal: the host calls this once the view is attached.
    ///
    /// If any element is absent this is a silent no-op; use [`try_bind`] to
    /// observe which one was missing.
    ///
    /// [`try_bind`]: Self::try_bind
    pub fn ready(&mut self) {
        let _ = self.try_bind();
    }

    /// Attach the input handler to the control.
    ///
    /// Succeeds only if all four handles are present; a missing element
    /// leaves the binder unbound with no partial registration. Calling this
    /// again once bound is a no-op that returns `Ok`.
    pub fn try_bind(&mut self) -> Result<(), BindError> {
        if self.is_bound() {
            return Ok(());
        }

        let control = self.control.clone().ok_or(BindError::MissingControl)?;
        let fill = self.fill.clone().ok_or(BindError::MissingFill)?;
        let thumb = self.thumb.clone().ok_or(BindError::MissingThumb)?;
        let label = self.label.clone().ok_or(BindError::MissingLabel)?;

        let config = self.config.clone();
        let hook = self.on_sync.clone();
        control.borrow_mut().set_on_input(Box::new(move |value| {
            apply(&fill, &thumb, &label, &config, &hook, value);
        }));

        self.state = BindState::Bound;
        log::debug!(
            "slider binder attached (thumb correction {}px)",
            self.config.thumb_correction_px
        );
        Ok(())
    }

    /// One-shot refresh from the control's current value.
    ///
    /// Applies the same three mutations as an input event, for hosts that
    /// want an initial paint. Does nothing if any element is absent.
    pub fn sync(&self) {
        let (Some(control), Some(fill), Some(thumb), Some(label)) = (
            self.control.as_ref(),
            self.fill.as_ref(),
            self.thumb.as_ref(),
            self.label.as_ref(),
        ) else {
            return;
        };

        let value = control.borrow().value();
        apply(fill, thumb, label, &self.config, &self.on_sync, value);
    }
}

/// Recompute and apply the full derived display state for one value.
fn apply(
    fill: &FillHandle,
    thumb: &ThumbHandle,
    label: &LabelHandle,
    config: &SliderConfig,
    hook: &SyncHook,
    value: f32,
) {
    let percent = Percent::new(config.clamp(value));
    fill.borrow_mut().set_width(percent);
    thumb.borrow_mut().set_offset(config.thumb_offset(percent));
    label.borrow_mut().set_text(&percent.to_string());
    hook.emit(percent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{FillElement, InputHandler, RangeControl, ThumbElement, ValueLabel};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeControl {
        value: f32,
        handler: Option<InputHandler>,
        registrations: u32,
    }

    impl FakeControl {
        /// Simulate a user input event with the given value.
        fn fire(&mut self, value: f32) {
            self.value = value;
            if let Some(handler) = self.handler.as_mut() {
                handler(value);
            }
        }
    }

    impl RangeControl for FakeControl {
        fn value(&self) -> f32 {
            self.value
        }

        fn set_on_input(&mut self, handler: InputHandler) {
            self.handler = Some(handler);
            self.registrations += 1;
        }
    }

    #[derive(Default)]
    struct FakeFill {
        width: Option<String>,
        mutations: u32,
    }

    impl FillElement for FakeFill {
        fn set_width(&mut self, width: Percent) {
            self.width = Some(width.to_string());
            self.mutations += 1;
        }
    }

    #[derive(Default)]
    struct FakeThumb {
        offset: Option<String>,
        mutations: u32,
    }

    impl ThumbElement for FakeThumb {
        fn set_offset(&mut self, offset: crate::units::ThumbOffset) {
            self.offset = Some(offset.to_string());
            self.mutations += 1;
        }
    }

    #[derive(Default)]
    struct FakeLabel {
        text: Option<String>,
        mutations: u32,
    }

    impl ValueLabel for FakeLabel {
        fn set_text(&mut self, text: &str) {
            self.text = Some(text.to_string());
            self.mutations += 1;
        }
    }

    struct FakeView {
        control: Rc<RefCell<FakeControl>>,
        fill: Rc<RefCell<FakeFill>>,
        thumb: Rc<RefCell<FakeThumb>>,
        label: Rc<RefCell<FakeLabel>>,
    }

    impl FakeView {
        fn new() -> Self {
            Self {
                control: Rc::new(RefCell::new(FakeControl::default())),
                fill: Rc::new(RefCell::new(FakeFill::default())),
                thumb: Rc::new(RefCell::new(FakeThumb::default())),
                label: Rc::new(RefCell::new(FakeLabel::default())),
            }
        }

        fn binder(&self) -> SliderBinder {
            SliderBinder::new(
                Some(self.control.clone()),
                Some(self.fill.clone()),
                Some(self.thumb.clone()),
                Some(self.label.clone()),
            )
        }

        fn display_state(&self) -> (Option<String>, Option<String>, Option<String>) {
            (
                self.fill.borrow().width.clone(),
                self.thumb.borrow().offset.clone(),
                self.label.borrow().text.clone(),
            )
        }
    }

    #[test]
    fn input_event_updates_fill_thumb_and_label() {
        let view = FakeView::new();
        let mut binder = view.binder();
        binder.ready();
        assert!(binder.is_bound());

        view.control.borrow_mut().fire(75.0);
        assert_eq!(
            view.display_state(),
            (
                Some("75%".to_string()),
                Some("calc(75% - 19px)".to_string()),
                Some("75%".to_string()),
            )
        );
    }

    #[test]
    fn zero_value_scenario() {
        let view = FakeView::new();
        let mut binder = view.binder();
        binder.ready();

        view.control.borrow_mut().fire(0.0);
        assert_eq!(
            view.display_state(),
            (
                Some("0%".to_string()),
                Some("calc(0% - 19px)".to_string()),
                Some("0%".to_string()),
            )
        );
    }

    #[test]
    fn repeated_value_is_idempotent() {
        let view = FakeView::new();
        let mut binder = view.binder();
        binder.ready();

        view.control.borrow_mut().fire(50.0);
        let once = view.display_state();
        view.control.borrow_mut().fire(50.0);
        assert_eq!(view.display_state(), once);
    }

    #[test]
    fn missing_label_skips_binding_entirely() {
        let view = FakeView::new();
        let mut binder = SliderBinder::new(
            Some(view.control.clone()),
            Some(view.fill.clone()),
            Some(view.thumb.clone()),
            None,
        );

        assert_eq!(binder.try_bind(), Err(BindError::MissingLabel));
        assert!(!binder.is_bound());
        assert_eq!(view.control.borrow().registrations, 0);

        // Input events on the control now cause zero mutations.
        view.control.borrow_mut().fire(60.0);
        assert_eq!(view.fill.borrow().mutations, 0);
        assert_eq!(view.thumb.borrow().mutations, 0);
        assert_eq!(view.label.borrow().mutations, 0);
    }

    #[test]
    fn missing_control_reported_first() {
        let view = FakeView::new();
        let mut binder = SliderBinder::new(
            None,
            Some(view.fill.clone()),
            Some(view.thumb.clone()),
            Some(view.label.clone()),
        );
        assert_eq!(binder.try_bind(), Err(BindError::MissingControl));
    }

    #[test]
    fn ready_is_silent_on_incomplete_view() {
        let view = FakeView::new();
        let mut binder =
            SliderBinder::new(Some(view.control.clone()), None, None, Some(view.label.clone()));

        binder.ready(); // must not panic
        assert_eq!(binder.state(), BindState::Unbound);
    }

    #[test]
    fn ready_twice_registers_once() {
        let view = FakeView::new();
        let mut binder = view.binder();
        binder.ready();
        binder.ready();
        assert_eq!(view.control.borrow().registrations, 1);
    }

    #[test]
    fn sync_applies_current_control_value() {
        let view = FakeView::new();
        view.control.borrow_mut().value = 40.0;

        let binder = view.binder();
        binder.sync();
        assert_eq!(
            view.display_state(),
            (
                Some("40%".to_string()),
                Some("calc(40% - 19px)".to_string()),
                Some("40%".to_string()),
            )
        );
    }

    #[test]
    fn sync_is_noop_on_incomplete_view() {
        let view = FakeView::new();
        let binder = SliderBinder::new(Some(view.control.clone()), None, None, None);
        binder.sync();
        assert_eq!(view.fill.borrow().mutations, 0);
    }

    #[test]
    fn on_sync_hook_observes_each_update() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let view = FakeView::new();
        let mut binder = view
            .binder()
            .on_sync(move |percent| sink.borrow_mut().push(percent.value()));
        binder.ready();

        view.control.borrow_mut().fire(25.0);
        view.control.borrow_mut().fire(80.0);
        assert_eq!(*seen.borrow(), vec![25.0, 80.0]);
    }

    #[test]
    fn values_outside_range_are_clamped() {
        let view = FakeView::new();
        let mut binder = view.binder();
        binder.ready();

        view.control.borrow_mut().fire(130.0);
        assert_eq!(view.fill.borrow().width, Some("100%".to_string()));
    }

    #[test]
    fn custom_thumb_correction() {
        let view = FakeView::new();
        let mut binder = view
            .binder()
            .config(SliderConfig::new().thumb_correction_px(18.0));
        binder.ready();

        view.control.borrow_mut().fire(30.0);
        assert_eq!(
            view.thumb.borrow().offset,
            Some("calc(30% - 18px)".to_string())
        );
    }
}
