//! jelly_ui example application
//!
//! Wires a binder to in-memory elements and sweeps the control through a few
//! values, printing the display state a real view would show.

use std::cell::RefCell;
use std::rc::Rc;

use jelly_ui::prelude::*;

/// In-memory stand-in for the host's range control.
#[derive(Default)]
struct DemoControl {
    value: f32,
    handler: Option<InputHandler>,
}

impl DemoControl {
    fn fire(&mut self, value: f32) {
        self.value = value;
        if let Some(handler) = self.handler.as_mut() {
            handler(value);
        }
    }
}

impl RangeControl for DemoControl {
    fn value(&self) -> f32 {
        self.value
    }

    fn set_on_input(&mut self, handler: InputHandler) {
        self.handler = Some(handler);
    }
}

#[derive(Default)]
struct DemoFill {
    width: String,
}

impl FillElement for DemoFill {
    fn set_width(&mut self, width: Percent) {
        self.width = width.to_string();
    }
}

#[derive(Default)]
struct DemoThumb {
    offset: String,
}

impl ThumbElement for DemoThumb {
    fn set_offset(&mut self, offset: ThumbOffset) {
        self.offset = offset.to_string();
    }
}

#[derive(Default)]
struct DemoLabel {
    text: String,
}

impl ValueLabel for DemoLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

fn main() {
    env_logger::init();

    let control = Rc::new(RefCell::new(DemoControl::default()));
    let fill = Rc::new(RefCell::new(DemoFill::default()));
    let thumb = Rc::new(RefCell::new(DemoThumb::default()));
    let label = Rc::new(RefCell::new(DemoLabel::default()));

    let theme = Theme::default();
    println!("jelly slider demo (accent {})", theme.accent);

    let mut binder = SliderBinder::new(
        Some(control.clone()),
        Some(fill.clone()),
        Some(thumb.clone()),
        Some(label.clone()),
    )
    .on_sync(|percent| log::info!("slider synced to {percent}"));

    // The "view" is attached; signal the binder.
    binder.ready();
    binder.sync();

    for value in [0.0, 25.0, 50.0, 75.0, 100.0] {
        control.borrow_mut().fire(value);
        println!(
            "value {:>5}  fill {:>5}  thumb {:<18}  label {}",
            value,
            fill.borrow().width,
            thumb.borrow().offset,
            label.borrow().text,
        );
    }

    let progress = Progress::new(0.75).label("Uploading");
    println!(
        "progress '{}': fill {}, glow {:.2}, bubble {}",
        progress.label_text(),
        progress.fill_width(),
        progress.glow_intensity(),
        progress.bubble_offset(),
    );

    let metric = Metric::new("Emails Sent", "1,234").delta("+56");
    println!(
        "metric '{}': {} {}",
        metric.label_text(),
        metric.value_text(),
        metric.delta_display().unwrap_or_default(),
    );
}
