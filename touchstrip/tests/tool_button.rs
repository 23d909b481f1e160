mod common;

use {
    common::test_context,
    std::{cell::Cell, rc::Rc},
    touchstrip::{
        layout::MeasureSpec,
        types::{PpxSuffix, Size},
        widgets::ToolButton,
        Callback, WidgetExt,
    },
};

#[test]
fn reports_activations() {
    let ctx = test_context();
    let mut button: ToolButton = ctx.new_root("Crop".into());
    let count = Rc::new(Cell::new(0));
    let count2 = Rc::clone(&count);
    button.on_activated(Callback::new(move |()| {
        count2.set(count2.get() + 1);
        Ok(())
    }));

    button.activate();
    button.activate();
    assert_eq!(count.get(), 2);
}

#[test]
fn disabled_button_ignores_activations() {
    let ctx = test_context();
    let mut button: ToolButton = ctx.new_root("Crop".into());
    let count = Rc::new(Cell::new(0));
    let count2 = Rc::clone(&count);
    button.on_activated(Callback::new(move |()| {
        count2.set(count2.get() + 1);
        Ok(())
    }));

    button.set_enabled(false);
    button.activate();
    assert_eq!(count.get(), 0);

    button.set_enabled(true);
    button.activate();
    assert_eq!(count.get(), 1);
}

#[test]
fn selection_is_plain_state() {
    let ctx = test_context();
    let mut button: ToolButton = ctx.new_root("Crop".into());
    assert!(!button.is_selected());
    button.set_selected(true);
    assert!(button.is_selected());
}

#[test]
fn label_length_sets_preferred_width() {
    let ctx = test_context();
    let mut short: ToolButton = ctx.new_root("Crop".into());
    let mut long: ToolButton = ctx.new_root("Saturation".into());
    let unconstrained = MeasureSpec::unspecified();

    // 4 glyphs at 8 px plus 12 px padding per side stays under the 64 px
    // minimum; 10 glyphs exceed it.
    assert_eq!(
        short.measure(unconstrained, unconstrained),
        Size::new(64.ppx(), 48.ppx())
    );
    assert_eq!(
        long.measure(unconstrained, unconstrained),
        Size::new(104.ppx(), 48.ppx())
    );
}

#[test]
fn baseline_sits_above_the_bottom_edge() {
    let ctx = test_context();
    let mut button: ToolButton = ctx.new_root("Crop".into());
    assert_eq!(button.baseline(), Some(36.ppx()));
}
