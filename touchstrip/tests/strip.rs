mod common;

use {
    common::{run_pass, test_context},
    touchstrip::{
        layout::{ItemOptions, Margins, SizePolicy},
        types::{PpxSuffix, Rect, Size},
        widgets::{ControlStrip, ToolButton},
        Widget, WidgetExt,
    },
};

fn strip_with_labels(labels: &[&str]) -> ControlStrip {
    let ctx = test_context();
    let mut strip: ControlStrip = ctx.new_root(());
    for label in labels {
        strip.add_item::<ToolButton>((*label).into());
    }
    strip
}

fn item_rects(strip: &ControlStrip) -> Vec<Option<Rect>> {
    strip
        .items()
        .map(|item| item.base().rect_in_parent())
        .collect()
}

#[test]
fn expands_items_evenly() {
    let mut strip = strip_with_labels(&["Crop", "Rotate", "Scale"]);
    let viewport = Size::new(300.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);
    let measured = run_pass(&mut strip, viewport);

    assert_eq!(measured, viewport);
    assert_eq!(
        item_rects(&strip),
        vec![
            Some(Rect::from_xywh(0.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
            Some(Rect::from_xywh(100.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
            Some(Rect::from_xywh(200.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
        ]
    );
    assert_eq!(strip.max_scroll_x(), 0.ppx());
}

#[test]
fn keeps_min_width_when_tight() {
    let mut strip = strip_with_labels(&["Crop", "Rotate", "Scale"]);
    let viewport = Size::new(200.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);
    run_pass(&mut strip, viewport);

    assert_eq!(
        item_rects(&strip),
        vec![
            Some(Rect::from_xywh(0.ppx(), 0.ppx(), 80.ppx(), 48.ppx())),
            Some(Rect::from_xywh(80.ppx(), 0.ppx(), 80.ppx(), 48.ppx())),
            Some(Rect::from_xywh(160.ppx(), 0.ppx(), 80.ppx(), 48.ppx())),
        ]
    );
    assert_eq!(strip.max_scroll_x(), 40.ppx());
}

#[test]
fn hidden_items_keep_their_slot() {
    let mut strip = strip_with_labels(&["Crop", "Rotate", "Scale", "Tilt"]);
    strip.items_mut().nth(1).unwrap().set_visible(false);
    let viewport = Size::new(400.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);
    run_pass(&mut strip, viewport);

    // 400 split three ways truncates to 133.
    assert_eq!(
        item_rects(&strip),
        vec![
            Some(Rect::from_xywh(0.ppx(), 0.ppx(), 133.ppx(), 48.ppx())),
            None,
            Some(Rect::from_xywh(133.ppx(), 0.ppx(), 133.ppx(), 48.ppx())),
            Some(Rect::from_xywh(266.ppx(), 0.ppx(), 133.ppx(), 48.ppx())),
        ]
    );
    // The hidden item gets the width assignment too.
    let hidden = strip.items().nth(1).unwrap();
    assert_eq!(
        hidden.base().item_options().x(),
        SizePolicy::Fixed(133.ppx())
    );
    assert!(!hidden.base().is_visible());
}

#[test]
fn no_visible_items_changes_nothing() {
    let mut strip = strip_with_labels(&["Crop", "Rotate"]);
    for item in strip.items_mut() {
        item.set_visible(false);
    }
    let viewport = Size::new(400.ppx(), 48.ppx());
    let measured = run_pass(&mut strip, viewport);

    assert_eq!(measured, viewport);
    for item in strip.items() {
        assert_eq!(item.base().item_options().x(), SizePolicy::Content);
        assert_eq!(item.base().rect_in_parent(), None);
    }
}

#[test]
fn single_structural_child() {
    let strip = strip_with_labels(&["Crop", "Rotate", "Scale"]);

    assert_eq!(strip.base().children().count(), 1);
    assert_eq!(strip.items().count(), 3);
}

#[test]
fn insert_preserves_order() {
    let mut strip = strip_with_labels(&["Crop", "Scale"]);
    strip.insert_item::<ToolButton>(1, "Rotate".into());

    let labels: Vec<_> = strip
        .items()
        .map(|item| item.downcast_ref::<ToolButton>().unwrap().text().to_string())
        .collect();
    assert_eq!(labels, ["Crop", "Rotate", "Scale"]);
}

#[test]
fn insert_with_options_lands_in_the_panel() {
    let mut strip = strip_with_labels(&["Crop", "Scale"]);
    let margins = Margins::new(6.ppx(), 0.ppx(), 6.ppx(), 0.ppx());
    strip.insert_item_with_options::<ToolButton>(
        1,
        "Rotate".into(),
        ItemOptions::new().with_margins(margins),
    );

    assert_eq!(strip.base().children().count(), 1);
    let labels: Vec<_> = strip
        .items()
        .map(|item| item.downcast_ref::<ToolButton>().unwrap().text().to_string())
        .collect();
    assert_eq!(labels, ["Crop", "Rotate", "Scale"]);

    let viewport = Size::new(300.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);
    run_pass(&mut strip, viewport);

    // The margins push the inserted item and everything after it.
    assert_eq!(
        item_rects(&strip),
        vec![
            Some(Rect::from_xywh(0.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
            Some(Rect::from_xywh(106.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
            Some(Rect::from_xywh(212.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
        ]
    );
    let inserted = strip.items().nth(1).unwrap().base().item_options().clone();
    assert_eq!(inserted.margins(), margins);
    assert_eq!(inserted.x(), SizePolicy::Fixed(100.ppx()));
    assert_eq!(strip.max_scroll_x(), 12.ppx());
}

#[test]
fn new_widths_take_effect_next_pass() {
    let mut strip = strip_with_labels(&["Crop", "Rotate", "Scale"]);
    let viewport = Size::new(300.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);

    // The first pass still renders the intrinsic label widths.
    assert_eq!(
        item_rects(&strip),
        vec![
            Some(Rect::from_xywh(0.ppx(), 0.ppx(), 64.ppx(), 48.ppx())),
            Some(Rect::from_xywh(64.ppx(), 0.ppx(), 72.ppx(), 48.ppx())),
            Some(Rect::from_xywh(136.ppx(), 0.ppx(), 64.ppx(), 48.ppx())),
        ]
    );

    run_pass(&mut strip, viewport);
    assert_eq!(
        item_rects(&strip),
        vec![
            Some(Rect::from_xywh(0.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
            Some(Rect::from_xywh(100.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
            Some(Rect::from_xywh(200.ppx(), 0.ppx(), 100.ppx(), 48.ppx())),
        ]
    );
}

#[test]
fn caller_options_survive_width_assignment() {
    let ctx = test_context();
    let mut strip: ControlStrip = ctx.new_root(());
    strip.add_item_with_options::<ToolButton>(
        "Crop".into(),
        ItemOptions::new()
            .with_margins(Margins::uniform(4.ppx()))
            .with_weight(2),
    );
    let viewport = Size::new(300.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);

    let options = strip.items().next().unwrap().base().item_options().clone();
    assert_eq!(options.margins(), Margins::uniform(4.ppx()));
    assert_eq!(options.weight(), 2);
    assert_eq!(options.x(), SizePolicy::Fixed(300.ppx()));
}

#[test]
fn scroll_clamps_to_range() {
    let mut strip = strip_with_labels(&["Crop", "Rotate", "Scale"]);
    strip.set_scroll_x(10.ppx());
    assert_eq!(strip.scroll_x(), 0.ppx());

    let viewport = Size::new(200.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);
    run_pass(&mut strip, viewport);

    strip.set_scroll_x(1000.ppx());
    assert_eq!(strip.scroll_x(), 40.ppx());
    run_pass(&mut strip, viewport);
    let panel_rect = strip
        .base()
        .children()
        .next()
        .unwrap()
        .base()
        .rect_in_parent()
        .unwrap();
    assert_eq!(panel_rect.left(), (-40).ppx());

    strip.set_scroll_x((-5).ppx());
    assert_eq!(strip.scroll_x(), 0.ppx());
}

#[test]
fn scrolling_reveals_far_items() {
    let mut strip = strip_with_labels(&["Crop", "Rotate", "Scale", "Tilt", "Tune"]);
    let viewport = Size::new(200.ppx(), 48.ppx());
    run_pass(&mut strip, viewport);
    run_pass(&mut strip, viewport);

    assert!(strip.items().next().unwrap().base().is_visible());
    assert!(!strip.items().nth(4).unwrap().base().is_visible());
    assert_eq!(strip.max_scroll_x(), 200.ppx());

    strip.set_scroll_x(200.ppx());
    run_pass(&mut strip, viewport);
    assert!(!strip.items().next().unwrap().base().is_visible());
    assert!(strip.items().nth(4).unwrap().base().is_visible());
}
