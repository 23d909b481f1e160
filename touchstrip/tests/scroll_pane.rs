mod common;

use {
    common::{run_pass, test_context, FixedBox},
    touchstrip::{
        layout::{ItemOptions, Margins},
        types::{PpxSuffix, Rect, Size},
        widgets::ScrollPane,
        Widget,
    },
};

#[test]
fn content_keeps_its_preferred_width() {
    let ctx = test_context();
    let mut pane: ScrollPane = ctx.new_root(());
    pane.set_content::<FixedBox>(Size::new(600.ppx(), 30.ppx()));
    let measured = run_pass(&mut pane, Size::new(200.ppx(), 50.ppx()));

    assert_eq!(measured, Size::new(200.ppx(), 50.ppx()));
    let content = pane.content::<FixedBox>().unwrap();
    assert_eq!(
        content.base().rect_in_parent(),
        Some(Rect::from_xywh(0.ppx(), 0.ppx(), 600.ppx(), 30.ppx()))
    );
    assert_eq!(pane.max_scroll_x(), 400.ppx());
}

#[test]
fn scroll_offset_moves_content() {
    let ctx = test_context();
    let mut pane: ScrollPane = ctx.new_root(());
    pane.set_content::<FixedBox>(Size::new(600.ppx(), 30.ppx()));
    let viewport = Size::new(200.ppx(), 50.ppx());
    run_pass(&mut pane, viewport);

    pane.set_scroll_x(150.ppx());
    run_pass(&mut pane, viewport);
    let content = pane.content::<FixedBox>().unwrap();
    assert_eq!(
        content.base().rect_in_parent(),
        Some(Rect::from_xywh((-150).ppx(), 0.ppx(), 600.ppx(), 30.ppx()))
    );

    pane.set_scroll_x(1000.ppx());
    assert_eq!(pane.scroll_x(), 400.ppx());
}

#[test]
fn content_margins_extend_the_range() {
    let ctx = test_context();
    let mut pane: ScrollPane = ctx.new_root(());
    pane.set_content::<FixedBox>(Size::new(600.ppx(), 30.ppx()))
        .base_mut()
        .set_item_options(ItemOptions::new().with_margins(Margins::uniform(10.ppx())));
    let viewport = Size::new(200.ppx(), 50.ppx());
    run_pass(&mut pane, viewport);

    assert_eq!(pane.max_scroll_x(), 420.ppx());
    let content = pane.content::<FixedBox>().unwrap();
    assert_eq!(
        content.base().rect_in_parent(),
        Some(Rect::from_xywh(10.ppx(), 10.ppx(), 600.ppx(), 30.ppx()))
    );
}

#[test]
fn empty_pane_measures_to_constraints() {
    let ctx = test_context();
    let mut pane: ScrollPane = ctx.new_root(());
    let measured = run_pass(&mut pane, Size::new(200.ppx(), 50.ppx()));

    assert_eq!(measured, Size::new(200.ppx(), 50.ppx()));
    assert_eq!(pane.max_scroll_x(), 0.ppx());
    assert!(!pane.has_content());
}

#[test]
fn replacing_and_removing_content() {
    let ctx = test_context();
    let mut pane: ScrollPane = ctx.new_root(());
    pane.set_content::<FixedBox>(Size::new(600.ppx(), 30.ppx()));
    pane.set_content::<FixedBox>(Size::new(100.ppx(), 30.ppx()));
    assert_eq!(pane.base().children().count(), 1);

    run_pass(&mut pane, Size::new(200.ppx(), 50.ppx()));
    assert_eq!(pane.max_scroll_x(), 0.ppx());

    pane.remove_content();
    assert!(!pane.has_content());
    assert!(pane.content::<FixedBox>().is_err());
}
