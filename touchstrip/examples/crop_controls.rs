use {
    anyhow::Result,
    touchstrip::{
        layout::MeasureSpec,
        style::Theme,
        types::{PpxSuffix, Size},
        widgets::{ControlStrip, ToolButton},
        Callback, Context, Widget, WidgetExt, WidgetGeometry,
    },
    tracing::{info, level_filters::LevelFilter},
    tracing_subscriber::EnvFilter,
};

const LABELS: [&str; 7] = [
    "Crop",
    "Rotate",
    "Scale",
    "Brightness",
    "Contrast",
    "Saturation",
    "Sharpness",
];

fn run_passes(strip: &mut ControlStrip, size: Size) {
    // Two passes, so the width assignments from the first one are realized.
    for _ in 0..2 {
        let measured = strip.measure(
            MeasureSpec::exactly(size.x()),
            MeasureSpec::exactly(size.y()),
        );
        strip.set_geometry(Some(WidgetGeometry::root(measured)));
    }
}

fn report(strip: &ControlStrip, what: &str) {
    info!("{what}, scroll range 0..{:?}:", strip.max_scroll_x());
    for item in strip.items() {
        let button = item.downcast_ref::<ToolButton>().unwrap();
        match item.base().rect_in_parent() {
            Some(rect) => info!("  {:<12} {:?}", button.text(), rect),
            None => info!("  {:<12} hidden", button.text()),
        }
    }
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }

    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env()
                .unwrap(),
        )
        .init();

    let theme = Theme::load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/examples/crop_theme.json"
    ))?;
    let ctx = Context::builder().with_theme(theme).build();

    let mut strip: ControlStrip = ctx.new_root(());
    for label in LABELS {
        let button = strip.add_item::<ToolButton>(label.into());
        button.set_selected(label == "Crop");
        button.on_activated(Callback::new(move |()| {
            info!("{label} activated");
            Ok(())
        }));
    }

    run_passes(&mut strip, Size::new(400.ppx(), 48.ppx()));
    report(&strip, "7 controls in 400 px, pinned to the minimum width");

    strip.set_scroll_x(strip.max_scroll_x());
    run_passes(&mut strip, Size::new(400.ppx(), 48.ppx()));
    report(&strip, "scrolled to the end");

    for item in strip.items_mut() {
        let keep = matches!(
            item.downcast_ref::<ToolButton>().unwrap().text(),
            "Crop" | "Rotate" | "Scale"
        );
        item.set_visible(keep);
    }
    strip.set_scroll_x(0.ppx());
    run_passes(&mut strip, Size::new(400.ppx(), 48.ppx()));
    report(&strip, "3 visible controls in 400 px, 133 px each");

    run_passes(&mut strip, Size::new(200.ppx(), 48.ppx()));
    report(&strip, "the same controls in 200 px, back at the minimum width");

    if let Some(item) = strip.items_mut().next() {
        if let Some(button) = item.downcast_mut::<ToolButton>() {
            button.activate();
        }
    }
    Ok(())
}
