#![allow(dead_code)]

use {
    anyhow::Result,
    touchstrip::{
        impl_widget_base,
        layout::MeasureSpec,
        types::{PhysicalPixels, Size},
        Context, NewWidget, Widget, WidgetBaseOf, WidgetExt, WidgetGeometry,
    },
};

pub fn test_context() -> Context {
    Context::builder().build()
}

/// Runs one measure and layout pass with an exact root size, the way an
/// embedding would drive a root widget.
pub fn run_pass(widget: &mut dyn Widget, size: Size) -> Size {
    let measured = widget.measure(
        MeasureSpec::exactly(size.x()),
        MeasureSpec::exactly(size.y()),
    );
    widget.set_geometry(Some(WidgetGeometry::root(measured)));
    measured
}

/// A widget with a fixed preferred size and an optional baseline.
pub struct FixedBox {
    base: WidgetBaseOf<Self>,
    size: Size,
    baseline: Option<PhysicalPixels>,
}

impl FixedBox {
    pub fn set_baseline(&mut self, value: Option<PhysicalPixels>) -> &mut Self {
        self.baseline = value;
        self
    }
}

impl NewWidget for FixedBox {
    type Arg = Size;

    fn new(base: WidgetBaseOf<Self>, arg: Self::Arg) -> Self {
        Self {
            base,
            size: arg,
            baseline: None,
        }
    }
}

impl Widget for FixedBox {
    impl_widget_base!();

    fn handle_measure(&mut self, x_spec: MeasureSpec, y_spec: MeasureSpec) -> Result<Size> {
        Ok(Size::new(
            x_spec.resolve(self.size.x()),
            y_spec.resolve(self.size.y()),
        ))
    }

    fn handle_baseline_request(&mut self) -> Result<Option<PhysicalPixels>> {
        Ok(self.baseline)
    }
}
