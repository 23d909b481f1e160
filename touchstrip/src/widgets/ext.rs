use {
    super::{Widget, WidgetGeometry, WidgetId},
    crate::{
        context::OrWarn,
        event::{Event, LayoutEvent},
        layout::{MeasureSpec, FALLBACK_SIZE},
        types::{PhysicalPixels, Size},
    },
};

/// Actions available on any widget.
pub trait WidgetExt: Widget {
    fn id(&self) -> WidgetId<Self>
    where
        Self: Sized,
    {
        WidgetId::new(self.base().id())
    }

    fn set_visible(&mut self, value: bool) -> &mut Self {
        self.base_mut().set_visible(value);
        self
    }

    fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.base_mut().set_enabled(enabled);
        self
    }

    /// Computes the widget's size under the given constraints and stores it as
    /// the widget's measured size.
    ///
    /// If the measure handler fails, the error is reported and a fallback size
    /// is used.
    fn measure(&mut self, x_spec: MeasureSpec, y_spec: MeasureSpec) -> Size {
        let size = self
            .handle_measure(x_spec, y_spec)
            .or_warn()
            .unwrap_or(FALLBACK_SIZE);
        self.base_mut().set_measured_size(Some(size));
        size
    }

    /// Baseline of the widget's content, if it reports one.
    fn baseline(&mut self) -> Option<PhysicalPixels> {
        self.handle_baseline_request().or_warn().flatten()
    }

    fn dispatch(&mut self, event: Event) -> bool {
        self.handle_event(event).or_warn().unwrap_or(false)
    }

    /// Assigns or clears the widget's geometry and dispatches a layout event
    /// so the widget can place its children.
    ///
    /// The event is dispatched even if the geometry is unchanged, because the
    /// children's layout parameters may have changed since the last pass.
    fn set_geometry(&mut self, geometry: Option<WidgetGeometry>) -> &mut Self {
        self.base_mut().set_geometry(geometry.clone());
        self.dispatch(
            LayoutEvent {
                new_geometry: geometry,
            }
            .into(),
        );
        self
    }

    fn boxed(self) -> Box<dyn Widget>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl<W: Widget + ?Sized> WidgetExt for W {}
