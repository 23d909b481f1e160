use {
    super::{NewWidget, Widget, WidgetBase, WidgetBaseOf, WidgetExt, WidgetGeometry},
    crate::{
        event::LayoutEvent,
        impl_widget_base,
        layout::{child_measure_spec, MeasureSpec, FALLBACK_SIZE},
        types::{PhysicalPixels, Rect, Size},
    },
    anyhow::Result,
    std::cmp::max,
    touchstrip_macros::impl_with,
    tracing::warn,
};

const KEY_CONTENT: &str = "content";

/// A container that shows a single content widget through a horizontally
/// scrollable viewport.
///
/// The content is measured without a width constraint, so it's free to be
/// wider than the pane. The visible part is controlled by the scroll offset,
/// which is clamped to the scrollable range on every layout.
pub struct ScrollPane {
    base: WidgetBaseOf<Self>,
    scroll_x: PhysicalPixels,
}

#[impl_with]
impl ScrollPane {
    /// Creates the content widget, replacing the previous one if any.
    ///
    /// Returns a mutable reference to the new widget.
    pub fn set_content<T: NewWidget>(&mut self, arg: T::Arg) -> &mut T {
        self.base.add_child_with_key::<T>(KEY_CONTENT, arg)
    }

    pub fn remove_content(&mut self) -> &mut Self {
        let _ = self.base.remove_child(KEY_CONTENT);
        self
    }

    pub fn has_content(&self) -> bool {
        self.base.has_child(KEY_CONTENT)
    }

    /// Returns the content widget, assuming it's of type `T`.
    pub fn content<T: Widget>(&self) -> Result<&T> {
        self.base.get_child(KEY_CONTENT)
    }

    /// Returns the content widget, assuming it's of type `T`.
    pub fn content_mut<T: Widget>(&mut self) -> Result<&mut T> {
        self.base.get_child_mut(KEY_CONTENT)
    }

    pub fn scroll_x(&self) -> PhysicalPixels {
        self.scroll_x
    }

    /// Sets the horizontal scroll offset, clamped to the scrollable range.
    ///
    /// The range is based on the most recent measurement, so it's zero until
    /// the first layout pass.
    pub fn set_scroll_x(&mut self, value: PhysicalPixels) -> &mut Self {
        self.scroll_x = value.clamp(PhysicalPixels::ZERO, self.max_scroll_x());
        self
    }

    /// Maximum meaningful scroll offset. Zero if the content fits.
    pub fn max_scroll_x(&self) -> PhysicalPixels {
        max_scroll(self.base.untyped(), KEY_CONTENT)
    }
}

impl NewWidget for ScrollPane {
    type Arg = ();

    fn new(base: WidgetBaseOf<Self>, (): Self::Arg) -> Self {
        Self {
            base,
            scroll_x: PhysicalPixels::ZERO,
        }
    }
}

impl Widget for ScrollPane {
    impl_widget_base!();

    fn handle_measure(&mut self, x_spec: MeasureSpec, y_spec: MeasureSpec) -> Result<Size> {
        scroll_measure(self.base.untyped_mut(), KEY_CONTENT, x_spec, y_spec)
    }

    fn handle_layout(&mut self, _event: LayoutEvent) -> Result<()> {
        self.scroll_x = self
            .scroll_x
            .clamp(PhysicalPixels::ZERO, self.max_scroll_x());
        scroll_layout(self.base.untyped_mut(), KEY_CONTENT, self.scroll_x)
    }
}

/// Measures the content of a horizontally scrolling container.
///
/// The content's width is unconstrained, which is what makes the container
/// scrollable. Its height constraint is derived from the container's height
/// constraint and the content's own size policy and margins. The container's
/// reported size follows its own constraints and never the content's width.
pub(crate) fn scroll_measure(
    base: &mut WidgetBase,
    key: &'static str,
    x_spec: MeasureSpec,
    y_spec: MeasureSpec,
) -> Result<Size> {
    let content_size = if base.has_child(key) {
        let content = base.get_dyn_child_mut(key)?;
        let options = content.base().item_options().clone();
        let content_y_spec = child_measure_spec(y_spec, options.margins().y_sum(), options.y());
        let size = content.measure(MeasureSpec::unspecified(), content_y_spec);
        Size::new(
            size.x() + options.margins().x_sum(),
            size.y() + options.margins().y_sum(),
        )
    } else {
        Size::default()
    };
    Ok(Size::new(
        x_spec.resolve(content_size.x()),
        y_spec.resolve(content_size.y()),
    ))
}

/// Positions the content of a horizontally scrolling container at its
/// measured size, shifted left by the scroll offset.
pub(crate) fn scroll_layout(
    base: &mut WidgetBase,
    key: &'static str,
    scroll_x: PhysicalPixels,
) -> Result<()> {
    let Some(geometry) = base.geometry().cloned() else {
        if base.has_child(key) {
            base.get_dyn_child_mut(key)?.set_geometry(None);
        }
        return Ok(());
    };
    if !base.has_child(key) {
        return Ok(());
    }
    let content = base.get_dyn_child_mut(key)?;
    let margins = content.base().item_options().margins();
    let content_size = content.base().measured_size().unwrap_or_else(|| {
        warn!("scroll content was not measured before layout");
        FALLBACK_SIZE
    });
    let content_rect = Rect::from_xywh(
        margins.left() - scroll_x,
        margins.top(),
        content_size.x(),
        content_size.y(),
    );
    content.set_geometry(Some(WidgetGeometry::new(&geometry, content_rect)));
    Ok(())
}

/// Scrollable range based on the most recent measurement of the container
/// and its content.
pub(crate) fn max_scroll(base: &WidgetBase, key: &'static str) -> PhysicalPixels {
    let own_x = base
        .measured_size()
        .map_or(PhysicalPixels::ZERO, |size| size.x());
    let content_x = base
        .get_dyn_child(key)
        .ok()
        .and_then(|content| {
            let margins = content.base().item_options().margins();
            Some(content.base().measured_size()?.x() + margins.x_sum())
        })
        .unwrap_or(PhysicalPixels::ZERO);
    max(PhysicalPixels::ZERO, content_x - own_x)
}
