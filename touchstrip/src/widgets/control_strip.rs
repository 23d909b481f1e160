use {
    super::{
        scroll_pane::{max_scroll, scroll_layout, scroll_measure},
        NewWidget, StripPanel, Widget, WidgetBaseOf,
    },
    crate::{
        event::LayoutEvent,
        impl_widget_base,
        layout::{ItemOptions, MeasureSpec, SizePolicy},
        style::CONTROL_MIN_WIDTH,
        types::{PhysicalPixels, Size},
    },
    anyhow::Result,
    touchstrip_macros::impl_with,
};

const KEY_PANEL: &str = "panel";

/// A horizontally scrollable strip of controls with even width distribution.
///
/// Items added to the strip land in an internal row panel; the panel is the
/// strip's only direct child. On every measure pass the strip assigns the
/// same width to all items: at least the `"control-min-width"` theme
/// dimension, or an even share of the width constraint if that's larger.
/// The share uses truncating integer division, so three items in a 400 px
/// strip get 133 px each.
///
/// When the items don't fit at their minimum width, the panel overflows the
/// strip and the overflow is reachable through the scroll offset.
///
/// Hidden items keep their place and receive the assigned width in their
/// layout options, but don't take part in the visible count and get no
/// geometry. With no visible items a pass changes nothing.
///
/// Width assignments are realized on the next pass, once the embedding
/// measures the strip again.
pub struct ControlStrip {
    base: WidgetBaseOf<Self>,
    min_item_width: PhysicalPixels,
    scroll_x: PhysicalPixels,
}

#[impl_with]
impl ControlStrip {
    fn panel(&self) -> &StripPanel {
        self.base.get_child::<StripPanel>(KEY_PANEL).unwrap()
    }

    fn panel_mut(&mut self) -> &mut StripPanel {
        self.base.get_child_mut::<StripPanel>(KEY_PANEL).unwrap()
    }

    /// Appends a control to the strip.
    ///
    /// Returns a mutable reference to the new widget.
    pub fn add_item<T: NewWidget>(&mut self, arg: T::Arg) -> &mut T {
        self.panel_mut().add_item::<T>(arg)
    }

    /// Inserts a control at `index`, shifting later controls to the right.
    pub fn insert_item<T: NewWidget>(&mut self, index: usize, arg: T::Arg) -> &mut T {
        self.panel_mut().insert_item::<T>(index, arg)
    }

    /// Appends a control with explicit layout options.
    ///
    /// The strip overwrites the width policy of its items, so only the other
    /// options have a lasting effect.
    pub fn add_item_with_options<T: NewWidget>(
        &mut self,
        arg: T::Arg,
        options: ItemOptions,
    ) -> &mut T {
        self.panel_mut().add_item_with_options::<T>(arg, options)
    }

    /// Inserts a control at `index` with explicit layout options.
    pub fn insert_item_with_options<T: NewWidget>(
        &mut self,
        index: usize,
        arg: T::Arg,
        options: ItemOptions,
    ) -> &mut T {
        self.panel_mut()
            .insert_item_with_options::<T>(index, arg, options)
    }

    /// Controls in their display order, including hidden ones.
    pub fn items(&self) -> impl Iterator<Item = &dyn Widget> {
        self.panel().base().children()
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut dyn Widget> {
        self.panel_mut().base_mut().children_mut()
    }

    /// Minimum width of one control, taken from the theme at construction.
    pub fn min_item_width(&self) -> PhysicalPixels {
        self.min_item_width
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

    /// Maximum meaningful scroll offset. Zero if the items fit.
    pub fn max_scroll_x(&self) -> PhysicalPixels {
        max_scroll(self.base.untyped(), KEY_PANEL)
    }
}

impl NewWidget for ControlStrip {
    type Arg = ();

    fn new(mut base: WidgetBaseOf<Self>, (): Self::Arg) -> Self {
        let min_item_width = base
            .ctx()
            .theme()
            .dimension(CONTROL_MIN_WIDTH)
            .to_physical(base.scale());
        let panel = base.add_child_with_key::<StripPanel>(KEY_PANEL, ());
        // Items align by box edges, not text baselines.
        panel.set_baseline_aligned(false);
        panel
            .base_mut()
            .set_item_options(ItemOptions::new().with_y(SizePolicy::Fill));
        Self {
            base,
            min_item_width,
            scroll_x: PhysicalPixels::ZERO,
        }
    }
}

impl Widget for ControlStrip {
    impl_widget_base!();

    fn handle_measure(&mut self, x_spec: MeasureSpec, y_spec: MeasureSpec) -> Result<Size> {
        let size = scroll_measure(self.base.untyped_mut(), KEY_PANEL, x_spec, y_spec)?;
        let available = x_spec.size();
        let visible = self
            .panel()
            .base()
            .children()
            .filter(|item| item.base().is_self_visible())
            .count() as i32;
        if visible > 0 {
            let mut item_width = self.min_item_width;
            if self.min_item_width * visible < available {
                item_width = available / visible;
            }
            // Hidden items get the width too, so they come back at the right
            // size. It takes effect on the next pass.
            for item in self.panel_mut().base_mut().children_mut() {
                let options = item.base().item_options().clone();
                item.base_mut()
                    .set_item_options(options.with_x(SizePolicy::Fixed(item_width)));
            }
        }
        Ok(size)
    }

    fn handle_layout(&mut self, _event: LayoutEvent) -> Result<()> {
        self.scroll_x = self
            .scroll_x
            .clamp(PhysicalPixels::ZERO, self.max_scroll_x());
        scroll_layout(self.base.untyped_mut(), KEY_PANEL, self.scroll_x)
    }
}
