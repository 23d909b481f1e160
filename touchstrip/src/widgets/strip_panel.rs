use {
    super::{NewWidget, Widget, WidgetBaseOf, WidgetExt, WidgetGeometry},
    crate::{
        event::LayoutEvent,
        impl_widget_base,
        layout::{
            child_measure_spec, weighted_split, Alignment, ItemOptions, MeasureSpec, SpecMode,
            FALLBACK_SIZE,
        },
        types::{PhysicalPixels, Rect, Size},
    },
    anyhow::Result,
    std::cmp::max,
    touchstrip_macros::impl_with,
};

/// A container that places its visible items in a single horizontal row.
///
/// Each item is measured at its own preferred width, then leftover width is
/// shared among items with a non-zero weight. Hidden items keep their slot
/// and their layout options but receive no geometry.
///
/// On the cross axis the items are aligned to a common text baseline when
/// possible, and fall back to [`cross_alignment`](Self::set_cross_alignment)
/// otherwise.
pub struct StripPanel {
    base: WidgetBaseOf<Self>,
    baseline_aligned: bool,
    cross_alignment: Alignment,
}

#[impl_with]
impl StripPanel {
    /// Appends an item.
    ///
    /// Returns a mutable reference to the new widget.
    pub fn add_item<T: NewWidget>(&mut self, arg: T::Arg) -> &mut T {
        self.base.add_child::<T>(arg)
    }

    /// Inserts an item at `index`, shifting later items to the right.
    pub fn insert_item<T: NewWidget>(&mut self, index: usize, arg: T::Arg) -> &mut T {
        self.base.insert_child::<T>(index, arg)
    }

    /// Appends an item with explicit layout options.
    pub fn add_item_with_options<T: NewWidget>(
        &mut self,
        arg: T::Arg,
        options: ItemOptions,
    ) -> &mut T {
        let item = self.base.add_child::<T>(arg);
        item.base_mut().set_item_options(options);
        item
    }

    /// Inserts an item at `index` with explicit layout options.
    pub fn insert_item_with_options<T: NewWidget>(
        &mut self,
        index: usize,
        arg: T::Arg,
        options: ItemOptions,
    ) -> &mut T {
        let item = self.base.insert_child::<T>(index, arg);
        item.base_mut().set_item_options(options);
        item
    }

    pub fn baseline_aligned(&self) -> bool {
        self.baseline_aligned
    }

    /// Enables or disables baseline alignment. When disabled, or for items
    /// that report no baseline, the cross alignment applies instead.
    pub fn set_baseline_aligned(&mut self, value: bool) -> &mut Self {
        self.baseline_aligned = value;
        self
    }

    pub fn cross_alignment(&self) -> Alignment {
        self.cross_alignment
    }

    pub fn set_cross_alignment(&mut self, value: Alignment) -> &mut Self {
        self.cross_alignment = value;
        self
    }

    fn max_baseline(&mut self) -> Option<PhysicalPixels> {
        let mut max_baseline = None;
        for item in self.base.children_mut() {
            if !item.base().is_self_visible() {
                continue;
            }
            let margins = item.base().item_options().margins();
            if let Some(baseline) = item.baseline() {
                let baseline = baseline + margins.top();
                max_baseline = Some(max_baseline.map_or(baseline, |old| max(old, baseline)));
            }
        }
        max_baseline
    }
}

impl NewWidget for StripPanel {
    type Arg = ();

    fn new(base: WidgetBaseOf<Self>, (): Self::Arg) -> Self {
        Self {
            base,
            baseline_aligned: true,
            cross_alignment: Alignment::Start,
        }
    }
}

impl Widget for StripPanel {
    impl_widget_base!();

    fn handle_measure(&mut self, x_spec: MeasureSpec, y_spec: MeasureSpec) -> Result<Size> {
        let mut content_x = PhysicalPixels::ZERO;
        let mut max_item_y = PhysicalPixels::ZERO;
        let mut weights = Vec::new();
        for item in self.base.children_mut() {
            if !item.base().is_self_visible() {
                continue;
            }
            let options = item.base().item_options().clone();
            let margins = options.margins();
            let item_x_spec =
                child_measure_spec(x_spec, content_x + margins.x_sum(), options.x());
            let item_y_spec = child_measure_spec(y_spec, margins.y_sum(), options.y());
            let size = item.measure(item_x_spec, item_y_spec);
            content_x += size.x() + margins.x_sum();
            max_item_y = max(max_item_y, size.y() + margins.y_sum());
            weights.push(options.weight());
        }
        if x_spec.mode() == SpecMode::Exactly
            && content_x < x_spec.size()
            && weights.iter().any(|&weight| weight > 0)
        {
            let shares = weighted_split(x_spec.size() - content_x, &weights);
            let mut index = 0;
            for item in self.base.children_mut() {
                if !item.base().is_self_visible() {
                    continue;
                }
                let share = shares[index];
                index += 1;
                if share == PhysicalPixels::ZERO {
                    continue;
                }
                let old_size = item.base().measured_size().unwrap_or(FALLBACK_SIZE);
                let options = item.base().item_options().clone();
                let margins = options.margins();
                let item_x_spec = MeasureSpec::exactly(old_size.x() + share);
                let item_y_spec = child_measure_spec(y_spec, margins.y_sum(), options.y());
                let size = item.measure(item_x_spec, item_y_spec);
                content_x += size.x() - old_size.x();
                max_item_y = max(max_item_y, size.y() + margins.y_sum());
            }
        }
        Ok(Size::new(
            x_spec.resolve(content_x),
            y_spec.resolve(max_item_y),
        ))
    }

    fn handle_layout(&mut self, _event: LayoutEvent) -> Result<()> {
        let Some(geometry) = self.base.geometry().cloned() else {
            for item in self.base.children_mut() {
                item.set_geometry(None);
            }
            return Ok(());
        };
        let size = geometry.size();
        let max_baseline = if self.baseline_aligned {
            self.max_baseline()
        } else {
            None
        };
        let cross_alignment = self.cross_alignment;
        let mut pos_x = PhysicalPixels::ZERO;
        for item in self.base.children_mut() {
            if !item.base().is_self_visible() {
                item.set_geometry(None);
                continue;
            }
            let margins = item.base().item_options().margins();
            let item_size = item.base().measured_size().unwrap_or(FALLBACK_SIZE);
            pos_x += margins.left();
            let offset_y = if let (Some(max_baseline), Some(baseline)) =
                (max_baseline, item.baseline())
            {
                max_baseline - baseline - margins.top()
            } else {
                let available_y = size.y() - margins.y_sum();
                match cross_alignment {
                    Alignment::Start => PhysicalPixels::ZERO,
                    Alignment::Middle => (available_y - item_size.y()) / 2,
                    Alignment::End => available_y - item_size.y(),
                }
            };
            let rect = Rect::from_xywh(
                pos_x,
                margins.top() + max(PhysicalPixels::ZERO, offset_y),
                item_size.x(),
                item_size.y(),
            );
            item.set_geometry(Some(WidgetGeometry::new(&geometry, rect)));
            pos_x += item_size.x() + margins.right();
        }
        Ok(())
    }
}
