use {
    super::{NewWidget, Widget, WidgetBase, WidgetBaseOf},
    crate::{
        callback::{Callback, Callbacks},
        impl_widget_base,
        layout::MeasureSpec,
        style::{
            GLYPH_ADVANCE, GLYPH_DESCENT, TOOL_BUTTON_HEIGHT, TOOL_BUTTON_MIN_WIDTH,
            TOOL_BUTTON_PADDING,
        },
        types::{PhysicalPixels, Size},
    },
    anyhow::Result,
    std::{cmp::max, fmt::Display},
    touchstrip_macros::impl_with,
};

/// A labeled control for a [`ControlStrip`](super::ControlStrip).
///
/// The button has a selected state for tab-like use and reports activations
/// through a callback. Its preferred size comes from the label length and the
/// `"tool-button-*"` theme dimensions.
pub struct ToolButton {
    base: WidgetBaseOf<Self>,
    text: String,
    is_selected: bool,
    on_activated: Callbacks<()>,
    metrics: ToolButtonMetrics,
}

/// Theme dimensions converted to physical pixels once at construction.
#[derive(Debug, Clone, Copy)]
struct ToolButtonMetrics {
    min_width: PhysicalPixels,
    height: PhysicalPixels,
    padding: PhysicalPixels,
    advance: PhysicalPixels,
    descent: PhysicalPixels,
}

impl ToolButtonMetrics {
    fn new(base: &WidgetBase) -> Self {
        let theme = base.ctx().theme();
        let scale = base.scale();
        Self {
            min_width: theme.dimension(TOOL_BUTTON_MIN_WIDTH).to_physical(scale),
            height: theme.dimension(TOOL_BUTTON_HEIGHT).to_physical(scale),
            padding: theme.dimension(TOOL_BUTTON_PADDING).to_physical(scale),
            advance: theme.dimension(GLYPH_ADVANCE).to_physical(scale),
            descent: theme.dimension(GLYPH_DESCENT).to_physical(scale),
        }
    }
}

#[impl_with]
impl ToolButton {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Display) -> &mut Self {
        self.text = text.to_string();
        self
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Marks the button as the active tab of its strip. Purely visual state;
    /// the strip doesn't enforce a single selection.
    pub fn set_selected(&mut self, value: bool) -> &mut Self {
        self.is_selected = value;
        self
    }

    pub fn on_activated(&mut self, callback: Callback<()>) -> &mut Self {
        self.on_activated.add(callback);
        self
    }

    /// Reports an activation to the registered callbacks. Does nothing while
    /// the button is disabled.
    pub fn activate(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.on_activated.invoke(());
    }
}

impl NewWidget for ToolButton {
    type Arg = String;

    fn new(base: WidgetBaseOf<Self>, arg: Self::Arg) -> Self {
        let metrics = ToolButtonMetrics::new(&base);
        Self {
            base,
            text: arg,
            is_selected: false,
            on_activated: Callbacks::default(),
            metrics,
        }
    }
}

impl Widget for ToolButton {
    impl_widget_base!();

    fn handle_measure(&mut self, x_spec: MeasureSpec, y_spec: MeasureSpec) -> Result<Size> {
        let label_width = self.metrics.advance * self.text.chars().count() as i32;
        let content_width = label_width + self.metrics.padding * 2;
        Ok(Size::new(
            x_spec.resolve(max(self.metrics.min_width, content_width)),
            y_spec.resolve(self.metrics.height),
        ))
    }

    fn handle_baseline_request(&mut self) -> Result<Option<PhysicalPixels>> {
        let height = self
            .base
            .measured_size()
            .map_or(self.metrics.height, |size| size.y());
        Ok(Some(height - self.metrics.descent))
    }
}
