use {crate::WidgetGeometry, derive_more::From};

#[derive(Debug, Clone, From)]
pub enum Event {
    Layout(LayoutEvent),
}

/// Sent to a widget when its geometry is assigned or cleared.
#[derive(Debug, Clone)]
pub struct LayoutEvent {
    // None means the widget is hidden.
    pub(crate) new_geometry: Option<WidgetGeometry>,
}

impl LayoutEvent {
    pub fn new_geometry(&self) -> Option<&WidgetGeometry> {
        self.new_geometry.as_ref()
    }
}
