mod base;
mod control_strip;
mod ext;
mod id;
mod scroll_pane;
mod strip_panel;
mod tool_button;
mod widget_trait;

pub use self::{
    control_strip::ControlStrip, scroll_pane::ScrollPane, strip_panel::StripPanel,
    tool_button::ToolButton,
};

pub use self::{
    base::{WidgetBase, WidgetBaseOf, WidgetGeometry},
    ext::WidgetExt,
    id::{RawWidgetId, WidgetId},
    widget_trait::{NewWidget, Widget},
};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("widget not found")]
pub struct WidgetNotFound;

#[macro_export]
macro_rules! impl_widget_base {
    () => {
        fn type_name() -> &'static str {
            std::any::type_name::<Self>()
        }

        fn base(&self) -> &$crate::WidgetBase {
            self.base.untyped()
        }

        fn base_mut(&mut self) -> &mut $crate::WidgetBase {
            self.base.untyped_mut()
        }
    };
}
