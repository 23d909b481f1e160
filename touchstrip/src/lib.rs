mod callback;
mod child_key;
mod context;
pub mod event;
pub mod layout;
pub mod style;
pub mod types;
pub mod widgets;

pub use {
    crate::{
        callback::{Callback, CallbackId, Callbacks},
        child_key::ChildKey,
        context::{report_error, Context, ContextBuilder, OrWarn},
    },
    widgets::{
        NewWidget, RawWidgetId, Widget, WidgetBase, WidgetBaseOf, WidgetExt, WidgetGeometry,
        WidgetId, WidgetNotFound,
    },
};
