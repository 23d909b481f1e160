use {
    super::{WidgetBase, WidgetBaseOf},
    crate::{
        event::{Event, LayoutEvent},
        layout::MeasureSpec,
        types::{PhysicalPixels, Size},
    },
    anyhow::Result,
    std::any::Any,
};

pub trait NewWidget: Widget + Sized {
    type Arg;

    /// Creates a new widget. The `base` argument provides all available information about the
    /// context in which the widget is being created. `arg` may provide additional configuration,
    /// depending on the widget type.
    ///
    /// You don't need to call this function directly. It's automatically invoked when you create
    /// a widget using [Context::new_root](crate::Context::new_root) or one of the following
    /// functions on the [WidgetBase] of the parent widget:
    /// - [add_child](WidgetBase::add_child)
    /// - [insert_child](WidgetBase::insert_child)
    /// - [add_child_with_key](WidgetBase::add_child_with_key)
    ///
    /// When implementing this function, you should always store the `base` argument value inside
    /// your widget object. As a convention, you should store it in the widget's field named `base`.
    /// Your implementations of [base](Widget::base) and [base_mut](Widget::base_mut) must return
    /// a reference to that object.
    fn new(base: WidgetBaseOf<Self>, arg: Self::Arg) -> Self;
}

pub trait Widget: Any {
    /// Returns full path to the widget type as a string.
    ///
    /// It's recommended to use the [impl_widget_base!](crate::impl_widget_base) macro
    /// to automatically implement this method.
    /// If not using the macro, it's recommended to return `std::any::type_name::<Self>()`
    /// from this function.
    fn type_name() -> &'static str
    where
        Self: Sized;

    /// Returns a non-unique, read-only reference to the [WidgetBase] object stored inside the
    /// widget. It's recommended to use the [impl_widget_base!](crate::impl_widget_base) macro
    /// to automatically implement this function.
    fn base(&self) -> &WidgetBase;

    /// Returns a unique, read-write reference to the [WidgetBase] object stored inside the
    /// widget. It's recommended to use the [impl_widget_base!](crate::impl_widget_base) macro
    /// to automatically implement this function.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Computes the size of this widget under the given constraints.
    ///
    /// Containers measure their children from this function. A container may also record new
    /// layout parameters for its children here; those take effect when the children are measured
    /// again, i.e. on the next pass. The returned size must comply with `Exactly` specs.
    ///
    /// You should not call this function directly. Use
    /// [measure](crate::widgets::WidgetExt::measure), which also stores the result on the
    /// widget base.
    fn handle_measure(&mut self, x_spec: MeasureSpec, y_spec: MeasureSpec) -> Result<Size>;

    /// Handles assignment of this widget's geometry after a measure pass.
    ///
    /// Containers implement this function to position their children with
    /// [set_geometry](crate::widgets::WidgetExt::set_geometry), which is also what triggers
    /// this function. The default implementation does nothing, which is sufficient for widgets
    /// without children.
    ///
    /// You should not call this function directly.
    fn handle_layout(&mut self, event: LayoutEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }

    /// Reports the baseline of this widget's content, measured from its top edge.
    ///
    /// Widgets without a meaningful baseline return `None`; containers align them by their
    /// box edges instead.
    fn handle_baseline_request(&mut self) -> Result<Option<PhysicalPixels>> {
        Ok(None)
    }

    fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Layout(e) => self.handle_layout(e).map(|()| true),
        }
    }
}

impl dyn Widget {
    /// Returns `true` if the widget has type `T`.
    pub fn is<T: Widget>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Returns a reference to the widget if it is of type `T`, or
    /// `None` if it isn't.
    pub fn downcast_ref<T: Widget>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    /// Returns a mutable reference to the widget if it is of type `T`, or
    /// `None` if it isn't.
    pub fn downcast_mut<T: Widget>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut()
    }
}
