use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

/// Raw (untyped) widget ID, unique within the process.
///
/// An ID does not keep a widget alive; a widget with this ID may have been
/// removed by the time the ID is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawWidgetId(u64);

impl RawWidgetId {
    /// Allocates a new widget ID.
    ///
    /// You shouldn't need to use this function directly.
    pub fn new_unique() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Widget ID that references a widget of type `T`.
pub struct WidgetId<T>(RawWidgetId, PhantomData<fn() -> T>);

impl<T> WidgetId<T> {
    /// Creates a new typed widget ID from an untyped ID.
    ///
    /// You shouldn't need to use this function directly.
    pub fn new(id: RawWidgetId) -> Self {
        Self(id, PhantomData)
    }

    /// Converts a typed widget ID into an untyped ID. You can also use `.into()`.
    pub fn raw(self) -> RawWidgetId {
        self.0
    }
}

impl<T> Debug for WidgetId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WidgetId<{}>({:?})",
            std::any::type_name::<T>(),
            self.0 .0,
        )
    }
}

impl<T> Clone for WidgetId<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for WidgetId<T> {}

impl<T> From<WidgetId<T>> for RawWidgetId {
    fn from(value: WidgetId<T>) -> Self {
        value.raw()
    }
}
