use {
    crate::{
        child_key::ChildKey,
        context::Context,
        layout::ItemOptions,
        types::{PhysicalPixels, Point, Rect, Size},
        widgets::{NewWidget, RawWidgetId, Widget, WidgetId, WidgetNotFound},
    },
    anyhow::{Context as _, Result},
    bitflags::bitflags,
    derivative::Derivative,
    std::{
        marker::PhantomData,
        ops::{Deref, DerefMut},
    },
    tracing::warn,
};

/// Computed placement of a widget within the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetGeometry {
    /// Rect of this widget in parent coordinates.
    rect_in_parent: Rect,
    /// Top left of the parent widget in root coordinates.
    parent_top_left_in_root: Point,
    /// Parent widget's visible rect in parent widget's coordinates.
    parent_visible_rect_in_parent: Rect,
}

impl WidgetGeometry {
    pub fn root(size: Size) -> Self {
        WidgetGeometry {
            rect_in_parent: Rect::from_pos_size(Point::default(), size),
            parent_top_left_in_root: Point::default(),
            parent_visible_rect_in_parent: Rect::from_pos_size(Point::default(), size),
        }
    }

    /// Returns widget geometry of the child widget given the parent widget geometry and the
    /// rect of the child in the parent's coordinates.
    pub fn new(parent: &WidgetGeometry, rect_in_parent: Rect) -> Self {
        Self {
            rect_in_parent,
            parent_top_left_in_root: parent.rect_in_parent.top_left()
                + parent.parent_top_left_in_root,
            parent_visible_rect_in_parent: parent.visible_rect_in_self(),
        }
    }

    /// Rect of this widget in this widget's coordinates (top left is always zero).
    pub fn rect_in_self(&self) -> Rect {
        Rect::from_pos_size(Point::default(), self.rect_in_parent.size())
    }

    /// Rect of this widget in parent coordinates.
    pub fn rect_in_parent(&self) -> Rect {
        self.rect_in_parent
    }

    /// Size of the widget.
    pub fn size(&self) -> Size {
        self.rect_in_parent.size()
    }

    pub fn size_x(&self) -> PhysicalPixels {
        self.rect_in_parent.size_x()
    }

    pub fn size_y(&self) -> PhysicalPixels {
        self.rect_in_parent.size_y()
    }

    /// Rect of this widget in root coordinates.
    pub fn rect_in_root(&self) -> Rect {
        self.rect_in_parent.translate(self.parent_top_left_in_root)
    }

    /// Visible rect of this widget in this widget's coordinates.
    ///
    /// The rect is empty if the widget is entirely clipped out by its parent,
    /// e.g. scrolled out of view.
    pub fn visible_rect_in_self(&self) -> Rect {
        self.parent_visible_rect_in_parent
            .translate(-self.rect_in_parent.top_left())
            .intersect(self.rect_in_self())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Flags: u8 {
        const SELF_VISIBLE = 1 << 0;
        const SELF_ENABLED = 1 << 1;
        const PARENT_ENABLED = 1 << 2;
    }
}

struct Child {
    key: ChildKey,
    widget: Box<dyn Widget>,
}

#[derive(Debug)]
pub(crate) struct WidgetCreationContext {
    pub(crate) ctx: Context,
    pub(crate) parent_scale: f32,
    pub(crate) is_parent_enabled: bool,
}

/// Common widget state and behavior.
///
/// Any widget contains a `WidgetBase` object. You can obtain it by calling
/// [base()](crate::widgets::Widget::base) or [base_mut()](crate::widgets::Widget::base_mut).
/// As a convention, any widget has a private field
/// <code>base: [WidgetBaseOf]&lt;Self&gt;</code> which dereferences to a `WidgetBase`.
///
/// See also: [WidgetExt](crate::widgets::WidgetExt) trait that provides more actions on any widget.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct WidgetBase {
    id: RawWidgetId,
    type_name: &'static str,
    flags: Flags,

    ctx: Context,
    scale: f32,

    // Present if the widget is not hidden, and only after layout.
    geometry: Option<WidgetGeometry>,
    // Output of the widget's most recent measure pass.
    measured_size: Option<Size>,

    #[derivative(Debug = "ignore")]
    children: Vec<Child>,
    next_auto_key: u64,
    item_options: ItemOptions,
}

impl WidgetBase {
    pub(crate) fn new_root<T: Widget>(ctx: &Context) -> WidgetBaseOf<T> {
        Self::new(WidgetCreationContext {
            ctx: ctx.clone(),
            parent_scale: ctx.scale(),
            is_parent_enabled: true,
        })
    }

    #[allow(clippy::new_ret_no_self)]
    fn new<T: Widget>(ctx: WidgetCreationContext) -> WidgetBaseOf<T> {
        let mut flags = Flags::SELF_VISIBLE | Flags::SELF_ENABLED;
        if ctx.is_parent_enabled {
            flags |= Flags::PARENT_ENABLED;
        }
        let base = WidgetBase {
            id: RawWidgetId::new_unique(),
            type_name: T::type_name(),
            flags,
            ctx: ctx.ctx,
            scale: ctx.parent_scale,
            geometry: None,
            measured_size: None,
            children: Vec::new(),
            next_auto_key: 0,
            item_options: ItemOptions::default(),
        };
        WidgetBaseOf {
            base,
            _marker: PhantomData,
        }
    }

    fn creation_context(&self) -> WidgetCreationContext {
        WidgetCreationContext {
            ctx: self.ctx.clone(),
            parent_scale: self.scale,
            is_parent_enabled: self.is_enabled(),
        }
    }

    pub fn id(&self) -> RawWidgetId {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn ctx(&self) -> &Context {
        &self.ctx
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    fn take_auto_key(&mut self) -> ChildKey {
        let key = ChildKey::Index(self.next_auto_key);
        self.next_auto_key += 1;
        key
    }

    fn insert_child_entry<T: NewWidget>(
        &mut self,
        index: usize,
        key: ChildKey,
        arg: T::Arg,
    ) -> &mut T {
        let base = WidgetBase::new(self.creation_context());
        let widget = Box::new(T::new(base, arg));
        self.children.insert(index, Child { key, widget });
        self.children[index]
            .widget
            .downcast_mut::<T>()
            .expect("child type mismatch")
    }

    /// Appends a new child widget of type `T` with an auto-assigned key.
    pub fn add_child<T: NewWidget>(&mut self, arg: T::Arg) -> &mut T {
        let key = self.take_auto_key();
        self.insert_child_entry::<T>(self.children.len(), key, arg)
    }

    /// Inserts a new child widget of type `T` at `index`, with an auto-assigned key.
    ///
    /// An out of range index is clamped to the end.
    pub fn insert_child<T: NewWidget>(&mut self, index: usize, arg: T::Arg) -> &mut T {
        let index = if index > self.children.len() {
            warn!(
                "insert_child: index {index} is out of bounds for {} children",
                self.children.len()
            );
            self.children.len()
        } else {
            index
        };
        let key = self.take_auto_key();
        self.insert_child_entry::<T>(index, key, arg)
    }

    /// Appends a new child widget of type `T` associated with `key`.
    ///
    /// If there already is a child with this key, it is removed first.
    pub fn add_child_with_key<T: NewWidget>(
        &mut self,
        key: impl Into<ChildKey>,
        arg: T::Arg,
    ) -> &mut T {
        let key = key.into();
        if let Some(position) = self.children.iter().position(|child| child.key == key) {
            warn!("add_child_with_key: replacing existing child with key {key:?}");
            self.children.remove(position);
        }
        self.insert_child_entry::<T>(self.children.len(), key, arg)
    }

    pub fn has_child(&self, key: impl Into<ChildKey>) -> bool {
        let key = key.into();
        self.children.iter().any(|child| child.key == key)
    }

    fn child_entry(&self, key: ChildKey) -> Option<&Child> {
        self.children.iter().find(|child| child.key == key)
    }

    fn child_entry_mut(&mut self, key: ChildKey) -> Option<&mut Child> {
        self.children.iter_mut().find(|child| child.key == key)
    }

    /// Get a dyn reference to the direct child associated with `key`.
    ///
    /// Returns an error if there is no such child.
    pub fn get_dyn_child(&self, key: impl Into<ChildKey>) -> Result<&dyn Widget> {
        Ok(self
            .child_entry(key.into())
            .context("no such key")?
            .widget
            .as_ref())
    }

    /// Get a mutable dyn reference to the direct child associated with `key`.
    ///
    /// Returns an error if there is no such child.
    pub fn get_dyn_child_mut(&mut self, key: impl Into<ChildKey>) -> Result<&mut dyn Widget> {
        Ok(self
            .child_entry_mut(key.into())
            .context("no such key")?
            .widget
            .as_mut())
    }

    /// Get a reference to the direct child of type `T` associated with `key`.
    ///
    /// Returns an error if there is no such child or if the child has a type other than `T`.
    pub fn get_child<T: Widget>(&self, key: impl Into<ChildKey>) -> Result<&T> {
        self.child_entry(key.into())
            .context("no such key")?
            .widget
            .downcast_ref()
            .context("child type mismatch")
    }

    /// Get a mutable reference to the direct child of type `T` associated with `key`.
    ///
    /// Returns an error if there is no such child or if the child has a type other than `T`.
    pub fn get_child_mut<T: Widget>(&mut self, key: impl Into<ChildKey>) -> Result<&mut T> {
        self.child_entry_mut(key.into())
            .context("no such key")?
            .widget
            .downcast_mut()
            .context("child type mismatch")
    }

    /// Removes the direct child associated with `key`.
    ///
    /// Returns an error if there is no such child.
    pub fn remove_child(&mut self, key: impl Into<ChildKey>) -> Result<(), WidgetNotFound> {
        let key = key.into();
        let position = self
            .children
            .iter()
            .position(|child| child.key == key)
            .ok_or(WidgetNotFound)?;
        self.children.remove(position);
        Ok(())
    }

    /// Returns an iterator over the widget's children, in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &dyn Widget> {
        self.children.iter().map(|child| child.widget.as_ref())
    }

    /// Returns an iterator over the widget's children, in insertion order.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut dyn Widget> {
        self.children.iter_mut().map(|child| child.widget.as_mut())
    }

    /// True if the widget currently has a geometry and its visible rect is not
    /// empty.
    pub fn is_visible(&self) -> bool {
        self.geometry
            .as_ref()
            .is_some_and(|g| !g.visible_rect_in_self().is_empty())
    }

    /// True if this widget hasn't been explicitly hidden.
    ///
    /// This method can be used to tell if the widget is hidden because
    /// [`set_visible(false)`](Self::set_visible) was called on it
    /// or because of its parent. In most cases it's sufficient to use
    /// [is_visible](Self::is_visible) instead.
    pub fn is_self_visible(&self) -> bool {
        self.flags.contains(Flags::SELF_VISIBLE)
    }

    /// Hide or show a widget.
    ///
    /// A widget hidden with `set_visible(false)` will never be automatically shown. It can only
    /// be shown with `set_visible(true)`.
    ///
    /// A widget can also be hidden because of its parent or its position within a parent
    /// (see [is_visible](Self::is_visible)). If this is the case, calling `set_visible` will
    /// still change the visibility flag of the widget, but the widget will not become visible
    /// unless all conditions for its visibility are met.
    pub fn set_visible(&mut self, value: bool) -> &mut Self {
        if self.is_self_visible() == value {
            return self;
        }
        self.flags.set(Flags::SELF_VISIBLE, value);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.flags
            .contains(Flags::SELF_ENABLED | Flags::PARENT_ENABLED)
    }

    pub fn is_self_enabled(&self) -> bool {
        self.flags.contains(Flags::SELF_ENABLED)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        if self.flags.contains(Flags::SELF_ENABLED) == enabled {
            return self;
        }
        let old_enabled = self.is_enabled();
        self.flags.set(Flags::SELF_ENABLED, enabled);
        if old_enabled != self.is_enabled() {
            self.enabled_changed();
        }
        self
    }

    pub(crate) fn set_parent_enabled(&mut self, enabled: bool) -> &mut Self {
        if self.flags.contains(Flags::PARENT_ENABLED) == enabled {
            return self;
        }
        let old_enabled = self.is_enabled();
        self.flags.set(Flags::PARENT_ENABLED, enabled);
        if old_enabled != self.is_enabled() {
            self.enabled_changed();
        }
        self
    }

    fn enabled_changed(&mut self) {
        let is_enabled = self.is_enabled();
        for child in self.children_mut() {
            child.base_mut().set_parent_enabled(is_enabled);
        }
    }

    pub fn geometry(&self) -> Option<&WidgetGeometry> {
        self.geometry.as_ref()
    }

    pub fn geometry_or_err(&self) -> Result<&WidgetGeometry> {
        self.geometry.as_ref().context("no geometry")
    }

    pub fn rect_in_parent(&self) -> Option<Rect> {
        self.geometry.as_ref().map(|g| g.rect_in_parent())
    }

    pub fn size(&self) -> Option<Size> {
        self.geometry.as_ref().map(|g| g.size())
    }

    pub(crate) fn set_geometry(&mut self, geometry: Option<WidgetGeometry>) {
        self.geometry = geometry;
    }

    /// Size produced by this widget's most recent measure pass, if any.
    pub fn measured_size(&self) -> Option<Size> {
        self.measured_size
    }

    pub(crate) fn set_measured_size(&mut self, size: Option<Size>) {
        self.measured_size = size;
    }

    /// Layout parameters of this widget within its parent.
    pub fn item_options(&self) -> &ItemOptions {
        &self.item_options
    }

    pub fn set_item_options(&mut self, options: ItemOptions) -> &mut Self {
        self.item_options = options;
        self
    }
}

#[derive(Debug)]
pub struct WidgetBaseOf<T> {
    base: WidgetBase,
    _marker: PhantomData<T>,
}

impl<T> WidgetBaseOf<T> {
    pub fn untyped(&self) -> &WidgetBase {
        &self.base
    }

    pub fn untyped_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    pub fn id(&self) -> WidgetId<T> {
        WidgetId::new(self.base.id)
    }
}

impl<T> Deref for WidgetBaseOf<T> {
    type Target = WidgetBase;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<T> DerefMut for WidgetBaseOf<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl<T> From<WidgetBaseOf<T>> for WidgetBase {
    fn from(value: WidgetBaseOf<T>) -> Self {
        value.base
    }
}
