use {
    crate::{
        style::Theme,
        widgets::{NewWidget, WidgetBase},
    },
    std::{fmt, rc::Rc},
    tracing::warn,
};

pub fn report_error(error: impl Into<anyhow::Error>) {
    warn!("{:?}", error.into());
}

pub trait OrWarn {
    type Output;
    fn or_warn(self) -> Option<Self::Output>;
}

impl<T, E> OrWarn for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    type Output = T;

    fn or_warn(self) -> Option<Self::Output> {
        self.map_err(|err| report_error(err)).ok()
    }
}

/// Shared toolkit state: the theme and the scale factor.
///
/// Cheap to clone; every widget base holds a handle.
#[derive(Clone)]
pub struct Context {
    data: Rc<ContextData>,
}

struct ContextData {
    theme: Theme,
    scale: f32,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish()
    }
}

impl Context {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn theme(&self) -> &Theme {
        &self.data.theme
    }

    pub fn scale(&self) -> f32 {
        self.data.scale
    }

    /// Creates a widget with no parent. The embedding drives its measure and
    /// layout passes directly.
    pub fn new_root<T: NewWidget>(&self, arg: T::Arg) -> T {
        T::new(WidgetBase::new_root(self), arg)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ContextBuilder {
    theme: Option<Theme>,
    scale: Option<f32>,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    pub fn new() -> ContextBuilder {
        ContextBuilder {
            theme: None,
            scale: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> ContextBuilder {
        self.theme = Some(theme);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> ContextBuilder {
        self.scale = Some(scale);
        self
    }

    pub fn build(self) -> Context {
        Context {
            data: Rc::new(ContextData {
                theme: self.theme.unwrap_or_default(),
                scale: self.scale.unwrap_or(1.0),
            }),
        }
    }
}
