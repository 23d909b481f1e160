use {
    crate::context::OrWarn,
    anyhow::Result,
    std::{
        cell::RefCell,
        fmt,
        rc::Rc,
        sync::atomic::{AtomicU64, Ordering},
    },
};

/// A handler for a widget signal.
///
/// Invocation is direct and synchronous. A failing handler is reported with a
/// warning and does not affect other registered handlers.
#[must_use = "pass the `Callback` object to a `.on_...()` function of the sender widget to register the callback"]
pub struct Callback<Event> {
    func: Rc<RefCell<dyn FnMut(Event) -> Result<()>>>,
    callback_id: CallbackId,
}

impl<Event> Clone for Callback<Event> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            callback_id: self.callback_id,
        }
    }
}

impl<Event> fmt::Debug for Callback<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("callback_id", &self.callback_id)
            .finish_non_exhaustive()
    }
}

impl<Event> Callback<Event> {
    pub fn new<F>(func: F) -> Self
    where
        F: FnMut(Event) -> Result<()> + 'static,
    {
        Self {
            func: Rc::new(RefCell::new(func)),
            callback_id: CallbackId::new(),
        }
    }

    pub fn callback_id(&self) -> CallbackId {
        self.callback_id
    }

    // The borrow is held for the duration of the handler, so a handler must
    // not invoke its own callback recursively.
    pub fn invoke(&self, event: Event) {
        (self.func.borrow_mut())(event).or_warn();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

impl CallbackId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Registered handlers of one widget signal, invoked in registration order.
#[derive(Debug)]
pub struct Callbacks<Event> {
    callbacks: Vec<Callback<Event>>,
}

impl<Event> Default for Callbacks<Event> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }
}

impl<Event> Callbacks<Event> {
    pub fn add(&mut self, callback: Callback<Event>) {
        self.callbacks.push(callback);
    }

    pub fn invoke(&mut self, event: Event)
    where
        Event: Clone,
    {
        for callback in &self.callbacks {
            callback.invoke(event.clone());
        }
    }
}
