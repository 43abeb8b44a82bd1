// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied callbacks carried inside options.
//!
//! Callbacks are shared, not owned: cloning options clones the handle and
//! both copies invoke the same closure.

use crate::container::record::ToastRecord;
use crate::container::Container;
use crate::domain::toast::ToastId;
use crate::event_bus::{Event, EventChannel};
use std::fmt;
use std::rc::Rc;

/// Shared handle to a callback or trait object.
pub struct Hook<F: ?Sized>(Rc<F>);

impl<F: ?Sized> Hook<F> {
    /// Wraps an already shared value.
    #[must_use]
    pub fn from_rc(inner: Rc<F>) -> Self {
        Self(inner)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn get(&self) -> &F {
        &self.0
    }

    /// Returns the shared pointer.
    #[must_use]
    pub fn as_rc(&self) -> &Rc<F> {
        &self.0
    }

    /// Returns whether both handles point at the same callback.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> Clone for Hook<F> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<F: ?Sized> fmt::Debug for Hook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

/// Called once after the toast leaves the active map.
pub type OnClose = Hook<dyn Fn()>;

/// Called on every click with a handle able to close the toast.
pub type OnClick = Hook<dyn Fn(&CloseToast)>;

/// Last chance to veto or rewrite a toast before it is stored.
///
/// Receives the candidate and the current toasts; returning `None` drops it.
pub type FilterBeforeCreate = Hook<dyn Fn(ToastRecord, &[ToastRecord]) -> Option<ToastRecord>>;

/// Restricts which stored toasts are eligible for display.
pub type FilterToasts = Hook<dyn Fn(Vec<ToastRecord>) -> Vec<ToastRecord>>;

/// Called once the container is mounted.
pub type OnMounted = Hook<dyn Fn(&Container)>;

/// Named event listener attached to custom content.
pub type Listener = Hook<dyn Fn()>;

/// Event channel supplied through options.
pub type SharedChannel = Hook<dyn EventChannel>;

impl OnClose {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }
}

impl OnClick {
    pub fn new(callback: impl Fn(&CloseToast) + 'static) -> Self {
        Self(Rc::new(callback))
    }
}

impl FilterBeforeCreate {
    pub fn new(
        filter: impl Fn(ToastRecord, &[ToastRecord]) -> Option<ToastRecord> + 'static,
    ) -> Self {
        Self(Rc::new(filter))
    }
}

impl FilterToasts {
    pub fn new(filter: impl Fn(Vec<ToastRecord>) -> Vec<ToastRecord> + 'static) -> Self {
        Self(Rc::new(filter))
    }
}

impl OnMounted {
    pub fn new(callback: impl Fn(&Container) + 'static) -> Self {
        Self(Rc::new(callback))
    }
}

impl SharedChannel {
    pub fn new(channel: Rc<dyn EventChannel>) -> Self {
        Self(channel)
    }
}

/// Handle passed to click callbacks.
///
/// Closing goes through the event channel, exactly like a dismiss issued
/// from the interface.
pub struct CloseToast {
    channel: Rc<dyn EventChannel>,
    id: ToastId,
}

impl CloseToast {
    pub(crate) fn new(channel: Rc<dyn EventChannel>, id: ToastId) -> Self {
        Self { channel, id }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    pub fn close(&self) {
        self.channel.emit(Event::Dismiss(self.id.clone()));
    }
}

impl fmt::Debug for CloseToast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseToast").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::{EventBus, EventKind};
    use std::cell::{Cell, RefCell};

    #[test]
    fn cloned_hooks_share_the_callback() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let hook = OnClose::new(move || counter.set(counter.get() + 1));
        let copy = hook.clone();

        hook.get()();
        copy.get()();

        assert_eq!(calls.get(), 2);
        assert!(hook.ptr_eq(&copy));
    }

    #[test]
    fn close_toast_emits_dismiss() {
        let bus = Rc::new(EventBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.on(
            EventKind::Dismiss,
            Rc::new(move |event: &Event| {
                if let Event::Dismiss(id) = event {
                    sink.borrow_mut().push(id.clone());
                }
            }),
        );

        let handle = CloseToast::new(bus, ToastId::from(3));
        handle.close();

        assert_eq!(*seen.borrow(), vec![ToastId::from(3)]);
    }
}
