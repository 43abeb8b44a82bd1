// SPDX-License-Identifier: MPL-2.0
//! Publish/subscribe channel connecting toast interfaces to containers.
//!
//! Handlers are stored as `Rc<dyn Fn(&Event)>` so emission can snapshot the
//! handler list cheaply. Snapshot-on-emit means:
//!   - A handler removed during emission is still called in that round.
//!   - A handler added during emission is not called until the next emit.
//!
//! Panics inside a handler propagate to the emitter.

use crate::container::options::ContainerOptions;
use crate::container::record::{ToastCandidate, ToastUpdate};
use crate::domain::toast::ToastId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Name of an event routed through a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Add,
    Dismiss,
    Update,
    Clear,
    UpdateDefaults,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Add,
        EventKind::Dismiss,
        EventKind::Update,
        EventKind::Clear,
        EventKind::UpdateDefaults,
    ];
}

/// Event together with its payload.
#[derive(Debug, Clone)]
pub enum Event {
    /// Add a toast.
    Add(ToastCandidate),
    /// Remove a toast by id.
    Dismiss(ToastId),
    /// Patch (or create) a toast by id.
    Update(ToastUpdate),
    /// Remove every toast.
    Clear,
    /// Patch the container options.
    UpdateDefaults(ContainerOptions),
}

impl Event {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Add(_) => EventKind::Add,
            Event::Dismiss(_) => EventKind::Dismiss,
            Event::Update(_) => EventKind::Update,
            Event::Clear => EventKind::Clear,
            Event::UpdateDefaults(_) => EventKind::UpdateDefaults,
        }
    }
}

/// Shared handler. Removal matches by pointer identity.
pub type Handler = Rc<dyn Fn(&Event)>;

/// Any value able to route events to subscribers.
///
/// The built-in [`EventBus`] is the usual implementation; callers may pass
/// their own to [`create_instance`](crate::interface::create_instance) to
/// bridge toasts between otherwise unrelated parts of an application.
pub trait EventChannel {
    /// Registers `handler` for events of `kind`.
    fn on(&self, kind: EventKind, handler: Handler);

    /// Removes one registration of `handler` for `kind`, if present.
    fn off(&self, kind: EventKind, handler: &Handler);

    /// Delivers `event` to every handler registered for its kind.
    fn emit(&self, event: Event);
}

/// Single-threaded in-process event bus.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<HashMap<EventKind, Vec<Handler>>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers registered for `kind`.
    #[must_use]
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.borrow().get(&kind).map_or(0, Vec::len)
    }
}

impl EventChannel for EventBus {
    fn on(&self, kind: EventKind, handler: Handler) {
        self.handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(handler);
    }

    fn off(&self, kind: EventKind, handler: &Handler) {
        let mut handlers = self.handlers.borrow_mut();
        if let Some(list) = handlers.get_mut(&kind) {
            if let Some(index) = list.iter().position(|h| Rc::ptr_eq(h, handler)) {
                list.remove(index);
            }
        }
    }

    fn emit(&self, event: Event) {
        // The borrow ends before any handler runs, so handlers may re-enter.
        let snapshot: Vec<Handler> = self
            .handlers
            .borrow()
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();
        for handler in snapshot {
            handler(&event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.borrow();
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            if let Some(list) = handlers.get(&kind) {
                map.entry(&kind, &list.len());
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_handler(counter: &Rc<Cell<u32>>) -> Handler {
        let counter = Rc::clone(counter);
        Rc::new(move |_event: &Event| counter.set(counter.get() + 1))
    }

    #[test]
    fn emit_reaches_only_matching_kind() {
        let bus = EventBus::new();
        let dismissed = Rc::new(Cell::new(0));
        let cleared = Rc::new(Cell::new(0));
        bus.on(EventKind::Dismiss, counting_handler(&dismissed));
        bus.on(EventKind::Clear, counting_handler(&cleared));

        bus.emit(Event::Clear);

        assert_eq!(dismissed.get(), 0);
        assert_eq!(cleared.get(), 1);
    }

    #[test]
    fn emit_without_handlers_is_a_no_op() {
        let bus = EventBus::new();
        bus.emit(Event::Dismiss(ToastId::from(1)));
        assert_eq!(bus.handler_count(EventKind::Dismiss), 0);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second"] {
            let order = Rc::clone(&order);
            bus.on(
                EventKind::Clear,
                Rc::new(move |_: &Event| order.borrow_mut().push(label)),
            );
        }

        bus.emit(Event::Clear);

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn off_removes_a_single_registration() {
        let bus = EventBus::new();
        let calls = Rc::new(Cell::new(0));
        let handler = counting_handler(&calls);
        bus.on(EventKind::Clear, Rc::clone(&handler));
        bus.on(EventKind::Clear, Rc::clone(&handler));

        bus.off(EventKind::Clear, &handler);
        bus.emit(Event::Clear);

        assert_eq!(calls.get(), 1);
        assert_eq!(bus.handler_count(EventKind::Clear), 1);
    }

    #[test]
    fn off_with_unknown_handler_is_ignored() {
        let bus = EventBus::new();
        let calls = Rc::new(Cell::new(0));
        bus.on(EventKind::Clear, counting_handler(&calls));

        bus.off(EventKind::Clear, &counting_handler(&calls));
        bus.off(EventKind::Add, &counting_handler(&calls));

        assert_eq!(bus.handler_count(EventKind::Clear), 1);
    }

    #[test]
    fn handler_added_during_emit_waits_for_next_round() {
        let bus = Rc::new(EventBus::new());
        let late_calls = Rc::new(Cell::new(0));
        let registered = Rc::new(Cell::new(false));

        let inner_bus = Rc::downgrade(&bus);
        let late = counting_handler(&late_calls);
        let flag = Rc::clone(&registered);
        bus.on(
            EventKind::Clear,
            Rc::new(move |_: &Event| {
                if !flag.get() {
                    flag.set(true);
                    if let Some(bus) = inner_bus.upgrade() {
                        bus.on(EventKind::Clear, Rc::clone(&late));
                    }
                }
            }),
        );

        bus.emit(Event::Clear);
        assert_eq!(late_calls.get(), 0);

        bus.emit(Event::Clear);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn handler_removed_during_emit_still_runs_that_round() {
        let bus = Rc::new(EventBus::new());
        let victim_calls = Rc::new(Cell::new(0));
        let victim = counting_handler(&victim_calls);

        let inner_bus = Rc::downgrade(&bus);
        let target = Rc::clone(&victim);
        bus.on(
            EventKind::Clear,
            Rc::new(move |_: &Event| {
                if let Some(bus) = inner_bus.upgrade() {
                    bus.off(EventKind::Clear, &target);
                }
            }),
        );
        bus.on(EventKind::Clear, Rc::clone(&victim));

        bus.emit(Event::Clear);
        bus.emit(Event::Clear);

        assert_eq!(victim_calls.get(), 1);
    }

    #[test]
    #[should_panic(expected = "handler failure")]
    fn handler_panics_propagate_to_emitter() {
        let bus = EventBus::new();
        bus.on(EventKind::Clear, Rc::new(|_: &Event| panic!("handler failure")));
        bus.emit(Event::Clear);
    }
}
