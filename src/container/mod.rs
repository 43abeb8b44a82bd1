// SPDX-License-Identifier: MPL-2.0
//! Toast container: the single owner of active toasts.
//!
//! The `Container` subscribes to an event channel and applies every event
//! to its map of toasts. It groups toasts by position, applies the
//! display filters and per-position capacity, and runs one timer per
//! displayed toast. Work that must wait for the next turn of the message
//! loop (mounting, settling a short drag, closing a swiped toast) is queued
//! and executed by [`Container::flush`].
//!
//! Caller callbacks never run while container state is borrowed, so they
//! may freely re-enter the container through the event channel.

pub mod content;
pub mod hooks;
pub mod mount;
pub mod options;
pub mod record;

use crate::domain::toast::{Position, Timeout, ToastId};
use crate::event_bus::{Event, EventChannel, EventKind, Handler};
use crate::timing::{DragOutcome, DragStyle, TimerState, ToastTimer};
use content::ToastContent;
use hooks::CloseToast;
use iced::{window, Point};
use indexmap::IndexMap;
use mount::Mount;
use options::{ContainerOptions, ToastSettings};
use record::{ToastCandidate, ToastRecord, ToastUpdate};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Work postponed to the next flush.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    Mount,
    Settle(ToastId),
    Close(ToastId),
}

impl Deferred {
    fn targets(&self, id: &ToastId) -> bool {
        match self {
            Deferred::Mount => false,
            Deferred::Settle(target) | Deferred::Close(target) => target == id,
        }
    }
}

#[derive(Debug)]
struct State {
    options: ContainerOptions,
    toasts: IndexMap<ToastId, ToastRecord>,
    timers: HashMap<ToastId, ToastTimer>,
    mount: Mount,
    deferred: VecDeque<Deferred>,
    dragging: Option<ToastId>,
    cursor: Option<Point>,
    window_focused: bool,
    mount_announced: bool,
}

impl State {
    fn new(options: ContainerOptions) -> Self {
        Self {
            options,
            toasts: IndexMap::new(),
            timers: HashMap::new(),
            mount: Mount::default(),
            deferred: VecDeque::from([Deferred::Mount]),
            dragging: None,
            cursor: None,
            window_focused: true,
            mount_announced: false,
        }
    }

    /// Restarts the timer of `id` when its stored timeout changed.
    fn rearm_timer(&mut self, id: &ToastId, timeout: Timeout) {
        if let Some(timer) = self.timers.get_mut(id) {
            if timer.timeout() != timeout {
                timer.restart(timeout);
                trace!(%id, ?timeout, "toast timer re-armed");
            }
        }
    }
}

/// Toast as it should be drawn this frame.
#[derive(Debug, Clone)]
pub struct DisplayedToast {
    pub record: ToastRecord,
    pub settings: ToastSettings,
    /// Fraction of the countdown left.
    pub progress: f32,
    pub drag: DragStyle,
    pub hovered: bool,
    pub paused: bool,
}

/// Owner of the active toast map for one event channel.
pub struct Container {
    channel: Rc<dyn EventChannel>,
    handler: RefCell<Option<Handler>>,
    state: RefCell<State>,
}

impl Container {
    /// Creates a container and subscribes it to `channel`.
    ///
    /// The container is not mounted yet: mounting happens on the first
    /// [`Container::flush`]. `on_mounted` runs once a host is attached,
    /// which for a deferred target is the flush that sees it resolve.
    pub fn new(options: ContainerOptions, channel: Rc<dyn EventChannel>) -> Rc<Self> {
        let container = Rc::new(Self {
            channel,
            handler: RefCell::new(None),
            state: RefCell::new(State::new(options)),
        });

        let weak = Rc::downgrade(&container);
        let handler: Handler = Rc::new(move |event: &Event| {
            if let Some(container) = weak.upgrade() {
                container.handle(event);
            }
        });
        for kind in EventKind::ALL {
            container.channel.on(kind, Rc::clone(&handler));
        }
        *container.handler.borrow_mut() = Some(handler);

        debug!("toast container created");
        container
    }

    /// Channel this container listens to.
    #[must_use]
    pub fn channel(&self) -> Rc<dyn EventChannel> {
        Rc::clone(&self.channel)
    }

    fn handle(&self, event: &Event) {
        match event {
            Event::Add(candidate) => self.add_toast(candidate.clone()),
            Event::Dismiss(id) => self.dismiss_toast(id),
            Event::Update(update) => self.update_toast(update.clone()),
            Event::Clear => self.clear_toasts(),
            Event::UpdateDefaults(patch) => self.update_defaults(patch.clone()),
        }
    }

    // =========================================================================
    // Map operations
    // =========================================================================

    /// Builds a record from `candidate` layered over the container and type
    /// defaults, runs `filter_before_create`, then stores the result.
    pub fn add_toast(&self, candidate: ToastCandidate) {
        let toast_type = candidate.options.toast_type.unwrap_or_default();
        let (record, filter, existing) = {
            let state = self.state.borrow();
            let options = state
                .options
                .defaults_for(toast_type)
                .merged_with(&candidate.options);
            let Some(id) = options.id.clone() else {
                warn!("toast without id ignored");
                return;
            };
            let record = ToastRecord::new(id, candidate.content.normalize(), options);
            let filter = state.options.filter_before_create.clone();
            let existing: Vec<ToastRecord> = if filter.is_some() {
                state.toasts.values().cloned().collect()
            } else {
                Vec::new()
            };
            (record, filter, existing)
        };

        let record = match filter {
            Some(filter) => {
                let id = record.id().clone();
                match filter.get()(record, &existing) {
                    Some(record) => record,
                    None => {
                        debug!(%id, "toast rejected by filter_before_create");
                        return;
                    }
                }
            }
            None => record,
        };
        self.set_toast(record);
    }

    /// Stores `record`, replacing any record with the same id in place.
    pub fn set_toast(&self, record: ToastRecord) {
        let id = record.id().clone();
        let timeout = record.timeout();
        let mut state = self.state.borrow_mut();
        let replaced = state.toasts.insert(id.clone(), record).is_some();
        if replaced {
            state.rearm_timer(&id, timeout);
        }
        debug!(%id, replaced, "toast stored");
    }

    /// Removes a toast and calls its `on_close`. Unknown ids are ignored.
    pub fn dismiss_toast(&self, id: &ToastId) {
        let removed = {
            let mut state = self.state.borrow_mut();
            state.timers.remove(id);
            state.deferred.retain(|task| !task.targets(id));
            if state.dragging.as_ref() == Some(id) {
                state.dragging = None;
            }
            state.toasts.shift_remove(id)
        };
        let Some(record) = removed else {
            trace!(%id, "dismiss for unknown toast ignored");
            return;
        };
        debug!(%id, "toast dismissed");
        if let Some(on_close) = &record.options.on_close {
            on_close.get()();
        }
    }

    /// Dismisses every toast present when the call starts.
    pub fn clear_toasts(&self) {
        let ids: Vec<ToastId> = self.state.borrow().toasts.keys().cloned().collect();
        debug!(count = ids.len(), "clearing toasts");
        for id in &ids {
            self.dismiss_toast(id);
        }
    }

    /// Patches the toast `update.id`. Re-applying the current timeout
    /// lengthens it by one millisecond so the countdown restarts. Unknown
    /// ids create a toast when `update.create` is set.
    pub fn update_toast(&self, update: ToastUpdate) {
        let ToastUpdate {
            id,
            content,
            mut options,
            create,
        } = update;
        options.id = None;

        {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            if let Some(record) = state.toasts.get_mut(&id) {
                if let Some(timeout) = options.timeout {
                    if !timeout.is_disabled() && timeout == record.timeout() {
                        options.timeout = Some(timeout.bumped());
                    }
                }
                record.options = record.options.merged_with(&options);
                if let Some(content) = &content {
                    record.content = content.normalize();
                }
                let timeout = record.timeout();
                state.rearm_timer(&id, timeout);
                debug!(%id, "toast updated");
                return;
            }
        }

        if !create {
            trace!(%id, "update for unknown toast ignored");
            return;
        }
        let content = content.unwrap_or_else(|| {
            warn!(%id, "toast created by update without content");
            ToastContent::default()
        });
        options.id = Some(id);
        self.add_toast(ToastCandidate { content, options });
    }

    /// Shallow-merges `patch` into the container options and remounts
    /// when it carries a new target.
    pub fn update_defaults(&self, patch: ContainerOptions) {
        let target = patch.container.clone();
        let awaiting_first_mount = {
            let mut state = self.state.borrow_mut();
            state.options.merge(patch);
            state.deferred.contains(&Deferred::Mount)
        };
        debug!("container defaults updated");

        let Some(target) = target else {
            return;
        };
        if awaiting_first_mount {
            return;
        }
        let resolution = target.resolve();
        {
            let mut state = self.state.borrow_mut();
            state.mount.apply(resolution);
            state.mount.poll_pending();
            debug!(
                host = ?state.mount.host(),
                pending = state.mount.is_pending(),
                "toast container remounted"
            );
        }
        self.announce_mounted();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().toasts.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.state.borrow().toasts.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<ToastRecord> {
        self.state.borrow().toasts.get(id).cloned()
    }

    /// Every stored toast in insertion order.
    #[must_use]
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.state.borrow().toasts.values().cloned().collect()
    }

    /// Snapshot of the current container options.
    #[must_use]
    pub fn options(&self) -> ContainerOptions {
        self.state.borrow().options.clone()
    }

    /// Stored toasts passed through `filter_toasts`, in insertion order.
    #[must_use]
    pub fn filtered_toasts(&self) -> Vec<ToastRecord> {
        let (all, filter) = {
            let state = self.state.borrow();
            (
                state.toasts.values().cloned().collect::<Vec<_>>(),
                state.options.filter_toasts.clone(),
            )
        };
        match filter {
            Some(filter) => filter.get()(all),
            None => all,
        }
    }

    /// Filtered toasts at `position`, newest first when `newest_on_top`.
    #[must_use]
    pub fn position_toasts(&self, position: Position) -> Vec<ToastRecord> {
        let newest_on_top = self.state.borrow().options.is_newest_on_top();
        let mut toasts: Vec<ToastRecord> = self
            .filtered_toasts()
            .into_iter()
            .filter(|record| record.position() == position)
            .collect();
        if newest_on_top {
            toasts.reverse();
        }
        toasts
    }

    /// Toasts displayed at `position`: the oldest `max_toasts` filtered
    /// toasts, in display order.
    #[must_use]
    pub fn visible_toasts(&self, position: Position) -> Vec<ToastRecord> {
        self.layout()
            .into_iter()
            .find(|(p, _)| *p == position)
            .map(|(_, toasts)| toasts)
            .unwrap_or_default()
    }

    /// Displayed toasts of every position, computed with a single filter
    /// pass. Positions without toasts are omitted.
    #[must_use]
    pub fn layout(&self) -> Vec<(Position, Vec<ToastRecord>)> {
        let filtered = self.filtered_toasts();
        let (newest_on_top, max) = {
            let state = self.state.borrow();
            (
                state.options.is_newest_on_top(),
                state.options.max_toasts_per_position().value(),
            )
        };

        Position::ALL
            .into_iter()
            .filter_map(|position| {
                let mut toasts: Vec<ToastRecord> = filtered
                    .iter()
                    .filter(|record| record.position() == position)
                    .take(max)
                    .cloned()
                    .collect();
                if toasts.is_empty() {
                    return None;
                }
                if newest_on_top {
                    toasts.reverse();
                }
                Some((position, toasts))
            })
            .collect()
    }

    /// Layout joined with timer state, ready for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(Position, Vec<DisplayedToast>)> {
        let layout = self.layout();
        let state = self.state.borrow();
        layout
            .into_iter()
            .map(|(position, records)| {
                let toasts = records
                    .into_iter()
                    .map(|record| {
                        let settings = record.settings();
                        let timer = state.timers.get(record.id());
                        DisplayedToast {
                            progress: timer.map_or(1.0, ToastTimer::remaining_fraction),
                            drag: timer.map_or(DragStyle::REST, |t| t.drag_style(&settings)),
                            hovered: timer.is_some_and(ToastTimer::is_hovered),
                            paused: timer.is_some_and(|t| !t.is_running()),
                            settings,
                            record,
                        }
                    })
                    .collect();
                (position, toasts)
            })
            .collect()
    }

    /// Timer state of a displayed toast.
    #[must_use]
    pub fn timer_state(&self, id: &ToastId) -> Option<TimerState> {
        self.state.borrow().timers.get(id).map(ToastTimer::state)
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().mount.is_mounted()
    }

    #[must_use]
    pub fn host(&self) -> Option<window::Id> {
        self.state.borrow().mount.host()
    }

    /// Whether toasts are drawn in `window` (`None` for the default window).
    #[must_use]
    pub fn renders_in(&self, window: Option<window::Id>) -> bool {
        self.state.borrow().mount.renders_in(window)
    }

    fn mount(&self) {
        let target = self.state.borrow().options.container.clone();
        match target {
            Some(target) => {
                let resolution = target.resolve();
                self.state.borrow_mut().mount.apply(resolution);
            }
            None => self.state.borrow_mut().mount.mount_anywhere(),
        }
        if self.is_mount_pending() {
            debug!("toast container waiting for its mount target");
        }
        self.announce_mounted();
    }

    /// Calls `on_mounted` the first time the container is actually mounted.
    fn announce_mounted(&self) {
        let on_mounted = {
            let mut state = self.state.borrow_mut();
            if state.mount_announced || !state.mount.is_mounted() {
                return;
            }
            state.mount_announced = true;
            debug!(host = ?state.mount.host(), "toast container mounted");
            state.options.on_mounted.clone()
        };
        if let Some(on_mounted) = on_mounted {
            on_mounted.get()(self);
        }
    }

    // =========================================================================
    // Runtime
    // =========================================================================

    /// Whether queued work is waiting for [`Container::flush`].
    #[must_use]
    pub fn has_deferred(&self) -> bool {
        !self.state.borrow().deferred.is_empty()
    }

    /// Whether a mount target is still resolving.
    #[must_use]
    pub fn is_mount_pending(&self) -> bool {
        self.state.borrow().mount.is_pending()
    }

    /// Runs queued work and polls a pending mount target. Timers created
    /// here start counting at the next [`Container::tick`].
    pub fn flush(&self) {
        self.run_deferred();
        self.sync_timers(None);
    }

    fn run_deferred(&self) {
        loop {
            let task = self.state.borrow_mut().deferred.pop_front();
            let Some(task) = task else {
                break;
            };
            match task {
                Deferred::Mount => self.mount(),
                Deferred::Settle(id) => {
                    self.with_timer(&id, |timer, settings| timer.settle(settings));
                    trace!(%id, "drag settled");
                }
                Deferred::Close(id) => self.channel.emit(Event::Dismiss(id)),
            }
        }

        let resolved = self.state.borrow_mut().mount.poll_pending();
        if let Some(host) = resolved {
            debug!(?host, "toast container mount target resolved");
            self.announce_mounted();
        }
    }

    /// Advances every timer to `now` and dismisses the expired toasts
    /// through the channel.
    pub fn tick(&self, now: Instant) {
        self.run_deferred();
        self.sync_timers(Some(now));

        let expired: Vec<ToastId> = {
            let mut state = self.state.borrow_mut();
            state
                .timers
                .iter_mut()
                .filter_map(|(id, timer)| timer.tick(now).then(|| id.clone()))
                .collect()
        };
        for id in expired {
            trace!(%id, "toast timed out");
            self.channel.emit(Event::Dismiss(id));
        }
    }

    /// Creates timers for newly displayed toasts and drops timers of toasts
    /// no longer displayed. Without `now` the new timers wait for their
    /// first tick.
    fn sync_timers(&self, now: Option<Instant>) {
        let displayed: Vec<ToastRecord> = self
            .layout()
            .into_iter()
            .flat_map(|(_, toasts)| toasts)
            .collect();
        let displayed_ids: HashSet<&ToastId> = displayed.iter().map(ToastRecord::id).collect();

        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.timers.retain(|id, _| displayed_ids.contains(id));
        if state
            .dragging
            .as_ref()
            .is_some_and(|id| !state.timers.contains_key(id))
        {
            state.dragging = None;
        }
        for record in &displayed {
            if state.timers.contains_key(record.id()) {
                continue;
            }
            let mut timer = match now {
                Some(now) => ToastTimer::new(record.timeout(), now),
                None => ToastTimer::unstarted(record.timeout()),
            };
            if !state.window_focused {
                timer.focus_changed(false, &record.settings());
            }
            trace!(id = %record.id(), "toast timer started");
            state.timers.insert(record.id().clone(), timer);
        }
    }

    fn with_timer<R>(
        &self,
        id: &ToastId,
        f: impl FnOnce(&mut ToastTimer, &ToastSettings) -> R,
    ) -> Option<R> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        let settings = state.toasts.get(id)?.settings();
        let timer = state.timers.get_mut(id)?;
        Some(f(timer, &settings))
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn pointer_entered(&self, id: &ToastId) {
        self.with_timer(id, |timer, settings| timer.pointer_entered(settings));
    }

    pub fn pointer_exited(&self, id: &ToastId) {
        self.with_timer(id, |timer, _| timer.pointer_exited());
    }

    pub fn window_focus_changed(&self, focused: bool) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.window_focused = focused;
        for (id, timer) in &mut state.timers {
            if let Some(record) = state.toasts.get(id) {
                timer.focus_changed(focused, &record.settings());
            }
        }
        trace!(focused, "window focus changed");
    }

    /// Last cursor position reported through [`Container::cursor_moved`].
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.state.borrow().cursor
    }

    /// Starts dragging toast `id`, pressed at `position`, `width` pixels wide.
    pub fn drag_started(&self, id: &ToastId, position: Point, width: f32) {
        let started = self.with_timer(id, |timer, settings| {
            timer.drag_started(position, width, settings)
        });
        if started == Some(true) {
            self.state.borrow_mut().dragging = Some(id.clone());
            trace!(%id, "drag started");
        }
    }

    pub fn cursor_moved(&self, position: Point) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.cursor = Some(position);
        if let Some(id) = &state.dragging {
            if let Some(timer) = state.timers.get_mut(id) {
                timer.drag_moved(position);
            }
        }
    }

    /// Ends the active drag, if any. Settling and swipe-closing happen on
    /// the next flush.
    pub fn pointer_released(&self) {
        let Some(id) = self.state.borrow_mut().dragging.take() else {
            return;
        };
        let outcome = self.with_timer(&id, |timer, settings| timer.drag_ended(settings));
        let task = match outcome {
            Some(DragOutcome::Dismiss) => Deferred::Close(id),
            Some(DragOutcome::Settle) => Deferred::Settle(id),
            Some(DragOutcome::Released) | None => return,
        };
        trace!(?task, "drag ended");
        self.state.borrow_mut().deferred.push_back(task);
    }

    /// Calls `on_click`, then closes the toast when closing on click is
    /// enabled and the click did not end a drag.
    pub fn clicked(&self, id: &ToastId) {
        let (on_click, closes) = {
            let state = self.state.borrow();
            let Some(record) = state.toasts.get(id) else {
                return;
            };
            let close_on_click = record.settings().close_on_click;
            let closes = state
                .timers
                .get(id)
                .map_or(close_on_click, |timer| timer.click_closes(close_on_click));
            (record.options.on_click.clone(), closes)
        };
        if let Some(on_click) = on_click {
            on_click.get()(&CloseToast::new(Rc::clone(&self.channel), id.clone()));
        }
        if closes {
            self.channel.emit(Event::Dismiss(id.clone()));
        }
    }

    /// Close button pressed.
    pub fn close_requested(&self, id: &ToastId) {
        self.channel.emit(Event::Dismiss(id.clone()));
    }

    /// Calls the content listener `name` of toast `id`.
    pub fn trigger_listener(&self, id: &ToastId, name: &str) {
        let listener = self
            .state
            .borrow()
            .toasts
            .get(id)
            .and_then(|record| record.content.listener(name).cloned());
        match listener {
            Some(listener) => listener.get()(),
            None => trace!(%id, name, "no listener registered"),
        }
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        if let Some(handler) = self.handler.get_mut().take() {
            for kind in EventKind::ALL {
                self.channel.off(kind, &handler);
            }
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Container")
            .field("toasts", &state.toasts.len())
            .field("timers", &state.timers.len())
            .field("mount", &state.mount)
            .finish_non_exhaustive()
    }
}
