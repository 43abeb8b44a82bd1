// SPDX-License-Identifier: MPL-2.0
//! Public request interface.
//!
//! A [`ToastInterface`] never touches toast state: every call becomes an
//! event on the channel, and the container listening on that channel owns
//! the outcome. Several interfaces may share one channel, and therefore
//! one container.

use crate::container::content::ToastContent;
use crate::container::hooks::SharedChannel;
use crate::container::options::{ContainerOptions, ToastOptions};
use crate::container::record::{ToastCandidate, ToastUpdate};
use crate::container::Container;
use crate::domain::toast::{ToastId, ToastType};
use crate::environment::Environment;
use crate::event_bus::{Event, EventBus, EventChannel};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

const HEADLESS_WARNING: &str = "this toast plugin does not support headless environments";

/// Source of automatic toast ids.
pub trait IdProvider {
    /// Returns a fresh id. Successive calls return strictly increasing values.
    fn next_id(&self) -> u64;
}

static NEXT_GLOBAL_ID: AtomicU64 = AtomicU64::new(0);

/// Process-wide counter shared by every interface using it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalIds;

impl IdProvider for GlobalIds {
    fn next_id(&self) -> u64 {
        NEXT_GLOBAL_ID.fetch_add(1, Ordering::Relaxed)
    }
}

/// Counter owned by one interface, starting at zero.
#[derive(Debug, Default)]
pub struct LocalIds(Cell<u64>);

impl LocalIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for LocalIds {
    fn next_id(&self) -> u64 {
        let id = self.0.get();
        self.0.set(id + 1);
        id
    }
}

/// What an interface is created from.
#[derive(Clone)]
pub enum InstanceSource {
    /// Create a channel (or reuse `event_bus`) and a container.
    Options(ContainerOptions),
    /// Attach to an existing channel; no container is created.
    Channel(Rc<dyn EventChannel>),
}

impl InstanceSource {
    /// Returns the channel when this source is one.
    #[must_use]
    pub fn as_event_channel(&self) -> Option<&Rc<dyn EventChannel>> {
        match self {
            Self::Channel(channel) => Some(channel),
            Self::Options(_) => None,
        }
    }
}

impl Default for InstanceSource {
    fn default() -> Self {
        Self::Options(ContainerOptions::default())
    }
}

impl From<ContainerOptions> for InstanceSource {
    fn from(options: ContainerOptions) -> Self {
        Self::Options(options)
    }
}

impl From<Rc<dyn EventChannel>> for InstanceSource {
    fn from(channel: Rc<dyn EventChannel>) -> Self {
        Self::Channel(channel)
    }
}

impl From<Rc<EventBus>> for InstanceSource {
    fn from(bus: Rc<EventBus>) -> Self {
        Self::Channel(bus)
    }
}

impl fmt::Debug for InstanceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(options) => f.debug_tuple("Options").field(options).finish(),
            Self::Channel(_) => f.write_str("Channel(..)"),
        }
    }
}

/// Content and options sent by [`ToastInterface::update`].
#[derive(Debug, Clone, Default)]
pub struct ToastPatch {
    pub content: Option<ToastContent>,
    pub options: ToastOptions,
}

impl ToastPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<ToastContent>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: ToastOptions) -> Self {
        self.options = options;
        self
    }
}

impl From<ToastOptions> for ToastPatch {
    fn from(options: ToastOptions) -> Self {
        Self {
            content: None,
            options,
        }
    }
}

/// Handle used to show, update and dismiss toasts.
pub struct ToastInterface {
    channel: Option<Rc<dyn EventChannel>>,
    container: Option<Rc<Container>>,
    ids: Rc<dyn IdProvider>,
}

impl ToastInterface {
    fn live(channel: Rc<dyn EventChannel>, container: Option<Rc<Container>>) -> Self {
        Self {
            channel: Some(channel),
            container,
            ids: Rc::new(GlobalIds),
        }
    }

    fn headless() -> Self {
        Self {
            channel: None,
            container: None,
            ids: Rc::new(GlobalIds),
        }
    }

    /// Replaces the id provider.
    #[must_use]
    pub fn with_ids(mut self, ids: Rc<dyn IdProvider>) -> Self {
        self.ids = ids;
        self
    }

    /// Container created with this interface, if any.
    #[must_use]
    pub fn container(&self) -> Option<&Rc<Container>> {
        self.container.as_ref()
    }

    /// Channel this interface emits on. `None` when headless.
    #[must_use]
    pub fn channel(&self) -> Option<&Rc<dyn EventChannel>> {
        self.channel.as_ref()
    }

    #[must_use]
    pub fn is_headless(&self) -> bool {
        self.channel.is_none()
    }

    fn emit(&self, event: Event) {
        match &self.channel {
            Some(channel) => channel.emit(event),
            None => warn!(event = ?event.kind(), "{HEADLESS_WARNING}"),
        }
    }

    /// Shows a toast and returns its id.
    ///
    /// The id is `options.id` when set, else the next automatic id. The
    /// type is `options.toast_type` when set, else [`ToastType::Default`].
    /// The toast is stored synchronously but drawn on the next frame.
    pub fn show(&self, content: impl Into<ToastContent>, mut options: ToastOptions) -> ToastId {
        let generated = ToastId::Number(self.ids.next_id());
        let id = options.id.take().unwrap_or(generated);
        options.id = Some(id.clone());
        options.toast_type = Some(options.toast_type.unwrap_or_default());
        debug!(%id, "show toast");
        self.emit(Event::Add(ToastCandidate::new(content, options)));
        id
    }

    fn show_typed(
        &self,
        toast_type: ToastType,
        content: impl Into<ToastContent>,
        options: ToastOptions,
    ) -> ToastId {
        self.show(content, options.toast_type(toast_type))
    }

    pub fn success(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.show_typed(ToastType::Success, content, options)
    }

    pub fn info(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.show_typed(ToastType::Info, content, options)
    }

    pub fn error(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.show_typed(ToastType::Error, content, options)
    }

    pub fn warning(&self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.show_typed(ToastType::Warning, content, options)
    }

    /// Dismisses a toast. Unknown ids are ignored.
    pub fn dismiss(&self, id: impl Into<ToastId>) {
        self.emit(Event::Dismiss(id.into()));
    }

    /// Dismisses every toast.
    pub fn clear(&self) {
        self.emit(Event::Clear);
    }

    /// Patches a toast. With `create`, an unknown id creates the toast.
    pub fn update(&self, id: impl Into<ToastId>, patch: impl Into<ToastPatch>, create: bool) {
        let ToastPatch { content, options } = patch.into();
        self.emit(Event::Update(ToastUpdate {
            id: id.into(),
            content,
            options,
            create,
        }));
    }

    /// Patches the container options.
    pub fn update_defaults(&self, patch: ContainerOptions) {
        self.emit(Event::UpdateDefaults(patch));
    }
}

impl fmt::Debug for ToastInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastInterface")
            .field("headless", &self.is_headless())
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

/// Creates an interface for the detected environment.
///
/// Given options, a container is created and subscribed to the options'
/// `event_bus`, or to a fresh [`EventBus`]. Its mount happens on its first
/// flush. Given a channel, the interface attaches to it and expects a
/// container to exist already.
pub fn create_instance(source: impl Into<InstanceSource>) -> ToastInterface {
    create_instance_in(Environment::detect(), source)
}

/// Creates an interface for an explicit environment.
pub fn create_instance_in(
    environment: Environment,
    source: impl Into<InstanceSource>,
) -> ToastInterface {
    if environment.is_headless() {
        warn!("{HEADLESS_WARNING}");
        return ToastInterface::headless();
    }

    let mut options = match source.into() {
        InstanceSource::Channel(channel) => {
            debug!("toast interface attached to existing channel");
            return ToastInterface::live(channel, None);
        }
        InstanceSource::Options(options) => options,
    };

    let channel: Rc<dyn EventChannel> = match &options.event_bus {
        Some(shared) => Rc::clone(shared.as_rc()),
        None => Rc::new(EventBus::new()),
    };
    options.event_bus = Some(SharedChannel::new(Rc::clone(&channel)));
    let container = Container::new(options, Rc::clone(&channel));
    ToastInterface::live(channel, Some(container))
}
