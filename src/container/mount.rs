// SPDX-License-Identifier: MPL-2.0
//! Where a container renders.
//!
//! A container is hosted by a window. The host can be given directly,
//! computed by a closure, or produced by a future that is polled on every
//! flush until it resolves. A newer target always supersedes a pending one.

use futures_util::future::LocalBoxFuture;
use futures_util::task::noop_waker_ref;
use futures_util::FutureExt;
use iced::window;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::task::{Context, Poll};

type Resolver = Rc<dyn Fn() -> window::Id>;
type AsyncResolver = Rc<dyn Fn() -> LocalBoxFuture<'static, window::Id>>;

/// Host a container mounts into.
#[derive(Clone)]
pub enum MountTarget {
    Window(window::Id),
    Resolver(Resolver),
    Deferred(AsyncResolver),
}

impl MountTarget {
    #[must_use]
    pub fn window(id: window::Id) -> Self {
        Self::Window(id)
    }

    pub fn resolver(resolve: impl Fn() -> window::Id + 'static) -> Self {
        Self::Resolver(Rc::new(resolve))
    }

    pub fn deferred<F, Fut>(resolve: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = window::Id> + 'static,
    {
        Self::Deferred(Rc::new(move || resolve().boxed_local()))
    }

    /// Runs the resolver, if any. Must not be called while container
    /// state is borrowed: resolvers are caller code.
    pub(crate) fn resolve(&self) -> Resolution {
        match self {
            Self::Window(id) => Resolution::Ready(*id),
            Self::Resolver(resolve) => Resolution::Ready(resolve()),
            Self::Deferred(resolve) => Resolution::Pending(resolve()),
        }
    }
}

impl fmt::Debug for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(id) => f.debug_tuple("Window").field(id).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

pub(crate) enum Resolution {
    Ready(window::Id),
    Pending(LocalBoxFuture<'static, window::Id>),
}

/// Mount state of a container.
#[derive(Default)]
pub(crate) struct Mount {
    mounted: bool,
    host: Option<window::Id>,
    pending: Option<LocalBoxFuture<'static, window::Id>>,
}

impl Mount {
    /// Marks the container mounted in any window.
    pub fn mount_anywhere(&mut self) {
        self.mounted = true;
        self.host = None;
        self.pending = None;
    }

    /// Applies a resolved or pending target. A pending target leaves the
    /// current host in place until it resolves.
    pub fn apply(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Ready(id) => {
                self.pending = None;
                self.attach(id);
            }
            Resolution::Pending(future) => self.pending = Some(future),
        }
    }

    /// Polls a pending target once. Returns the host it resolved to.
    pub fn poll_pending(&mut self) -> Option<window::Id> {
        let future = self.pending.as_mut()?;
        let mut cx = Context::from_waker(noop_waker_ref());
        match future.poll_unpin(&mut cx) {
            Poll::Ready(id) => {
                self.pending = None;
                self.attach(id);
                Some(id)
            }
            Poll::Pending => None,
        }
    }

    fn attach(&mut self, id: window::Id) {
        self.mounted = true;
        self.host = Some(id);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn host(&self) -> Option<window::Id> {
        self.host
    }

    /// Whether the container draws into `window`. `None` asks about the
    /// default window of a single-window application.
    pub fn renders_in(&self, window: Option<window::Id>) -> bool {
        if !self.mounted {
            return false;
        }
        match (self.host, window) {
            (None, _) => true,
            (Some(host), Some(window)) => host == window,
            (Some(_), None) => false,
        }
    }
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("mounted", &self.mounted)
            .field("host", &self.host)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future;
    use std::cell::Cell;

    #[test]
    fn unmounted_container_renders_nowhere() {
        let mount = Mount::default();
        assert!(!mount.renders_in(None));
        assert!(!mount.is_mounted());
    }

    #[test]
    fn anywhere_mount_renders_in_every_window() {
        let mut mount = Mount::default();
        mount.mount_anywhere();
        assert!(mount.renders_in(None));
        assert!(mount.renders_in(Some(window::Id::unique())));
    }

    #[test]
    fn window_target_restricts_rendering() {
        let host = window::Id::unique();
        let mut mount = Mount::default();
        mount.apply(MountTarget::window(host).resolve());

        assert!(mount.renders_in(Some(host)));
        assert!(!mount.renders_in(Some(window::Id::unique())));
        assert!(!mount.renders_in(None));
    }

    #[test]
    fn resolver_runs_once_per_resolution() {
        let host = window::Id::unique();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let target = MountTarget::resolver(move || {
            counter.set(counter.get() + 1);
            host
        });

        let mut mount = Mount::default();
        mount.apply(target.resolve());

        assert_eq!(calls.get(), 1);
        assert_eq!(mount.host(), Some(host));
    }

    #[test]
    fn ready_future_resolves_on_first_poll() {
        let host = window::Id::unique();
        let target = MountTarget::deferred(move || future::ready(host));

        let mut mount = Mount::default();
        mount.apply(target.resolve());
        assert!(mount.is_pending());
        assert!(!mount.is_mounted());

        assert_eq!(mount.poll_pending(), Some(host));
        assert!(mount.renders_in(Some(host)));
    }

    #[test]
    fn newer_target_supersedes_pending_one() {
        let late = window::Id::unique();
        let now = window::Id::unique();
        let mut mount = Mount::default();

        mount.apply(MountTarget::deferred(move || future::ready(late)).resolve());
        mount.apply(MountTarget::window(now).resolve());

        assert_eq!(mount.poll_pending(), None);
        assert_eq!(mount.host(), Some(now));
    }

    #[test]
    fn pending_target_keeps_previous_host() {
        let first = window::Id::unique();
        let mut mount = Mount::default();
        mount.apply(MountTarget::window(first).resolve());

        mount.apply(MountTarget::deferred(future::pending::<window::Id>).resolve());

        assert_eq!(mount.poll_pending(), None);
        assert_eq!(mount.host(), Some(first));
        assert!(mount.is_pending());
    }
}
