// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions driving toast timers and gestures.

use super::Message;
use crate::config::defaults::TICK_INTERVAL_MS;
use crate::container::Container;
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Runtime events plus a periodic tick while toasts exist or a mount
/// target is still resolving.
pub fn subscription(container: &Container) -> Subscription<Message> {
    let events = event::listen_with(runtime_event);
    if container.is_empty() && !container.is_mount_pending() {
        events
    } else {
        Subscription::batch([
            events,
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick),
        ])
    }
}

/// Maps the pointer and focus events toasts react to.
///
/// Events are routed regardless of capture status: a drag that ends over
/// another widget still has to end.
fn runtime_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Window(window::Event::Focused) => Some(Message::WindowFocusChanged(true)),
        Event::Window(window::Event::Unfocused) => Some(Message::WindowFocusChanged(false)),
        _ => None,
    }
}
