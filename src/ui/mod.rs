// SPDX-License-Identifier: MPL-2.0
//! iced integration: messages, update, overlay view and subscriptions.
//!
//! Applications embed toasts in three steps:
//!
//! - map [`subscription::subscription`] into their own subscription,
//! - forward [`Message`]s to [`update`],
//! - stack [`overlay::view`] above their content.
//!
//! # Modules
//!
//! - [`toast`] - Single toast card
//! - [`overlay`] - Six anchored columns of cards
//! - [`subscription`] - Tick and pointer/focus event routing
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and toast colors

pub mod design_tokens;
pub mod overlay;
pub mod subscription;
pub mod theming;
pub mod toast;

use crate::container::Container;
use crate::domain::toast::ToastId;
use crate::ui::design_tokens::sizing;
use iced::{Point, Task};
use std::time::Instant;

/// Messages produced by the toast overlay and its subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick advancing timers.
    Tick(Instant),
    /// Run work deferred to the next message-loop turn.
    Flush,
    PointerEntered(ToastId),
    PointerExited(ToastId),
    /// Left button pressed on a card.
    Pressed(ToastId),
    /// Left button released on a card.
    Clicked(ToastId),
    /// Close button pressed, or a component asked to close.
    CloseRequested(ToastId),
    /// A component triggered one of its listeners.
    ListenerTriggered { id: ToastId, name: String },
    CursorMoved(Point),
    /// Left button released anywhere.
    PointerReleased,
    WindowFocusChanged(bool),
}

/// Applies a message to `container`.
///
/// Returns a task delivering [`Message::Flush`] when the message queued
/// deferred work.
pub fn update(container: &Container, message: Message) -> Task<Message> {
    match message {
        Message::Tick(now) => container.tick(now),
        Message::Flush => container.flush(),
        Message::PointerEntered(id) => container.pointer_entered(&id),
        Message::PointerExited(id) => container.pointer_exited(&id),
        Message::Pressed(id) => {
            if let Some(position) = container.cursor() {
                container.drag_started(&id, position, sizing::TOAST_WIDTH);
            }
        }
        Message::Clicked(id) => container.clicked(&id),
        Message::CloseRequested(id) => container.close_requested(&id),
        Message::ListenerTriggered { id, name } => container.trigger_listener(&id, &name),
        Message::CursorMoved(position) => container.cursor_moved(position),
        Message::PointerReleased => container.pointer_released(),
        Message::WindowFocusChanged(focused) => container.window_focus_changed(focused),
    }

    if container.has_deferred() {
        Task::done(Message::Flush)
    } else {
        Task::none()
    }
}
