// SPDX-License-Identifier: MPL-2.0
//! Toast payloads moving through the event channel and records stored by
//! the container.

use crate::container::content::{NormalizedContent, ToastContent};
use crate::container::options::{ToastOptions, ToastSettings};
use crate::domain::toast::{Position, Timeout, ToastId, ToastType};

/// Toast requested through `add`, before defaults are applied.
#[derive(Debug, Clone)]
pub struct ToastCandidate {
    pub content: ToastContent,
    pub options: ToastOptions,
}

impl ToastCandidate {
    pub fn new(content: impl Into<ToastContent>, options: ToastOptions) -> Self {
        Self {
            content: content.into(),
            options,
        }
    }
}

/// Patch addressed to a toast by id.
#[derive(Debug, Clone)]
pub struct ToastUpdate {
    pub id: ToastId,
    pub content: Option<ToastContent>,
    pub options: ToastOptions,
    /// Create the toast when `id` is unknown.
    pub create: bool,
}

/// Toast as stored in the container's active map.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    id: ToastId,
    pub content: NormalizedContent,
    pub options: ToastOptions,
}

impl ToastRecord {
    #[must_use]
    pub fn new(id: ToastId, content: NormalizedContent, options: ToastOptions) -> Self {
        Self {
            id,
            content,
            options,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn toast_type(&self) -> ToastType {
        self.options.toast_type.unwrap_or_default()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.options.position.unwrap_or_default()
    }

    /// Effective timeout after defaults.
    #[must_use]
    pub fn timeout(&self) -> Timeout {
        self.options.timeout.unwrap_or_default()
    }

    /// Text of a plain-text toast.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.text()
    }

    #[must_use]
    pub fn settings(&self) -> ToastSettings {
        self.options.settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_resolves_position_and_timeout_defaults() {
        let record = ToastRecord::new(
            ToastId::from(1),
            ToastContent::from("hi").normalize(),
            ToastOptions::new().toast_type(ToastType::Info),
        );

        assert_eq!(record.position(), Position::TopRight);
        assert_eq!(record.timeout(), Timeout::default());
        assert_eq!(record.text(), Some("hi"));
        assert_eq!(record.toast_type(), ToastType::Info);
    }

    #[test]
    fn candidate_accepts_plain_strings() {
        let candidate = ToastCandidate::new("queued", ToastOptions::new().id("job"));
        assert!(matches!(candidate.content, ToastContent::Text(ref t) if t == "queued"));
        assert_eq!(candidate.options.id, Some(ToastId::from("job")));
    }
}
