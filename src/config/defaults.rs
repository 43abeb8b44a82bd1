// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timeout**: Auto-dismiss countdown
//! - **Drag**: Drag-to-dismiss threshold
//! - **Stacking**: Per-position capacity and ordering
//! - **Presentation**: Transition, accessibility and class name defaults
//! - **Runtime**: Tick cadence of the overlay subscription

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Default auto-dismiss timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Default fraction of the toast width a drag must exceed to dismiss it.
pub const DEFAULT_DRAGGABLE_PERCENT: f32 = 0.6;

/// Opacity never drops below this while dragging, so the card stays visible.
pub const MIN_DRAG_OPACITY: f32 = 0.0;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Default number of toasts displayed per position.
pub const DEFAULT_MAX_TOASTS: usize = 20;

/// Newest toasts are shown first by default.
pub const DEFAULT_NEWEST_ON_TOP: bool = true;

// ==========================================================================
// Behaviour Defaults
// ==========================================================================

pub const DEFAULT_DRAGGABLE: bool = true;
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;
pub const DEFAULT_PAUSE_ON_FOCUS_LOSS: bool = true;
pub const DEFAULT_CLOSE_ON_CLICK: bool = true;
pub const DEFAULT_HIDE_PROGRESS_BAR: bool = false;
pub const DEFAULT_SHOW_CLOSE_BUTTON_ON_HOVER: bool = false;
pub const DEFAULT_RTL: bool = false;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Transition name applied when none (or an empty one) is configured.
pub const DEFAULT_TRANSITION: &str = "iced-toast__bounce";

/// Accessibility role announced for each toast.
pub const DEFAULT_TOAST_ROLE: &str = "alert";

/// Accessible label of the close button.
pub const DEFAULT_CLOSE_BUTTON_LABEL: &str = "close";

/// Base class name every container carries in addition to user classes.
pub const CONTAINER_CLASS_PREFIX: &str = "iced-toast__container";

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Interval between timer ticks while toasts are displayed (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TIMEOUT_MS > 0);
    assert!(DEFAULT_DRAGGABLE_PERCENT > 0.0);
    assert!(MIN_DRAG_OPACITY >= 0.0);
    assert!(DEFAULT_MAX_TOASTS > 0);
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_TIMEOUT_MS);
    assert!(!DEFAULT_TRANSITION.is_empty());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_much_finer_than_default_timeout() {
        assert!(DEFAULT_TIMEOUT_MS / TICK_INTERVAL_MS >= 10);
    }

    #[test]
    fn accessibility_defaults_are_not_blank() {
        assert!(!DEFAULT_TOAST_ROLE.trim().is_empty());
        assert!(!DEFAULT_CLOSE_BUTTON_LABEL.trim().is_empty());
    }
}
