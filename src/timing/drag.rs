// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles the horizontal swipe gesture that dismisses a toast.

use crate::config::defaults;
use crate::domain::toast::DraggablePercent;
use iced::Point;

/// How a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The pointer was released without moving.
    Released,
    /// The toast travelled less than the removal distance and returns to
    /// rest once the release has settled.
    Settle,
    /// The toast travelled far enough to be dismissed.
    Dismiss,
}

/// Visual offset of a dragged toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStyle {
    /// Horizontal translation in logical pixels.
    pub offset_x: f32,
    /// Raw opacity; may leave `0.0..=1.0` near the threshold.
    pub opacity: f32,
    /// Whether the toast is animating back to rest.
    pub animate: bool,
}

impl DragStyle {
    pub const REST: Self = Self {
        offset_x: 0.0,
        opacity: 1.0,
        animate: false,
    };

    /// Opacity clamped for display.
    #[must_use]
    pub fn display_opacity(&self) -> f32 {
        if self.opacity.is_nan() {
            return defaults::MIN_DRAG_OPACITY;
        }
        self.opacity.clamp(defaults::MIN_DRAG_OPACITY, 1.0)
    }
}

/// Manages swipe-to-dismiss state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether the pointer is held down on the toast
    pub is_started: bool,

    /// Whether the pointer moved while held down
    pub is_dragged: bool,

    /// Horizontal position where the drag started
    pub start_x: f32,

    /// Latest horizontal pointer position
    pub current_x: f32,

    /// Width of the toast when the drag started
    pub width: f32,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, width: f32) {
        self.is_started = true;
        self.is_dragged = false;
        self.start_x = position.x;
        self.current_x = position.x;
        self.width = width;
    }

    /// Tracks pointer movement. Ignored unless a drag was started.
    pub fn move_to(&mut self, position: Point) {
        if self.is_started {
            self.is_dragged = true;
            self.current_x = position.x;
        }
    }

    /// Horizontal travel while dragging, else zero.
    #[must_use]
    pub fn delta(&self) -> f32 {
        if self.is_dragged {
            self.current_x - self.start_x
        } else {
            0.0
        }
    }

    /// Whether the pointer moved since the last press. Stays set after the
    /// release so a click ending a short drag is not taken as a close.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        (self.current_x - self.start_x).abs() > 0.0
    }

    /// Ends the drag and decides its outcome.
    pub fn release(&mut self, percent: DraggablePercent) -> DragOutcome {
        self.is_started = false;
        if !self.is_dragged {
            return DragOutcome::Released;
        }
        if self.delta().abs() >= percent.removal_distance(self.width) {
            DragOutcome::Dismiss
        } else {
            DragOutcome::Settle
        }
    }

    /// Returns the toast to rest after a short drag.
    pub fn settle(&mut self) {
        self.is_dragged = false;
    }

    /// Calculates the visual offset for the current drag
    #[must_use]
    pub fn style(&self, percent: DraggablePercent) -> DragStyle {
        if (self.current_x - self.start_x).abs() <= 0.0 {
            return DragStyle::REST;
        }
        if self.is_dragged {
            let delta = self.delta();
            let removal = percent.removal_distance(self.width);
            DragStyle {
                offset_x: delta,
                opacity: 1.0 - (delta / removal).abs(),
                animate: false,
            }
        } else {
            DragStyle {
                animate: true,
                ..DragStyle::REST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn percent() -> DraggablePercent {
        DraggablePercent::new(0.6)
    }

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_started);
        assert!(!state.is_dragged);
        assert_abs_diff_eq!(state.delta(), 0.0);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut state = DragState::default();
        state.move_to(Point::new(40.0, 0.0));
        assert!(!state.is_dragged);
        assert_eq!(state.style(percent()), DragStyle::REST);
    }

    #[test]
    fn release_without_movement_is_a_plain_release() {
        let mut state = DragState::default();
        state.start(Point::new(10.0, 5.0), 10.0);
        assert_eq!(state.release(percent()), DragOutcome::Released);
        assert!(!state.has_moved());
    }

    #[test]
    fn release_at_threshold_dismisses() {
        let mut state = DragState::default();
        state.start(Point::ORIGIN, 10.0);
        state.move_to(Point::new(6.0, 0.0));
        assert_eq!(state.release(percent()), DragOutcome::Dismiss);
    }

    #[test]
    fn leftward_drag_past_threshold_dismisses() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 0.0), 10.0);
        state.move_to(Point::new(93.0, 0.0));
        assert_eq!(state.release(percent()), DragOutcome::Dismiss);
    }

    #[test]
    fn release_below_threshold_settles() {
        let mut state = DragState::default();
        state.start(Point::ORIGIN, 10.0);
        state.move_to(Point::new(5.9, 0.0));
        assert_eq!(state.release(percent()), DragOutcome::Settle);

        state.settle();
        assert!(!state.is_dragged);
        assert!(state.style(percent()).animate);
    }

    #[test]
    fn style_tracks_delta_while_dragging() {
        let mut state = DragState::default();
        state.start(Point::ORIGIN, 10.0);
        state.move_to(Point::new(3.0, 0.0));

        let style = state.style(percent());

        assert_abs_diff_eq!(style.offset_x, 3.0);
        assert_abs_diff_eq!(style.opacity, 0.5, epsilon = F32_EPSILON);
        assert!(!style.animate);
    }

    #[test]
    fn display_opacity_is_clamped() {
        let style = DragStyle {
            offset_x: 9.0,
            opacity: -0.5,
            animate: false,
        };
        assert_abs_diff_eq!(style.display_opacity(), 0.0);
    }
}
