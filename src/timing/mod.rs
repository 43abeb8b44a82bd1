// SPDX-License-Identifier: MPL-2.0
//! Per-toast countdown and pause state.
//!
//! A [`ToastTimer`] runs while no pause cause is active. Hover, window
//! focus loss and drag are tracked as independent causes: releasing one
//! resumes the countdown only once every other cause has cleared too.
//! Time advances through [`ToastTimer::tick`], driven by the caller's clock.

pub mod drag;

pub use drag::{DragOutcome, DragState, DragStyle};

use crate::container::options::ToastSettings;
use crate::domain::toast::Timeout;
use iced::Point;
use std::time::{Duration, Instant};

/// Observable state of a toast timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
    Dismissed,
}

/// Reason a countdown is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseCause {
    Hover,
    FocusLoss,
    Drag,
}

impl PauseCause {
    fn bit(self) -> u8 {
        match self {
            PauseCause::Hover => 0b001,
            PauseCause::FocusLoss => 0b010,
            PauseCause::Drag => 0b100,
        }
    }
}

/// Set of active pause causes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseCauses(u8);

impl PauseCauses {
    pub fn insert(&mut self, cause: PauseCause) {
        self.0 |= cause.bit();
    }

    pub fn remove(&mut self, cause: PauseCause) {
        self.0 &= !cause.bit();
    }

    #[must_use]
    pub fn contains(self, cause: PauseCause) -> bool {
        self.0 & cause.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Countdown, pause causes and drag gesture of one displayed toast.
#[derive(Debug, Clone)]
pub struct ToastTimer {
    timeout: Timeout,
    elapsed: Duration,
    last_tick: Option<Instant>,
    causes: PauseCauses,
    hovered: bool,
    drag: DragState,
    dismissed: bool,
}

impl ToastTimer {
    #[must_use]
    pub fn new(timeout: Timeout, now: Instant) -> Self {
        Self {
            last_tick: Some(now),
            ..Self::unstarted(timeout)
        }
    }

    /// Timer whose countdown starts at its first [`ToastTimer::tick`].
    #[must_use]
    pub fn unstarted(timeout: Timeout) -> Self {
        Self {
            timeout,
            elapsed: Duration::ZERO,
            last_tick: None,
            causes: PauseCauses::default(),
            hovered: false,
            drag: DragState::default(),
            dismissed: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.dismissed {
            TimerState::Dismissed
        } else if self.causes.is_empty() {
            TimerState::Running
        } else {
            TimerState::Paused
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Running
    }

    #[must_use]
    pub fn causes(&self) -> PauseCauses {
        self.causes
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn timeout(&self) -> Timeout {
        self.timeout
    }

    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn pointer_entered(&mut self, settings: &ToastSettings) {
        self.hovered = true;
        if settings.pause_on_hover {
            self.causes.insert(PauseCause::Hover);
        }
    }

    pub fn pointer_exited(&mut self) {
        self.hovered = false;
        self.causes.remove(PauseCause::Hover);
    }

    pub fn focus_changed(&mut self, focused: bool, settings: &ToastSettings) {
        if focused {
            self.causes.remove(PauseCause::FocusLoss);
        } else if settings.pause_on_focus_loss {
            self.causes.insert(PauseCause::FocusLoss);
        }
    }

    /// Starts a drag at `position` on a toast `width` pixels wide.
    /// Returns `false` when dragging is disabled for this toast.
    pub fn drag_started(&mut self, position: Point, width: f32, settings: &ToastSettings) -> bool {
        if !settings.draggable || self.dismissed {
            return false;
        }
        self.drag.start(position, width);
        self.causes.insert(PauseCause::Drag);
        true
    }

    pub fn drag_moved(&mut self, position: Point) {
        self.drag.move_to(position);
    }

    /// Ends the drag. A [`DragOutcome::Settle`] keeps the toast paused
    /// until [`ToastTimer::settle`] runs.
    pub fn drag_ended(&mut self, settings: &ToastSettings) -> DragOutcome {
        if !self.drag.is_started {
            return DragOutcome::Released;
        }
        let outcome = self.drag.release(settings.draggable_percent);
        match outcome {
            DragOutcome::Dismiss => self.dismissed = true,
            DragOutcome::Released => self.causes.remove(PauseCause::Drag),
            DragOutcome::Settle => {}
        }
        outcome
    }

    /// Returns a short drag to rest. The toast stays paused if the pointer
    /// is still over it and hovering pauses it.
    pub fn settle(&mut self, settings: &ToastSettings) {
        self.drag.settle();
        self.causes.remove(PauseCause::Drag);
        if self.hovered && settings.pause_on_hover {
            self.causes.insert(PauseCause::Hover);
        } else {
            self.causes.remove(PauseCause::Hover);
        }
    }

    /// Whether a click should close the toast: only when closing on click
    /// is enabled and the pointer did not move during the press.
    #[must_use]
    pub fn click_closes(&self, close_on_click: bool) -> bool {
        close_on_click && !self.drag.has_moved()
    }

    #[must_use]
    pub fn drag_style(&self, settings: &ToastSettings) -> DragStyle {
        self.drag.style(settings.draggable_percent)
    }

    /// Advances the countdown to `now`. Returns `true` exactly once, when
    /// the timeout elapses while running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(last_tick) = self.last_tick.replace(now) else {
            return false;
        };
        let delta = now.saturating_duration_since(last_tick);
        if !self.is_running() {
            return false;
        }
        let Some(limit) = self.timeout.as_duration() else {
            return false;
        };
        self.elapsed += delta;
        if self.elapsed >= limit {
            self.dismissed = true;
            return true;
        }
        false
    }

    /// Re-arms the countdown with a new timeout.
    pub fn restart(&mut self, timeout: Timeout) {
        self.timeout = timeout;
        self.elapsed = Duration::ZERO;
    }

    /// Fraction of the countdown left, `1.0` when disabled.
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        match self.timeout.as_duration() {
            Some(limit) if !limit.is_zero() => {
                let used = self.elapsed.as_secs_f32() / limit.as_secs_f32();
                (1.0 - used).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }
}
