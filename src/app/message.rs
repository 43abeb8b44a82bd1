// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::domain::toast::{MaxToasts, Position, ToastType};
use crate::ui;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a text toast of the given type.
    Show(ToastType),
    /// Show a toast rendered by a custom component.
    ShowComponent,
    /// Re-apply the last toast's timeout, restarting its countdown.
    RestartLast,
    DismissLast,
    Clear,
    ToggleNewestOnTop,
    /// Messages of the toast overlay.
    Toast(ui::Message),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Configuration file to load instead of the default location.
    pub config_path: Option<PathBuf>,
    pub position: Option<Position>,
    pub max_toasts: Option<MaxToasts>,
    pub newest_on_top: bool,
}
