// SPDX-License-Identifier: MPL-2.0
//! Detection of environments that cannot display toasts.

use std::env;

/// Environment variable forcing headless mode when set to anything but
/// `0` or `false`.
pub const HEADLESS_ENV: &str = "ICED_TOAST_HEADLESS";

/// Whether the process can open windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Windowed,
    Headless,
}

impl Environment {
    /// Inspects the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = var(HEADLESS_ENV) {
            let value = value.trim();
            if !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false")) {
                return Self::Headless;
            }
        }

        if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
                .iter()
                .any(|key| var(key).is_some_and(|value| !value.is_empty()));
            if !has_display {
                return Self::Headless;
            }
        }

        Self::Windowed
    }

    #[must_use]
    pub fn is_headless(self) -> bool {
        self == Self::Headless
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn detect_with(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn explicit_flag_forces_headless() {
        assert_eq!(
            detect_with(&[(HEADLESS_ENV, "1"), ("DISPLAY", ":0")]),
            Environment::Headless
        );
    }

    #[test]
    fn disabled_flag_is_ignored() {
        assert_eq!(
            detect_with(&[(HEADLESS_ENV, "false"), ("DISPLAY", ":0")]),
            Environment::Windowed
        );
    }

    #[test]
    fn display_server_means_windowed() {
        assert_eq!(
            detect_with(&[("WAYLAND_DISPLAY", "wayland-0")]),
            Environment::Windowed
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn missing_display_server_is_headless_on_linux() {
        assert!(detect_with(&[]).is_headless());
    }
}
