// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection and toast colors.

use crate::domain::toast::ToastType;
use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors of a toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastColors {
    pub accent: Color,
    pub surface: Color,
    pub text: Color,
}

/// Colors of a toast of `toast_type` on a light or dark surface.
#[must_use]
pub fn toast_colors(toast_type: ToastType, dark: bool) -> ToastColors {
    let accent = match toast_type {
        ToastType::Success => palette::SUCCESS_500,
        ToastType::Error => palette::ERROR_500,
        ToastType::Warning => palette::WARNING_500,
        ToastType::Info => palette::INFO_500,
        ToastType::Default => {
            if dark {
                palette::GRAY_200
            } else {
                palette::DEFAULT_500
            }
        }
    };
    let (surface, text) = if dark {
        (palette::GRAY_900, palette::WHITE)
    } else {
        (palette::WHITE, palette::GRAY_900)
    };
    ToastColors {
        accent,
        surface,
        text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
