// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::domain::toast::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toasts.defaults.position = Some(Position::BottomLeft);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Build container options from it
//! let options = config.to_options();
//! ```
//!
//! A complete file looks like:
//!
//! ```toml
//! [general]
//! theme_mode = "system"
//!
//! [toasts]
//! position = "bottom-right"
//! timeout = 4000
//! max_toasts = 5
//! newest_on_top = false
//! toast_class_name = ["app-toast"]
//!
//! [toasts.types.error]
//! timeout = false
//! icon = "!"
//! ```

pub mod defaults;

use crate::container::options::{ContainerOptions, ToastOptions};
use crate::domain::toast::{
    Accessibility, ClassNames, CloseButton, DraggablePercent, Icon, MaxToasts, Position, Timeout,
    ToastType, Transition,
};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Overrides the directory holding `settings.toml`.
pub const CONFIG_DIR_ENV: &str = "ICED_TOAST_CONFIG_DIR";

/// Glyph value that hides an icon or close button.
const HIDDEN_GLYPH: &str = "none";

/// Glyph value that selects the built-in icon or close button.
const AUTO_GLYPH: &str = "auto";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub toasts: ToastConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(deserialize_with = "lenient_or_default")]
    pub theme_mode: ThemeMode,
}

/// `[toasts]` section: container options plus the defaults of every toast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    #[serde(flatten)]
    pub defaults: ToastDefaults,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub newest_on_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<MaxToasts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_class_name: Option<ClassNames>,
    /// Per-type overrides keyed by type name (`success`, `error`, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "lenient_types")]
    pub types: BTreeMap<String, ToastDefaults>,
}

/// Toast options expressible in TOML. Unset keys inherit, and so do keys
/// holding a value of the wrong shape.
///
/// `icon` and `close_button` take a glyph, `"auto"` (or `true`) for the
/// built-in one, or `"none"` (or `false`) to hide it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Timeout>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable_percent: Option<DraggablePercent>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub pause_on_hover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub pause_on_focus_loss: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub close_on_click: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub hide_progress_bar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub show_close_button_on_hover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "glyph")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "glyph")]
    pub close_button: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast_class_name: Option<ClassNames>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_class_name: Option<ClassNames>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_button_class_name: Option<ClassNames>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub accessibility: Option<Accessibility>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub rtl: Option<bool>,
}

impl ToastDefaults {
    #[must_use]
    pub fn to_options(&self) -> ToastOptions {
        ToastOptions {
            position: self.position,
            timeout: self.timeout,
            draggable: self.draggable,
            draggable_percent: self.draggable_percent,
            pause_on_hover: self.pause_on_hover,
            pause_on_focus_loss: self.pause_on_focus_loss,
            close_on_click: self.close_on_click,
            hide_progress_bar: self.hide_progress_bar,
            show_close_button_on_hover: self.show_close_button_on_hover,
            icon: self.icon.as_deref().map(parse_icon),
            close_button: self.close_button.as_deref().map(parse_close_button),
            toast_class_name: self.toast_class_name.clone(),
            body_class_name: self.body_class_name.clone(),
            close_button_class_name: self.close_button_class_name.clone(),
            accessibility: self.accessibility.clone(),
            rtl: self.rtl,
            ..ToastOptions::default()
        }
    }
}

/// A setting of the expected shape, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::deserialize(deserializer)?.into_option())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Drops per-type tables that are not tables.
fn lenient_types<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, ToastDefaults>, D::Error>
where
    D: Deserializer<'de>,
{
    let types: BTreeMap<String, Lenient<ToastDefaults>> =
        lenient(deserializer)?.unwrap_or_default();
    Ok(types
        .into_iter()
        .filter_map(|(name, defaults)| Some((name, defaults.into_option()?)))
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGlyph {
    Glyph(String),
    Flag(bool),
    Other(IgnoredAny),
}

fn glyph<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawGlyph::deserialize(deserializer)? {
        RawGlyph::Glyph(glyph) => Some(glyph),
        RawGlyph::Flag(true) => Some(AUTO_GLYPH.to_string()),
        RawGlyph::Flag(false) => Some(HIDDEN_GLYPH.to_string()),
        RawGlyph::Other(_) => None,
    })
}

fn parse_icon(glyph: &str) -> Icon {
    match glyph.trim() {
        HIDDEN_GLYPH => Icon::Hidden,
        AUTO_GLYPH => Icon::Auto,
        glyph => Icon::custom(glyph),
    }
}

fn parse_close_button(glyph: &str) -> CloseButton {
    match glyph.trim() {
        HIDDEN_GLYPH => CloseButton::Hidden,
        AUTO_GLYPH => CloseButton::Default,
        glyph => CloseButton::custom(glyph),
    }
}

impl Config {
    /// Container options described by this configuration. Unknown type
    /// names under `[toasts.types]` are skipped.
    #[must_use]
    pub fn to_options(&self) -> ContainerOptions {
        let toasts = &self.toasts;
        let mut options = ContainerOptions::new().with_toast(toasts.defaults.to_options());
        options.newest_on_top = toasts.newest_on_top;
        options.max_toasts = toasts.max_toasts;
        options.transition = toasts.transition.clone();
        options.container_class_name = toasts.container_class_name.clone();

        for (name, overrides) in &toasts.types {
            match ToastType::from_name(name) {
                Some(toast_type) => {
                    options = options.type_defaults(toast_type, overrides.to_options());
                }
                None => warn!(%name, "unknown toast type in configuration skipped"),
            }
        }
        options
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads `path`. Invalid TOML yields the default configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "invalid configuration, using defaults");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Config {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        config.toasts.defaults.position = Some(Position::BottomLeft);
        config.toasts.defaults.timeout = Some(Timeout::from(3000));
        config.toasts.max_toasts = Some(MaxToasts::from(4));
        config.toasts.types.insert(
            "error".to_string(),
            ToastDefaults {
                timeout: Some(Timeout::DISABLED),
                icon: Some("!".to_string()),
                ..ToastDefaults::default()
            },
        );
        config
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = sample();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [toasts]
            position = "middle"
            timeout = -5
            draggable_percent = 0
            max_toasts = -1
            "#,
        )
        .expect("shape is valid");

        let options = config.to_options();
        let settings = options.toast.settings();
        assert_eq!(settings.position, Position::TopRight);
        assert_eq!(settings.timeout, Timeout::default());
        assert_eq!(settings.draggable_percent, DraggablePercent::default());
        assert_eq!(
            options.max_toasts_per_position().value(),
            defaults::DEFAULT_MAX_TOASTS
        );
    }

    #[test]
    fn to_options_maps_type_overrides() {
        let options = sample().to_options();
        let error = options.defaults_for(ToastType::Error);

        assert_eq!(error.position, Some(Position::BottomLeft));
        assert_eq!(error.timeout, Some(Timeout::DISABLED));
        assert_eq!(error.icon, Some(Icon::custom("!")));
        assert_eq!(
            options.defaults_for(ToastType::Info).timeout,
            Some(Timeout::from(3000))
        );
    }

    #[test]
    fn unknown_type_names_are_skipped() {
        let mut config = Config::default();
        config
            .toasts
            .types
            .insert("fatal".to_string(), ToastDefaults::default());

        let options = config.to_options();
        assert!(options.toast_defaults.is_none());
    }

    #[test]
    fn bad_keys_do_not_discard_the_rest_of_the_file() {
        let config: Config = toml::from_str(
            r#"
            [general]
            theme_mode = 7

            [toasts]
            max_toasts = 3
            position = 5
            draggable = "yes"
            rtl = true
            newest_on_top = 1
            accessibility = "loud"

            [toasts.types]
            info = 4

            [toasts.types.error]
            close_on_click = false
            "#,
        )
        .expect("shape is valid");

        assert_eq!(config.general.theme_mode, ThemeMode::default());
        assert_eq!(config.toasts.max_toasts, Some(MaxToasts::from(3)));
        assert_eq!(config.toasts.newest_on_top, None);
        let defaults = &config.toasts.defaults;
        assert_eq!(defaults.position, Some(Position::TopRight));
        assert_eq!(defaults.draggable, None);
        assert_eq!(defaults.rtl, Some(true));
        assert_eq!(defaults.accessibility, None);
        assert!(!config.toasts.types.contains_key("info"));
        assert_eq!(config.toasts.types["error"].close_on_click, Some(false));
    }

    #[test]
    fn bad_keys_in_a_file_keep_the_valid_ones() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toasts]\nmax_toasts = 3\nposition = 5\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.toasts.max_toasts, Some(MaxToasts::from(3)));
    }

    #[test]
    fn boolean_glyphs_toggle_built_in_ones() {
        let config: Config = toml::from_str(
            r#"
            [toasts]
            icon = false
            close_button = true

            [toasts.types.success]
            icon = 12
            "#,
        )
        .expect("shape is valid");

        let options = config.to_options();
        assert_eq!(options.toast.icon, Some(Icon::Hidden));
        assert_eq!(options.toast.close_button, Some(CloseButton::Default));
        assert_eq!(config.toasts.types["success"].icon, None);
    }

    #[test]
    fn glyph_keywords_select_variants() {
        assert_eq!(parse_icon("none"), Icon::Hidden);
        assert_eq!(parse_icon("auto"), Icon::Auto);
        assert_eq!(parse_close_button("  "), CloseButton::Default);
        assert_eq!(parse_close_button("x"), CloseButton::Custom("x".to_string()));
    }
}
