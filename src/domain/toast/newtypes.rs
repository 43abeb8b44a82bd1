// SPDX-License-Identifier: MPL-2.0
//! Toast option newtypes.
//!
//! Each wrapper normalizes its raw value at construction, so an invalid
//! option always degrades to the documented default instead of being
//! rejected. Deserialization follows the same rule field by field.

use crate::config::defaults;
use crate::domain::toast::types::ToastType;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

// =============================================================================
// Timeout
// =============================================================================

/// Auto-dismiss delay: a positive number of milliseconds, or disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout(Option<u64>);

impl Timeout {
    /// A timeout that never elapses.
    pub const DISABLED: Self = Self(None);

    /// Creates a timeout from milliseconds; non-positive values fall back
    /// to the default.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(ms) if ms > 0 => Self(Some(ms)),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn as_millis(self) -> Option<u64> {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        self.0.map(Duration::from_millis)
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0.is_none()
    }

    /// Returns the timeout lengthened by one millisecond.
    ///
    /// Used to force a countdown restart when an update re-applies the
    /// current value. Disabled timeouts stay disabled.
    #[must_use]
    pub fn bumped(self) -> Self {
        Self(self.0.map(|ms| ms.saturating_add(1)))
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self(Some(defaults::DEFAULT_TIMEOUT_MS))
    }
}

impl From<u64> for Timeout {
    fn from(millis: u64) -> Self {
        Self::from_millis(i64::try_from(millis).unwrap_or(i64::MAX))
    }
}

/// `false` disables the countdown; `true` keeps the default delay.
impl From<bool> for Timeout {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::default()
        } else {
            Self::DISABLED
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeout {
    Millis(i64),
    Flag(bool),
    Other(IgnoredAny),
}

impl Serialize for Timeout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(ms) => serializer.serialize_u64(ms),
            None => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for Timeout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawTimeout::deserialize(deserializer)? {
            RawTimeout::Millis(ms) => Self::from_millis(ms),
            RawTimeout::Flag(flag) => Self::from(flag),
            RawTimeout::Other(_) => Self::default(),
        })
    }
}

// =============================================================================
// DraggablePercent
// =============================================================================

/// Fraction of the toast width a drag must travel to dismiss it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraggablePercent(f32);

impl DraggablePercent {
    /// Creates a drag threshold; non-finite or non-positive values fall back
    /// to the default.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_finite() && percent > 0.0 {
            Self(percent)
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Distance in logical pixels a drag must exceed for an element of
    /// the given width.
    #[must_use]
    pub fn removal_distance(self, width: f32) -> f32 {
        width * self.0
    }
}

impl Default for DraggablePercent {
    fn default() -> Self {
        Self(defaults::DEFAULT_DRAGGABLE_PERCENT)
    }
}

impl From<f32> for DraggablePercent {
    fn from(percent: f32) -> Self {
        Self::new(percent)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFloat {
    Number(f64),
    Other(IgnoredAny),
}

impl Serialize for DraggablePercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.0)
    }
}

impl<'de> Deserialize<'de> for DraggablePercent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawFloat::deserialize(deserializer)? {
            #[allow(clippy::cast_possible_truncation)]
            RawFloat::Number(n) => Self::new(n as f32),
            RawFloat::Other(_) => Self::default(),
        })
    }
}

// =============================================================================
// MaxToasts
// =============================================================================

/// Number of toasts displayed per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxToasts(usize);

impl MaxToasts {
    /// Creates a capacity; negative values fall back to the default.
    /// Zero is a valid capacity and hides every toast.
    #[must_use]
    pub fn from_count(count: i64) -> Self {
        usize::try_from(count).map_or_else(|_| Self::default(), Self)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxToasts {
    fn default() -> Self {
        Self(defaults::DEFAULT_MAX_TOASTS)
    }
}

impl From<usize> for MaxToasts {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Count(i64),
    Other(IgnoredAny),
}

impl Serialize for MaxToasts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0 as u64)
    }
}

impl<'de> Deserialize<'de> for MaxToasts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawCount::deserialize(deserializer)? {
            RawCount::Count(n) => Self::from_count(n),
            RawCount::Other(_) => Self::default(),
        })
    }
}

// =============================================================================
// ClassNames
// =============================================================================

/// Extra style class names attached to a rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Returns a copy with `other` appended.
    #[must_use]
    pub fn with(&self, other: &ClassNames) -> Self {
        let mut merged = self.0.clone();
        merged.extend(other.0.iter().cloned());
        Self(merged)
    }
}

impl From<&str> for ClassNames {
    fn from(class: &str) -> Self {
        Self::from(class.to_string())
    }
}

impl From<String> for ClassNames {
    fn from(class: String) -> Self {
        if class.trim().is_empty() {
            Self::default()
        } else {
            Self(vec![class])
        }
    }
}

impl From<Vec<String>> for ClassNames {
    fn from(classes: Vec<String>) -> Self {
        Self(
            classes
                .into_iter()
                .filter(|c| !c.trim().is_empty())
                .collect(),
        )
    }
}

impl From<&[&str]> for ClassNames {
    fn from(classes: &[&str]) -> Self {
        Self::from(classes.iter().map(ToString::to_string).collect::<Vec<_>>())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClassNames {
    One(String),
    Many(Vec<String>),
    Other(IgnoredAny),
}

impl Serialize for ClassNames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClassNames {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawClassNames::deserialize(deserializer)? {
            RawClassNames::One(class) => Self::from(class),
            RawClassNames::Many(classes) => Self::from(classes),
            RawClassNames::Other(_) => Self::default(),
        })
    }
}

// =============================================================================
// Transition
// =============================================================================

/// Enter/leave animation applied to toasts of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Single name from which the enter, leave and move classes derive.
    Named(String),
    /// Explicit class for each phase.
    Classes {
        enter: String,
        leave: String,
        moving: String,
    },
}

impl Transition {
    /// Creates a named transition; an empty name falls back to the default.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            Self::default()
        } else {
            Self::Named(name)
        }
    }

    /// Creates an explicit class triple. Every class must be non-empty,
    /// otherwise the default transition is used.
    #[must_use]
    pub fn classes(
        enter: impl Into<String>,
        leave: impl Into<String>,
        moving: impl Into<String>,
    ) -> Self {
        let (enter, leave, moving) = (enter.into(), leave.into(), moving.into());
        if [&enter, &leave, &moving].iter().any(|c| c.trim().is_empty()) {
            Self::default()
        } else {
            Self::Classes {
                enter,
                leave,
                moving,
            }
        }
    }

    /// Class applied while a toast enters.
    #[must_use]
    pub fn enter_class(&self) -> String {
        match self {
            Self::Named(name) => format!("{name}-enter-active"),
            Self::Classes { enter, .. } => enter.clone(),
        }
    }

    /// Class applied while a toast leaves.
    #[must_use]
    pub fn leave_class(&self) -> String {
        match self {
            Self::Named(name) => format!("{name}-leave-active"),
            Self::Classes { leave, .. } => leave.clone(),
        }
    }

    /// Class applied while siblings move into place.
    #[must_use]
    pub fn move_class(&self) -> String {
        match self {
            Self::Named(name) => format!("{name}-move"),
            Self::Classes { moving, .. } => moving.clone(),
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::Named(defaults::DEFAULT_TRANSITION.to_string())
    }
}

impl From<&str> for Transition {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTransition {
    Named(String),
    Classes {
        enter: String,
        leave: String,
        #[serde(rename = "move")]
        moving: String,
    },
    Other(IgnoredAny),
}

#[derive(Serialize)]
struct TransitionClasses<'a> {
    enter: &'a str,
    leave: &'a str,
    #[serde(rename = "move")]
    moving: &'a str,
}

impl Serialize for Transition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Named(name) => serializer.serialize_str(name),
            Self::Classes {
                enter,
                leave,
                moving,
            } => TransitionClasses {
                enter,
                leave,
                moving,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Transition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawTransition::deserialize(deserializer)? {
            RawTransition::Named(name) => Self::named(name),
            RawTransition::Classes {
                enter,
                leave,
                moving,
            } => Self::classes(enter, leave, moving),
            RawTransition::Other(_) => Self::default(),
        })
    }
}

// =============================================================================
// Icon
// =============================================================================

/// Icon shown at the leading edge of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Icon {
    /// Glyph chosen from the toast type.
    #[default]
    Auto,
    Hidden,
    /// Caller-supplied glyph.
    Custom(String),
}

impl Icon {
    /// Creates a custom icon; an empty glyph falls back to [`Icon::Auto`].
    #[must_use]
    pub fn custom(glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        if glyph.trim().is_empty() {
            Self::Auto
        } else {
            Self::Custom(glyph)
        }
    }

    /// Resolves the glyph to render for a toast of the given type.
    #[must_use]
    pub fn glyph(&self, toast_type: ToastType) -> Option<String> {
        match self {
            Self::Hidden => None,
            Self::Custom(glyph) => Some(glyph.clone()),
            Self::Auto => match toast_type {
                ToastType::Success => Some("\u{2714}".to_string()),
                ToastType::Info => Some("\u{2139}".to_string()),
                ToastType::Warning => Some("\u{26A0}".to_string()),
                ToastType::Error => Some("\u{2716}".to_string()),
                ToastType::Default => None,
            },
        }
    }
}

/// `false` hides the icon, `true` selects the type glyph.
impl From<bool> for Icon {
    fn from(show: bool) -> Self {
        if show {
            Self::Auto
        } else {
            Self::Hidden
        }
    }
}

// =============================================================================
// CloseButton
// =============================================================================

/// Close affordance shown at the trailing edge of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CloseButton {
    #[default]
    Default,
    Hidden,
    Custom(String),
}

impl CloseButton {
    /// Creates a custom close glyph; an empty glyph falls back to the default.
    #[must_use]
    pub fn custom(glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        if glyph.trim().is_empty() {
            Self::Default
        } else {
            Self::Custom(glyph)
        }
    }

    #[must_use]
    pub fn glyph(&self) -> Option<&str> {
        match self {
            Self::Default => Some("\u{00D7}"),
            Self::Hidden => None,
            Self::Custom(glyph) => Some(glyph),
        }
    }
}

impl From<bool> for CloseButton {
    fn from(show: bool) -> Self {
        if show {
            Self::Default
        } else {
            Self::Hidden
        }
    }
}

// =============================================================================
// Accessibility
// =============================================================================

/// Assistive technology metadata of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accessibility {
    pub toast_role: String,
    pub close_button_label: String,
}

impl Default for Accessibility {
    fn default() -> Self {
        Self {
            toast_role: defaults::DEFAULT_TOAST_ROLE.to_string(),
            close_button_label: defaults::DEFAULT_CLOSE_BUTTON_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn timeout_rejects_non_positive_values() {
        assert_eq!(Timeout::from_millis(0), Timeout::default());
        assert_eq!(Timeout::from_millis(-20), Timeout::default());
        assert_eq!(Timeout::from_millis(1200).as_millis(), Some(1200));
    }

    #[test]
    fn timeout_false_disables_countdown() {
        let timeout = Timeout::from(false);
        assert!(timeout.is_disabled());
        assert_eq!(timeout.as_duration(), None);
        assert_eq!(timeout.bumped(), Timeout::DISABLED);
    }

    #[test]
    fn bumped_timeout_adds_one_millisecond() {
        assert_eq!(Timeout::from(1000).bumped().as_millis(), Some(1001));
    }

    #[test]
    fn timeout_deserializes_numbers_flags_and_garbage() {
        #[derive(Deserialize)]
        struct Holder {
            timeout: Timeout,
        }
        let parse = |src: &str| toml::from_str::<Holder>(src).expect("valid toml").timeout;

        assert_eq!(parse("timeout = 2500").as_millis(), Some(2500));
        assert!(parse("timeout = false").is_disabled());
        assert_eq!(parse("timeout = -1"), Timeout::default());
        assert_eq!(parse("timeout = \"soon\""), Timeout::default());
        assert_eq!(parse("timeout = 1.5"), Timeout::default());
    }

    #[test]
    fn draggable_percent_rejects_invalid_values() {
        assert_abs_diff_eq!(DraggablePercent::new(f32::NAN).value(), 0.6);
        assert_abs_diff_eq!(DraggablePercent::new(f32::INFINITY).value(), 0.6);
        assert_abs_diff_eq!(DraggablePercent::new(0.0).value(), 0.6);
        assert_abs_diff_eq!(DraggablePercent::new(-1.0).value(), 0.6);
        assert_abs_diff_eq!(DraggablePercent::new(0.25).value(), 0.25);
    }

    #[test]
    fn removal_distance_scales_with_width() {
        assert_abs_diff_eq!(DraggablePercent::new(0.5).removal_distance(10.0), 5.0);
    }

    #[test]
    fn max_toasts_accepts_zero_but_not_negative() {
        assert_eq!(MaxToasts::from_count(0).value(), 0);
        assert_eq!(MaxToasts::from_count(-3), MaxToasts::default());
        assert_eq!(MaxToasts::default().value(), 20);
    }

    #[test]
    fn class_names_drop_blank_entries() {
        let classes = ClassNames::from(vec![" ".to_string(), "loud".to_string()]);
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["loud"]);
        assert!(ClassNames::from("").is_empty());
    }

    #[test]
    fn class_names_deserialize_from_string_or_list() {
        #[derive(Deserialize)]
        struct Holder {
            classes: ClassNames,
        }
        let one: Holder = toml::from_str("classes = \"a\"").expect("valid toml");
        let many: Holder = toml::from_str("classes = [\"a\", \"b\"]").expect("valid toml");
        let bad: Holder = toml::from_str("classes = 4").expect("valid toml");
        assert!(one.classes.contains("a"));
        assert_eq!(many.classes.iter().count(), 2);
        assert!(bad.classes.is_empty());
    }

    #[test]
    fn empty_transition_falls_back_to_default() {
        assert_eq!(Transition::named(""), Transition::default());
        assert_eq!(Transition::classes("in", "", "move"), Transition::default());
        assert_eq!(
            Transition::default().enter_class(),
            "iced-toast__bounce-enter-active"
        );
    }

    #[test]
    fn transition_triple_keeps_explicit_classes() {
        let transition = Transition::classes("fade-in", "fade-out", "slide");
        assert_eq!(transition.enter_class(), "fade-in");
        assert_eq!(transition.leave_class(), "fade-out");
        assert_eq!(transition.move_class(), "slide");
    }

    #[test]
    fn auto_icon_depends_on_type() {
        assert!(Icon::Auto.glyph(ToastType::Success).is_some());
        assert!(Icon::Auto.glyph(ToastType::Default).is_none());
        assert!(Icon::Hidden.glyph(ToastType::Error).is_none());
        assert_eq!(Icon::custom(""), Icon::Auto);
        assert_eq!(
            Icon::custom("*").glyph(ToastType::Default).as_deref(),
            Some("*")
        );
    }

    #[test]
    fn close_button_can_be_hidden_or_replaced() {
        assert!(CloseButton::from(false).glyph().is_none());
        assert_eq!(CloseButton::custom("x").glyph(), Some("x"));
        assert_eq!(CloseButton::custom(""), CloseButton::Default);
    }
}
