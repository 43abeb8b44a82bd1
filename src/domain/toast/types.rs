// SPDX-License-Identifier: MPL-2.0
//! Identifiers and enumerations shared by every toast.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Key of a toast in the active map.
///
/// Automatically assigned ids are numeric; callers may supply their own
/// numeric or textual id to address the toast later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToastId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastId::Number(n) => write!(f, "{n}"),
            ToastId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ToastId {
    fn from(value: u64) -> Self {
        ToastId::Number(value)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        ToastId::Text(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        ToastId::Text(value)
    }
}

impl From<&ToastId> for ToastId {
    fn from(value: &ToastId) -> Self {
        value.clone()
    }
}

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
    #[default]
    Default,
}

impl ToastType {
    pub const ALL: [ToastType; 5] = [
        ToastType::Success,
        ToastType::Error,
        ToastType::Warning,
        ToastType::Info,
        ToastType::Default,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Warning => "warning",
            ToastType::Info => "info",
            ToastType::Default => "default",
        }
    }

    /// Parses a type name, returning `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name.trim())
    }

    /// Parses a type name, falling back to [`ToastType::Default`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl fmt::Display for ToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ToastType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A name, or a value of the wrong shape that falls back to the default.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawName {
    Name(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for ToastType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawName::deserialize(deserializer)? {
            RawName::Name(name) => Self::parse(&name),
            RawName::Other(_) => Self::default(),
        })
    }
}

/// One of the six screen anchors toasts are stacked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Parses a position name, falling back to [`Position::TopRight`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == name.trim())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawName::deserialize(deserializer)? {
            RawName::Name(name) => Self::parse(&name),
            RawName::Other(_) => Self::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_position_falls_back_to_top_right() {
        assert_eq!(Position::parse("middle"), Position::TopRight);
        assert_eq!(Position::parse(""), Position::TopRight);
        assert_eq!(Position::parse("bottom-left"), Position::BottomLeft);
    }

    #[test]
    fn unknown_type_falls_back_to_default() {
        assert_eq!(ToastType::parse("fatal"), ToastType::Default);
        assert_eq!(ToastType::parse("warning"), ToastType::Warning);
        assert_eq!(ToastType::from_name("fatal"), None);
    }

    #[test]
    fn top_positions_are_detected() {
        let top: Vec<_> = Position::ALL.into_iter().filter(|p| p.is_top()).collect();
        assert_eq!(top.len(), 3);
        assert!(!Position::BottomCenter.is_top());
    }

    #[test]
    fn ids_display_their_raw_value() {
        assert_eq!(ToastId::from(7).to_string(), "7");
        assert_eq!(ToastId::from("upload").to_string(), "upload");
        assert_ne!(ToastId::from(7), ToastId::from("7"));
    }

    #[test]
    fn position_deserializes_leniently() {
        #[derive(Deserialize)]
        struct Holder {
            position: Position,
        }
        let holder: Holder = toml::from_str("position = \"nowhere\"").expect("valid toml");
        assert_eq!(holder.position, Position::TopRight);

        let holder: Holder = toml::from_str("position = 5").expect("valid toml");
        assert_eq!(holder.position, Position::TopRight);
    }

    #[test]
    fn toast_type_of_wrong_shape_is_default() {
        #[derive(Deserialize)]
        struct Holder {
            kind: ToastType,
        }
        let holder: Holder = toml::from_str("kind = [\"error\"]").expect("valid toml");
        assert_eq!(holder.kind, ToastType::Default);

        let holder: Holder = toml::from_str("kind = \"error\"").expect("valid toml");
        assert_eq!(holder.kind, ToastType::Error);
    }
}
