//! Setting values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value of a single setting.
///
/// Toggles hold booleans and selects hold one of their option values. On
/// the wire this is a bare JSON boolean or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Choice(String),
}

impl SettingValue {
    /// Runtime type name, as the host would report it.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "boolean",
            SettingValue::Choice(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            SettingValue::Choice(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Choice(s) => Some(s),
            SettingValue::Bool(_) => None,
        }
    }

    /// Read a value out of arbitrary JSON. Anything but a boolean or a
    /// string yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(SettingValue::Bool(*b)),
            serde_json::Value::String(s) => Some(SettingValue::Choice(s.clone())),
            _ => None,
        }
    }

    /// Parse a command-line argument: `true`/`false` become booleans,
    /// everything else is a string.
    pub fn parse_arg(arg: &str) -> Self {
        match arg {
            "true" => SettingValue::Bool(true),
            "false" => SettingValue::Bool(false),
            other => SettingValue::Choice(other.to_string()),
        }
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        match self {
            SettingValue::Bool(b) => serde_json::Value::Bool(*b),
            SettingValue::Choice(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Choice(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Choice(value.to_string())
    }
}

/// Runtime type name of a JSON value.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SettingValue::Bool(false).to_string(), "false");
        assert_eq!(SettingValue::from("preview").to_string(), "preview");
    }

    #[test]
    fn test_deserialize_untagged() {
        let b: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(b, SettingValue::Bool(true));
        let s: SettingValue = serde_json::from_str(r#""snippet""#).unwrap();
        assert_eq!(s, SettingValue::Choice("snippet".into()));
        assert!(serde_json::from_str::<SettingValue>("3").is_err());
    }

    #[test]
    fn test_parse_arg() {
        assert_eq!(SettingValue::parse_arg("true"), SettingValue::Bool(true));
        assert_eq!(SettingValue::parse_arg("false"), SettingValue::Bool(false));
        assert_eq!(
            SettingValue::parse_arg("Tailwind"),
            SettingValue::Choice("Tailwind".into())
        );
    }

    #[test]
    fn test_from_json_rejects_other_types() {
        assert!(SettingValue::from_json(&serde_json::json!(1)).is_none());
        assert!(SettingValue::from_json(&serde_json::json!(null)).is_none());
        assert_eq!(
            SettingValue::from_json(&serde_json::json!(false)),
            Some(SettingValue::Bool(false))
        );
    }
}
