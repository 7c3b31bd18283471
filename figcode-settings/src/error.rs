use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A settings field that was rejected.
///
/// Produced when decoding persisted settings and when applying a single
/// update from the UI surface. Rejections never abort a session; the
/// offending field keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SettingError {
    #[error("unknown setting '{key}'")]
    #[diagnostic(
        code(figcode::unknown_setting),
        help("run 'figcode settings options' to list known settings")
    )]
    UnknownKey { key: String },

    #[error("setting '{key}' expects a {expected}, got a {found}")]
    #[diagnostic(code(figcode::setting_type))]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("'{value}' is not a valid choice for '{key}'")]
    #[diagnostic(code(figcode::invalid_choice), help("valid choices are: {allowed}"))]
    InvalidChoice {
        key: String,
        value: String,
        allowed: String,
    },

    #[error("unknown framework '{value}'")]
    #[diagnostic(
        code(figcode::unknown_framework),
        help("valid frameworks are: HTML, Tailwind, Flutter, SwiftUI")
    )]
    UnknownFramework { value: String },

    #[error("persisted settings must be an object, got a {found}")]
    #[diagnostic(code(figcode::settings_shape))]
    NotAnObject { found: &'static str },
}

impl SettingError {
    /// The key this rejection is about, if it concerns a single field.
    pub fn key(&self) -> Option<&str> {
        match self {
            SettingError::UnknownKey { key }
            | SettingError::TypeMismatch { key, .. }
            | SettingError::InvalidChoice { key, .. } => Some(key),
            SettingError::UnknownFramework { .. } => Some(crate::FRAMEWORK_KEY),
            SettingError::NotAnObject { .. } => None,
        }
    }
}

/// Failure of the host key-value store.
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("failed to access '{path}'")]
    #[diagnostic(code(figcode::store_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' does not contain valid JSON")]
    #[diagnostic(
        code(figcode::store_json),
        help("delete the file to reset all stored settings")
    )]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
