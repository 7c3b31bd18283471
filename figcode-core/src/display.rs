//! Display language tags for generated code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse language tag attached to generated code.
///
/// This only drives syntax highlighting in the host surface and is
/// independent of [`FrameworkId`](crate::FrameworkId): Tailwind output is
/// tagged as HTML, and both Flutter and SwiftUI are tagged as Swift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayLanguage {
    Html,
    Swift,
    Json,
}

impl DisplayLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayLanguage::Html => "HTML",
            DisplayLanguage::Swift => "SWIFT",
            DisplayLanguage::Json => "JSON",
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
