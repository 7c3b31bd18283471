//! Generation targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported code generation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FrameworkId {
    /// Plain markup with CSS
    #[serde(rename = "HTML")]
    Html,
    /// Markup with Tailwind utility classes
    Tailwind,
    /// Flutter widget tree
    Flutter,
    /// SwiftUI view hierarchy
    #[serde(rename = "SwiftUI")]
    SwiftUi,
}

impl FrameworkId {
    /// Every target, in catalog order.
    pub const ALL: [FrameworkId; 4] = [
        FrameworkId::Html,
        FrameworkId::Tailwind,
        FrameworkId::Flutter,
        FrameworkId::SwiftUi,
    ];

    /// Returns the framework identifier as it appears in persisted settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkId::Html => "HTML",
            FrameworkId::Tailwind => "Tailwind",
            FrameworkId::Flutter => "Flutter",
            FrameworkId::SwiftUi => "SwiftUI",
        }
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FrameworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(FrameworkId::Html),
            "tailwind" => Ok(FrameworkId::Tailwind),
            "flutter" => Ok(FrameworkId::Flutter),
            "swiftui" => Ok(FrameworkId::SwiftUi),
            _ => Err(format!(
                "unknown framework '{}', expected one of: HTML, Tailwind, Flutter, SwiftUI",
                s
            )),
        }
    }
}
