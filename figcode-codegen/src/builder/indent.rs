//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2 or 4).
    Spaces(u8),
}

impl Indent {
    /// 2-space indentation (HTML, JSX).
    pub const MARKUP: Self = Self::Spaces(2);

    /// 2-space indentation (Dart).
    pub const DART: Self = Self::Spaces(2);

    /// 4-space indentation (Swift).
    pub const SWIFT: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::MARKUP
    }
}
