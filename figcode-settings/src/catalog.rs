//! The preference catalog.
//!
//! Every configurable option is declared here once, together with the
//! frameworks it applies to and its default. The catalog is immutable; the
//! settings default template is derived from it.

use figcode_core::FrameworkId;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{SettingError, SettingValue};

const ALL: &[FrameworkId] = &FrameworkId::ALL;
const MARKUP: &[FrameworkId] = &[FrameworkId::Html, FrameworkId::Tailwind];

/// One choice of a select option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectChoice {
    pub label: &'static str,
    pub value: &'static str,
}

/// How an option is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A boolean toggle (`individual_select` on the host surface).
    Toggle { default: bool },
    /// An enumerated choice; the first choice is the default.
    Select { choices: &'static [SelectChoice] },
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceOption {
    pub property_name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub included_languages: &'static [FrameworkId],
}

impl PreferenceOption {
    pub fn applies_to(&self, framework: FrameworkId) -> bool {
        self.included_languages.contains(&framework)
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, OptionKind::Toggle { .. })
    }

    /// The value this option takes in the default template.
    pub fn default_value(&self) -> SettingValue {
        match self.kind {
            OptionKind::Toggle { default } => SettingValue::Bool(default),
            OptionKind::Select { choices } => {
                SettingValue::Choice(choices.first().map_or("", |c| c.value).to_string())
            }
        }
    }

    /// Check that `value` has the right type and, for selects, names one of
    /// the choices.
    pub fn check(&self, value: &SettingValue) -> Result<(), SettingError> {
        match (self.kind, value) {
            (OptionKind::Toggle { .. }, SettingValue::Bool(_)) => Ok(()),
            (OptionKind::Select { choices }, SettingValue::Choice(v)) => {
                if choices.iter().any(|c| c.value == v.as_str()) {
                    Ok(())
                } else {
                    Err(SettingError::InvalidChoice {
                        key: self.property_name.to_string(),
                        value: v.clone(),
                        allowed: choices
                            .iter()
                            .map(|c| c.value)
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
                }
            }
            _ => Err(SettingError::TypeMismatch {
                key: self.property_name.to_string(),
                expected: self.default_value().type_name(),
                found: value.type_name(),
            }),
        }
    }
}

/// Serializes in the host preferences panel format.
impl Serialize for PreferenceOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match self.kind {
            OptionKind::Toggle { default } => {
                map.serialize_entry("itemType", "individual_select")?;
                map.serialize_entry("propertyName", self.property_name)?;
                map.serialize_entry("label", self.label)?;
                map.serialize_entry("description", self.description)?;
                map.serialize_entry("isDefault", &default)?;
            }
            OptionKind::Select { choices } => {
                map.serialize_entry("itemType", "select")?;
                map.serialize_entry("propertyName", self.property_name)?;
                map.serialize_entry("label", self.label)?;
                map.serialize_entry("description", self.description)?;
                map.serialize_entry("options", choices)?;
            }
        }
        map.serialize_entry("includedLanguages", self.included_languages)?;
        map.end()
    }
}

const fn toggle(
    property_name: &'static str,
    label: &'static str,
    description: &'static str,
    default: bool,
    included_languages: &'static [FrameworkId],
) -> PreferenceOption {
    PreferenceOption {
        property_name,
        label,
        description,
        kind: OptionKind::Toggle { default },
        included_languages,
    }
}

/// Every option, in display order.
pub static CATALOG: &[PreferenceOption] = &[
    toggle(
        "jsx",
        "React (JSX)",
        "Render \"class\" attributes as \"className\"",
        false,
        MARKUP,
    ),
    toggle(
        "optimizeLayout",
        "Optimize layout",
        "Attempt to auto-layout suitable element groups",
        true,
        ALL,
    ),
    toggle(
        "showLayerNames",
        "Layer names",
        "Include layer names in classes",
        false,
        MARKUP,
    ),
    toggle(
        "inlineStyle",
        "Inline styles",
        "Write styles as inline style attributes instead of a stylesheet",
        true,
        &[FrameworkId::Html],
    ),
    toggle(
        "roundTailwindValues",
        "Round values",
        "Round pixel values to nearest Tailwind sizes (within a 15% range)",
        false,
        &[FrameworkId::Tailwind],
    ),
    toggle(
        "roundTailwindColors",
        "Round colors",
        "Round color values to nearest Tailwind colors",
        false,
        &[FrameworkId::Tailwind],
    ),
    toggle(
        "customTailwindColors",
        "Color variables",
        "Use color variable names as custom color names",
        false,
        MARKUP,
    ),
    toggle(
        "embedImages",
        "Embed Images",
        "Convert images to Base64 and embed them in the code.",
        false,
        &[FrameworkId::Html],
    ),
    toggle(
        "embedVectors",
        "Embed Vectors",
        "Convert vectors in the code.",
        false,
        MARKUP,
    ),
    PreferenceOption {
        property_name: "flutterGenerationMode",
        label: "Mode",
        description: "How much scaffolding surrounds the widget tree",
        kind: OptionKind::Select {
            choices: &[
                SelectChoice {
                    label: "Full App",
                    value: "fullApp",
                },
                SelectChoice {
                    label: "Widget",
                    value: "stateless",
                },
                SelectChoice {
                    label: "Snippet",
                    value: "snippet",
                },
            ],
        },
        included_languages: &[FrameworkId::Flutter],
    },
    PreferenceOption {
        property_name: "swiftUIGenerationMode",
        label: "Mode",
        description: "How much scaffolding surrounds the view hierarchy",
        kind: OptionKind::Select {
            choices: &[
                SelectChoice {
                    label: "Preview",
                    value: "preview",
                },
                SelectChoice {
                    label: "Struct",
                    value: "struct",
                },
                SelectChoice {
                    label: "Snippet",
                    value: "snippet",
                },
            ],
        },
        included_languages: &[FrameworkId::SwiftUi],
    },
];

/// Options that apply to `framework`, in declaration order.
pub fn list_options(framework: FrameworkId) -> Vec<&'static PreferenceOption> {
    CATALOG.iter().filter(|o| o.applies_to(framework)).collect()
}

/// Boolean toggles only.
pub fn toggles() -> impl Iterator<Item = &'static PreferenceOption> {
    CATALOG.iter().filter(|o| o.is_toggle())
}

/// Enumerated selects only.
pub fn selects() -> impl Iterator<Item = &'static PreferenceOption> {
    CATALOG.iter().filter(|o| !o.is_toggle())
}

/// Look an option up by property name.
pub fn find(property_name: &str) -> Option<&'static PreferenceOption> {
    CATALOG.iter().find(|o| o.property_name == property_name)
}
