//! The plugin settings object.

use std::str::FromStr;

use figcode_core::FrameworkId;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};

use crate::{
    SettingError, SettingValue,
    catalog::{self, CATALOG},
    value::json_type_name,
};

/// Key of the active generation target in the settings object.
pub const FRAMEWORK_KEY: &str = "framework";

/// The live plugin configuration.
///
/// Always holds exactly the keys of the default template (the framework
/// selector plus one entry per catalog option), each with a value of the
/// template's type. Every mutation goes through [`PluginSettings::update`],
/// which preserves this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSettings {
    framework: FrameworkId,
    values: IndexMap<&'static str, SettingValue>,
}

/// Result of decoding an untrusted settings blob.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Defaults overlaid with every accepted field.
    pub settings: PluginSettings,
    /// Fields that were dropped.
    pub rejected: Vec<SettingError>,
}

impl Decoded {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Strict view: the settings only if nothing was rejected.
    pub fn into_result(self) -> Result<PluginSettings, Vec<SettingError>> {
        if self.rejected.is_empty() {
            Ok(self.settings)
        } else {
            Err(self.rejected)
        }
    }
}

impl PluginSettings {
    /// The default template.
    pub fn defaults() -> Self {
        Self {
            framework: FrameworkId::Html,
            values: CATALOG
                .iter()
                .map(|o| (o.property_name, o.default_value()))
                .collect(),
        }
    }

    /// Overlay a persisted blob onto the defaults.
    ///
    /// A field is adopted only if its key is part of the template and its
    /// value has the template's type (and, for selects, is one of the
    /// choices). `null` is treated as an empty object.
    pub fn decode(blob: &serde_json::Value) -> Decoded {
        let mut settings = Self::defaults();
        let mut rejected = Vec::new();

        let fields = match blob {
            serde_json::Value::Object(fields) => fields,
            serde_json::Value::Null => {
                return Decoded { settings, rejected };
            }
            other => {
                rejected.push(SettingError::NotAnObject {
                    found: json_type_name(other),
                });
                return Decoded { settings, rejected };
            }
        };

        for (key, raw) in fields {
            let result = match SettingValue::from_json(raw) {
                Some(value) => settings.update(key, value),
                None if settings.contains_key(key) => Err(SettingError::TypeMismatch {
                    key: key.clone(),
                    expected: settings.expected_type(key),
                    found: json_type_name(raw),
                }),
                None => Err(SettingError::UnknownKey { key: key.clone() }),
            };
            if let Err(e) = result {
                rejected.push(e);
            }
        }

        Decoded { settings, rejected }
    }

    /// Apply one field. On error the settings are left untouched.
    pub fn update(&mut self, key: &str, value: SettingValue) -> Result<(), SettingError> {
        if key == FRAMEWORK_KEY {
            let SettingValue::Choice(name) = &value else {
                return Err(SettingError::TypeMismatch {
                    key: key.to_string(),
                    expected: "string",
                    found: value.type_name(),
                });
            };
            self.framework = FrameworkId::from_str(name)
                .ok()
                .filter(|f| f.as_str() == name.as_str())
                .ok_or_else(|| SettingError::UnknownFramework {
                    value: name.clone(),
                })?;
            return Ok(());
        }

        let option = catalog::find(key).ok_or_else(|| SettingError::UnknownKey {
            key: key.to_string(),
        })?;
        option.check(&value)?;
        self.values.insert(option.property_name, value);
        Ok(())
    }

    pub fn framework(&self) -> FrameworkId {
        self.framework
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// Value of a toggle; `None` for unknown keys and selects.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(SettingValue::as_bool)
    }

    /// Value of a select; `None` for unknown keys and toggles.
    pub fn choice(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        key == FRAMEWORK_KEY || self.values.contains_key(key)
    }

    /// Every key of the template, framework first.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(FRAMEWORK_KEY).chain(self.values.keys().copied())
    }

    /// The subset of values whose option applies to `framework`.
    pub fn for_framework(&self, framework: FrameworkId) -> FrameworkSettings {
        FrameworkSettings {
            framework,
            values: catalog::list_options(framework)
                .into_iter()
                .filter_map(|o| {
                    self.values
                        .get(o.property_name)
                        .map(|v| (o.property_name, v.clone()))
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            FRAMEWORK_KEY.to_string(),
            serde_json::Value::String(self.framework.as_str().to_string()),
        );
        for (key, value) in &self.values {
            map.insert(key.to_string(), value.to_json());
        }
        serde_json::Value::Object(map)
    }

    fn expected_type(&self, key: &str) -> &'static str {
        if key == FRAMEWORK_KEY {
            return "string";
        }
        self.values.get(key).map_or("value", SettingValue::type_name)
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Serialize for PluginSettings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry(FRAMEWORK_KEY, &self.framework)?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Lenient: rejected fields fall back to their defaults.
impl<'de> Deserialize<'de> for PluginSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let blob = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::decode(&blob).settings)
    }
}

/// The settings a single generator is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkSettings {
    framework: FrameworkId,
    values: IndexMap<&'static str, SettingValue>,
}

impl FrameworkSettings {
    pub fn framework(&self) -> FrameworkId {
        self.framework
    }

    /// Toggle value; `false` when the toggle does not apply to this
    /// framework.
    pub fn flag(&self, key: &str) -> bool {
        self.values
            .get(key)
            .and_then(SettingValue::as_bool)
            .unwrap_or(false)
    }

    pub fn choice(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(SettingValue::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults_match_catalog() {
        let settings = PluginSettings::defaults();
        assert_eq!(settings.framework(), FrameworkId::Html);
        assert_eq!(settings.keys().count(), CATALOG.len() + 1);
        assert_eq!(settings.flag("optimizeLayout"), Some(true));
        assert_eq!(settings.flag("jsx"), Some(false));
        assert_eq!(settings.choice("flutterGenerationMode"), Some("fullApp"));
        assert_eq!(settings.choice("swiftUIGenerationMode"), Some("preview"));
    }

    #[test]
    fn test_decode_adopts_matching_fields() {
        let decoded = PluginSettings::decode(&json!({
            "framework": "Flutter",
            "jsx": true,
            "flutterGenerationMode": "snippet"
        }));
        assert!(decoded.is_clean());
        assert_eq!(decoded.settings.framework(), FrameworkId::Flutter);
        assert_eq!(decoded.settings.flag("jsx"), Some(true));
        assert_eq!(decoded.settings.choice("flutterGenerationMode"), Some("snippet"));
    }

    #[test]
    fn test_decode_itemizes_rejections() {
        let decoded = PluginSettings::decode(&json!({
            "framework": "React",
            "jsx": "yes",
            "optimize": true,
            "layerName": 1,
            "swiftUIGenerationMode": "fullApp",
            "embedVectors": true
        }));

        assert_eq!(decoded.settings.framework(), FrameworkId::Html);
        assert_eq!(decoded.settings.flag("jsx"), Some(false));
        assert_eq!(decoded.settings.flag("embedVectors"), Some(true));
        assert_eq!(decoded.settings.choice("swiftUIGenerationMode"), Some("preview"));

        let keys: Vec<_> = decoded.rejected.iter().filter_map(|e| e.key()).collect();
        assert_eq!(keys.len(), 5);
        for key in ["framework", "jsx", "optimize", "layerName", "swiftUIGenerationMode"] {
            assert!(keys.contains(&key), "missing rejection for {key}");
        }
    }

    #[test]
    fn test_decode_non_object() {
        let decoded = PluginSettings::decode(&json!([1, 2, 3]));
        assert_eq!(decoded.settings, PluginSettings::defaults());
        assert_eq!(
            decoded.rejected,
            vec![SettingError::NotAnObject { found: "array" }]
        );
    }

    #[test]
    fn test_decode_null_is_empty() {
        let decoded = PluginSettings::decode(&serde_json::Value::Null);
        assert!(decoded.is_clean());
        assert_eq!(decoded.into_result().unwrap(), PluginSettings::defaults());
    }

    #[test]
    fn test_framework_must_match_exactly() {
        let mut settings = PluginSettings::defaults();
        assert!(settings.update("framework", "tailwind".into()).is_err());
        assert!(settings.update("framework", "Tailwind".into()).is_ok());
        assert_eq!(settings.framework(), FrameworkId::Tailwind);
        assert!(settings.update("framework", true.into()).is_err());
        assert_eq!(settings.framework(), FrameworkId::Tailwind);
    }

    #[test]
    fn test_serialize_flat_object() {
        let value = serde_json::to_value(PluginSettings::defaults()).unwrap();
        assert_eq!(value, PluginSettings::defaults().to_json());
        assert_eq!(value["framework"], "HTML");
        assert_eq!(value["optimizeLayout"], true);
        assert_eq!(value.as_object().unwrap().len(), CATALOG.len() + 1);
    }

    #[test]
    fn test_for_framework_subset() {
        let settings = PluginSettings::defaults();
        let flutter = settings.for_framework(FrameworkId::Flutter);
        assert_eq!(flutter.len(), 2);
        assert!(flutter.contains("optimizeLayout"));
        assert!(!flutter.contains("jsx"));
        assert!(!flutter.flag("jsx"));
        assert_eq!(flutter.choice("flutterGenerationMode"), Some("fullApp"));
    }
}
