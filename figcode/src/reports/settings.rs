//! Settings report.

use std::path::PathBuf;

use figcode_settings::{FRAMEWORK_KEY, PluginSettings};

use super::output::{Output, Report};

/// The merged settings and where they were read from.
#[derive(Debug)]
pub struct SettingsReport {
    pub storage_path: PathBuf,
    pub settings: PluginSettings,
}

impl Report for SettingsReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Settings");
        out.key_value("storage", &self.storage_path.display().to_string());
        out.newline();
        out.key_value_indented(FRAMEWORK_KEY, self.settings.framework().as_str());
        for key in self.settings.keys().filter(|k| *k != FRAMEWORK_KEY) {
            if let Some(value) = self.settings.get(key) {
                out.key_value_indented(key, &value.to_string());
            }
        }
    }
}
