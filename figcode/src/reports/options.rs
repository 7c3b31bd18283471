//! Preference catalog report.

use figcode_core::FrameworkId;
use figcode_settings::{OptionKind, PreferenceOption};

use super::output::{Output, Report};

/// Catalog entries, optionally filtered to one framework.
#[derive(Debug)]
pub struct OptionsReport {
    pub framework: Option<FrameworkId>,
    pub options: Vec<&'static PreferenceOption>,
}

impl Report for OptionsReport {
    fn render(&self, out: &mut dyn Output) {
        match self.framework {
            Some(framework) => out.title(&format!("Options for {}", framework)),
            None => out.title("Options"),
        }
        if self.options.is_empty() {
            out.warning("no options apply");
            return;
        }

        for option in &self.options {
            out.newline();
            out.section(option.property_name);
            out.key_value_indented("label", option.label);
            out.key_value_indented("description", option.description);
            match &option.kind {
                OptionKind::Toggle { default } => {
                    out.key_value_indented("default", &default.to_string());
                }
                OptionKind::Select { choices } => {
                    let values: Vec<&str> = choices.iter().map(|c| c.value).collect();
                    out.key_value_indented("choices", &values.join(", "));
                }
            }
            let frameworks: Vec<&str> = option
                .included_languages
                .iter()
                .map(|f| f.as_str())
                .collect();
            out.key_value_indented("frameworks", &frameworks.join(", "));
        }
    }
}
