use clap::{Args, Subcommand};
use eyre::Result;
use figcode::Config;
use figcode_core::FrameworkId;
use figcode_settings::{SettingValue, SettingsStore, catalog::CATALOG, list_options};

use super::UnwrapOrExit;
use crate::reports::{OptionsReport, Report, SettingsReport, TerminalOutput};

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    action: SettingsAction,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the stored settings merged onto the defaults
    Show {
        /// Print the settings object as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one setting
    Set {
        /// Setting key, e.g. framework or jsx
        key: String,
        /// New value; true and false are booleans
        value: String,
    },

    /// List the preference catalog
    Options {
        /// Only options that apply to this framework
        #[arg(short, long)]
        framework: Option<FrameworkId>,

        /// Print descriptors in the host preferences panel format
        #[arg(long)]
        json: bool,
    },
}

impl SettingsCommand {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match &self.action {
            SettingsAction::Show { json } => {
                let store = SettingsStore::load(config.open_store()).await;
                let settings = store.current().clone();
                store.close().await;

                if *json {
                    println!("{}", serde_json::to_string_pretty(&settings)?);
                } else {
                    SettingsReport {
                        storage_path: config.storage.path.clone(),
                        settings,
                    }
                    .render(&mut TerminalOutput::new());
                }
            }
            SettingsAction::Set { key, value } => {
                let mut store = SettingsStore::load(config.open_store()).await;
                let value = SettingValue::parse_arg(value);
                store.update_setting(key, value.clone()).unwrap_or_exit();
                store.close().await;
                println!("{} = {}", key, value);
            }
            SettingsAction::Options { framework, json } => {
                let options = match framework {
                    Some(framework) => list_options(*framework),
                    None => CATALOG.iter().collect(),
                };

                if *json {
                    println!("{}", serde_json::to_string_pretty(&options)?);
                } else {
                    OptionsReport {
                        framework: *framework,
                        options,
                    }
                    .render(&mut TerminalOutput::new());
                }
            }
        }
        Ok(())
    }
}
