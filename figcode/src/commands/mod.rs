mod completions;
mod generate;
mod session;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use figcode::{Config, logging};
use figcode_settings::SettingError;
use generate::GenerateCommand;
use session::SessionCommand;
use settings::SettingsCommand;

/// Extension trait for exiting on setting errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, SettingError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "figcode")]
#[command(version)]
#[command(about = "Turn design selections into HTML, Tailwind, Flutter and SwiftUI code")]
pub(crate) struct Cli {
    /// Path to figcode.toml
    #[arg(long, global = true, default_value = figcode::config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load(&self.config)?;
        logging::init(&config.log.level);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(&config).await,
            Commands::Settings(cmd) => cmd.run(&config).await,
            Commands::Session(cmd) => cmd.run(&config).await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for a host node, as the export surface does
    Generate(GenerateCommand),

    /// Inspect and change stored settings
    Settings(SettingsCommand),

    /// Run an interactive session over JSON lines on stdin/stdout
    Session(SessionCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
