mod commands;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse().run().await
}
