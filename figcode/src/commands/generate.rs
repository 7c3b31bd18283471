use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use figcode::{Config, NodeInput, default_dispatcher, export_once};
use tokio::io::AsyncReadExt;

#[derive(Args)]
pub struct GenerateCommand {
    /// Export language: html, tailwind, flutter or swiftui (anything else
    /// generates every framework)
    #[arg(short, long)]
    pub language: String,

    /// Host node JSON (a node or an array of nodes); reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Parent the nodes are placed in
    #[arg(long)]
    pub parent_id: Option<String>,
}

impl GenerateCommand {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let json = match &self.input {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .wrap_err_with(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .wrap_err("failed to read stdin")?;
                buf
            }
        };
        let nodes = serde_json::from_str::<NodeInput>(&json)
            .wrap_err("input is not a host node or an array of host nodes")?
            .into_nodes();

        let dispatch = export_once(
            config.open_store(),
            &default_dispatcher(),
            &self.language,
            &nodes,
            self.parent_id.as_deref(),
        )
        .await;

        for failure in &dispatch.failures {
            eprintln!("error: {}", failure);
        }
        println!("{}", serde_json::to_string_pretty(&dispatch.results)?);
        Ok(())
    }
}
