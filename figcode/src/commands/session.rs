use clap::Args;
use eyre::{Result, WrapErr};
use figcode::{Config, HostEvent, JsonLines, OutboundMessage, Session, UiChannel, default_dispatcher};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Args)]
pub struct SessionCommand {}

impl SessionCommand {
    pub async fn run(&self, config: &Config) -> Result<()> {
        let mut session = Session::new(default_dispatcher(), JsonLines::new(std::io::stdout()));
        session.start(config.open_store()).await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.wrap_err("failed to read stdin")? {
            if line.trim().is_empty() {
                continue;
            }
            let event = match serde_json::from_str::<HostEvent>(&line) {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "ignoring malformed host event");
                    session.ui_mut().post(OutboundMessage::Error {
                        data: format!("malformed host event: {}", e),
                    });
                    continue;
                }
            };

            // Export answers bypass the UI channel and go straight to stdout.
            if let Some(dispatch) = session.handle(event) {
                println!("{}", serde_json::to_string(&dispatch.results)?);
            }
        }

        info!("host closed the session");
        session.shutdown().await;
        Ok(())
    }
}
