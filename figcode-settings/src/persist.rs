//! Loading and persisting the session's settings.

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

use crate::{KeyValueStore, PluginSettings, SettingError, SettingValue};

/// Key of the settings entry in host storage.
pub const STORAGE_KEY: &str = "userPluginSettings";

/// Owner of the session's settings.
///
/// The in-memory copy is authoritative: updates apply to it synchronously,
/// and persistence follows asynchronously through a single writer task, so
/// writes reach the store in the order the updates were made. Persistence
/// failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct SettingsStore {
    settings: PluginSettings,
    writer: mpsc::UnboundedSender<serde_json::Value>,
    task: JoinHandle<()>,
}

impl SettingsStore {
    /// Read persisted settings and merge them onto the defaults.
    ///
    /// A missing, unreadable or malformed blob yields the defaults. Must be
    /// called from within a Tokio runtime.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let blob = match kv.get(STORAGE_KEY).await {
            Ok(blob) => blob.unwrap_or(serde_json::Value::Null),
            Err(e) => {
                warn!(error = %e, "failed to read persisted settings, using defaults");
                serde_json::Value::Null
            }
        };

        let decoded = PluginSettings::decode(&blob);
        for rejection in &decoded.rejected {
            debug!(field = rejection.key(), reason = %rejection, "dropped persisted setting");
        }

        let (writer, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(write_loop(kv, rx));

        Self {
            settings: decoded.settings,
            writer,
            task,
        }
    }

    /// The live settings.
    pub fn current(&self) -> &PluginSettings {
        &self.settings
    }

    /// Apply one field and schedule persistence.
    ///
    /// Unknown keys and values of the wrong type are rejected and leave the
    /// settings untouched; nothing is persisted in that case.
    pub fn update_setting(
        &mut self,
        key: &str,
        value: SettingValue,
    ) -> Result<&PluginSettings, SettingError> {
        self.settings.update(key, value)?;
        if self.writer.send(self.settings.to_json()).is_err() {
            warn!("settings writer has stopped, change will not be persisted");
        }
        Ok(&self.settings)
    }

    /// Wait for every scheduled write to finish.
    pub async fn close(self) {
        drop(self.writer);
        if let Err(e) = self.task.await {
            warn!(error = %e, "settings writer failed");
        }
    }
}

async fn write_loop(kv: Arc<dyn KeyValueStore>, mut rx: mpsc::UnboundedReceiver<serde_json::Value>) {
    while let Some(blob) = rx.recv().await {
        if let Err(e) = kv.set(STORAGE_KEY, blob).await {
            warn!(error = %e, "failed to persist settings");
        }
    }
}
