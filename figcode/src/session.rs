//! The event bridge between host, settings, generators and UI.

use std::sync::Arc;

use figcode_codegen::{Dispatch, Dispatcher, GenerationContext};
use figcode_core::FrameworkId;
use figcode_ir::{ConversionAdapter, HostConverter, HostNode, Selection};
use figcode_settings::{KeyValueStore, PluginSettings, SettingsStore};
use tracing::{debug, info, warn};

use crate::{HostEvent, OutboundMessage, UiChannel, UiMessage};

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Settings have not been loaded yet.
    Uninitialized,
    /// Settings are loaded; the first generation pass has not run.
    SettingsLoaded,
    /// Reacting to events.
    Running,
}

/// One plugin session.
///
/// Owns the settings and reacts to host events one at a time; each event is
/// handled to completion before the next one, so generation passes never
/// overlap and always observe the settings as of their own trigger.
pub struct Session<U: UiChannel> {
    state: SessionState,
    store: Option<SettingsStore>,
    dispatcher: Dispatcher,
    adapter: Box<dyn ConversionAdapter>,
    selection: Selection,
    ui: U,
}

impl<U: UiChannel> Session<U> {
    /// Create an uninitialized session using the [`HostConverter`].
    pub fn new(dispatcher: Dispatcher, ui: U) -> Self {
        Self {
            state: SessionState::Uninitialized,
            store: None,
            dispatcher,
            adapter: Box::new(HostConverter),
            selection: Selection::default(),
            ui,
        }
    }

    /// Replace the conversion adapter.
    pub fn with_adapter(mut self, adapter: impl ConversionAdapter + 'static) -> Self {
        self.adapter = Box::new(adapter);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The live settings, once loaded.
    pub fn settings(&self) -> Option<&PluginSettings> {
        self.store.as_ref().map(SettingsStore::current)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Load settings, announce them to the UI and run the first pass.
    pub async fn start(&mut self, kv: Arc<dyn KeyValueStore>) {
        if self.state != SessionState::Uninitialized {
            warn!(state = ?self.state, "session already started");
            return;
        }

        let store = SettingsStore::load(kv).await;
        let settings = store.current().clone();
        self.store = Some(store);
        self.state = SessionState::SettingsLoaded;
        info!(framework = %settings.framework(), "settings loaded");

        self.ui
            .post(OutboundMessage::PluginSettingChanged { data: settings });
        self.run_pass();
        self.state = SessionState::Running;
    }

    /// Handle any host event.
    ///
    /// Export requests are answered with their dispatch; every other event
    /// reports through the UI channel and yields `None`.
    pub fn handle(&mut self, event: HostEvent) -> Option<Dispatch> {
        match event {
            HostEvent::SelectionChange {
                selection,
                parent_id,
            } => {
                self.on_selection_change(Selection::new(selection, parent_id));
                None
            }
            HostEvent::Ui { message } => {
                self.on_ui_message(message);
                None
            }
            HostEvent::Generate { language, node } => {
                Some(self.export(&language, &node.into_nodes()))
            }
        }
    }

    /// Remember the new selection and regenerate.
    pub fn on_selection_change(&mut self, selection: Selection) {
        self.selection = selection;
        if self.state == SessionState::Running {
            self.run_pass();
        } else {
            debug!(state = ?self.state, "selection stored until the session starts");
        }
    }

    /// Apply a UI message.
    ///
    /// A rejected setting change is logged and otherwise ignored.
    pub fn on_ui_message(&mut self, message: UiMessage) {
        let Some(store) = self.store.as_mut() else {
            warn!("UI message received before settings were loaded");
            return;
        };

        match message {
            UiMessage::PluginSettingChanged { key, value } => {
                match store.update_setting(&key, value) {
                    Ok(settings) => {
                        let data = settings.clone();
                        debug!(key = %key, "setting updated");
                        self.ui.post(OutboundMessage::PluginSettingChanged { data });
                        self.run_pass();
                    }
                    Err(e) => debug!(key = %key, reason = %e, "setting change dropped"),
                }
            }
        }
    }

    /// Answer a one-shot export request without touching the UI.
    ///
    /// Before settings are loaded the defaults are used.
    pub fn export(&self, language: &str, nodes: &[HostNode]) -> Dispatch {
        let defaults;
        let settings = match self.settings() {
            Some(settings) => settings,
            None => {
                defaults = PluginSettings::defaults();
                &defaults
            }
        };
        export_with(&self.dispatcher, self.adapter.as_ref(), settings, language, nodes)
    }

    /// Flush pending settings writes and hand back the UI channel.
    pub async fn shutdown(self) -> U {
        if let Some(store) = self.store {
            store.close().await;
        }
        self.ui
    }

    fn run_pass(&mut self) {
        let Some(settings) = self.store.as_ref().map(SettingsStore::current) else {
            return;
        };
        if self.selection.is_empty() {
            self.ui.post(OutboundMessage::Empty);
            return;
        }

        let parent_id = self.selection.parent_id.as_deref();
        let nodes = self.adapter.convert(&self.selection.nodes, parent_id);
        if nodes.is_empty() {
            self.ui.post(OutboundMessage::Empty);
            return;
        }

        let ctx = GenerationContext::new(self.selection.parent_id.clone(), false);
        let dispatch = self
            .dispatcher
            .generate(&nodes, settings, Some(settings.framework()), &ctx);

        if !dispatch.results.is_empty() {
            self.ui.post(OutboundMessage::Code {
                data: dispatch.results,
            });
        }
        for failure in dispatch.failures {
            self.ui.post(OutboundMessage::Error {
                data: failure.to_string(),
            });
        }
    }
}

/// Framework for a language name from the host's export surface.
///
/// Unrecognized names map to `None`, the fallback request.
pub fn export_language(language: &str) -> Option<FrameworkId> {
    match language {
        "html" => Some(FrameworkId::Html),
        "tailwind" => Some(FrameworkId::Tailwind),
        "flutter" => Some(FrameworkId::Flutter),
        "swiftui" => Some(FrameworkId::SwiftUi),
        _ => None,
    }
}

/// Load settings from `kv`, answer one export request and flush.
pub async fn export_once(
    kv: Arc<dyn KeyValueStore>,
    dispatcher: &Dispatcher,
    language: &str,
    nodes: &[HostNode],
    parent_id: Option<&str>,
) -> Dispatch {
    let store = SettingsStore::load(kv).await;
    let mut nodes = nodes.to_vec();
    if let Some(parent_id) = parent_id {
        for node in nodes.iter_mut().filter(|node| node.parent_id.is_none()) {
            node.parent_id = Some(parent_id.to_string());
        }
    }
    let dispatch = export_with(
        dispatcher,
        &HostConverter,
        store.current(),
        language,
        &nodes,
    );
    store.close().await;
    dispatch
}

fn export_with(
    dispatcher: &Dispatcher,
    adapter: &dyn ConversionAdapter,
    settings: &PluginSettings,
    language: &str,
    nodes: &[HostNode],
) -> Dispatch {
    let framework = export_language(language);
    let parent_id = nodes.first().and_then(|n| n.parent_id.clone());
    debug!(language, ?framework, "export request");

    let converted = adapter.convert(nodes, parent_id.as_deref());
    let ctx = GenerationContext::new(parent_id, true);
    dispatcher.generate(&converted, settings, framework, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_language() {
        assert_eq!(export_language("html"), Some(FrameworkId::Html));
        assert_eq!(export_language("tailwind"), Some(FrameworkId::Tailwind));
        assert_eq!(export_language("flutter"), Some(FrameworkId::Flutter));
        assert_eq!(export_language("swiftui"), Some(FrameworkId::SwiftUi));
        assert_eq!(export_language("HTML"), None);
        assert_eq!(export_language("compose"), None);
    }
}
