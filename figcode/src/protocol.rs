//! Messages exchanged with the host and its UI.

use figcode_codegen::GenerationResult;
use figcode_ir::{HostNode, Selection};
use figcode_settings::{PluginSettings, SettingValue};
use serde::{Deserialize, Serialize};

/// Message sent to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    /// Full settings snapshot.
    PluginSettingChanged { data: PluginSettings },
    /// Generated blocks for the current selection.
    Code { data: Vec<GenerationResult> },
    /// Nothing is selected.
    Empty,
    /// Human-readable failure message.
    Error { data: String },
}

/// Message received from the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiMessage {
    /// Request to change a single setting.
    PluginSettingChanged { key: String, value: SettingValue },
}

/// One or several host nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeInput {
    Many(Vec<HostNode>),
    One(Box<HostNode>),
}

impl NodeInput {
    pub fn into_nodes(self) -> Vec<HostNode> {
        match self {
            NodeInput::Many(nodes) => nodes,
            NodeInput::One(node) => vec![*node],
        }
    }
}

/// Event delivered by the host, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    /// The user selected different nodes.
    SelectionChange {
        #[serde(default)]
        selection: Vec<HostNode>,
        #[serde(default, rename = "parentId")]
        parent_id: Option<String>,
    },
    /// A message forwarded from the UI.
    Ui { message: UiMessage },
    /// One-shot export request.
    Generate { language: String, node: NodeInput },
}

impl HostEvent {
    /// Build a selection change from an existing [`Selection`].
    pub fn selection(selection: Selection) -> Self {
        HostEvent::SelectionChange {
            selection: selection.nodes,
            parent_id: selection.parent_id,
        }
    }
}
