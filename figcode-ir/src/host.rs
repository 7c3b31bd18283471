//! Host design nodes as delivered by the host application.
//!
//! These mirror the subset of the host's node API the converter reads.
//! Every field is optional on the wire so partially populated nodes still
//! decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HostColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPaint {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub color: Option<HostColor>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub visible: Option<bool>,
    /// Name of the color variable bound to this paint.
    #[serde(default)]
    pub variable: Option<String>,
}

/// A design node selected in the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub visible: Option<bool>,
    pub parent_id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fills: Vec<HostPaint>,
    pub corner_radius: Option<f64>,
    pub characters: Option<String>,
    pub font_size: Option<f64>,
    pub layout_mode: Option<String>,
    pub item_spacing: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub children: Vec<HostNode>,
}

impl HostNode {
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// The host's current selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selection {
    pub nodes: Vec<HostNode>,
    /// Scoping hint: the id of the parent the selection lives under.
    pub parent_id: Option<String>,
}

impl Selection {
    pub fn new(nodes: Vec<HostNode>, parent_id: Option<String>) -> Self {
        Self { nodes, parent_id }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_partial_node() {
        let node: HostNode =
            serde_json::from_str(r#"{"id":"1:2","type":"TEXT","characters":"Hi","extra":true}"#)
                .unwrap();
        assert_eq!(node.kind, "TEXT");
        assert_eq!(node.characters.as_deref(), Some("Hi"));
        assert!(node.is_visible());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_decode_nested() {
        let node: HostNode = serde_json::from_str(
            r#"{"id":"1","type":"FRAME","layoutMode":"VERTICAL","children":[{"id":"2","type":"RECTANGLE","visible":false}]}"#,
        )
        .unwrap();
        assert_eq!(node.layout_mode.as_deref(), Some("VERTICAL"));
        assert!(!node.children[0].is_visible());
    }
}
