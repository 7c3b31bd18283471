//! Conversion from host nodes to the normalized tree.

use tracing::debug;

use crate::{AutoLayout, Bounds, Color, Direction, HostNode, HostPaint, Node, NodeKind, Padding, Paint};

/// Turns a host selection into a [`Node`] tree.
///
/// Implementations must be deterministic for a given selection and must
/// never fail: node kinds they do not understand degrade to
/// [`NodeKind::Placeholder`].
pub trait ConversionAdapter {
    /// Convert the selected nodes. `parent_id` is the id of the parent the
    /// selection is scoped to, used for nodes that do not name their own.
    fn convert(&self, selection: &[HostNode], parent_id: Option<&str>) -> Vec<Node>;
}

/// Default adapter for the host's JSON node format.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostConverter;

impl ConversionAdapter for HostConverter {
    fn convert(&self, selection: &[HostNode], parent_id: Option<&str>) -> Vec<Node> {
        selection
            .iter()
            .filter(|node| node.is_visible())
            .map(|node| {
                let parent = node
                    .parent_id
                    .clone()
                    .or_else(|| parent_id.map(str::to_string));
                convert_node(node, parent)
            })
            .collect()
    }
}

fn convert_node(host: &HostNode, parent_id: Option<String>) -> Node {
    let children = host
        .children
        .iter()
        .filter(|child| child.is_visible())
        .map(|child| convert_node(child, Some(host.id.clone())))
        .collect();

    Node {
        id: host.id.clone(),
        name: host.name.clone(),
        parent_id,
        kind: convert_kind(host),
        bounds: Bounds {
            x: host.x,
            y: host.y,
            width: host.width,
            height: host.height,
        },
        fills: host.fills.iter().filter_map(convert_paint).collect(),
        corner_radius: host.corner_radius.unwrap_or(0.0),
        children,
    }
}

fn convert_kind(host: &HostNode) -> NodeKind {
    match host.kind.as_str() {
        "FRAME" | "COMPONENT" | "COMPONENT_SET" | "INSTANCE" | "SECTION" => NodeKind::Frame {
            layout: convert_layout(host),
        },
        "GROUP" => NodeKind::Group,
        "RECTANGLE" => NodeKind::Rectangle,
        "ELLIPSE" => NodeKind::Ellipse,
        "TEXT" => NodeKind::Text {
            characters: host.characters.clone().unwrap_or_default(),
            font_size: host.font_size.unwrap_or(14.0),
        },
        "VECTOR" | "STAR" | "LINE" | "POLYGON" | "BOOLEAN_OPERATION" => NodeKind::Vector,
        other => {
            debug!(id = %host.id, host_type = other, "unsupported node kind, using placeholder");
            NodeKind::Placeholder {
                host_type: other.to_string(),
            }
        }
    }
}

fn convert_layout(host: &HostNode) -> Option<AutoLayout> {
    let direction = match host.layout_mode.as_deref() {
        Some("HORIZONTAL") => Direction::Horizontal,
        Some("VERTICAL") => Direction::Vertical,
        _ => return None,
    };

    Some(AutoLayout {
        direction,
        spacing: host.item_spacing.unwrap_or(0.0),
        padding: Padding {
            top: host.padding_top.unwrap_or(0.0),
            right: host.padding_right.unwrap_or(0.0),
            bottom: host.padding_bottom.unwrap_or(0.0),
            left: host.padding_left.unwrap_or(0.0),
        },
    })
}

fn convert_paint(paint: &HostPaint) -> Option<Paint> {
    if paint.visible == Some(false) {
        return None;
    }
    match paint.kind.as_str() {
        "SOLID" => {
            let color = paint.color?;
            Some(Paint::Solid {
                color: Color {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                    a: paint.opacity.unwrap_or(1.0),
                },
                variable: paint.variable.clone(),
            })
        }
        "IMAGE" => Some(Paint::Image),
        // Gradients and video fills are not represented.
        _ => None,
    }
}
