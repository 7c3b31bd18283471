//! Normalized node tree.

use serde::{Deserialize, Serialize};

use crate::{Color, Paint};

/// Position and size of a node, relative to its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Main axis of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// Returns the shared value when all four sides are equal.
    pub fn uniform(&self) -> Option<f64> {
        (self.top == self.right && self.right == self.bottom && self.bottom == self.left)
            .then_some(self.top)
    }
}

/// Flow layout of a frame's children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub direction: Direction,
    pub spacing: f64,
    pub padding: Padding,
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    /// A container. Children flow when `layout` is set, otherwise they are
    /// positioned absolutely.
    Frame {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout: Option<AutoLayout>,
    },
    Group,
    Rectangle,
    Ellipse,
    Text {
        characters: String,
        font_size: f64,
    },
    Vector,
    /// A host node kind without a dedicated representation.
    Placeholder {
        host_type: String,
    },
}

/// One node of the normalized tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    /// Id of the host parent this node was selected under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub kind: NodeKind,
    pub bounds: Bounds,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node of the given kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            kind,
            bounds: Bounds::default(),
            fills: Vec::new(),
            corner_radius: 0.0,
            children: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.bounds = Bounds {
            x,
            y,
            width,
            height,
        };
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the auto layout of a frame, if any.
    pub fn auto_layout(&self) -> Option<&AutoLayout> {
        match &self.kind {
            NodeKind::Frame { layout } => layout.as_ref(),
            _ => None,
        }
    }

    /// Returns the text content of a text node.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { characters, .. } => Some(characters),
            _ => None,
        }
    }

    /// The topmost solid fill and its bound variable name.
    pub fn solid_fill(&self) -> Option<(&Color, Option<&str>)> {
        self.fills.iter().rev().find_map(|paint| match paint {
            Paint::Solid { color, variable } => Some((color, variable.as_deref())),
            Paint::Image => None,
        })
    }

    pub fn has_image_fill(&self) -> bool {
        self.fills.iter().any(|paint| matches!(paint, Paint::Image))
    }

    /// Replace every group that wraps exactly one child with that child.
    ///
    /// The child's offset is shifted by the group's offset so its position
    /// relative to the group's parent is preserved.
    pub fn collapse_single_child_groups(mut self) -> Node {
        self.children = self
            .children
            .into_iter()
            .map(Node::collapse_single_child_groups)
            .collect();

        if matches!(self.kind, NodeKind::Group) && self.children.len() == 1 {
            let mut child = self.children.remove(0);
            child.bounds.x += self.bounds.x;
            child.bounds.y += self.bounds.y;
            child.parent_id = self.parent_id;
            return child;
        }
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
