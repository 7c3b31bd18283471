//! The generator abstraction.

use std::borrow::Cow;

use eyre::Result;
use figcode_core::{DisplayLanguage, FrameworkId};
use figcode_ir::Node;
use figcode_settings::FrameworkSettings;
use serde::{Deserialize, Serialize};

/// Trait for per-framework code generators.
///
/// Implement this trait to add support for a new generation target. A
/// generator only sees the settings that apply to its framework.
pub trait Generator: Send + Sync {
    /// The framework this generator produces code for.
    fn framework(&self) -> FrameworkId;

    /// Language tag used for syntax highlighting of the output.
    fn display_language(&self) -> DisplayLanguage;

    /// Render `nodes` as source code.
    fn generate(
        &self,
        nodes: &[Node],
        settings: &FrameworkSettings,
        ctx: &GenerationContext,
    ) -> Result<String>;
}

/// Scoping information for one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationContext {
    /// Id of the host node the selection lives under.
    pub parent_id: Option<String>,
    /// Whether the output must stand on its own (export requests), as
    /// opposed to being shown in place inside its parent.
    pub is_standalone: bool,
}

impl GenerationContext {
    pub fn new(parent_id: Option<String>, is_standalone: bool) -> Self {
        Self {
            parent_id,
            is_standalone,
        }
    }

    /// Whether a root node keeps its offset inside its parent.
    ///
    /// Only in-place requests keep offsets, and only for roots that sit
    /// directly under the scoping parent.
    pub fn keeps_root_offset(&self, node: &Node) -> bool {
        !self.is_standalone
            && self.parent_id.is_some()
            && node.parent_id.as_deref() == self.parent_id.as_deref()
    }
}

/// One named code artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub title: String,
    pub code: String,
    pub language: DisplayLanguage,
}

impl GenerationResult {
    pub fn new(title: impl Into<String>, code: impl Into<String>, language: DisplayLanguage) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            language,
        }
    }
}

/// Apply the layout options shared by every generator.
///
/// With `optimizeLayout` on, groups wrapping a single child are collapsed.
pub fn prepare_nodes<'a>(nodes: &'a [Node], settings: &FrameworkSettings) -> Cow<'a, [Node]> {
    if settings.flag("optimizeLayout") {
        Cow::Owned(
            nodes
                .iter()
                .cloned()
                .map(Node::collapse_single_child_groups)
                .collect(),
        )
    } else {
        Cow::Borrowed(nodes)
    }
}
