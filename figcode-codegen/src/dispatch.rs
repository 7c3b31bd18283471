//! Routing a node tree to the generators of a framework.
//!
//! The [`Dispatcher`] turns a request into a list of [`Block`]s, invokes
//! the generator behind each block and collects the outputs. Every
//! invocation is isolated: an error or a panic inside one generator is
//! recorded as a [`GenerationFailure`] and the remaining blocks are still
//! produced.

use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use figcode_core::{DisplayLanguage, FrameworkId};
use figcode_ir::Node;
use figcode_settings::PluginSettings;
use serde::Serialize;
use tracing::{debug, error};

use crate::{GenerationContext, GenerationResult, Generator};

/// Static text shown next to the generated code when no framework was
/// requested.
pub const SETTINGS_HINT: &str = "To change settings, export to\n CodeSandbox, and see a preview,\n click in the 'Plugins' tab above";

/// One output block of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Output of the generator for `framework`.
    Generated {
        title: &'static str,
        framework: FrameworkId,
    },
    /// Fixed text, no generator involved.
    Literal {
        title: &'static str,
        code: &'static str,
        language: DisplayLanguage,
    },
}

impl Block {
    pub fn title(&self) -> &'static str {
        match self {
            Block::Generated { title, .. } | Block::Literal { title, .. } => title,
        }
    }

    fn generated(title: &'static str, framework: FrameworkId) -> Self {
        Block::Generated { title, framework }
    }
}

/// A generator invocation that did not produce code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    /// Title of the block that failed.
    pub title: String,
    pub framework: FrameworkId,
    pub message: String,
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} generator failed: {}", self.framework, self.message)
    }
}

/// Outcome of one dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Produced blocks, in request order.
    pub results: Vec<GenerationResult>,
    /// Blocks whose generator failed, in request order.
    pub failures: Vec<GenerationFailure>,
}

impl Dispatch {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.title.as_str()).collect()
    }
}

/// Registry of generators, one per framework.
///
/// # Example
///
/// ```ignore
/// let dispatcher = Dispatcher::new()
///     .generator(HtmlGenerator)
///     .generator(TailwindGenerator);
///
/// let dispatch = dispatcher.generate(&nodes, &settings, Some(FrameworkId::Html), &ctx);
/// ```
#[derive(Default)]
pub struct Dispatcher {
    generators: Vec<Box<dyn Generator>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, replacing any previous one for its framework.
    pub fn generator(mut self, generator: impl Generator + 'static) -> Self {
        self.generators
            .retain(|g| g.framework() != generator.framework());
        self.generators.push(Box::new(generator));
        self
    }

    pub fn get(&self, framework: FrameworkId) -> Option<&dyn Generator> {
        self.generators
            .iter()
            .find(|g| g.framework() == framework)
            .map(|g| g.as_ref())
    }

    /// The blocks produced for a request.
    ///
    /// `None` is the fallback request: Tailwind, Flutter and SwiftUI output
    /// followed by a static settings hint.
    pub fn plan(framework: Option<FrameworkId>) -> Vec<Block> {
        match framework {
            Some(FrameworkId::Html) => vec![Block::generated("HTML", FrameworkId::Html)],
            // Every Tailwind block currently renders the same code.
            Some(FrameworkId::Tailwind) => ["Whole Code", "Layout", "Style", "Colors"]
                .into_iter()
                .map(|title| Block::generated(title, FrameworkId::Tailwind))
                .collect(),
            Some(FrameworkId::Flutter) => vec![Block::generated("Flutter", FrameworkId::Flutter)],
            Some(FrameworkId::SwiftUi) => vec![Block::generated("SwiftUI", FrameworkId::SwiftUi)],
            None => vec![
                Block::generated("Tailwind Code", FrameworkId::Tailwind),
                Block::generated("Flutter", FrameworkId::Flutter),
                Block::generated("SwiftUI", FrameworkId::SwiftUi),
                Block::Literal {
                    title: "Settings",
                    code: SETTINGS_HINT,
                    language: DisplayLanguage::Json,
                },
            ],
        }
    }

    /// Generate every block of the request.
    ///
    /// Never fails and never panics because of a generator; failures are
    /// reported in [`Dispatch::failures`].
    pub fn generate(
        &self,
        nodes: &[Node],
        settings: &PluginSettings,
        framework: Option<FrameworkId>,
        ctx: &GenerationContext,
    ) -> Dispatch {
        let plan = Self::plan(framework);
        debug!(
            framework = framework.map(|f| f.as_str()),
            blocks = plan.len(),
            nodes = nodes.len(),
            standalone = ctx.is_standalone,
            "dispatching generation"
        );

        let mut dispatch = Dispatch::default();
        for block in plan {
            match block {
                Block::Literal {
                    title,
                    code,
                    language,
                } => dispatch
                    .results
                    .push(GenerationResult::new(title, code, language)),
                Block::Generated { title, framework } => {
                    match self.invoke(framework, nodes, settings, ctx) {
                        Ok((code, language)) => dispatch
                            .results
                            .push(GenerationResult::new(title, code, language)),
                        Err(message) => {
                            error!(%framework, title, error = %message, "generator failed");
                            dispatch.failures.push(GenerationFailure {
                                title: title.to_string(),
                                framework,
                                message,
                            });
                        }
                    }
                }
            }
        }
        dispatch
    }

    fn invoke(
        &self,
        framework: FrameworkId,
        nodes: &[Node],
        settings: &PluginSettings,
        ctx: &GenerationContext,
    ) -> Result<(String, DisplayLanguage), String> {
        let generator = self
            .get(framework)
            .ok_or_else(|| format!("no generator registered for {}", framework))?;
        let view = settings.for_framework(framework);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            generator.generate(nodes, &view, ctx)
        }));
        match outcome {
            Ok(Ok(code)) => Ok((code, generator.display_language())),
            Ok(Err(e)) => Err(format!("{:#}", e)),
            Err(payload) => Err(panic_message(payload.as_ref())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("generator panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("generator panicked: {}", s)
    } else {
        "generator panicked".to_string()
    }
}
