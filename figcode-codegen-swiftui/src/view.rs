//! Builder for SwiftUI view expressions with modifier chains.

use figcode_codegen::CodeBuilder;

/// A view like `VStack(spacing: 8) { ... }` followed by modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    head: String,
    content: Option<Vec<View>>,
    modifiers: Vec<String>,
    comment: Option<String>,
}

impl View {
    /// A leaf view such as `Text("Hi")`.
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            content: None,
            modifiers: Vec::new(),
            comment: None,
        }
    }

    /// A container view with a trailing content closure.
    pub fn container(head: impl Into<String>, content: Vec<View>) -> Self {
        Self {
            content: Some(content),
            ..Self::new(head)
        }
    }

    /// Append a modifier, without the leading dot.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn modifier_opt(self, modifier: Option<String>) -> Self {
        match modifier {
            Some(m) => self.modifier(m),
            None => self,
        }
    }

    /// Attach a `//` comment written above the view.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    /// Write the view at the builder's current indentation.
    ///
    /// Leaf modifiers are indented under the view; container modifiers
    /// follow the closing brace.
    pub fn render(&self, b: &mut CodeBuilder) {
        if let Some(comment) = &self.comment {
            b.push_line(&format!("// {}", comment));
        }
        match &self.content {
            Some(children) => {
                b.push_block(&format!("{} {{", self.head), "}", |b| {
                    for child in children {
                        child.render(b);
                    }
                });
                for modifier in &self.modifiers {
                    b.push_line(&format!(".{}", modifier));
                }
            }
            None => {
                b.push_line(&self.head);
                b.push_indent();
                for modifier in &self.modifiers {
                    b.push_line(&format!(".{}", modifier));
                }
                b.push_dedent();
            }
        }
    }
}
