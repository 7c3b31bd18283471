//! Builder for Dart widget constructor expressions.

use figcode_codegen::CodeBuilder;

/// A constructor argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A literal expression written as-is.
    Inline(String),
    /// A nested widget.
    Widget(Widget),
    /// A widget list such as `children: [...]`.
    List(Vec<Widget>),
}

/// A widget constructor call like `Container(width: 10.0, child: ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    name: String,
    args: Vec<(Option<&'static str>, Arg)>,
    comment: Option<String>,
}

impl Widget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            comment: None,
        }
    }

    /// Add a positional argument.
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.args.push((None, Arg::Inline(value.into())));
        self
    }

    /// Add a named literal argument.
    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((Some(name), Arg::Inline(value.into())));
        self
    }

    /// Add a named literal argument if `value` is `Some`.
    pub fn arg_opt(self, name: &'static str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.arg(name, v),
            None => self,
        }
    }

    /// Add a named nested widget.
    pub fn widget(mut self, name: &'static str, widget: Widget) -> Self {
        self.args.push((Some(name), Arg::Widget(widget)));
        self
    }

    pub fn child(self, child: Widget) -> Self {
        self.widget("child", child)
    }

    pub fn children(mut self, children: Vec<Widget>) -> Self {
        self.args.push((Some("children"), Arg::List(children)));
        self
    }

    /// Attach a `//` comment written above the constructor.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether every argument is a literal, so the call fits on one line.
    fn is_flat(&self) -> bool {
        self.args.iter().all(|(_, arg)| matches!(arg, Arg::Inline(_)))
    }

    /// Single-line form. Nested widgets are flattened too.
    pub fn to_inline(&self) -> String {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|(name, arg)| {
                let value = match arg {
                    Arg::Inline(v) => v.clone(),
                    Arg::Widget(w) => w.to_inline(),
                    Arg::List(ws) => format!(
                        "[{}]",
                        ws.iter().map(Widget::to_inline).collect::<Vec<_>>().join(", ")
                    ),
                };
                match name {
                    Some(name) => format!("{}: {}", name, value),
                    None => value,
                }
            })
            .collect();
        format!("{}({})", self.name, args.join(", "))
    }

    /// Write the widget as `{prefix}Name(...){suffix}`.
    ///
    /// Calls holding only literals stay on one line; anything else puts one
    /// argument per line with trailing commas.
    pub fn render(&self, b: &mut CodeBuilder, prefix: &str, suffix: &str) {
        if let Some(comment) = &self.comment {
            b.push_line(&format!("// {}", comment));
        }
        if self.is_flat() {
            b.push_line(&format!("{}{}{}", prefix, self.to_inline(), suffix));
            return;
        }

        b.push_block(
            &format!("{}{}(", prefix, self.name),
            &format!("){}", suffix),
            |b| {
                for (name, arg) in &self.args {
                    let label = name.map(|n| format!("{}: ", n)).unwrap_or_default();
                    match arg {
                        Arg::Inline(v) => {
                            b.push_line(&format!("{}{},", label, v));
                        }
                        Arg::Widget(w) => w.render(b, &label, ","),
                        Arg::List(ws) if ws.is_empty() => {
                            b.push_line(&format!("{}[],", label));
                        }
                        Arg::List(ws) => {
                            b.push_block(&format!("{}[", label), "],", |b| {
                                for w in ws {
                                    w.render(b, "", ",");
                                }
                            });
                        }
                    }
                }
            },
        );
    }
}
