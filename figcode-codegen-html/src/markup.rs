//! Element tree shared by the markup generators.

use figcode_codegen::{CodeBuilder, GenerationContext};
use figcode_core::to_camel_case;
use figcode_ir::{Node, NodeKind};

/// How a node is placed inside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Placement {
    /// Follows the parent's flow.
    Flow,
    /// Positioned at an offset inside the parent.
    Absolute { x: f64, y: f64 },
}

impl Placement {
    /// Children of frames without auto layout and of groups are positioned
    /// absolutely. Roots only keep their offset for in-place requests.
    pub(crate) fn of(node: &Node, parent: Option<&Node>, ctx: &GenerationContext) -> Self {
        let absolute = match parent {
            Some(parent) => is_free_container(parent),
            None => ctx.keeps_root_offset(node),
        };
        if absolute {
            Placement::Absolute {
                x: node.bounds.x,
                y: node.bounds.y,
            }
        } else {
            Placement::Flow
        }
    }
}

/// A container whose children are positioned absolutely.
pub(crate) fn is_free_container(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Frame { layout } => layout.is_none() && !node.children.is_empty(),
        NodeKind::Group => !node.children.is_empty(),
        _ => false,
    }
}

/// One markup element.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub styles: Vec<(&'static str, String)>,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub comment: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn style(&mut self, property: &'static str, value: impl Into<String>) {
        self.styles.push((property, value.into()));
    }

    pub fn class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    pub fn attr(&mut self, name: &'static str, value: impl Into<String>) {
        self.attrs.push((name, value.into()));
    }

    fn is_void(&self) -> bool {
        self.tag == "img"
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderOptions {
    /// Emit JSX (`className`, style objects, JSX comments).
    pub jsx: bool,
    /// Emit `styles` as inline style attributes.
    pub inline_styles: bool,
}

pub(crate) fn render(elements: &[Element], options: RenderOptions) -> String {
    let mut builder = CodeBuilder::markup();
    for element in elements {
        render_element(&mut builder, element, options);
    }
    builder.build()
}

fn render_element(b: &mut CodeBuilder, element: &Element, options: RenderOptions) {
    let open = open_tag(element, options);

    if element.is_void() {
        b.push_line(&format!("{} />", open));
        return;
    }

    let has_body = !element.children.is_empty() || element.comment.is_some();
    match (&element.text, has_body) {
        (Some(text), false) => {
            b.push_line(&format!(
                "{}>{}</{}>",
                open,
                escape_text(text, options.jsx),
                element.tag
            ));
        }
        (None, false) => {
            b.push_line(&format!("{}></{}>", open, element.tag));
        }
        (text, true) => {
            b.push_line(&format!("{}>", open));
            b.push_indent();
            if let Some(comment) = &element.comment {
                b.push_line(&render_comment(comment, options.jsx));
            }
            if let Some(text) = text {
                b.push_line(&escape_text(text, options.jsx));
            }
            for child in &element.children {
                render_element(b, child, options);
            }
            b.push_dedent();
            b.push_line(&format!("</{}>", element.tag));
        }
    }
}

fn open_tag(element: &Element, options: RenderOptions) -> String {
    let mut tag = format!("<{}", element.tag);

    if !element.classes.is_empty() {
        let name = if options.jsx { "className" } else { "class" };
        tag.push_str(&format!(
            " {}=\"{}\"",
            name,
            escape_attr(&element.classes.join(" "))
        ));
    }

    if options.inline_styles && !element.styles.is_empty() {
        tag.push(' ');
        tag.push_str(&style_attr(&element.styles, options.jsx));
    }

    for (name, value) in &element.attrs {
        tag.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    tag
}

fn style_attr(styles: &[(&'static str, String)], jsx: bool) -> String {
    if jsx {
        let entries: Vec<String> = styles
            .iter()
            .map(|(property, value)| {
                format!("{}: '{}'", to_camel_case(property), value.replace('\'', "\\'"))
            })
            .collect();
        format!("style={{{{{}}}}}", entries.join(", "))
    } else {
        format!("style=\"{}\"", escape_attr(&declarations(styles)))
    }
}

/// `property: value; ...` without a trailing semicolon.
pub(crate) fn declarations(styles: &[(&'static str, String)]) -> String {
    styles
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ")
}

fn render_comment(text: &str, jsx: bool) -> String {
    if jsx {
        format!("{{/* {} */}}", text)
    } else {
        format!("<!-- {} -->", text)
    }
}

fn escape_text(text: &str, jsx: bool) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    if jsx {
        escaped.replace('{', "&#123;").replace('}', "&#125;")
    } else {
        escaped
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
