//! Plain HTML with CSS.

use std::collections::HashMap;

use eyre::Result;
use figcode_codegen::{
    CodeBuilder, GenerationContext, Generator, format::number, prepare_nodes,
};
use figcode_core::{DisplayLanguage, FrameworkId, to_kebab_case};
use figcode_ir::{Color, Direction, Node, NodeKind};
use figcode_settings::FrameworkSettings;

use crate::markup::{self, Element, Placement, RenderOptions, is_free_container};

/// HTML generator.
///
/// Styles go either into inline `style` attributes (`inlineStyle`) or into
/// generated classes collected in a stylesheet ahead of the markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlGenerator;

impl Generator for HtmlGenerator {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Html
    }

    fn display_language(&self) -> DisplayLanguage {
        DisplayLanguage::Html
    }

    fn generate(
        &self,
        nodes: &[Node],
        settings: &FrameworkSettings,
        ctx: &GenerationContext,
    ) -> Result<String> {
        let nodes = prepare_nodes(nodes, settings);
        let mut builder = HtmlBuilder::new(settings, ctx);
        let elements: Vec<Element> = nodes.iter().map(|n| builder.element(n, None)).collect();

        let options = RenderOptions {
            jsx: settings.flag("jsx"),
            inline_styles: builder.inline,
        };
        let markup = markup::render(&elements, options);

        if builder.rules.is_empty() {
            return Ok(markup);
        }
        let mut out = stylesheet(&builder.rules, options.jsx);
        out.push('\n');
        out.push_str(&markup);
        Ok(out)
    }
}

struct HtmlBuilder<'a> {
    settings: &'a FrameworkSettings,
    ctx: &'a GenerationContext,
    inline: bool,
    /// Uses per class name, for deduplication.
    class_names: HashMap<String, usize>,
    /// Stylesheet rules in document order.
    rules: Vec<(String, Vec<(&'static str, String)>)>,
}

impl<'a> HtmlBuilder<'a> {
    fn new(settings: &'a FrameworkSettings, ctx: &'a GenerationContext) -> Self {
        Self {
            settings,
            ctx,
            inline: settings.flag("inlineStyle"),
            class_names: HashMap::new(),
            rules: Vec::new(),
        }
    }

    fn element(&mut self, node: &Node, parent: Option<&Node>) -> Element {
        let mut el = self.base_element(node);
        let placement = Placement::of(node, parent, self.ctx);

        match placement {
            Placement::Absolute { x, y } => {
                el.style("position", "absolute");
                el.style("left", px(x));
                el.style("top", px(y));
            }
            Placement::Flow if is_free_container(node) => el.style("position", "relative"),
            Placement::Flow => {}
        }

        if let Some(layout) = node.auto_layout() {
            el.style("display", "flex");
            el.style(
                "flex-direction",
                match layout.direction {
                    Direction::Horizontal => "row",
                    Direction::Vertical => "column",
                },
            );
            if layout.spacing > 0.0 {
                el.style("gap", px(layout.spacing));
            }
            if !layout.padding.is_zero() {
                let p = &layout.padding;
                let value = match p.uniform() {
                    Some(all) => px(all),
                    None => format!(
                        "{} {} {} {}",
                        px(p.top),
                        px(p.right),
                        px(p.bottom),
                        px(p.left)
                    ),
                };
                el.style("padding", value);
            }
        }

        if let NodeKind::Text { font_size, .. } = &node.kind {
            el.style("font-size", px(*font_size));
            if let Some((color, variable)) = node.solid_fill() {
                el.style("color", self.color(color, variable));
            }
        } else {
            el.style("width", px(node.bounds.width));
            el.style("height", px(node.bounds.height));
            if let Some((color, variable)) = node.solid_fill() {
                el.style("background-color", self.color(color, variable));
            }
            if node.has_image_fill() && !node.children.is_empty() {
                el.style(
                    "background-image",
                    format!("url({})", placeholder_image(node)),
                );
            }
        }

        if matches!(node.kind, NodeKind::Ellipse) {
            el.style("border-radius", "9999px");
        } else if node.corner_radius > 0.0 {
            el.style("border-radius", px(node.corner_radius));
        }

        self.assign_classes(node, &mut el);

        el.children = node
            .children
            .iter()
            .map(|child| self.element(child, Some(node)))
            .collect();
        el
    }

    fn base_element(&self, node: &Node) -> Element {
        match &node.kind {
            NodeKind::Text { characters, .. } => {
                let mut el = Element::new("p");
                el.text = Some(characters.clone());
                el
            }
            NodeKind::Vector if self.settings.flag("embedVectors") => {
                let mut el = Element::new("svg");
                let (w, h) = (number(node.bounds.width), number(node.bounds.height));
                el.attr("width", w.clone());
                el.attr("height", h.clone());
                el.attr("viewBox", format!("0 0 {} {}", w, h));
                el
            }
            NodeKind::Placeholder { host_type } => {
                let mut el = Element::new("div");
                el.comment = Some(format!("unsupported: {}", host_type));
                el
            }
            _ if node.has_image_fill() && node.children.is_empty() => {
                let mut el = Element::new("img");
                el.attr("src", placeholder_image(node));
                el.attr("alt", node.name.clone());
                el
            }
            _ => Element::new("div"),
        }
    }

    fn assign_classes(&mut self, node: &Node, el: &mut Element) {
        let layer = to_kebab_case(&node.name);
        let show_layer_names = self.settings.flag("showLayerNames") && !layer.is_empty();

        if self.inline {
            if show_layer_names {
                el.class(layer);
            }
            return;
        }

        if el.styles.is_empty() {
            return;
        }
        let base = if show_layer_names {
            layer
        } else {
            kind_name(&node.kind).to_string()
        };
        let class = self.unique_class(base);
        self.rules.push((class.clone(), el.styles.clone()));
        el.class(class);
    }

    fn unique_class(&mut self, base: String) -> String {
        let uses = self.class_names.entry(base.clone()).or_insert(0);
        *uses += 1;
        if *uses == 1 {
            base
        } else {
            format!("{}-{}", base, uses)
        }
    }

    fn color(&self, color: &Color, variable: Option<&str>) -> String {
        match variable {
            Some(name) if self.settings.flag("customTailwindColors") => {
                format!("var(--{})", to_kebab_case(name))
            }
            _ => color.to_css(),
        }
    }
}

fn stylesheet(rules: &[(String, Vec<(&'static str, String)>)], jsx: bool) -> String {
    let mut b = CodeBuilder::markup();
    if jsx {
        b.push_line("/* styles.css */");
    } else {
        b.push_line("<style>");
    }
    for (class, styles) in rules {
        b.push_block(&format!(".{} {{", class), "}", |b| {
            for (property, value) in styles {
                b.push_line(&format!("{}: {};", property, value));
            }
        });
    }
    if !jsx {
        b.push_line("</style>");
    }
    b.build()
}

fn kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Frame { .. } => "frame",
        NodeKind::Group => "group",
        NodeKind::Rectangle => "rectangle",
        NodeKind::Ellipse => "ellipse",
        NodeKind::Text { .. } => "text",
        NodeKind::Vector => "vector",
        NodeKind::Placeholder { .. } => "placeholder",
    }
}

pub(crate) fn placeholder_image(node: &Node) -> String {
    format!(
        "https://placehold.co/{}x{}",
        number(node.bounds.width),
        number(node.bounds.height)
    )
}

fn px(value: f64) -> String {
    format!("{}px", number(value))
}

#[cfg(test)]
mod tests {
    use figcode_ir::{AutoLayout, Padding, Paint};
    use figcode_settings::PluginSettings;

    use super::*;

    fn generate_with(nodes: &[Node], edits: &[(&str, bool)]) -> String {
        let mut settings = PluginSettings::defaults();
        for (key, value) in edits {
            settings.update(key, (*value).into()).unwrap();
        }
        HtmlGenerator
            .generate(
                nodes,
                &settings.for_framework(FrameworkId::Html),
                &GenerationContext::default(),
            )
            .unwrap()
    }

    fn card() -> Node {
        Node::new(
            "1",
            "Card",
            NodeKind::Frame {
                layout: Some(AutoLayout {
                    direction: Direction::Vertical,
                    spacing: 8.0,
                    padding: Padding {
                        top: 16.0,
                        right: 16.0,
                        bottom: 16.0,
                        left: 16.0,
                    },
                }),
            },
        )
        .with_bounds(0.0, 0.0, 200.0, 100.0)
        .with_fill(Paint::Solid {
            color: Color::WHITE,
            variable: Some("Surface Color".into()),
        })
        .with_child(Node::new(
            "2",
            "Title",
            NodeKind::Text {
                characters: "Hello".into(),
                font_size: 20.0,
            },
        ))
    }

    #[test]
    fn test_single_rectangle() {
        let rect = Node::new("1", "Box", NodeKind::Rectangle).with_bounds(0.0, 0.0, 10.0, 20.0);
        insta::assert_snapshot!(
            generate_with(&[rect], &[]),
            @r#"<div style="width: 10px; height: 20px"></div>"#
        );
    }

    #[test]
    fn test_auto_layout_frame() {
        let code = generate_with(&[card()], &[]);
        assert!(code.starts_with("<div style=\"display: flex; flex-direction: column; gap: 8px; padding: 16px; width: 200px; height: 100px; background-color: #ffffff\">"));
        assert!(code.contains("  <p style=\"font-size: 20px\">Hello</p>\n"));
        assert!(code.ends_with("</div>\n"));
    }

    #[test]
    fn test_custom_colors_use_variables() {
        let code = generate_with(&[card()], &[("customTailwindColors", true)]);
        assert!(code.contains("background-color: var(--surface-color)"));
    }

    #[test]
    fn test_layer_names_and_jsx() {
        let code = generate_with(&[card()], &[("showLayerNames", true), ("jsx", true)]);
        assert!(code.starts_with("<div className=\"card\" style={{display: 'flex', "));
        assert!(code.contains("<p className=\"title\" style={{fontSize: '20px'}}>Hello</p>"));
    }

    #[test]
    fn test_stylesheet_mode() {
        let code = generate_with(&[card()], &[("inlineStyle", false), ("showLayerNames", true)]);
        assert!(code.starts_with("<style>\n.card {\n  display: flex;\n"));
        assert!(code.contains(".title {\n  font-size: 20px;\n}\n"));
        assert!(code.contains("</style>\n\n<div class=\"card\">\n  <p class=\"title\">Hello</p>\n</div>\n"));
    }

    #[test]
    fn test_stylesheet_class_names_are_unique() {
        let a = Node::new("1", "A", NodeKind::Rectangle).with_bounds(0.0, 0.0, 1.0, 1.0);
        let b = Node::new("2", "B", NodeKind::Rectangle).with_bounds(0.0, 0.0, 2.0, 2.0);
        let code = generate_with(&[a, b], &[("inlineStyle", false)]);
        assert!(code.contains(".rectangle {"));
        assert!(code.contains(".rectangle-2 {"));
        assert!(code.contains("<div class=\"rectangle-2\"></div>"));
    }

    #[test]
    fn test_absolute_children() {
        let frame = Node::new("1", "Canvas", NodeKind::Frame { layout: None })
            .with_bounds(0.0, 0.0, 100.0, 100.0)
            .with_child(Node::new("2", "Dot", NodeKind::Ellipse).with_bounds(10.0, 20.0, 4.0, 4.0));
        let code = generate_with(&[frame], &[]);
        assert!(code.starts_with("<div style=\"position: relative; width: 100px; height: 100px\">"));
        assert!(code.contains("position: absolute; left: 10px; top: 20px; width: 4px; height: 4px; border-radius: 9999px"));
    }

    #[test]
    fn test_vectors_and_placeholders() {
        let vector = Node::new("1", "Icon", NodeKind::Vector).with_bounds(0.0, 0.0, 24.0, 24.0);
        let sticky = Node::new(
            "2",
            "Note",
            NodeKind::Placeholder {
                host_type: "STICKY".into(),
            },
        );

        let plain = generate_with(&[vector.clone(), sticky], &[]);
        assert!(plain.starts_with("<div style=\"width: 24px; height: 24px\"></div>"));
        assert!(plain.contains("<!-- unsupported: STICKY -->"));

        let embedded = generate_with(&[vector], &[("embedVectors", true)]);
        assert_eq!(
            embedded,
            "<svg style=\"width: 24px; height: 24px\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\"></svg>\n"
        );
    }

    #[test]
    fn test_image_fill_becomes_img() {
        let photo = Node::new("1", "Photo", NodeKind::Rectangle)
            .with_bounds(0.0, 0.0, 64.0, 48.0)
            .with_fill(Paint::Image);
        let code = generate_with(&[photo], &[]);
        assert_eq!(
            code,
            "<img style=\"width: 64px; height: 48px\" src=\"https://placehold.co/64x48\" alt=\"Photo\" />\n"
        );
    }

    #[test]
    fn test_empty_selection_is_empty_code() {
        assert_eq!(generate_with(&[], &[]), "");
    }
}
