//! HTML with Tailwind utility classes.

use eyre::Result;
use figcode_codegen::{GenerationContext, Generator, format::number, prepare_nodes};
use figcode_core::{DisplayLanguage, FrameworkId, to_kebab_case};
use figcode_ir::{Color, Direction, Node, NodeKind, Padding};
use figcode_settings::FrameworkSettings;

use crate::html::placeholder_image;
use crate::markup::{self, Element, Placement, RenderOptions, is_free_container};
use crate::tailwind_scale;

/// Tailwind generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindGenerator;

impl Generator for TailwindGenerator {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Tailwind
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
        let classes = Classes {
            settings,
            ctx,
            round_values: settings.flag("roundTailwindValues"),
            round_colors: settings.flag("roundTailwindColors"),
        };
        let elements: Vec<Element> = nodes.iter().map(|n| classes.element(n, None)).collect();

        Ok(markup::render(
            &elements,
            RenderOptions {
                jsx: settings.flag("jsx"),
                inline_styles: false,
            },
        ))
    }
}

struct Classes<'a> {
    settings: &'a FrameworkSettings,
    ctx: &'a GenerationContext,
    round_values: bool,
    round_colors: bool,
}

impl Classes<'_> {
    fn element(&self, node: &Node, parent: Option<&Node>) -> Element {
        let mut el = self.base_element(node);

        if self.settings.flag("showLayerNames") {
            let layer = to_kebab_case(&node.name);
            if !layer.is_empty() {
                el.class(layer);
            }
        }

        match Placement::of(node, parent, self.ctx) {
            Placement::Absolute { x, y } => {
                el.class("absolute");
                el.class(format!("left-{}", self.spacing(x)));
                el.class(format!("top-{}", self.spacing(y)));
            }
            Placement::Flow if is_free_container(node) => el.class("relative"),
            Placement::Flow => {}
        }

        if let Some(layout) = node.auto_layout() {
            el.class("flex");
            if layout.direction == Direction::Vertical {
                el.class("flex-col");
            }
            if layout.spacing > 0.0 {
                el.class(format!("gap-{}", self.spacing(layout.spacing)));
            }
            for class in self.padding(&layout.padding) {
                el.class(class);
            }
        }

        if let NodeKind::Text { font_size, .. } = &node.kind {
            if let Some((color, variable)) = node.solid_fill() {
                el.class(format!("text-{}", self.color(color, variable)));
            }
            let size = match tailwind_scale::font_size(*font_size, self.round_values) {
                Some(name) => name.to_string(),
                None => arbitrary_px(*font_size),
            };
            el.class(format!("text-{}", size));
        } else {
            el.class(format!("w-{}", self.spacing(node.bounds.width)));
            el.class(format!("h-{}", self.spacing(node.bounds.height)));
            if let Some((color, variable)) = node.solid_fill() {
                el.class(format!("bg-{}", self.color(color, variable)));
            }
            if node.has_image_fill() && !node.children.is_empty() {
                el.class(format!("bg-[url({})]", placeholder_image(node)));
            }
        }

        if matches!(node.kind, NodeKind::Ellipse) {
            el.class("rounded-full");
        } else if node.corner_radius > 0.0 {
            el.class(self.radius(node.corner_radius));
        }

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

    fn spacing(&self, value: f64) -> String {
        match tailwind_scale::spacing(value, self.round_values) {
            Some(step) => step.to_string(),
            None => arbitrary_px(value),
        }
    }

    fn padding(&self, p: &Padding) -> Vec<String> {
        if p.is_zero() {
            return Vec::new();
        }
        if let Some(all) = p.uniform() {
            return vec![format!("p-{}", self.spacing(all))];
        }
        if p.left == p.right && p.top == p.bottom {
            return vec![
                format!("px-{}", self.spacing(p.left)),
                format!("py-{}", self.spacing(p.top)),
            ];
        }
        [("pt", p.top), ("pr", p.right), ("pb", p.bottom), ("pl", p.left)]
            .into_iter()
            .filter(|(_, value)| *value > 0.0)
            .map(|(side, value)| format!("{}-{}", side, self.spacing(value)))
            .collect()
    }

    fn radius(&self, value: f64) -> String {
        match tailwind_scale::radius(value, self.round_values) {
            Some("") => "rounded".to_string(),
            Some(step) => format!("rounded-{}", step),
            None => format!("rounded-{}", arbitrary_px(value)),
        }
    }

    /// Color suffix for `bg-` and `text-` classes.
    fn color(&self, color: &Color, variable: Option<&str>) -> String {
        match variable {
            Some(name) if self.settings.flag("customTailwindColors") => {
                return to_kebab_case(name);
            }
            _ => {}
        }

        let base = match tailwind_scale::color_name(color, self.round_colors) {
            Some(name) => name.to_string(),
            None if color.is_opaque() => format!("[{}]", color.to_hex()),
            None => return format!("[{}]", color.to_css().replace(' ', "")),
        };
        if color.is_opaque() {
            base
        } else {
            format!("{}/{}", base, (color.a * 100.0).round() as u32)
        }
    }
}

fn arbitrary_px(value: f64) -> String {
    format!("[{}px]", number(value))
}

#[cfg(test)]
mod tests {
    use figcode_ir::{AutoLayout, Paint};
    use figcode_settings::PluginSettings;

    use super::*;

    fn generate_with(nodes: &[Node], edits: &[(&str, bool)]) -> String {
        let mut settings = PluginSettings::defaults();
        for (key, value) in edits {
            settings.update(key, (*value).into()).unwrap();
        }
        TailwindGenerator
            .generate(
                nodes,
                &settings.for_framework(FrameworkId::Tailwind),
                &GenerationContext::default(),
            )
            .unwrap()
    }

    fn swatch(color: Color) -> Node {
        Node::new("1", "Swatch", NodeKind::Rectangle)
            .with_bounds(0.0, 0.0, 16.0, 16.0)
            .with_fill(Paint::Solid {
                color,
                variable: Some("Brand".into()),
            })
    }

    #[test]
    fn test_single_rectangle() {
        let rect = Node::new("1", "Box", NodeKind::Rectangle)
            .with_bounds(0.0, 0.0, 16.0, 13.0)
            .with_fill(Paint::Solid {
                color: Color::from_rgb8(0x3b, 0x82, 0xf6),
                variable: None,
            });
        insta::assert_snapshot!(
            generate_with(&[rect], &[]),
            @r#"<div class="w-4 h-[13px] bg-blue-500"></div>"#
        );
    }

    #[test]
    fn test_rounding_values() {
        let rect = Node::new("1", "Box", NodeKind::Rectangle).with_bounds(0.0, 0.0, 17.0, 13.0);
        let code = generate_with(&[rect], &[("roundTailwindValues", true)]);
        assert!(code.contains("class=\"w-4 h-3\""));
    }

    #[test]
    fn test_color_modes() {
        let odd = Color::from_rgb8(0x3c, 0x80, 0xf0);

        assert!(generate_with(&[swatch(odd)], &[]).contains("bg-[#3c80f0]"));
        assert!(generate_with(&[swatch(odd)], &[("roundTailwindColors", true)]).contains("bg-blue-500"));
        assert!(generate_with(&[swatch(odd)], &[("customTailwindColors", true)]).contains("bg-brand"));
    }

    #[test]
    fn test_translucent_colors() {
        let black = Color {
            a: 0.5,
            ..Color::BLACK
        };
        assert!(generate_with(&[swatch(black)], &[]).contains("bg-black/50"));

        let odd = Color {
            a: 0.5,
            ..Color::from_rgb8(1, 2, 3)
        };
        assert!(generate_with(&[swatch(odd)], &[]).contains("bg-[rgba(1,2,3,0.5)]"));
    }

    #[test]
    fn test_auto_layout_and_text() {
        let column = Node::new(
            "1",
            "Stack",
            NodeKind::Frame {
                layout: Some(AutoLayout {
                    direction: Direction::Vertical,
                    spacing: 8.0,
                    padding: Padding {
                        top: 4.0,
                        right: 16.0,
                        bottom: 4.0,
                        left: 16.0,
                    },
                }),
            },
        )
        .with_bounds(0.0, 0.0, 320.0, 40.0)
        .with_child(
            Node::new(
                "2",
                "Label",
                NodeKind::Text {
                    characters: "Hi".into(),
                    font_size: 20.0,
                },
            )
            .with_fill(Paint::Solid {
                color: Color::WHITE,
                variable: None,
            }),
        );

        let code = generate_with(&[column], &[("showLayerNames", true)]);
        assert_eq!(
            code,
            "<div class=\"stack flex flex-col gap-2 px-4 py-1 w-80 h-10\">\n  <p class=\"label text-white text-xl\">Hi</p>\n</div>\n"
        );
    }

    #[test]
    fn test_absolute_children_and_radius() {
        let frame = Node::new("1", "Canvas", NodeKind::Frame { layout: None })
            .with_bounds(0.0, 0.0, 100.0, 100.0)
            .with_child(Node::new("2", "Dot", NodeKind::Ellipse).with_bounds(10.0, 20.0, 4.0, 4.0))
            .with_child({
                let mut card = Node::new("3", "Card", NodeKind::Rectangle)
                    .with_bounds(0.0, 0.0, 8.0, 8.0);
                card.corner_radius = 6.0;
                card
            });

        let code = generate_with(&[frame], &[("jsx", true)]);
        assert!(code.starts_with("<div className=\"relative w-[100px] h-[100px]\">"));
        assert!(code.contains("<div className=\"absolute left-2.5 top-5 w-1 h-1 rounded-full\"></div>"));
        assert!(code.contains("<div className=\"absolute left-0 top-0 w-2 h-2 rounded-md\"></div>"));
    }
}
