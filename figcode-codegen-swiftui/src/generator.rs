use std::str::FromStr;

use eyre::{Result, eyre};
use figcode_codegen::{CodeBuilder, GenerationContext, Generator, format::number, prepare_nodes};
use figcode_core::{DisplayLanguage, FrameworkId, to_pascal_case};
use figcode_ir::{Color, Direction, Node, NodeKind, Padding};
use figcode_settings::FrameworkSettings;

use crate::view::View;

const MODE_KEY: &str = "swiftUIGenerationMode";
const FALLBACK_STRUCT: &str = "ContentView";

/// How much scaffolding surrounds the view hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwiftUiMode {
    /// A `View` struct plus a `#Preview` block.
    #[default]
    Preview,
    /// A `View` struct.
    Struct,
    /// The bare view expression.
    Snippet,
}

impl FromStr for SwiftUiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preview" => Ok(SwiftUiMode::Preview),
            "struct" => Ok(SwiftUiMode::Struct),
            "snippet" => Ok(SwiftUiMode::Snippet),
            other => Err(format!("unknown SwiftUI generation mode '{}'", other)),
        }
    }
}

/// SwiftUI view generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftUiGenerator;

impl Generator for SwiftUiGenerator {
    fn framework(&self) -> FrameworkId {
        FrameworkId::SwiftUi
    }

    fn display_language(&self) -> DisplayLanguage {
        DisplayLanguage::Swift
    }

    fn generate(
        &self,
        nodes: &[Node],
        settings: &FrameworkSettings,
        _ctx: &GenerationContext,
    ) -> Result<String> {
        let mode = match settings.choice(MODE_KEY) {
            Some(value) => value.parse::<SwiftUiMode>().map_err(|e| eyre!(e))?,
            None => SwiftUiMode::default(),
        };
        let nodes = prepare_nodes(nodes, settings);
        let root = match nodes.as_ref() {
            [] => return Ok(String::new()),
            [node] => node_view(node),
            many => View::container(
                "VStack(alignment: .leading)",
                many.iter().map(node_view).collect(),
            ),
        };

        let mut b = CodeBuilder::swift();
        if mode == SwiftUiMode::Snippet {
            root.render(&mut b);
            return Ok(b.build());
        }

        let name = struct_name(&nodes);
        b.push_line("import SwiftUI").push_blank();
        b.push_block(&format!("struct {}: View {{", name), "}", |b| {
            b.push_block("var body: some View {", "}", |b| root.render(b));
        });
        if mode == SwiftUiMode::Preview {
            b.push_blank();
            b.push_block("#Preview {", "}", |b| {
                b.push_line(&format!("{}()", name));
            });
        }
        Ok(b.build())
    }
}

fn struct_name(nodes: &[Node]) -> String {
    let name = nodes.first().map(|n| to_pascal_case(&n.name)).unwrap_or_default();
    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => name,
        Some(_) => format!("View{}", name),
        None => FALLBACK_STRUCT.to_string(),
    }
}

fn node_view(node: &Node) -> View {
    let fixed = frame(node, None);

    match &node.kind {
        NodeKind::Text {
            characters,
            font_size,
        } => View::new(format!("Text({})", swift_string(characters)))
            .modifier(format!("font(.system(size: {}))", number(*font_size)))
            .modifier_opt(
                node.solid_fill()
                    .map(|(color, _)| format!("foregroundColor({})", swift_color(color))),
            ),
        NodeKind::Placeholder { host_type } => View::new("EmptyView()")
            .modifier(fixed)
            .comment(format!("unsupported: {}", host_type)),
        _ if node.has_image_fill() && node.children.is_empty() => View::new(format!(
            "AsyncImage(url: URL(string: \"https://placehold.co/{}x{}\"))",
            number(node.bounds.width),
            number(node.bounds.height)
        ))
        .modifier(fixed),
        NodeKind::Frame { layout } if !node.children.is_empty() => {
            let stack = match layout {
                Some(layout) => {
                    let head = match layout.direction {
                        Direction::Horizontal => "HStack(alignment: .top",
                        Direction::Vertical => "VStack(alignment: .leading",
                    };
                    View::container(
                        format!("{}, spacing: {})", head, number(layout.spacing)),
                        node.children.iter().map(node_view).collect(),
                    )
                    .modifier_opt(padding(&layout.padding))
                }
                None => zstack(node),
            };
            decorate(stack.modifier(frame(node, Some(".topLeading"))), node)
        }
        NodeKind::Group if !node.children.is_empty() => {
            zstack(node).modifier(frame(node, Some(".topLeading")))
        }
        NodeKind::Ellipse => View::new("Ellipse()")
            .modifier(format!("fill({})", fill(node)))
            .modifier(fixed),
        _ if node.corner_radius > 0.0 => View::new(format!(
            "RoundedRectangle(cornerRadius: {})",
            number(node.corner_radius)
        ))
        .modifier(format!("fill({})", fill(node)))
        .modifier(fixed),
        _ => View::new("Rectangle()")
            .modifier(format!("fill({})", fill(node)))
            .modifier(fixed),
    }
}

fn frame(node: &Node, alignment: Option<&str>) -> String {
    let size = format!(
        "width: {}, height: {}",
        number(node.bounds.width),
        number(node.bounds.height)
    );
    match alignment {
        Some(alignment) => format!("frame({}, alignment: {})", size, alignment),
        None => format!("frame({})", size),
    }
}

/// Background and corner radius for container views.
fn decorate(view: View, node: &Node) -> View {
    let view = view.modifier_opt(
        node.solid_fill()
            .map(|(color, _)| format!("background({})", swift_color(color))),
    );
    if node.corner_radius > 0.0 {
        view.modifier(format!(
            "clipShape(RoundedRectangle(cornerRadius: {}))",
            number(node.corner_radius)
        ))
    } else {
        view
    }
}

fn zstack(node: &Node) -> View {
    View::container(
        "ZStack(alignment: .topLeading)",
        node.children
            .iter()
            .map(|child| {
                node_view(child).modifier(format!(
                    "offset(x: {}, y: {})",
                    number(child.bounds.x),
                    number(child.bounds.y)
                ))
            })
            .collect(),
    )
}

fn padding(p: &Padding) -> Option<String> {
    if p.is_zero() {
        return None;
    }
    Some(match p.uniform() {
        Some(all) => format!("padding({})", number(all)),
        None => format!(
            "padding(EdgeInsets(top: {}, leading: {}, bottom: {}, trailing: {}))",
            number(p.top),
            number(p.left),
            number(p.bottom),
            number(p.right)
        ),
    })
}

fn fill(node: &Node) -> String {
    node.solid_fill()
        .map(|(color, _)| swift_color(color))
        .unwrap_or_else(|| "Color.clear".to_string())
}

fn swift_color(color: &Color) -> String {
    let rgb = format!(
        "red: {}, green: {}, blue: {}",
        number(color.r),
        number(color.g),
        number(color.b)
    );
    if color.is_opaque() {
        format!("Color({})", rgb)
    } else {
        format!("Color({}, opacity: {})", rgb, number(color.a))
    }
}

fn swift_string(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("preview".parse(), Ok(SwiftUiMode::Preview));
        assert_eq!("struct".parse(), Ok(SwiftUiMode::Struct));
        assert!("full".parse::<SwiftUiMode>().is_err());
    }

    #[test]
    fn test_swift_color() {
        assert_eq!(swift_color(&Color::WHITE), "Color(red: 1, green: 1, blue: 1)");
        let faded = Color {
            a: 0.25,
            ..Color::rgb(0.5, 0.0, 1.0)
        };
        assert_eq!(
            swift_color(&faded),
            "Color(red: 0.5, green: 0, blue: 1, opacity: 0.25)"
        );
    }

    #[test]
    fn test_swift_string_escapes() {
        assert_eq!(swift_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
