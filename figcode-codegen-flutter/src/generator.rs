use std::str::FromStr;

use eyre::{Result, eyre};
use figcode_codegen::{CodeBuilder, GenerationContext, Generator, format::double, prepare_nodes};
use figcode_core::{DisplayLanguage, FrameworkId, to_pascal_case};
use figcode_ir::{Color, Direction, Node, NodeKind, Padding};
use figcode_settings::FrameworkSettings;

use crate::widget::Widget;

const MODE_KEY: &str = "flutterGenerationMode";
const APP_CLASS: &str = "FigcodeApp";
const FALLBACK_CLASS: &str = "GeneratedWidget";

/// How much scaffolding surrounds the widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlutterMode {
    /// `main()`, a `MaterialApp` and the widget class.
    #[default]
    FullApp,
    /// A `StatelessWidget` class.
    Stateless,
    /// The bare widget expression.
    Snippet,
}

impl FromStr for FlutterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullApp" => Ok(FlutterMode::FullApp),
            "stateless" => Ok(FlutterMode::Stateless),
            "snippet" => Ok(FlutterMode::Snippet),
            other => Err(format!("unknown Flutter generation mode '{}'", other)),
        }
    }
}

/// Flutter widget generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlutterGenerator;

impl Generator for FlutterGenerator {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Flutter
    }

    // The host panel highlights Dart with its Swift grammar.
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
            Some(value) => value.parse::<FlutterMode>().map_err(|e| eyre!(e))?,
            None => FlutterMode::default(),
        };
        let nodes = prepare_nodes(nodes, settings);
        let Some(root) = root_widget(&nodes) else {
            return Ok(String::new());
        };

        let mut b = CodeBuilder::dart();
        match mode {
            FlutterMode::Snippet => root.render(&mut b, "", ""),
            FlutterMode::Stateless => {
                b.push_line("import 'package:flutter/material.dart';").push_blank();
                widget_class(&mut b, &class_name(&nodes), &root);
            }
            FlutterMode::FullApp => {
                let class = class_name(&nodes);
                b.push_line("import 'package:flutter/material.dart';").push_blank();
                b.push_block("void main() {", "}", |b| {
                    b.push_line(&format!("runApp(const {}());", APP_CLASS));
                });
                b.push_blank();
                let app = Widget::new("MaterialApp").widget(
                    "home",
                    Widget::new("Scaffold").widget(
                        "body",
                        Widget::new("Center").child(Widget::new(format!("const {}", class))),
                    ),
                );
                widget_class(&mut b, APP_CLASS, &app);
                b.push_blank();
                widget_class(&mut b, &class, &root);
            }
        }
        Ok(b.build())
    }
}

fn widget_class(b: &mut CodeBuilder, name: &str, body: &Widget) {
    b.push_block(
        &format!("class {} extends StatelessWidget {{", name),
        "}",
        |b| {
            b.push_line(&format!("const {}({{super.key}});", name));
            b.push_blank();
            b.push_line("@override");
            b.push_block("Widget build(BuildContext context) {", "}", |b| {
                body.render(b, "return ", ";");
            });
        },
    );
}

/// Class name derived from the first root's layer name.
fn class_name(nodes: &[Node]) -> String {
    let name = nodes.first().map(|n| to_pascal_case(&n.name)).unwrap_or_default();
    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => name,
        Some(_) => format!("Widget{}", name),
        None => FALLBACK_CLASS.to_string(),
    }
}

/// A single root stands alone; several are stacked in a column.
fn root_widget(nodes: &[Node]) -> Option<Widget> {
    match nodes {
        [] => None,
        [node] => Some(node_widget(node)),
        _ => Some(
            Widget::new("Column")
                .arg("crossAxisAlignment", "CrossAxisAlignment.start")
                .children(nodes.iter().map(node_widget).collect()),
        ),
    }
}

fn node_widget(node: &Node) -> Widget {
    let w = double(node.bounds.width);
    let h = double(node.bounds.height);

    match &node.kind {
        NodeKind::Text {
            characters,
            font_size,
        } => {
            let mut style = Widget::new("TextStyle").arg("fontSize", double(*font_size));
            if let Some((color, _)) = node.solid_fill() {
                style = style.arg("color", dart_color(color));
            }
            Widget::new("Text")
                .positional(dart_string(characters))
                .widget("style", style)
        }
        NodeKind::Placeholder { host_type } => Widget::new("SizedBox")
            .arg("width", w)
            .arg("height", h)
            .comment(format!("unsupported: {}", host_type)),
        _ if node.has_image_fill() && node.children.is_empty() => {
            Widget::new("Image.network")
                .positional(dart_string(&format!(
                    "https://placehold.co/{}x{}",
                    figcode_codegen::format::number(node.bounds.width),
                    figcode_codegen::format::number(node.bounds.height)
                )))
                .arg("width", w)
                .arg("height", h)
                .arg("fit", "BoxFit.cover")
        }
        NodeKind::Group => {
            let stack = stack(node);
            Widget::new("SizedBox")
                .arg("width", w)
                .arg("height", h)
                .child(stack)
        }
        NodeKind::Frame { layout } => {
            let mut container = Widget::new("Container").arg("width", w).arg("height", h);
            if let Some(padding) = layout.as_ref().map(|l| &l.padding).filter(|p| !p.is_zero()) {
                container = container.arg("padding", edge_insets(padding));
            }
            if let Some(decoration) = decoration(node) {
                container = container.widget("decoration", decoration);
            }
            match layout {
                Some(layout) if !node.children.is_empty() => {
                    let name = match layout.direction {
                        Direction::Horizontal => "Row",
                        Direction::Vertical => "Column",
                    };
                    let mut flex = Widget::new(name)
                        .arg("mainAxisSize", "MainAxisSize.min")
                        .arg("crossAxisAlignment", "CrossAxisAlignment.start");
                    if layout.spacing > 0.0 {
                        flex = flex.arg("spacing", double(layout.spacing));
                    }
                    container.child(flex.children(node.children.iter().map(node_widget).collect()))
                }
                None if !node.children.is_empty() => container.child(stack(node)),
                _ => container,
            }
        }
        NodeKind::Rectangle | NodeKind::Ellipse | NodeKind::Vector => {
            let container = Widget::new("Container").arg("width", w).arg("height", h);
            match decoration(node) {
                Some(decoration) => container.widget("decoration", decoration),
                None => container,
            }
        }
    }
}

fn stack(node: &Node) -> Widget {
    Widget::new("Stack").children(
        node.children
            .iter()
            .map(|child| {
                Widget::new("Positioned")
                    .arg("left", double(child.bounds.x))
                    .arg("top", double(child.bounds.y))
                    .child(node_widget(child))
            })
            .collect(),
    )
}

fn decoration(node: &Node) -> Option<Widget> {
    let color = node.solid_fill().map(|(color, _)| dart_color(color));
    let radius = if matches!(node.kind, NodeKind::Ellipse) {
        Some(format!(
            "BorderRadius.all(Radius.elliptical({}, {}))",
            double(node.bounds.width / 2.0),
            double(node.bounds.height / 2.0)
        ))
    } else if node.corner_radius > 0.0 {
        Some(format!("BorderRadius.circular({})", double(node.corner_radius)))
    } else {
        None
    };

    if color.is_none() && radius.is_none() {
        return None;
    }
    Some(
        Widget::new("BoxDecoration")
            .arg_opt("color", color)
            .arg_opt("borderRadius", radius),
    )
}

fn edge_insets(p: &Padding) -> String {
    match p.uniform() {
        Some(all) => format!("const EdgeInsets.all({})", double(all)),
        None => format!(
            "const EdgeInsets.only(left: {}, top: {}, right: {}, bottom: {})",
            double(p.left),
            double(p.top),
            double(p.right),
            double(p.bottom)
        ),
    }
}

fn dart_color(color: &Color) -> String {
    let (r, g, b) = color.rgb8();
    format!("Color(0x{:02X}{:02X}{:02X}{:02X})", color.alpha8(), r, g, b)
}

fn dart_string(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "\\$")
        .replace('\n', "\\n");
    format!("'{}'", escaped)
}
