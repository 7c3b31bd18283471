use figcode_codegen::{GenerationContext, Generator};
use figcode_codegen_flutter::FlutterGenerator;
use figcode_core::{DisplayLanguage, FrameworkId};
use figcode_ir::{AutoLayout, Color, Direction, Node, NodeKind, Padding, Paint};
use figcode_settings::{PluginSettings, SettingValue};

fn card() -> Node {
    let mut card = Node::new(
        "1:2",
        "Profile Card",
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
        variable: None,
    })
    .with_child(
        Node::new(
            "1:3",
            "Title",
            NodeKind::Text {
                characters: "Hello".into(),
                font_size: 20.0,
            },
        )
        .with_fill(Paint::Solid {
            color: Color::BLACK,
            variable: None,
        }),
    );
    card.corner_radius = 8.0;
    card
}

fn generate(nodes: &[Node], mode: &str) -> String {
    let mut settings = PluginSettings::defaults();
    settings
        .update("flutterGenerationMode", SettingValue::from(mode))
        .unwrap();
    FlutterGenerator
        .generate(
            nodes,
            &settings.for_framework(FrameworkId::Flutter),
            &GenerationContext::default(),
        )
        .unwrap()
}

#[test]
fn test_display_language() {
    assert_eq!(FlutterGenerator.display_language(), DisplayLanguage::Swift);
}

#[test]
fn test_snippet() {
    insta::assert_snapshot!(generate(&[card()], "snippet"), @r"
    Container(
      width: 200.0,
      height: 100.0,
      padding: const EdgeInsets.all(16.0),
      decoration: BoxDecoration(color: Color(0xFFFFFFFF), borderRadius: BorderRadius.circular(8.0)),
      child: Column(
        mainAxisSize: MainAxisSize.min,
        crossAxisAlignment: CrossAxisAlignment.start,
        spacing: 8.0,
        children: [
          Text(
            'Hello',
            style: TextStyle(fontSize: 20.0, color: Color(0xFF000000)),
          ),
        ],
      ),
    )
    ");
}

#[test]
fn test_stateless_widget() {
    let rect = Node::new("1", "Divider", NodeKind::Rectangle).with_bounds(0.0, 0.0, 100.0, 1.0);
    insta::assert_snapshot!(generate(&[rect], "stateless"), @r"
    import 'package:flutter/material.dart';

    class Divider extends StatelessWidget {
      const Divider({super.key});

      @override
      Widget build(BuildContext context) {
        return Container(width: 100.0, height: 1.0);
      }
    }
    ");
}

#[test]
fn test_full_app() {
    let code = generate(&[card()], "fullApp");
    assert!(code.starts_with("import 'package:flutter/material.dart';\n\nvoid main() {\n  runApp(const FigcodeApp());\n}\n"));
    assert!(code.contains("class FigcodeApp extends StatelessWidget {"));
    assert!(code.contains("          child: const ProfileCard(),\n"));
    assert!(code.contains("class ProfileCard extends StatelessWidget {"));
    assert!(code.contains("    return Container(\n"));
}

#[test]
fn test_free_frame_uses_stack() {
    let frame = Node::new("1", "Canvas", NodeKind::Frame { layout: None })
        .with_bounds(0.0, 0.0, 100.0, 100.0)
        .with_child(Node::new("2", "Dot", NodeKind::Ellipse).with_bounds(10.0, 20.0, 4.0, 6.0));

    insta::assert_snapshot!(generate(&[frame], "snippet"), @r"
    Container(
      width: 100.0,
      height: 100.0,
      child: Stack(
        children: [
          Positioned(
            left: 10.0,
            top: 20.0,
            child: Container(
              width: 4.0,
              height: 6.0,
              decoration: BoxDecoration(borderRadius: BorderRadius.all(Radius.elliptical(2.0, 3.0))),
            ),
          ),
        ],
      ),
    )
    ");
}

#[test]
fn test_multiple_roots_and_placeholders() {
    let nodes = [
        Node::new("1", "A", NodeKind::Rectangle).with_bounds(0.0, 0.0, 10.0, 10.0),
        Node::new(
            "2",
            "Note",
            NodeKind::Placeholder {
                host_type: "STICKY".into(),
            },
        )
        .with_bounds(0.0, 0.0, 5.0, 5.0),
    ];
    let code = generate(&nodes, "snippet");
    assert!(code.starts_with("Column(\n  crossAxisAlignment: CrossAxisAlignment.start,\n  children: [\n"));
    assert!(code.contains("    // unsupported: STICKY\n    SizedBox(width: 5.0, height: 5.0),\n"));
}

#[test]
fn test_image_fill() {
    let photo = Node::new("1", "Photo", NodeKind::Rectangle)
        .with_bounds(0.0, 0.0, 64.0, 48.0)
        .with_fill(Paint::Image);
    assert_eq!(
        generate(&[photo], "snippet"),
        "Image.network('https://placehold.co/64x48', width: 64.0, height: 48.0, fit: BoxFit.cover)\n"
    );
}

#[test]
fn test_empty_selection() {
    assert_eq!(generate(&[], "fullApp"), "");
}
