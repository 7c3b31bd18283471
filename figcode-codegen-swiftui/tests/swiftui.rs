use figcode_codegen::{GenerationContext, Generator};
use figcode_codegen_swiftui::SwiftUiGenerator;
use figcode_core::FrameworkId;
use figcode_ir::{AutoLayout, Color, Direction, Node, NodeKind, Padding, Paint};
use figcode_settings::{PluginSettings, SettingValue};

fn row() -> Node {
    let mut row = Node::new(
        "4:1",
        "toolbar",
        NodeKind::Frame {
            layout: Some(AutoLayout {
                direction: Direction::Horizontal,
                spacing: 12.0,
                padding: Padding {
                    top: 8.0,
                    right: 16.0,
                    bottom: 8.0,
                    left: 16.0,
                },
            }),
        },
    )
    .with_bounds(0.0, 0.0, 320.0, 48.0)
    .with_fill(Paint::Solid {
        color: Color::WHITE,
        variable: None,
    })
    .with_child(
        Node::new(
            "4:2",
            "Title",
            NodeKind::Text {
                characters: "Inbox".into(),
                font_size: 17.0,
            },
        )
        .with_fill(Paint::Solid {
            color: Color::BLACK,
            variable: None,
        }),
    )
    .with_child(Node::new("4:3", "Badge", NodeKind::Ellipse).with_bounds(0.0, 0.0, 8.0, 8.0));
    row.corner_radius = 12.0;
    row
}

fn generate(nodes: &[Node], mode: &str) -> String {
    let mut settings = PluginSettings::defaults();
    settings
        .update("swiftUIGenerationMode", SettingValue::from(mode))
        .unwrap();
    SwiftUiGenerator
        .generate(
            nodes,
            &settings.for_framework(FrameworkId::SwiftUi),
            &GenerationContext::default(),
        )
        .unwrap()
}

#[test]
fn test_snippet() {
    insta::assert_snapshot!(generate(&[row()], "snippet"), @r#"
    HStack(alignment: .top, spacing: 12) {
        Text("Inbox")
            .font(.system(size: 17))
            .foregroundColor(Color(red: 0, green: 0, blue: 0))
        Ellipse()
            .fill(Color.clear)
            .frame(width: 8, height: 8)
    }
    .padding(EdgeInsets(top: 8, leading: 16, bottom: 8, trailing: 16))
    .frame(width: 320, height: 48, alignment: .topLeading)
    .background(Color(red: 1, green: 1, blue: 1))
    .clipShape(RoundedRectangle(cornerRadius: 12))
    "#);
}

#[test]
fn test_preview() {
    let rect = Node::new("1", "swatch", NodeKind::Rectangle).with_bounds(0.0, 0.0, 10.0, 10.0);
    insta::assert_snapshot!(generate(&[rect], "preview"), @r"
    import SwiftUI

    struct Swatch: View {
        var body: some View {
            Rectangle()
                .fill(Color.clear)
                .frame(width: 10, height: 10)
        }
    }

    #Preview {
        Swatch()
    }
    ");
}

#[test]
fn test_struct_mode_has_no_preview() {
    let code = generate(&[row()], "struct");
    assert!(code.starts_with("import SwiftUI\n\nstruct Toolbar: View {\n"));
    assert!(!code.contains("#Preview"));
}

#[test]
fn test_group_uses_zstack_offsets() {
    let group = Node::new("1", "Pins", NodeKind::Group)
        .with_bounds(0.0, 0.0, 50.0, 50.0)
        .with_child(Node::new("2", "A", NodeKind::Rectangle).with_bounds(5.0, 10.0, 4.0, 4.0))
        .with_child(Node::new("3", "B", NodeKind::Rectangle).with_bounds(20.0, 30.0, 4.0, 4.0));

    let code = generate(&[group], "snippet");
    assert!(code.starts_with("ZStack(alignment: .topLeading) {\n"));
    assert!(code.contains("        .offset(x: 5, y: 10)\n"));
    assert!(code.contains("        .offset(x: 20, y: 30)\n"));
    assert!(code.ends_with("}\n.frame(width: 50, height: 50, alignment: .topLeading)\n"));
}

#[test]
fn test_multiple_roots_are_stacked() {
    let nodes = [
        Node::new("1", "A", NodeKind::Rectangle),
        Node::new(
            "2",
            "Note",
            NodeKind::Placeholder {
                host_type: "STICKY".into(),
            },
        ),
    ];
    let code = generate(&nodes, "snippet");
    assert!(code.starts_with("VStack(alignment: .leading) {\n"));
    assert!(code.contains("    // unsupported: STICKY\n    EmptyView()\n"));
}

#[test]
fn test_empty_selection() {
    assert_eq!(generate(&[], "preview"), "");
}
