use figcode_codegen::{Dispatcher, GenerationContext, Generator};
use figcode_codegen_html::{HtmlGenerator, TailwindGenerator};
use figcode_core::{DisplayLanguage, FrameworkId};
use figcode_ir::{Node, NodeKind};
use figcode_settings::{PluginSettings, SettingValue};

fn button(parent_id: &str) -> Node {
    let mut node = Node::new("12:3", "Button", NodeKind::Rectangle).with_bounds(40.0, 24.0, 96.0, 32.0);
    node.parent_id = Some(parent_id.to_string());
    node
}

#[test]
fn test_in_place_request_keeps_root_offset() {
    let settings = PluginSettings::defaults().for_framework(FrameworkId::Html);
    let ctx = GenerationContext::new(Some("0:1".into()), false);

    let code = HtmlGenerator.generate(&[button("0:1")], &settings, &ctx).unwrap();
    assert!(code.contains("position: absolute; left: 40px; top: 24px"));

    let code = TailwindGenerator.generate(&[button("0:1")], &settings, &ctx).unwrap();
    assert!(code.contains("absolute left-10 top-6"));
}

#[test]
fn test_standalone_request_drops_root_offset() {
    let settings = PluginSettings::defaults().for_framework(FrameworkId::Html);
    let ctx = GenerationContext::new(Some("0:1".into()), true);

    let code = HtmlGenerator.generate(&[button("0:1")], &settings, &ctx).unwrap();
    insta::assert_snapshot!(code, @r#"<div style="width: 96px; height: 32px"></div>"#);
}

#[test]
fn test_dispatch_tailwind_blocks() {
    let dispatcher = Dispatcher::new()
        .generator(HtmlGenerator)
        .generator(TailwindGenerator);
    let mut settings = PluginSettings::defaults();
    settings
        .update("framework", SettingValue::from("Tailwind"))
        .unwrap();

    let out = dispatcher.generate(
        &[button("0:1")],
        &settings,
        Some(FrameworkId::Tailwind),
        &GenerationContext::default(),
    );

    assert!(out.is_ok());
    assert_eq!(out.results.len(), 4);
    for result in &out.results {
        assert_eq!(result.language, DisplayLanguage::Html);
        assert_eq!(result.code, "<div class=\"w-24 h-8\"></div>\n");
    }
}

#[test]
fn test_optimize_layout_collapses_groups() {
    let group = Node::new("1", "Wrapper", NodeKind::Group)
        .with_bounds(10.0, 10.0, 20.0, 20.0)
        .with_child(Node::new("2", "Inner", NodeKind::Rectangle).with_bounds(0.0, 0.0, 20.0, 20.0));

    let mut settings = PluginSettings::defaults();
    settings.update("optimizeLayout", false.into()).unwrap();
    let kept = TailwindGenerator
        .generate(
            std::slice::from_ref(&group),
            &settings.for_framework(FrameworkId::Tailwind),
            &GenerationContext::default(),
        )
        .unwrap();
    assert!(kept.contains("relative"));

    settings.update("optimizeLayout", true.into()).unwrap();
    let collapsed = TailwindGenerator
        .generate(
            &[group],
            &settings.for_framework(FrameworkId::Tailwind),
            &GenerationContext::default(),
        )
        .unwrap();
    assert_eq!(collapsed, "<div class=\"w-5 h-5\"></div>\n");
}
