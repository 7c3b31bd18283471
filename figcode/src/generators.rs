use figcode_codegen::Dispatcher;
use figcode_codegen_flutter::FlutterGenerator;
use figcode_codegen_html::{HtmlGenerator, TailwindGenerator};
use figcode_codegen_swiftui::SwiftUiGenerator;

/// Dispatcher with the built-in generator for every framework.
pub fn default_dispatcher() -> Dispatcher {
    Dispatcher::new()
        .generator(HtmlGenerator)
        .generator(TailwindGenerator)
        .generator(FlutterGenerator)
        .generator(SwiftUiGenerator)
}

#[cfg(test)]
mod tests {
    use figcode_core::FrameworkId;

    use super::*;

    #[test]
    fn test_every_framework_has_a_generator() {
        let dispatcher = default_dispatcher();
        for framework in FrameworkId::ALL {
            let generator = dispatcher.get(framework).unwrap();
            assert_eq!(generator.framework(), framework);
        }
    }
}
