mod generator;
mod view;

pub use figcode_codegen::{GenerationContext, Generator};
pub use generator::{SwiftUiGenerator, SwiftUiMode};
pub use view::View;
