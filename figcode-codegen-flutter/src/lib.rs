mod generator;
mod widget;

pub use figcode_codegen::{GenerationContext, Generator};
pub use generator::{FlutterGenerator, FlutterMode};
pub use widget::{Arg, Widget};
