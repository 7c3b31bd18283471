mod html;
mod markup;
mod tailwind;
mod tailwind_scale;

pub use figcode_codegen::{GenerationContext, Generator};
pub use html::HtmlGenerator;
pub use tailwind::TailwindGenerator;
