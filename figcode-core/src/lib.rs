//! Core types and utilities for figcode.
//!
//! This crate provides the identifiers every other figcode crate agrees on:
//! the set of generation targets and the display languages used to tag
//! generated code for syntax highlighting.

mod display;
mod framework;
mod utils;

pub use display::DisplayLanguage;
pub use framework::FrameworkId;
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case};
