//! Shared code generation utilities for figcode.
//!
//! This crate provides the framework-agnostic half of code generation,
//! used by the per-framework generator crates and by the session layer.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`generator`] - The [`Generator`] trait and its inputs and outputs
//! - [`dispatch`] - Routing a node tree to the right generators
//! - [`format`] - Number formatting shared by generators

pub mod builder;
pub mod dispatch;
pub mod format;
pub mod generator;

pub use builder::{CodeBuilder, Indent};
pub use dispatch::{Block, Dispatch, Dispatcher, GenerationFailure, SETTINGS_HINT};
pub use generator::{GenerationContext, GenerationResult, Generator, prepare_nodes};
