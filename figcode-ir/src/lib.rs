//! Intermediate representation of selected design content.
//!
//! This crate provides the normalized node tree every generator consumes,
//! and the conversion adapter that builds it from host design nodes.
//!
//! # Architecture
//!
//! ```text
//! host selection (HostNode) → convert (ConversionAdapter) → Node tree → generators
//! ```
//!
//! The IR types are designed to be:
//! - Framework-agnostic (no HTML/Flutter/SwiftUI-specific concerns)
//! - Host-agnostic (nothing here mirrors the host's native node API)
//! - Immutable once built (generators only read them)

mod convert;
mod host;
mod node;
mod paint;

pub use convert::{ConversionAdapter, HostConverter};
pub use host::{HostColor, HostNode, HostPaint, Selection};
pub use node::{AutoLayout, Bounds, Direction, Node, NodeKind, Padding};
pub use paint::{Color, Paint};
