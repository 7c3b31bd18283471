// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Preference catalog and plugin settings.
//!
//! - [`catalog`] - Static registry of every configurable option
//! - [`PluginSettings`] - The live settings object and its typed decode
//! - [`SettingsStore`] - Loads, validates and persists settings
//! - [`KeyValueStore`] - Host storage abstraction ([`MemoryStore`], [`FileStore`])

pub mod catalog;
mod error;
mod persist;
mod settings;
mod store;
mod value;

pub use catalog::{OptionKind, PreferenceOption, SelectChoice, list_options};
pub use error::{SettingError, StoreError};
pub use persist::{STORAGE_KEY, SettingsStore};
pub use settings::{Decoded, FRAMEWORK_KEY, FrameworkSettings, PluginSettings};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use value::SettingValue;
