//! `figcode.toml` configuration.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use eyre::{Result, WrapErr};
use figcode_settings::{FileStore, KeyValueStore};
use serde::Deserialize;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "figcode.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: StorageConfig,
    pub log: LogConfig,
}

/// Where client storage lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".figcode/client-storage.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read the configuration at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .wrap_err_with(|| format!("invalid configuration in {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).wrap_err_with(|| format!("failed to read {}", path.display())),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The client storage backend.
    pub fn open_store(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(FileStore::new(&self.storage.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_parse_sections() {
        let config = Config::parse(
            r#"
            [storage]
            path = "/tmp/figcode.json"

            [log]
            level = "figcode=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/figcode.json"));
        assert_eq!(config.log.level, "figcode=debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("[log]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[storage]\nfile = \"x\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid configuration"));
    }
}
