//! Configuration management for regform
//!
//! Loads storage and validation settings from an optional `config.toml` with
//! `REGFORM__*` environment overrides. Every key has a default, so the file
//! itself is not required.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::storage::StorageLayout;
use crate::validation::ValidationMode;

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
}

/// Which key-value backend holds the users blob
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    File,
    Memory,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: BackendKind,

    /// Directory holding one `<key>.json` file per storage key (file backend only)
    pub data_dir: String,

    /// Storage key the users blob lives under
    pub key: String,

    /// Shape written on save; loading accepts either shape
    pub layout: StorageLayout,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub mode: ValidationMode,

    /// Reject passwords that contain the username
    pub forbid_username_in_password: bool,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem (extension optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::with_defaults(Config::builder())?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("REGFORM").separator("__"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        builder
            .set_default("storage.backend", "file")?
            .set_default("storage.data_dir", "./data")?
            .set_default("storage.key", "users")?
            .set_default("storage.layout", "map")?
            .set_default("validation.mode", "fail_fast")?
            .set_default("validation.forbid_username_in_password", true)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage.key cannot be empty".into(),
            ));
        }

        if self.storage.backend == BackendKind::File && self.storage.data_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "storage.data_dir cannot be empty for the file backend".into(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: BackendKind::File,
                data_dir: "./data".to_string(),
                key: "users".to_string(),
                layout: StorageLayout::Map,
            },
            validation: ValidationConfig {
                mode: ValidationMode::FailFast,
                forbid_username_in_password: true,
            },
        }
    }
}

impl StorageConfig {
    /// Get data directory as PathBuf
    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
