//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Default save file for the file-backed repository.
pub const DEFAULT_SAVE_FILE: &str = "saved_data.json";

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub file: FileSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// File store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_save_path")]
    pub path: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            path: default_save_path(),
        }
    }
}

fn default_save_path() -> String {
    DEFAULT_SAVE_FILE.to_string()
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(RepositoryConfig))` when a file was found and parsed
    /// * `Ok(None)` when no configuration file exists
    /// * `Err(RepositoryError)` when a file exists but cannot be parsed
    pub fn load_default() -> Result<Option<Self>, RepositoryError> {
        let candidates = [
            PathBuf::from("repository.toml"),
            PathBuf::from("config/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];
        for candidate in &candidates {
            if candidate.exists() {
                return Self::from_file(candidate).map(Some);
            }
        }
        Ok(None)
    }

    /// The configured repository type, falling back to Local on unknown values.
    pub fn repository_type(&self) -> RepositoryType {
        self.repository
            .repo_type
            .parse()
            .unwrap_or(RepositoryType::Local)
    }

    /// Save file location for the file backend.
    pub fn save_path(&self) -> &str {
        &self.file.path
    }
}
