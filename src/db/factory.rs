//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "file-repo")]
use super::repositories::FileRepository;
use super::repositories::LocalRepository;
#[cfg(feature = "file-repo")]
use super::repo_config::DEFAULT_SAVE_FILE;
use super::repository::{MarksRepository, RepositoryResult};
#[cfg(not(feature = "file-repo"))]
use super::repository::RepositoryError;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// JSON file store
    File,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("file", "local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to File when the file backend is
    /// compiled in, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if cfg!(feature = "file-repo") {
            Self::File
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository of the given type.
    ///
    /// # Arguments
    /// * `repo_type` - Which backend to create
    /// * `save_path` - Save file location for the file backend; defaults to
    ///   `saved_data.json` next to the process working directory
    pub fn create(
        repo_type: RepositoryType,
        save_path: Option<&str>,
    ) -> RepositoryResult<Arc<dyn MarksRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
            RepositoryType::File => {
                #[cfg(feature = "file-repo")]
                {
                    Ok(Self::create_file(save_path.unwrap_or(DEFAULT_SAVE_FILE)))
                }
                #[cfg(not(feature = "file-repo"))]
                {
                    let _ = save_path;
                    Err(RepositoryError::ConfigurationError(
                        "File repository requested but the file-repo feature is not enabled"
                            .to_string(),
                    ))
                }
            }
        }
    }

    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn MarksRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a file-backed repository at the given path.
    #[cfg(feature = "file-repo")]
    pub fn create_file(path: impl Into<std::path::PathBuf>) -> Arc<dyn MarksRepository> {
        Arc::new(FileRepository::new(path))
    }
}
