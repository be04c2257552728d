//! Persistence module for saved course marks.
//!
//! This module provides abstractions for marks storage via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! The module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, report rendering)         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Catalog/saved-marks merging                           │
//! │  - Per-semester filtering                                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │      File Repository │ Local Repository       │
//!     │     (saved_data.json)│    (in-memory)         │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For application code, use the service layer:**
//! ```ignore
//! use sgc_rust::db::{services, LocalRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let courses = services::courses_for_semester(&repo, "Semester 5").await?;
//!     Ok(())
//! }
//! ```

// Feature flag priority: file > local
// When multiple features are enabled (e.g., --all-features), file takes precedence.
#[cfg(not(any(feature = "file-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;


// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    courses_for_semester, health_check, save_course_marks, saved_marks_for_semester,
};

// ==================== Repository Pattern Exports ====================

pub use models::MarksKey;
pub use repo_config::{RepositoryConfig, DEFAULT_SAVE_FILE};

// Repository trait and implementations
pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "file-repo")]
pub use repositories::FileRepository;
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, MarksRepository, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn MarksRepository>> = OnceLock::new();

/// Resolve backend type and save path from env vars and `repository.toml`.
///
/// Environment variables win over the configuration file.
#[cfg(feature = "file-repo")]
fn resolve_settings() -> (RepositoryType, String) {
    let config = RepositoryConfig::load_default().ok().flatten();

    let repo_type = if std::env::var("REPOSITORY_TYPE").is_ok() {
        RepositoryType::from_env()
    } else if let Some(cfg) = &config {
        cfg.repository_type()
    } else {
        RepositoryType::from_env()
    };

    let save_path = std::env::var("SGC_SAVE_FILE").unwrap_or_else(|_| {
        config
            .as_ref()
            .map(|c| c.save_path().to_string())
            .unwrap_or_else(|| DEFAULT_SAVE_FILE.to_string())
    });

    (repo_type, save_path)
}

// Priority: file > local (when --all-features is used)
#[cfg(feature = "file-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn MarksRepository>> {
    let (repo_type, save_path) = resolve_settings();
    RepositoryFactory::create(repo_type, Some(&save_path))
}

#[cfg(all(feature = "local-repo", not(feature = "file-repo")))]
fn create_selected_repository() -> RepositoryResult<Arc<dyn MarksRepository>> {
    Ok(RepositoryFactory::create_local())
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Access the global repository, initializing it on first use.
pub fn get_repository() -> Result<&'static Arc<dyn MarksRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
