//! Repository trait for saved-marks persistence.
//!
//! The trait is the abstract interface the service layer works against;
//! concrete backends live in [`crate::db::repositories`].

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use std::collections::HashMap;

use async_trait::async_trait;

use crate::db::models::MarksKey;
use crate::models::RawMarks;

/// Repository trait for saved course marks.
///
/// Records are keyed by semester and course id and treated as immutable
/// snapshots by the computation layer.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait MarksRepository: Send + Sync {
    /// Store or replace the marks for one course.
    async fn save_marks(&self, key: &MarksKey, record: RawMarks) -> RepositoryResult<()>;

    /// Fetch the marks for one course.
    ///
    /// # Returns
    /// * `Ok(Some(RawMarks))` when a record exists
    /// * `Ok(None)` when nothing was saved for the key
    async fn fetch_marks(&self, key: &MarksKey) -> RepositoryResult<Option<RawMarks>>;

    /// Fetch every saved record, keyed by the composite string key.
    async fn fetch_all(&self) -> RepositoryResult<HashMap<String, RawMarks>>;

    /// Delete the marks for one course.
    ///
    /// # Returns
    /// * `Ok(true)` when a record existed and was removed
    /// * `Ok(false)` when there was nothing to delete
    async fn delete_marks(&self, key: &MarksKey) -> RepositoryResult<bool>;

    /// Whether the backing store is reachable and readable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
