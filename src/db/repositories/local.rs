//! In-memory repository implementation.
//!
//! Used for unit testing and local development; nothing survives the process.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::models::MarksKey;
use crate::db::repository::{MarksRepository, RepositoryResult};
use crate::models::RawMarks;

/// In-memory implementation of [`MarksRepository`].
#[derive(Default)]
pub struct LocalRepository {
    store: RwLock<HashMap<String, RawMarks>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved records.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}

#[async_trait]
impl MarksRepository for LocalRepository {
    async fn save_marks(&self, key: &MarksKey, record: RawMarks) -> RepositoryResult<()> {
        self.store.write().insert(key.to_string(), record);
        Ok(())
    }

    async fn fetch_marks(&self, key: &MarksKey) -> RepositoryResult<Option<RawMarks>> {
        Ok(self.store.read().get(&key.to_string()).cloned())
    }

    async fn fetch_all(&self) -> RepositoryResult<HashMap<String, RawMarks>> {
        Ok(self.store.read().clone())
    }

    async fn delete_marks(&self, key: &MarksKey) -> RepositoryResult<bool> {
        Ok(self.store.write().remove(&key.to_string()).is_some())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
