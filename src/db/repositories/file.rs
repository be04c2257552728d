//! JSON-file repository implementation.
//!
//! Persists marks between sessions the way the frontend expects: one
//! pretty-printed JSON object keyed by `"<semester>__<course_id>"`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::db::models::MarksKey;
use crate::db::repository::{
    ErrorContext, MarksRepository, RepositoryError, RepositoryResult,
};
use crate::models::RawMarks;

/// File-backed implementation of [`MarksRepository`].
///
/// Records are a handful of numbers per course, so every operation reads and
/// rewrites the full file under a process-wide lock. A missing file reads as
/// an empty store.
pub struct FileRepository {
    path: PathBuf,
    // Guards read-modify-write cycles; file operations are synchronous and brief.
    lock: Mutex<()>,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn context(&self, operation: &str) -> ErrorContext {
        ErrorContext::new(operation)
            .with_entity("save_file")
            .with_details(self.path.display().to_string())
    }

    fn read_all(&self) -> RepositoryResult<HashMap<String, RawMarks>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| RepositoryError::storage(e.to_string(), self.context("read_all")))?;
        serde_json::from_str(&content)
            .map_err(|e| RepositoryError::serialization(e.to_string(), self.context("read_all")))
    }

    fn write_all(&self, records: &HashMap<String, RawMarks>) -> RepositoryResult<()> {
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| RepositoryError::serialization(e.to_string(), self.context("write_all")))?;
        fs::write(&self.path, content)
            .map_err(|e| RepositoryError::storage(e.to_string(), self.context("write_all")))
    }
}

#[async_trait]
impl MarksRepository for FileRepository {
    async fn save_marks(&self, key: &MarksKey, record: RawMarks) -> RepositoryResult<()> {
        let _guard = self.lock.lock();
        let mut all = self.read_all()?;
        all.insert(key.to_string(), record);
        self.write_all(&all)
    }

    async fn fetch_marks(&self, key: &MarksKey) -> RepositoryResult<Option<RawMarks>> {
        let _guard = self.lock.lock();
        Ok(self.read_all()?.remove(&key.to_string()))
    }

    async fn fetch_all(&self) -> RepositoryResult<HashMap<String, RawMarks>> {
        let _guard = self.lock.lock();
        self.read_all()
    }

    async fn delete_marks(&self, key: &MarksKey) -> RepositoryResult<bool> {
        let _guard = self.lock.lock();
        let mut all = self.read_all()?;
        let existed = all.remove(&key.to_string()).is_some();
        if existed {
            self.write_all(&all)?;
        }
        Ok(existed)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        let _guard = self.lock.lock();
        // A missing file is healthy (first run); unreadable contents are not.
        self.read_all().map(|_| true)
    }
}
