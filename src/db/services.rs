//! High-level persistence services for saved marks.
//!
//! These functions work with any [`MarksRepository`] implementation and carry
//! the merge rules the handlers rely on. Use these in application code rather
//! than talking to a repository directly.

use std::collections::HashMap;
use std::str::FromStr;

use crate::catalog;
use crate::db::models::MarksKey;
use crate::db::repository::{MarksRepository, RepositoryResult};
use crate::models::RawMarks;
use crate::routes::catalog::CourseListing;

/// Save one course's marks, returning the composite key it was stored under.
pub async fn save_course_marks(
    repo: &dyn MarksRepository,
    semester: &str,
    course_id: &str,
    marks: RawMarks,
) -> RepositoryResult<MarksKey> {
    let key = MarksKey::new(semester, course_id);
    repo.save_marks(&key, marks).await?;
    Ok(key)
}

/// All saved records for one semester, keyed by course id.
///
/// Keys that do not parse as `"<semester>__<course_id>"` are skipped rather
/// than failing the whole fetch.
pub async fn saved_marks_for_semester(
    repo: &dyn MarksRepository,
    semester: &str,
) -> RepositoryResult<HashMap<String, RawMarks>> {
    let all = repo.fetch_all().await?;
    let mut by_course = HashMap::new();
    for (key, record) in all {
        if let Ok(parsed) = MarksKey::from_str(&key) {
            if parsed.semester == semester {
                by_course.insert(parsed.course_id, record);
            }
        }
    }
    Ok(by_course)
}

/// Catalog courses for one semester merged with any saved marks.
///
/// Saved values override catalog defaults. An unknown semester yields an
/// empty list, matching a semester with no courses defined yet.
pub async fn courses_for_semester(
    repo: &dyn MarksRepository,
    semester: &str,
) -> RepositoryResult<Vec<CourseListing>> {
    let definitions = catalog::catalog().courses(semester).unwrap_or(&[]);
    let saved = saved_marks_for_semester(repo, semester).await?;
    Ok(definitions
        .iter()
        .map(|def| CourseListing::merged(def, saved.get(&def.id)))
        .collect())
}

/// Whether the backing store is reachable.
pub async fn health_check(repo: &dyn MarksRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
