use serde::{Deserialize, Serialize};

use crate::catalog::CourseDefinition;
use crate::models::RawMarks;

// =========================================================
// Catalog listing types
// =========================================================

/// One catalog course merged with any saved marks for the frontend listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListing {
    pub id: String,
    pub course_name: String,
    pub teacher: String,
    pub theory_credits: f64,
    pub has_lab: bool,
    pub lab_credits: f64,
    pub total_credits: f64,
    /// Saved photo override wins over the catalog default.
    pub teacher_photo: String,
    #[serde(flatten)]
    pub marks: Option<RawMarks>,
}

impl CourseListing {
    /// Merge a catalog definition with an optional saved-marks record;
    /// saved fields win.
    pub fn merged(definition: &CourseDefinition, saved: Option<&RawMarks>) -> Self {
        let teacher_photo = saved
            .and_then(|m| m.teacher_photo.clone())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| definition.teacher_photo.clone());

        // The photo is surfaced through the dedicated field above.
        let marks = saved.cloned().map(|mut m| {
            m.teacher_photo = None;
            m
        });

        Self {
            id: definition.id.clone(),
            course_name: definition.course_name.clone(),
            teacher: definition.teacher.clone(),
            theory_credits: definition.theory_credits,
            has_lab: definition.has_lab,
            lab_credits: definition.lab_credits,
            total_credits: definition.total_credits,
            teacher_photo,
            marks,
        }
    }
}

/// Route function name constant for semester listing
pub const LIST_SEMESTERS: &str = "list_semesters";
/// Route function name constant for course listing
pub const LIST_COURSES: &str = "list_courses";
/// Route function name constant for saving marks
pub const SAVE_MARKS: &str = "save_marks";
