//! Mark input types and catalog/saved-marks merging.
//!
//! Marks arrive from the frontend and the saved-marks store in a single wire
//! shape ([`RawMarks`]) whose `out_of_100` flag selects the input mode. The
//! typed [`MarkInput`] enum is what the grading services consume.

use serde::{Deserialize, Serialize};

use crate::catalog::CourseDefinition;

/// Raw theory marks for one course, in one of two input modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkInput {
    /// Component marks: midterm out of 30, sessional out of 20, final out of 50.
    Breakdown {
        midterm: f64,
        sessional: f64,
        final_term: f64,
    },
    /// A single total supplied directly out of 100.
    Direct { total: f64 },
}

/// Wire and persisted shape of one course's marks.
///
/// Every field is defaulted so partial records (older saves, sparse frontend
/// payloads) deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMarks {
    #[serde(default)]
    pub midterm_marks: f64,
    #[serde(default)]
    pub sessional_marks: f64,
    #[serde(default)]
    pub final_marks: f64,
    /// When set, `total_100_marks` is authoritative and the components are ignored.
    #[serde(default)]
    pub out_of_100: bool,
    #[serde(default)]
    pub total_100_marks: f64,
    #[serde(default)]
    pub lab_marks: f64,
    /// Teacher photo filename; the image bytes live with the frontend, not here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_photo: Option<String>,
}

impl RawMarks {
    /// The typed input mode for these marks.
    pub fn mark_input(&self) -> MarkInput {
        if self.out_of_100 {
            MarkInput::Direct {
                total: self.total_100_marks,
            }
        } else {
            MarkInput::Breakdown {
                midterm: self.midterm_marks,
                sessional: self.sessional_marks,
                final_term: self.final_marks,
            }
        }
    }
}

/// One course ready for evaluation: identity, credit metadata, and marks.
///
/// Deserializes directly from the frontend's calculate payload, where the
/// mark fields sit flattened next to the course fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default = "default_theory_credits")]
    pub theory_credits: f64,
    #[serde(default)]
    pub has_lab: bool,
    #[serde(default)]
    pub lab_credits: f64,
    #[serde(flatten)]
    pub marks: RawMarks,
}

fn default_theory_credits() -> f64 {
    3.0
}

impl Default for CourseInput {
    fn default() -> Self {
        Self {
            id: String::new(),
            course_name: String::new(),
            teacher: String::new(),
            theory_credits: default_theory_credits(),
            has_lab: false,
            lab_credits: 0.0,
            marks: RawMarks::default(),
        }
    }
}

impl CourseInput {
    /// Lab credits counted toward the course, zero when there is no lab.
    pub fn effective_lab_credits(&self) -> f64 {
        if self.has_lab {
            self.lab_credits
        } else {
            0.0
        }
    }

    /// Theory plus effective lab credits.
    pub fn total_credits(&self) -> f64 {
        self.theory_credits + self.effective_lab_credits()
    }

    pub fn mark_input(&self) -> MarkInput {
        self.marks.mark_input()
    }
}

/// Merge a catalog definition with an optional saved-marks override.
///
/// Saved fields win over catalog defaults; a course with no saved record gets
/// zeroed marks and keeps its catalog identity.
pub fn merge_saved(defaults: &CourseDefinition, saved: Option<&RawMarks>) -> CourseInput {
    CourseInput {
        id: defaults.id.clone(),
        course_name: defaults.course_name.clone(),
        teacher: defaults.teacher.clone(),
        theory_credits: defaults.theory_credits,
        has_lab: defaults.has_lab,
        lab_credits: defaults.lab_credits,
        marks: saved.cloned().unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "marks_tests.rs"]
mod marks_tests;
