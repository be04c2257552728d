//! Service layer for grade computation and report rendering.
//!
//! This module contains the business logic that sits between the HTTP
//! handlers and the persistence layer: percentage resolution, grade mapping,
//! course evaluation, GPA/CGPA aggregation, what-if prediction, and the
//! report renderers. Everything here is pure computation over plain inputs.

pub mod aggregator;

pub mod evaluator;

pub mod grading;

pub mod predictor;

pub mod report;

pub use aggregator::aggregate;
pub use evaluator::{evaluate_course, grade_marks, CourseEvaluation};
pub use grading::{grade_from_percent, resolve_percentage, GradeResult};
pub use predictor::predict;
pub use report::{render_csv, render_text_report, report_filename};

/// Errors surfaced by the computation services.
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    /// The request cannot be computed from the supplied data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
