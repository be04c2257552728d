//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::catalog::CourseDefinition;
pub use crate::catalog::SemesterCatalog;
pub use crate::models::CourseInput;
pub use crate::models::MarkInput;
pub use crate::models::RawMarks;
pub use crate::routes::calculate::CalculationData;
pub use crate::routes::calculate::CourseResult;
pub use crate::routes::catalog::CourseListing;
pub use crate::routes::predict::PredictionData;
pub use crate::services::grading::GradeResult;
