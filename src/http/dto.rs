//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Response types are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    CalculationData, CourseInput, CourseListing, CourseResult, PredictionData, RawMarks,
};

/// Request body for calculating semester GPA/CGPA.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Courses to evaluate, with mark fields flattened per course
    #[serde(default)]
    pub courses: Vec<CourseInput>,
    /// CGPA earned before this semester
    #[serde(default)]
    pub previous_cgpa: f64,
    /// Credits the previous CGPA covers
    #[serde(default)]
    pub previous_credits: f64,
}

/// Request body for saving one course's marks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMarksRequest {
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(flatten)]
    pub marks: RawMarks,
    /// Filename of a newly chosen teacher photo. Only the name is persisted;
    /// the image bytes stay with the frontend's static assets.
    #[serde(default)]
    pub photo_filename: Option<String>,
}

impl SaveMarksRequest {
    /// The record to persist: the marks plus any photo filename override.
    pub fn into_record(self) -> RawMarks {
        let mut record = self.marks;
        if let Some(name) = self.photo_filename.filter(|n| !n.is_empty()) {
            record.teacher_photo = Some(name);
        }
        record
    }
}

/// Response for saving marks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMarksResponse {
    pub ok: bool,
    /// Composite key the record was stored under
    pub key: String,
}

/// Request body for the what-if prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(flatten)]
    pub marks: RawMarks,
    /// Credits of the hypothetical course
    #[serde(default = "default_total_credits")]
    pub total_credits: f64,
    #[serde(default)]
    pub previous_cgpa: f64,
    #[serde(default)]
    pub previous_credits: f64,
}

fn default_total_credits() -> f64 {
    3.0
}

/// Request body for report exports: the calculation payload plus its semester.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub semester: String,
    #[serde(flatten)]
    pub data: CalculationData,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub repository: String,
}
