//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use super::dto::{
    CalculateRequest, CalculationData, CourseListing, ExportRequest, HealthResponse,
    PredictRequest, PredictionData, SaveMarksRequest, SaveMarksResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::catalog;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the marks store
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/semesters
///
/// List the semester names available in the course catalog.
pub async fn list_semesters() -> HandlerResult<Vec<String>> {
    Ok(Json(catalog::catalog().semester_names()))
}

/// GET /v1/semesters/{semester}/courses
///
/// List one semester's courses, merged with any saved marks.
pub async fn list_courses(
    State(state): State<AppState>,
    Path(semester): Path<String>,
) -> HandlerResult<Vec<CourseListing>> {
    let courses =
        db_services::courses_for_semester(state.repository.as_ref(), &semester).await?;
    Ok(Json(courses))
}

// =============================================================================
// Saved Marks
// =============================================================================

/// POST /v1/marks
///
/// Save marks (and an optional teacher photo filename) for one course.
pub async fn save_marks(
    State(state): State<AppState>,
    Json(request): Json<SaveMarksRequest>,
) -> HandlerResult<SaveMarksResponse> {
    if request.semester.is_empty() || request.course_id.is_empty() {
        return Err(AppError::BadRequest(
            "Missing semester or course_id".to_string(),
        ));
    }

    let semester = request.semester.clone();
    let course_id = request.course_id.clone();
    let key = db_services::save_course_marks(
        state.repository.as_ref(),
        &semester,
        &course_id,
        request.into_record(),
    )
    .await?;

    Ok(Json(SaveMarksResponse {
        ok: true,
        key: key.to_string(),
    }))
}

// =============================================================================
// Computation
// =============================================================================

/// POST /v1/calculate
///
/// Calculate GPA and CGPA for a list of courses.
pub async fn calculate(Json(request): Json<CalculateRequest>) -> HandlerResult<CalculationData> {
    let data = services::aggregate(
        &request.courses,
        request.previous_cgpa,
        request.previous_credits,
    )?;
    Ok(Json(data))
}

/// POST /v1/predict
///
/// What-if prediction: given marks for one course, return the predicted CGPA.
pub async fn predict(Json(request): Json<PredictRequest>) -> HandlerResult<PredictionData> {
    let marks = request.marks.mark_input();
    Ok(Json(services::predict(
        &marks,
        request.total_credits,
        request.previous_cgpa,
        request.previous_credits,
    )))
}

// =============================================================================
// Report Exports
// =============================================================================

fn attachment(content_type: &'static str, filename: String, body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
}

/// POST /v1/export/csv
///
/// Export grade results as a CSV spreadsheet.
pub async fn export_csv(Json(request): Json<ExportRequest>) -> impl IntoResponse {
    let body = services::render_csv(&request.semester, &request.data);
    attachment(
        "text/csv; charset=utf-8",
        services::report_filename("csv"),
        body,
    )
}

/// POST /v1/export/report
///
/// Export grade results as a formatted plain-text report.
pub async fn export_report(Json(request): Json<ExportRequest>) -> impl IntoResponse {
    let body = services::render_text_report(&request.semester, &request.data);
    attachment(
        "text/plain; charset=utf-8",
        services::report_filename("txt"),
        body,
    )
}
