//! What-if CGPA prediction for a single hypothetical course.

use crate::models::MarkInput;
use crate::routes::predict::PredictionData;
use crate::services::evaluator::grade_marks;
use crate::services::grading::round2;

/// Predict the CGPA after taking one hypothetical course.
///
/// Resolves the marks to a grade, then folds that single course into the
/// previous CGPA/credits pair with the same weighted-mean formula the
/// aggregator uses for a whole semester.
pub fn predict(
    marks: &MarkInput,
    total_credits: f64,
    previous_cgpa: f64,
    previous_credits: f64,
) -> PredictionData {
    let (total_percent, grade) = grade_marks(marks);

    let overall_grade_points = previous_cgpa * previous_credits + grade.grade_point * total_credits;
    let overall_credits = previous_credits + total_credits;
    let predicted_cgpa = if overall_credits > 0.0 {
        round2(overall_grade_points / overall_credits)
    } else {
        grade.grade_point
    };

    PredictionData {
        total_percent,
        grade: grade.letter,
        grade_point: grade.grade_point,
        remark: grade.remark,
        predicted_cgpa,
        cgpa_change: round2(predicted_cgpa - previous_cgpa),
    }
}

#[cfg(test)]
#[path = "predictor_tests.rs"]
mod predictor_tests;
