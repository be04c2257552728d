//! Semester GPA and cumulative CGPA aggregation.

use crate::models::CourseInput;
use crate::routes::calculate::CalculationData;
use crate::services::evaluator::evaluate_course;
use crate::services::grading::round2;
use crate::services::ComputeError;

/// Evaluate a set of courses and fold them into semester and overall averages.
///
/// Prior academic history enters as an `(average, weight)` pair: the previous
/// CGPA and the credits it covers. Folding one more semester into a weighted
/// running mean needs nothing finer-grained than that.
///
/// An empty course list is a reportable input error; every division is
/// guarded against zero credits.
pub fn aggregate(
    courses: &[CourseInput],
    previous_cgpa: f64,
    previous_credits: f64,
) -> Result<CalculationData, ComputeError> {
    if courses.is_empty() {
        return Err(ComputeError::InvalidInput("No courses provided".to_string()));
    }

    let mut results = Vec::with_capacity(courses.len());
    let mut sem_grade_points = 0.0;
    let mut sem_credits = 0.0;

    for course in courses {
        let eval = evaluate_course(course);
        sem_grade_points += eval.combined_grade_point * eval.row.total_credits;
        sem_credits += eval.row.total_credits;
        results.push(eval.row);
    }

    let current_gpa = if sem_credits > 0.0 {
        round2(sem_grade_points / sem_credits)
    } else {
        0.0
    };

    let overall_grade_points = previous_cgpa * previous_credits + sem_grade_points;
    let overall_credits = previous_credits + sem_credits;
    let overall_cgpa = if overall_credits > 0.0 {
        round2(overall_grade_points / overall_credits)
    } else {
        current_gpa
    };

    Ok(CalculationData {
        results,
        current_gpa,
        overall_cgpa,
        sem_credits,
        overall_credits,
    })
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod aggregator_tests;
