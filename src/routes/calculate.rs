use serde::{Deserialize, Serialize};

use crate::models::CourseInput;

// =========================================================
// Calculation types
// =========================================================

/// One fully evaluated course.
///
/// Echoes the input fields (so the frontend keeps what it sent) alongside the
/// computed percentage, grades, and credit-weighted grade point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResult {
    #[serde(flatten)]
    pub course: CourseInput,
    pub total_credits: f64,
    pub total_percent: f64,
    pub grade: String,
    /// Combined theory+lab grade point, rounded to 2 decimals.
    pub grade_point: f64,
    pub remark: String,
    pub lab_pct: f64,
    pub lab_grade: String,
    pub lab_gp: f64,
    pub lab_remark: String,
}

/// Complete calculation response: per-course rows plus the semester summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationData {
    #[serde(default)]
    pub results: Vec<CourseResult>,
    #[serde(default)]
    pub current_gpa: f64,
    #[serde(default)]
    pub overall_cgpa: f64,
    #[serde(default)]
    pub sem_credits: f64,
    #[serde(default)]
    pub overall_credits: f64,
}

/// Route function name constant for calculation
pub const CALCULATE: &str = "calculate";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_data_default() {
        let data = CalculationData::default();
        assert!(data.results.is_empty());
        assert_eq!(data.current_gpa, 0.0);
        assert_eq!(data.overall_cgpa, 0.0);
    }

    #[test]
    fn test_course_result_serializes_flattened() {
        let result = CourseResult {
            course: CourseInput {
                id: "OS".to_string(),
                ..Default::default()
            },
            total_credits: 4.0,
            total_percent: 80.0,
            grade: "B+".to_string(),
            grade_point: 3.5,
            remark: "Outstanding".to_string(),
            lab_pct: 0.0,
            lab_grade: "—".to_string(),
            lab_gp: 0.0,
            lab_remark: String::new(),
        };
        let value = serde_json::to_value(&result).unwrap();
        // Course fields sit at the top level, not under a nested key.
        assert_eq!(value["id"], "OS");
        assert_eq!(value["grade"], "B+");
        assert!(value.get("course").is_none());
    }
}
