//! Percentage resolution and grade mapping.
//!
//! Theory marks arrive either as a component breakdown (midterm out of 30,
//! sessional out of 20, final term out of 50) or as a single total out of 100.
//! The resolved percentage is mapped onto the program's fixed grade ladder.

use serde::{Deserialize, Serialize};

use crate::models::MarkInput;

/// Letter shown in place of a grade when a course has no lab component.
pub const NO_GRADE: &str = "—";

/// Grade ladder, inclusive lower bounds, evaluated top-down.
const GRADE_BANDS: [(f64, &str, f64, &str); 7] = [
    (85.0, "A", 4.00, "Excellent"),
    (78.0, "B+", 3.50, "Outstanding"),
    (70.0, "B", 3.00, "Good"),
    (65.0, "C+", 2.50, "Above Average"),
    (60.0, "C", 2.00, "Average"),
    (55.0, "D+", 1.50, "Below Average"),
    (50.0, "D", 1.00, "Poor but Passing"),
];

/// A letter grade with its grade point and remark.
///
/// The triple is a pure function of the percentage; see [`grade_from_percent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub letter: String,
    pub grade_point: f64,
    pub remark: String,
}

impl GradeResult {
    /// Sentinel for a component that was not graded (no lab).
    pub fn none() -> Self {
        Self {
            letter: NO_GRADE.to_string(),
            grade_point: 0.0,
            remark: String::new(),
        }
    }

    /// Whether this is the ungraded sentinel.
    pub fn is_none(&self) -> bool {
        self.letter == NO_GRADE
    }
}

/// Round to 2 decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve a course's raw theory marks into a percentage, rounded to 2 decimals.
///
/// Direct mode clamps the supplied total to [0, 100]. Breakdown mode sums the
/// weighted components `mid/30 × 30 + sessional/20 × 20 + final/50 × 50`; the
/// denominators equal the nominal maxima, so raw marks pass straight through.
/// Breakdown results are intentionally NOT clamped: out-of-range components
/// propagate, matching the behaviour of existing saved data and reports.
pub fn resolve_percentage(input: &MarkInput) -> f64 {
    match *input {
        MarkInput::Direct { total } => round2(total.clamp(0.0, 100.0)),
        MarkInput::Breakdown {
            midterm,
            sessional,
            final_term,
        } => {
            let mid_part = (midterm / 30.0) * 30.0;
            let sessional_part = (sessional / 20.0) * 20.0;
            let final_part = (final_term / 50.0) * 50.0;
            round2(mid_part + sessional_part + final_part)
        }
    }
}

/// Map a percentage onto the grade ladder.
///
/// Total over all real inputs: percentages below 50 (including negative
/// arithmetic artifacts) fall through to F, percentages at or above 85 cap at A.
pub fn grade_from_percent(pct: f64) -> GradeResult {
    for &(threshold, letter, point, remark) in GRADE_BANDS.iter() {
        if pct >= threshold {
            return GradeResult {
                letter: letter.to_string(),
                grade_point: point,
                remark: remark.to_string(),
            };
        }
    }
    GradeResult {
        letter: "F".to_string(),
        grade_point: 0.0,
        remark: "Failing".to_string(),
    }
}

#[cfg(test)]
#[path = "grading_tests.rs"]
mod grading_tests;
