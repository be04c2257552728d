//! Course evaluation: theory and lab grading with credit weighting.

use crate::models::{CourseInput, MarkInput};
use crate::routes::calculate::CourseResult;
use crate::services::grading::{grade_from_percent, resolve_percentage, round2, GradeResult};

/// A fully evaluated course: the response row plus the unrounded combined
/// grade point the aggregator weighs with.
#[derive(Debug, Clone)]
pub struct CourseEvaluation {
    pub row: CourseResult,
    pub combined_grade_point: f64,
}

/// Evaluate one course.
///
/// The theory percentage comes from [`resolve_percentage`]; the lab is graded
/// independently on its clamped 0–100 marks and only contributes when the
/// course has a lab with nonzero credits. The combined grade point is the
/// credit-weighted average of the two components.
pub fn evaluate_course(input: &CourseInput) -> CourseEvaluation {
    let lab_credits = input.effective_lab_credits();
    let total_credits = input.total_credits();

    let theory_pct = resolve_percentage(&input.mark_input());
    let theory_grade = grade_from_percent(theory_pct);

    let has_lab_component = input.has_lab && lab_credits > 0.0;
    let (lab_pct, lab_grade) = if has_lab_component {
        let pct = round2(input.marks.lab_marks.clamp(0.0, 100.0));
        (pct, grade_from_percent(pct))
    } else {
        (0.0, GradeResult::none())
    };

    let combined_grade_point = if has_lab_component && total_credits > 0.0 {
        (theory_grade.grade_point * input.theory_credits + lab_grade.grade_point * lab_credits)
            / total_credits
    } else {
        theory_grade.grade_point
    };

    let mut course = input.clone();
    // Echo normalized lab credits so a lab-less course never reports any.
    course.lab_credits = lab_credits;

    CourseEvaluation {
        row: CourseResult {
            course,
            total_credits,
            total_percent: theory_pct,
            grade: theory_grade.letter,
            grade_point: round2(combined_grade_point),
            remark: theory_grade.remark,
            lab_pct,
            lab_grade: lab_grade.letter,
            lab_gp: lab_grade.grade_point,
            lab_remark: lab_grade.remark,
        },
        combined_grade_point,
    }
}

/// Resolve theory marks into a percentage/grade pair without credit context.
pub fn grade_marks(marks: &MarkInput) -> (f64, GradeResult) {
    let pct = resolve_percentage(marks);
    (pct, grade_from_percent(pct))
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod evaluator_tests;
