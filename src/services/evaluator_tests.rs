use crate::models::{CourseInput, RawMarks};
use crate::services::evaluator::evaluate_course;
use crate::services::grading::NO_GRADE;

fn theory_course(midterm: f64, sessional: f64, final_term: f64) -> CourseInput {
    CourseInput {
        id: "FM".to_string(),
        theory_credits: 3.0,
        marks: RawMarks {
            midterm_marks: midterm,
            sessional_marks: sessional,
            final_marks: final_term,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn lab_course(direct_total: f64, lab_marks: f64) -> CourseInput {
    CourseInput {
        id: "OS".to_string(),
        theory_credits: 3.0,
        has_lab: true,
        lab_credits: 1.0,
        marks: RawMarks {
            out_of_100: true,
            total_100_marks: direct_total,
            lab_marks,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_theory_only_course() {
    let eval = evaluate_course(&theory_course(26.0, 17.0, 43.0));
    assert_eq!(eval.row.total_percent, 86.0);
    assert_eq!(eval.row.grade, "A");
    assert_eq!(eval.row.grade_point, 4.0);
    assert_eq!(eval.row.total_credits, 3.0);
    // No lab: sentinel fields, grade point is the theory grade point.
    assert_eq!(eval.row.lab_grade, NO_GRADE);
    assert_eq!(eval.row.lab_pct, 0.0);
    assert_eq!(eval.combined_grade_point, 4.0);
}

#[test]
fn test_lab_combined_weighting() {
    // Theory A (4.00) over 3 credits, lab C (2.00) over 1 credit.
    let eval = evaluate_course(&lab_course(90.0, 62.0));
    assert_eq!(eval.row.grade, "A");
    assert_eq!(eval.row.lab_grade, "C");
    assert_eq!(eval.row.lab_gp, 2.0);
    assert_eq!(eval.combined_grade_point, 3.5);
    assert_eq!(eval.row.grade_point, 3.5);
    assert_eq!(eval.row.total_credits, 4.0);
}

#[test]
fn test_lab_marks_clamped() {
    let eval = evaluate_course(&lab_course(90.0, 120.0));
    assert_eq!(eval.row.lab_pct, 100.0);
    assert_eq!(eval.row.lab_grade, "A");

    let eval = evaluate_course(&lab_course(90.0, -5.0));
    assert_eq!(eval.row.lab_pct, 0.0);
    assert_eq!(eval.row.lab_grade, "F");
}

#[test]
fn test_zero_lab_credits_means_no_lab_grade() {
    let mut course = lab_course(90.0, 95.0);
    course.lab_credits = 0.0;
    let eval = evaluate_course(&course);
    assert_eq!(eval.row.lab_grade, NO_GRADE);
    assert_eq!(eval.combined_grade_point, 4.0);
    assert_eq!(eval.row.total_credits, 3.0);
}

#[test]
fn test_lab_credits_echo_normalized() {
    let mut course = theory_course(20.0, 10.0, 30.0);
    course.lab_credits = 1.0; // stray value with has_lab = false
    let eval = evaluate_course(&course);
    assert_eq!(eval.row.course.lab_credits, 0.0);
    assert_eq!(eval.row.total_credits, 3.0);
}

#[test]
fn test_zero_total_credits_guarded() {
    let mut course = lab_course(90.0, 70.0);
    course.theory_credits = 0.0;
    course.lab_credits = 0.0;
    let eval = evaluate_course(&course);
    // Falls back to the theory grade point instead of dividing by zero.
    assert_eq!(eval.combined_grade_point, 4.0);
    assert!(eval.row.grade_point.is_finite());
}

#[test]
fn test_evaluation_idempotent() {
    let course = lab_course(83.0, 77.0);
    let first = evaluate_course(&course);
    let second = evaluate_course(&course);
    assert_eq!(first.row.grade, second.row.grade);
    assert_eq!(first.row.grade_point, second.row.grade_point);
    assert_eq!(first.combined_grade_point, second.combined_grade_point);
    assert_eq!(first.row.lab_pct, second.row.lab_pct);
}
