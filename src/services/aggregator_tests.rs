use crate::models::{CourseInput, RawMarks};
use crate::services::aggregator::aggregate;
use crate::services::ComputeError;

fn direct_course(id: &str, total: f64, theory_credits: f64) -> CourseInput {
    CourseInput {
        id: id.to_string(),
        theory_credits,
        marks: RawMarks {
            out_of_100: true,
            total_100_marks: total,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn lab_course(id: &str, total: f64, lab_marks: f64) -> CourseInput {
    CourseInput {
        has_lab: true,
        lab_credits: 1.0,
        marks: RawMarks {
            out_of_100: true,
            total_100_marks: total,
            lab_marks,
            ..Default::default()
        },
        ..direct_course(id, total, 3.0)
    }
}

#[test]
fn test_empty_course_list_is_invalid_input() {
    let err = aggregate(&[], 3.0, 30.0).unwrap_err();
    assert!(matches!(err, ComputeError::InvalidInput(_)));
}

#[test]
fn test_single_course_worked_example() {
    // Theory A (4.00) × 3 credits + lab C (2.00) × 1 credit → 3.50 over 4 credits.
    // Folded into previous 3.00 over 30 credits: (90 + 14) / 34 = 3.0588… → 3.06.
    let courses = vec![lab_course("OS", 90.0, 62.0)];
    let data = aggregate(&courses, 3.0, 30.0).unwrap();

    assert_eq!(data.results.len(), 1);
    assert_eq!(data.results[0].grade_point, 3.5);
    assert_eq!(data.current_gpa, 3.5);
    assert_eq!(data.sem_credits, 4.0);
    assert_eq!(data.overall_credits, 34.0);
    assert_eq!(data.overall_cgpa, 3.06);
}

#[test]
fn test_multiple_courses_credit_weighted() {
    // 4.00 × 3 credits and 2.00 × 2 credits → (12 + 4) / 5 = 3.2.
    let courses = vec![
        direct_course("FM", 90.0, 3.0),
        direct_course("WDD", 60.0, 2.0),
    ];
    let data = aggregate(&courses, 0.0, 0.0).unwrap();
    assert_eq!(data.current_gpa, 3.2);
    assert_eq!(data.sem_credits, 5.0);
    // No prior history: CGPA equals the semester GPA.
    assert_eq!(data.overall_cgpa, 3.2);
}

#[test]
fn test_zero_credit_courses_guarded() {
    let courses = vec![direct_course("X", 90.0, 0.0)];
    let data = aggregate(&courses, 0.0, 0.0).unwrap();
    assert_eq!(data.sem_credits, 0.0);
    assert_eq!(data.current_gpa, 0.0);
    assert_eq!(data.overall_credits, 0.0);
    // Zero overall credits falls back to the semester GPA.
    assert_eq!(data.overall_cgpa, 0.0);
}

#[test]
fn test_previous_history_pulls_average_down() {
    let courses = vec![direct_course("FM", 95.0, 3.0)];
    let data = aggregate(&courses, 2.0, 60.0).unwrap();
    assert_eq!(data.current_gpa, 4.0);
    // (2.00 × 60 + 4.00 × 3) / 63 = 2.0952… → 2.10
    assert_eq!(data.overall_cgpa, 2.1);
}

#[test]
fn test_aggregation_uses_unrounded_grade_points() {
    // Theory B+ (3.50) × 2 + lab A (4.00) × 1 → combined 3.6667 (rounds to 3.67
    // in the row) over 3 credits; a second 1-credit F course makes the semester
    // (3.6667 × 3 + 0 × 1) / 4 = 2.75. Aggregating the rounded row value would
    // give 2.7525 → 2.75 here, but the unrounded fold is what the numbers track.
    let mut b_plus_lab = lab_course("IDS", 80.0, 90.0);
    b_plus_lab.theory_credits = 2.0;
    let failing = direct_course("X", 10.0, 1.0);

    let data = aggregate(&[b_plus_lab, failing], 0.0, 0.0).unwrap();
    assert_eq!(data.results[0].grade_point, 3.67);
    assert_eq!(data.current_gpa, 2.75);
}
