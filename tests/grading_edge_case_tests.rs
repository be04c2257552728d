use sgc_rust::models::{CourseInput, MarkInput, RawMarks};
use sgc_rust::services::{
    aggregate, evaluate_course, grade_from_percent, predict, resolve_percentage,
};

const LETTERS: [&str; 8] = ["A", "B+", "B", "C+", "C", "D+", "D", "F"];

#[test]
fn test_every_percentage_maps_to_a_known_letter() {
    let mut pct = -50.0;
    while pct <= 150.0 {
        let grade = grade_from_percent(pct);
        assert!(
            LETTERS.contains(&grade.letter.as_str()),
            "unexpected letter {} at {}",
            grade.letter,
            pct
        );
        pct += 0.5;
    }
}

#[test]
fn test_threshold_boundaries() {
    assert_eq!(grade_from_percent(85.0).letter, "A");
    assert_eq!(grade_from_percent(85.0).grade_point, 4.0);
    assert_eq!(grade_from_percent(85.0).remark, "Excellent");

    assert_eq!(grade_from_percent(84.99).letter, "B+");
    assert_eq!(grade_from_percent(84.99).grade_point, 3.5);
    assert_eq!(grade_from_percent(84.99).remark, "Outstanding");
}

#[test]
fn test_direct_mode_clamping() {
    assert_eq!(
        resolve_percentage(&MarkInput::Direct { total: 150.0 }),
        100.0
    );
    assert_eq!(resolve_percentage(&MarkInput::Direct { total: -20.0 }), 0.0);
}

#[test]
fn test_breakdown_full_marks_is_hundred() {
    let marks = MarkInput::Breakdown {
        midterm: 30.0,
        sessional: 20.0,
        final_term: 50.0,
    };
    assert_eq!(resolve_percentage(&marks), 100.0);
}

#[test]
fn test_non_finite_percentage_still_grades() {
    // Degenerate arithmetic never panics; NaN falls through the ladder to F.
    assert_eq!(grade_from_percent(f64::NAN).letter, "F");
    assert_eq!(grade_from_percent(f64::INFINITY).letter, "A");
    assert_eq!(grade_from_percent(f64::NEG_INFINITY).letter, "F");
}

fn os_with_lab() -> CourseInput {
    CourseInput {
        id: "OS".to_string(),
        course_name: "Operating Systems".to_string(),
        theory_credits: 3.0,
        has_lab: true,
        lab_credits: 1.0,
        marks: RawMarks {
            out_of_100: true,
            total_100_marks: 90.0,
            lab_marks: 62.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_combined_grade_point_weighting() {
    let eval = evaluate_course(&os_with_lab());
    assert_eq!(eval.row.grade_point, 3.5);
}

#[test]
fn test_aggregate_worked_example() {
    let data = aggregate(&[os_with_lab()], 3.0, 30.0).unwrap();
    assert_eq!(data.current_gpa, 3.5);
    assert_eq!(data.overall_cgpa, 3.06);
    assert_eq!(data.sem_credits, 4.0);
    assert_eq!(data.overall_credits, 34.0);
}

#[test]
fn test_aggregate_empty_list_errors() {
    assert!(aggregate(&[], 0.0, 0.0).is_err());
}

#[test]
fn test_predict_matches_aggregate_fold() {
    // The predictor folds one synthetic course with the aggregator's formula.
    let marks = MarkInput::Direct { total: 90.0 };
    let prediction = predict(&marks, 3.0, 3.0, 30.0);

    let course = CourseInput {
        theory_credits: 3.0,
        marks: RawMarks {
            out_of_100: true,
            total_100_marks: 90.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let data = aggregate(&[course], 3.0, 30.0).unwrap();
    assert_eq!(prediction.predicted_cgpa, data.overall_cgpa);
}

#[test]
fn test_evaluate_course_is_pure() {
    let course = os_with_lab();
    let a = evaluate_course(&course);
    let b = evaluate_course(&course);
    assert_eq!(a.row.total_percent, b.row.total_percent);
    assert_eq!(a.row.grade, b.row.grade);
    assert_eq!(a.row.grade_point, b.row.grade_point);
    assert_eq!(a.row.lab_grade, b.row.lab_grade);
}
