use crate::models::{CourseInput, RawMarks};
use crate::services::aggregator::aggregate;
use crate::services::report::{render_csv, render_text_report, report_filename};

fn sample_data() -> crate::routes::calculate::CalculationData {
    let theory = CourseInput {
        id: "SDA".to_string(),
        course_name: "Software Design & Architecture".to_string(),
        teacher: "Mubashir Husain".to_string(),
        theory_credits: 3.0,
        marks: RawMarks {
            midterm_marks: 25.0,
            sessional_marks: 17.0,
            final_marks: 44.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let with_lab = CourseInput {
        id: "OS".to_string(),
        course_name: "Operating Systems, Advanced".to_string(),
        teacher: "Saeed Akbar".to_string(),
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
    };
    aggregate(&[theory, with_lab], 3.0, 30.0).unwrap()
}

#[test]
fn test_csv_header_and_rows() {
    let csv = render_csv("Semester 5", &sample_data());
    assert!(csv.starts_with("Student Grade Report — Software Engineering\n"));
    assert!(csv.contains("Semester:,Semester 5,Generated:"));
    assert!(csv.contains("Course,Teacher,Theory Cr,Lab Cr,Total Cr"));
    assert!(csv.contains("Software Design & Architecture,Mubashir Husain,3"));
    assert!(csv.ends_with('\n'));
}

#[test]
fn test_csv_quotes_fields_with_commas() {
    let csv = render_csv("Semester 5", &sample_data());
    assert!(csv.contains("\"Operating Systems, Advanced\""));
}

#[test]
fn test_csv_direct_mode_placeholders() {
    let csv = render_csv("Semester 5", &sample_data());
    // Direct-mode row shows dashes for the component columns.
    let row = csv
        .lines()
        .find(|l| l.contains("Operating Systems"))
        .unwrap();
    assert!(row.contains("—,—,—"));
    // Lab columns carry real values for the lab course.
    assert!(row.contains("62"));
}

#[test]
fn test_csv_no_lab_placeholders() {
    let csv = render_csv("Semester 5", &sample_data());
    let row = csv
        .lines()
        .find(|l| l.contains("Software Design"))
        .unwrap();
    // Lab Cr, Lab /100 and Lab Grade all dash out.
    assert_eq!(row.matches('—').count(), 3);
}

#[test]
fn test_text_report_summary_and_table() {
    let data = sample_data();
    let report = render_text_report("Semester 5", &data);
    assert!(report.contains("Student Grade Report"));
    assert!(report.contains("Software Engineering  |  Semester 5"));
    assert!(report.contains(&format!("Current GPA: {:.2}", data.current_gpa)));
    assert!(report.contains("Grade"));
    assert!(report.contains("Saeed Akbar"));
    // Lab credits render in the condensed credit column.
    assert!(report.contains("4+1L"));
}

#[test]
fn test_report_filename_shape() {
    let name = report_filename("csv");
    assert!(name.starts_with("grade_report_"));
    assert!(name.ends_with(".csv"));
    // grade_report_ + YYYYMMDD + .csv
    assert_eq!(name.len(), "grade_report_".len() + 8 + ".csv".len());
}
