//! Grade report rendering.
//!
//! Display-only consumers of [`CalculationData`]: a plain-text table report
//! and a CSV export shaped like the original spreadsheet. Both are pure
//! string renderers; the HTTP layer serves them as downloadable attachments.

use chrono::Local;
use tabled::{settings::Style, Table, Tabled};

use crate::routes::calculate::{CalculationData, CourseResult};

/// Attachment filename stamped with the current date, e.g. `grade_report_20260806.csv`.
pub fn report_filename(extension: &str) -> String {
    format!("grade_report_{}.{}", Local::now().format("%Y%m%d"), extension)
}

/// Placeholder for cells that do not apply (no lab, direct-mode components).
const DASH: &str = "—";

fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        DASH.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Course")]
    course: String,
    #[tabled(rename = "Teacher")]
    teacher: String,
    #[tabled(rename = "Cr")]
    credits: String,
    #[tabled(rename = "Mid/30")]
    midterm: String,
    #[tabled(rename = "Ses/20")]
    sessional: String,
    #[tabled(rename = "Fin/50")]
    final_term: String,
    #[tabled(rename = "Theory%")]
    theory_pct: String,
    #[tabled(rename = "Lab/100")]
    lab_marks: String,
    #[tabled(rename = "Lab Gr")]
    lab_grade: String,
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "GP")]
    grade_point: String,
    #[tabled(rename = "Remark")]
    remark: String,
}

impl ReportRow {
    fn from_result(result: &CourseResult) -> Self {
        let course = &result.course;
        let direct = course.marks.out_of_100;

        let credits = if course.has_lab {
            format!(
                "{}+{}L",
                fmt_num(result.total_credits),
                fmt_num(course.lab_credits)
            )
        } else {
            fmt_num(result.total_credits)
        };

        let component = |value: f64| {
            if direct {
                DASH.to_string()
            } else {
                fmt_num(value)
            }
        };

        Self {
            course: course.course_name.clone(),
            teacher: or_dash(&course.teacher),
            credits,
            midterm: component(course.marks.midterm_marks),
            sessional: component(course.marks.sessional_marks),
            final_term: component(course.marks.final_marks),
            theory_pct: format!("{:.2}", result.total_percent),
            lab_marks: if course.has_lab {
                fmt_num(course.marks.lab_marks)
            } else {
                DASH.to_string()
            },
            lab_grade: result.lab_grade.clone(),
            grade: result.grade.clone(),
            grade_point: format!("{:.2}", result.grade_point),
            remark: result.remark.clone(),
        }
    }
}

/// Render the plain-text grade report.
pub fn render_text_report(semester: &str, data: &CalculationData) -> String {
    let rows: Vec<ReportRow> = data.results.iter().map(ReportRow::from_result).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!(
        "Student Grade Report\n\
         Software Engineering  |  {}\n\
         Generated: {}\n\n\
         Current GPA: {:.2}   |   Overall CGPA: {:.2}\n\n\
         {}\n",
        semester,
        Local::now().format("%B %d, %Y"),
        data.current_gpa,
        data.overall_cgpa,
        table
    )
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the spreadsheet-shaped CSV export.
pub fn render_csv(semester: &str, data: &CalculationData) -> String {
    let mut lines = Vec::with_capacity(data.results.len() + 5);

    lines.push("Student Grade Report — Software Engineering".to_string());
    lines.push(csv_line(&[
        "Semester:".to_string(),
        semester.to_string(),
        "Generated:".to_string(),
        Local::now().format("%B %d, %Y").to_string(),
    ]));
    lines.push(csv_line(&[
        "Current GPA:".to_string(),
        format!("{:.2}", data.current_gpa),
        "Overall CGPA:".to_string(),
        format!("{:.2}", data.overall_cgpa),
    ]));
    lines.push(String::new());

    lines.push(csv_line(&[
        "Course".to_string(),
        "Teacher".to_string(),
        "Theory Cr".to_string(),
        "Lab Cr".to_string(),
        "Total Cr".to_string(),
        "Mid /30".to_string(),
        "Sessional /20".to_string(),
        "Final /50".to_string(),
        "Theory %".to_string(),
        "Lab /100".to_string(),
        "Lab Grade".to_string(),
        "Grade".to_string(),
        "Grade Point".to_string(),
        "Remark".to_string(),
    ]));

    for result in &data.results {
        let course = &result.course;
        let direct = course.marks.out_of_100;
        let component = |value: f64| {
            if direct {
                DASH.to_string()
            } else {
                fmt_num(value)
            }
        };
        let lab_cell = |value: String| {
            if course.has_lab {
                value
            } else {
                DASH.to_string()
            }
        };

        lines.push(csv_line(&[
            course.course_name.clone(),
            or_dash(&course.teacher),
            fmt_num(course.theory_credits),
            lab_cell(fmt_num(course.lab_credits)),
            fmt_num(result.total_credits),
            component(course.marks.midterm_marks),
            component(course.marks.sessional_marks),
            component(course.marks.final_marks),
            format!("{:.2}", result.total_percent),
            lab_cell(fmt_num(course.marks.lab_marks)),
            lab_cell(result.lab_grade.clone()),
            result.grade.clone(),
            format!("{:.2}", result.grade_point),
            result.remark.clone(),
        ]));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
