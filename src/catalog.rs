//! Course catalog: per-semester course reference data.
//!
//! The catalog is immutable configuration, not user state. It is loaded once
//! at process start into a global and never mutated afterwards. A built-in
//! catalog covers the Software Engineering program; a TOML file can override
//! it for other programs or updated offerings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One course as defined by the program of study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDefinition {
    pub id: String,
    pub course_name: String,
    #[serde(default)]
    pub teacher: String,
    pub theory_credits: f64,
    #[serde(default)]
    pub has_lab: bool,
    #[serde(default)]
    pub lab_credits: f64,
    #[serde(default)]
    pub total_credits: f64,
    /// Filename of the teacher photo under the frontend's image directory.
    #[serde(default)]
    pub teacher_photo: String,
}

impl CourseDefinition {
    fn normalized(mut self) -> Self {
        if self.total_credits == 0.0 {
            self.total_credits = self.theory_credits
                + if self.has_lab { self.lab_credits } else { 0.0 };
        }
        self
    }
}

/// One semester's ordered course list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterEntry {
    pub name: String,
    #[serde(default, rename = "course")]
    pub courses: Vec<CourseDefinition>,
}

/// Ordered mapping from semester name to course definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemesterCatalog {
    #[serde(default, rename = "semester")]
    semesters: Vec<SemesterEntry>,
}

impl SemesterCatalog {
    /// The built-in Software Engineering catalog.
    ///
    /// Semesters 1–8 exist; only Semester 5 currently carries courses.
    pub fn builtin() -> Self {
        fn course(
            id: &str,
            course_name: &str,
            teacher: &str,
            theory_credits: f64,
            lab_credits: f64,
            teacher_photo: &str,
        ) -> CourseDefinition {
            CourseDefinition {
                id: id.to_string(),
                course_name: course_name.to_string(),
                teacher: teacher.to_string(),
                theory_credits,
                has_lab: lab_credits > 0.0,
                lab_credits,
                total_credits: 0.0,
                teacher_photo: teacher_photo.to_string(),
            }
            .normalized()
        }

        let mut semesters: Vec<SemesterEntry> = (1..=8)
            .map(|n| SemesterEntry {
                name: format!("Semester {}", n),
                courses: Vec::new(),
            })
            .collect();

        semesters[4].courses = vec![
            course("FM", "Formal Methods", "Sir Yasir", 3.0, 0.0, "yasir.jpg"),
            course(
                "IDS",
                "Introduction to Data Science",
                "",
                2.0,
                1.0,
                "ids_teacher.jpg",
            ),
            course(
                "OS",
                "Operating Systems",
                "Saeed Akbar",
                3.0,
                1.0,
                "saeed_akbar.jpg",
            ),
            course(
                "SDA",
                "Software Design & Architecture",
                "Mubashir Husain",
                3.0,
                0.0,
                "mubashir.jpg",
            ),
            course(
                "WDD",
                "Web Design & Development",
                "Nasir Khan",
                2.0,
                1.0,
                "nasir_khan.jpg",
            ),
        ];

        SemesterCatalog { semesters }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut catalog: SemesterCatalog =
            toml::from_str(text).context("Failed to parse catalog TOML")?;
        for semester in &mut catalog.semesters {
            for course in &mut semester.courses {
                *course = course.clone().normalized();
            }
        }
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read catalog file {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `SGC_CATALOG` or a default location, falling back to the
    /// built-in catalog when no file is present.
    ///
    /// Searches for `catalog.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn load_default() -> Result<Self> {
        if let Ok(path) = std::env::var("SGC_CATALOG") {
            return Self::from_file(path);
        }

        let candidates = [
            PathBuf::from("catalog.toml"),
            PathBuf::from("config/catalog.toml"),
            PathBuf::from("../catalog.toml"),
        ];
        for candidate in &candidates {
            if candidate.exists() {
                return Self::from_file(candidate);
            }
        }

        Ok(Self::builtin())
    }

    /// Semester names, in catalog order.
    pub fn semester_names(&self) -> Vec<String> {
        self.semesters.iter().map(|s| s.name.clone()).collect()
    }

    /// Courses for one semester, or `None` for an unknown semester name.
    pub fn courses(&self, semester: &str) -> Option<&[CourseDefinition]> {
        self.semesters
            .iter()
            .find(|s| s.name == semester)
            .map(|s| s.courses.as_slice())
    }

    /// Look up one course definition.
    pub fn find_course(&self, semester: &str, course_id: &str) -> Option<&CourseDefinition> {
        self.courses(semester)?.iter().find(|c| c.id == course_id)
    }

    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }
}

/// Global catalog instance initialized once per process.
static CATALOG: OnceLock<SemesterCatalog> = OnceLock::new();

/// Initialize the global catalog, surfacing load errors.
///
/// Idempotent; later calls are no-ops once a catalog is set.
pub fn init_catalog() -> Result<()> {
    if CATALOG.get().is_some() {
        return Ok(());
    }
    let catalog = SemesterCatalog::load_default()?;
    let _ = CATALOG.set(catalog);
    Ok(())
}

/// Access the global catalog, initializing it on first use.
///
/// Library consumers that skipped [`init_catalog`] get the default load
/// behaviour, with the built-in catalog as the last resort.
pub fn catalog() -> &'static SemesterCatalog {
    CATALOG.get_or_init(|| SemesterCatalog::load_default().unwrap_or_else(|_| SemesterCatalog::builtin()))
}
