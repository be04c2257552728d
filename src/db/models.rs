//! Shared data models re-exported for database layer consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::models::RawMarks;

/// Separator between the semester and course id in a composite key.
const KEY_SEPARATOR: &str = "__";

/// Composite key for one course's saved marks: `"<semester>__<course_id>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarksKey {
    pub semester: String,
    pub course_id: String,
}

impl MarksKey {
    pub fn new(semester: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            semester: semester.into(),
            course_id: course_id.into(),
        }
    }
}

impl fmt::Display for MarksKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.semester, KEY_SEPARATOR, self.course_id)
    }
}

impl FromStr for MarksKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (semester, course_id) = s
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| format!("Malformed marks key: {}", s))?;
        if semester.is_empty() || course_id.is_empty() {
            return Err(format!("Malformed marks key: {}", s));
        }
        Ok(Self::new(semester, course_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        let key = MarksKey::new("Semester 5", "OS");
        assert_eq!(key.to_string(), "Semester 5__OS");
    }

    #[test]
    fn test_key_parse_roundtrip() {
        let key = MarksKey::new("Semester 5", "IDS");
        let parsed: MarksKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_key_parse_malformed() {
        assert!("Semester 5".parse::<MarksKey>().is_err());
        assert!("__OS".parse::<MarksKey>().is_err());
        assert!("Semester 5__".parse::<MarksKey>().is_err());
    }
}
