use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a course is delivered to students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseMode {
    Online,
    Offline,
    Hybrid,
}

impl fmt::Display for CourseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseMode::Online => write!(f, "Online"),
            CourseMode::Offline => write!(f, "Offline"),
            CourseMode::Hybrid => write!(f, "Hybrid"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown course mode: {0}")]
pub struct ParseCourseModeError(String);

impl FromStr for CourseMode {
    type Err = ParseCourseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Online" => Ok(CourseMode::Online),
            "Offline" => Ok(CourseMode::Offline),
            "Hybrid" => Ok(CourseMode::Hybrid),
            other => Err(ParseCourseModeError(other.to_string())),
        }
    }
}

/// A course offered by one of the partner institutions.
///
/// The `course_type` field is a free-form label ("B.Tech", "MBA", ...)
/// rather than an enum since partners define their own program names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub institution: String,
    #[serde(rename = "type")]
    pub course_type: String,
    pub duration: String,
    pub mode: CourseMode,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [CourseMode::Online, CourseMode::Offline, CourseMode::Hybrid] {
            assert_eq!(mode.to_string().parse::<CourseMode>().unwrap(), mode);
        }
        assert!("Evening".parse::<CourseMode>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let course = Course {
            id: "1".to_string(),
            title: "Test".to_string(),
            institution: "Test U".to_string(),
            course_type: "B.Sc".to_string(),
            duration: "3 years".to_string(),
            mode: CourseMode::Hybrid,
            description: String::new(),
            image: String::new(),
            featured: true,
        };

        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["type"], "B.Sc");
        assert_eq!(json["mode"], "Hybrid");
        assert_eq!(json["featured"], true);
    }
}
