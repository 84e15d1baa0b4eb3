//! Pure filter, sort, and facet helpers over the store's collections.
//!
//! Every screen-level predicate lives here rather than inline in a
//! component so the semantics are testable without a UI. Filters follow
//! one rule throughout: search is case-insensitive substring matching, an
//! unset dimension matches everything, and dimensions AND-combine.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{Application, ApplicationStatus, Course, Partner};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Catalog filter dimensions. Empty strings mean "unset".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CourseFilter {
    pub search: String,
    pub institution: String,
    pub course_type: String,
    pub mode: String,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&course.title, &needle)
            || contains_ci(&course.institution, &needle)
            || contains_ci(&course.description, &needle);
        let matches_institution =
            self.institution.is_empty() || course.institution == self.institution;
        let matches_type = self.course_type.is_empty() || course.course_type == self.course_type;
        let matches_mode = self.mode.is_empty() || course.mode.to_string() == self.mode;

        matches_search && matches_institution && matches_type && matches_mode
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Sort key for the course catalog, parsed from the sort `<select>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CourseSortKey {
    #[default]
    Title,
    Institution,
    Type,
    Duration,
}

impl fmt::Display for CourseSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseSortKey::Title => write!(f, "title"),
            CourseSortKey::Institution => write!(f, "institution"),
            CourseSortKey::Type => write!(f, "type"),
            CourseSortKey::Duration => write!(f, "duration"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown sort key: {0}")]
pub struct ParseCourseSortKeyError(String);

impl FromStr for CourseSortKey {
    type Err = ParseCourseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(CourseSortKey::Title),
            "institution" => Ok(CourseSortKey::Institution),
            "type" => Ok(CourseSortKey::Type),
            "duration" => Ok(CourseSortKey::Duration),
            other => Err(ParseCourseSortKeyError(other.to_string())),
        }
    }
}

/// Filters then sorts the catalog. The sort is a stable lexicographic
/// comparison on the selected field, so ties keep collection order.
pub fn catalog(courses: &[Course], filter: &CourseFilter, sort: CourseSortKey) -> Vec<Course> {
    let mut filtered: Vec<Course> = courses
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| match sort {
        CourseSortKey::Title => a.title.cmp(&b.title),
        CourseSortKey::Institution => a.institution.cmp(&b.institution),
        CourseSortKey::Type => a.course_type.cmp(&b.course_type),
        CourseSortKey::Duration => a.duration.cmp(&b.duration),
    });
    filtered
}

/// Distinct institutions, sorted, for the filter drop-down.
pub fn institutions(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .map(|c| c.institution.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct course types, sorted.
pub fn course_types(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .map(|c| c.course_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct delivery modes, sorted.
pub fn modes(courses: &[Course]) -> Vec<String> {
    courses
        .iter()
        .map(|c| c.mode.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Partner directory search over name, email, and address.
pub fn partner_matches(partner: &Partner, search: &str) -> bool {
    let needle = search.to_lowercase();
    needle.is_empty()
        || contains_ci(&partner.name, &needle)
        || contains_ci(&partner.email, &needle)
        || contains_ci(&partner.address, &needle)
}

/// Admin review filter: text search over the application's snapshot
/// fields plus an optional status equality filter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApplicationFilter {
    pub search: String,
    pub status: Option<ApplicationStatus>,
}

impl ApplicationFilter {
    pub fn matches(&self, application: &Application) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&application.student_name, &needle)
            || contains_ci(&application.student_email, &needle)
            || contains_ci(&application.course_title, &needle)
            || contains_ci(&application.institution, &needle);
        let matches_status = self.status.is_none_or(|s| application.status == s);

        matches_search && matches_status
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.status.is_none()
    }
}

/// How many applications are in the given status, for the header badges.
pub fn count_by_status(applications: &[Application], status: ApplicationStatus) -> usize {
    applications.iter().filter(|a| a.status == status).count()
}

/// The newest applications by submission time, capped at `limit`, for the
/// admin overview panel.
pub fn recent_applications(applications: &[Application], limit: usize) -> Vec<Application> {
    let mut recent = applications.to_vec();
    recent.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    recent.truncate(limit);
    recent
}
