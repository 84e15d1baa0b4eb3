use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of an application.
///
/// `Pending` is the initial state; `Approved` and `Rejected` are terminal.
/// There is no transition back to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown application status: {0}")]
pub struct ParseApplicationStatusError(String);

impl FromStr for ApplicationStatus {
    type Err = ParseApplicationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(ParseApplicationStatusError(other.to_string())),
        }
    }
}

/// An admin decision on a pending application. Pending is deliberately not
/// expressible here, which keeps the status state machine one-way at the
/// type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationDecision {
    Approved,
    Rejected,
}

impl ApplicationDecision {
    pub fn status(self) -> ApplicationStatus {
        match self {
            ApplicationDecision::Approved => ApplicationStatus::Approved,
            ApplicationDecision::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl fmt::Display for ApplicationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.status().fmt(f)
    }
}

/// A student's application to a course.
///
/// Student and course fields are denormalized snapshots captured at
/// submission time; later edits to the course or the session user do not
/// propagate into existing applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub student_address: String,
    pub course_title: String,
    pub institution: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The fields a student supplies when applying; the store mints the id,
/// timestamps, and initial status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDraft {
    pub student_id: String,
    pub course_id: String,
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub student_address: String,
    pub course_title: String,
    pub institution: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(
                status.to_string().parse::<ApplicationStatus>().unwrap(),
                status
            );
        }
        assert!("withdrawn".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(ApplicationStatus::Approved).unwrap();
        assert_eq!(json, "approved");
    }

    #[test]
    fn decision_maps_to_terminal_status() {
        assert_eq!(
            ApplicationDecision::Approved.status(),
            ApplicationStatus::Approved
        );
        assert_eq!(
            ApplicationDecision::Rejected.status(),
            ApplicationStatus::Rejected
        );
    }
}
