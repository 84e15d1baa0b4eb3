use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel audience id meaning "every admin session".
pub const ADMIN_AUDIENCE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ApplicationSubmitted,
    ApplicationApproved,
    ApplicationRejected,
}

/// An in-session notification shown in the dashboard bell menu.
///
/// `user_id` is either a student id or [`ADMIN_AUDIENCE`]. The
/// `application_id` back-reference is non-owning and exists only so a
/// withdrawal can cascade-delete the notifications it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub user_id: String,
    #[serde(default)]
    pub application_id: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// The fields a caller supplies for a new notification; the store mints
/// the id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub user_id: String,
    pub application_id: Option<String>,
    pub read: bool,
}
