use serde::{Deserialize, Serialize};

/// The session user fabricated at login.
///
/// There is no authentication backend: any credentials produce a user, and
/// the record is discarded at logout. It is never checked against the
/// course or partner collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub is_admin: bool,
}
