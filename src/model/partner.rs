use serde::{Deserialize, Serialize};

/// A partner institution whose courses are listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub profile_image: String,
    #[serde(default)]
    pub description: Option<String>,
}
