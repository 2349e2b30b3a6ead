use serde::{Deserialize, Serialize};

use super::serde_util;

/// A workflow status, either the one a task sits in or one a list offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(deserialize_with = "serde_util::opt_string_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub status: String,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_string_or_number")]
    pub orderindex: Option<String>,
    pub hide_label: Option<bool>,
}

/// The priority as the API reports it back, e.g. `{"priority": "urgent", "color": "#f50000"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityLabel {
    #[serde(deserialize_with = "serde_util::opt_string_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub priority: String,
    pub color: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_string_or_number")]
    pub orderindex: Option<String>,
}

/// Abbreviated reference to a parent container (space, folder, list, project).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
    #[serde(deserialize_with = "serde_util::string_or_number")]
    pub id: String,
    pub name: Option<String>,
    pub hidden: Option<bool>,
    pub access: Option<bool>,
}
