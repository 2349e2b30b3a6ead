use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::serde_util;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl UserId {
    /// Request bodies expect numeric member ids as JSON numbers.
    pub fn to_json(&self) -> Value {
        self.0
            .parse::<u64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(self.0.clone()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id.to_string())
    }
}

/// A workspace member as embedded in tasks, lists and comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: UserId,
    pub username: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
    pub initials: Option<String>,
    #[serde(rename = "profilePicture")]
    pub profile_picture: Option<String>,
}
