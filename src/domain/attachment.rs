use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{serde_util, Build};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AttachmentId {
    fn from(s: &str) -> Self {
        AttachmentId(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub id: AttachmentId,
    #[serde(deserialize_with = "serde_util::opt_string_or_number")]
    pub version: Option<String>,
    #[serde(with = "serde_util::epoch_millis")]
    pub date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub title: String,
    pub extension: Option<String>,
    pub thumbnail_small: Option<String>,
    pub thumbnail_large: Option<String>,
    pub url: Option<String>,
}

impl Build for Attachment {
    const RESOURCE: &'static str = "attachment";
}
