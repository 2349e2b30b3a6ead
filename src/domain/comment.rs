use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::{serde_util, Build, User, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CommentId {
    fn from(s: String) -> Self {
        CommentId(s)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        CommentId(s.to_string())
    }
}

/// A view id; chat views carry their own comment thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ViewId {
    fn from(s: String) -> Self {
        ViewId(s)
    }
}

impl From<&str> for ViewId {
    fn from(s: &str) -> Self {
        ViewId(s.to_string())
    }
}

/// One rich-text run of a comment body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSegment {
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub attributes: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: CommentId,
    /// Only present on freshly created comments.
    pub hist_id: Option<String>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub comment: Vec<CommentSegment>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub comment_text: String,
    pub user: Option<User>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub resolved: bool,
    pub assignee: Option<User>,
    pub assigned_by: Option<User>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub reactions: Vec<Value>,
    #[serde(with = "serde_util::epoch_millis")]
    pub date: Option<DateTime<Utc>>,
}

impl Comment {
    /// Flattened text, preferring `comment_text` and falling back to the segments.
    pub fn text(&self) -> String {
        if !self.comment_text.is_empty() {
            return self.comment_text.clone();
        }
        self.comment.iter().map(|s| s.text.as_str()).collect()
    }
}

impl Build for Comment {
    const RESOURCE: &'static str = "comment";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comments {
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub comments: Vec<Comment>,
}

impl Build for Comments {
    const RESOURCE: &'static str = "comments";
}

impl IntoIterator for Comments {
    type Item = Comment;
    type IntoIter = std::vec::IntoIter<Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.into_iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub comment_text: String,
    pub assignee: Option<UserId>,
    pub notify_all: Option<bool>,
}

impl NewComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            comment_text: text.into(),
            assignee: None,
            notify_all: Some(true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub comment_text: Option<String>,
    pub assignee: Option<UserId>,
    pub resolved: Option<bool>,
}
