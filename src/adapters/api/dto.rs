use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::time_expr::to_epoch_millis;
use crate::domain::*;

/// Error body the API returns alongside 4xx/5xx statuses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub err: Option<String>,
    #[serde(rename = "ECODE")]
    pub ecode: Option<String>,
}

fn epoch_millis(expr: Option<&String>, now: DateTime<Utc>) -> DomainResult<Option<i64>> {
    expr.map(|e| to_epoch_millis(e, now)).transpose()
}

fn user_ids(ids: &[UserId]) -> Vec<Value> {
    ids.iter().map(UserId::to_json).collect()
}

// Request DTOs. Absent parameters are left out of the body entirely.

#[derive(Debug, Serialize)]
pub struct FolderBody {
    pub name: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ListBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ListBody {
    pub fn create(list: &NewList, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            name: Some(list.name.clone()),
            content: list.content.clone(),
            due_date: epoch_millis(list.due_date.as_ref(), now)?,
            priority: Priority::check(list.priority)?,
            assignee: list.assignee.as_ref().map(UserId::to_json),
            status: list.status.clone(),
        })
    }

    pub fn update(update: &ListUpdate, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            name: update.name.clone(),
            content: update.content.clone(),
            due_date: epoch_millis(update.due_date.as_ref(), now)?,
            priority: Priority::check(update.priority)?,
            assignee: update.assignee.as_ref().map(UserId::to_json),
            status: None,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateTaskBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
}

impl CreateTaskBody {
    pub fn build(task: &NewTask, now: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            name: task.name.clone(),
            description: task.description.clone(),
            priority: Priority::check(task.priority)?,
            assignees: task.assignees.as_deref().map(user_ids),
            tags: task.tags.clone(),
            status: task.status.clone(),
            due_date: epoch_millis(task.due_date.as_ref(), now)?,
            start_date: epoch_millis(task.start_date.as_ref(), now)?,
            parent: task.parent.as_ref().map(|p| p.0.clone()),
            time_estimate: task.time_estimate,
            notify_all: task.notify_all,
        })
    }
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct AssigneeChanges {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rem: Vec<Value>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateTaskBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<AssigneeChanges>,
}

impl UpdateTaskBody {
    pub fn build(update: &TaskUpdate, now: DateTime<Utc>) -> DomainResult<Self> {
        let assignees = if update.add_assignees.is_empty() && update.remove_assignees.is_empty() {
            None
        } else {
            Some(AssigneeChanges {
                add: user_ids(&update.add_assignees),
                rem: user_ids(&update.remove_assignees),
            })
        };

        Ok(Self {
            name: update.name.clone(),
            description: update.description.clone(),
            status: update.status.clone(),
            priority: Priority::check(update.priority)?,
            time_estimate: update.time_estimate,
            archived: update.archived,
            due_date: epoch_millis(update.due_date.as_ref(), now)?,
            start_date: epoch_millis(update.start_date.as_ref(), now)?,
            assignees,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCommentBody {
    pub comment_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
}

impl From<&NewComment> for CreateCommentBody {
    fn from(comment: &NewComment) -> Self {
        Self {
            comment_text: comment.comment_text.clone(),
            assignee: comment.assignee.as_ref().map(UserId::to_json),
            notify_all: comment.notify_all,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateCommentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

impl From<&CommentUpdate> for UpdateCommentBody {
    fn from(update: &CommentUpdate) -> Self {
        Self {
            comment_text: update.comment_text.clone(),
            assignee: update.assignee.as_ref().map(UserId::to_json),
            resolved: update.resolved,
        }
    }
}
