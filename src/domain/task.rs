use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{serde_util, Build, PriorityLabel, ResourceRef, Status, User, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        TaskId(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub name: String,
    pub tag_fg: Option<String>,
    pub tag_bg: Option<String>,
    pub creator: Option<UserId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: TaskId,
    pub custom_id: Option<String>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub name: String,
    pub text_content: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    #[serde(deserialize_with = "serde_util::opt_string_or_number")]
    pub orderindex: Option<String>,
    #[serde(with = "serde_util::epoch_millis")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::epoch_millis")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::epoch_millis")]
    pub date_closed: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub archived: bool,
    pub creator: Option<User>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub assignees: Vec<User>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub watchers: Vec<User>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub tags: Vec<Tag>,
    pub parent: Option<TaskId>,
    pub priority: Option<PriorityLabel>,
    #[serde(with = "serde_util::epoch_millis")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::epoch_millis")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "serde_util::opt_lenient_f64")]
    pub points: Option<f64>,
    /// Milliseconds.
    #[serde(deserialize_with = "serde_util::opt_lenient_u64")]
    pub time_estimate: Option<u64>,
    /// Milliseconds.
    #[serde(deserialize_with = "serde_util::opt_lenient_u64")]
    pub time_spent: Option<u64>,
    #[serde(deserialize_with = "serde_util::opt_string_or_number")]
    pub team_id: Option<String>,
    pub url: Option<String>,
    pub permission_level: Option<String>,
    pub list: Option<ResourceRef>,
    pub project: Option<ResourceRef>,
    pub folder: Option<ResourceRef>,
    pub space: Option<ResourceRef>,
}

impl Task {
    pub fn is_closed(&self) -> bool {
        self.date_closed.is_some()
            || self
                .status
                .as_ref()
                .and_then(|s| s.kind.as_deref())
                .is_some_and(|kind| kind == "closed")
    }
}

impl Build for Task {
    const RESOURCE: &'static str = "task";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tasks {
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub tasks: Vec<Task>,
}

impl Build for Tasks {
    const RESOURCE: &'static str = "tasks";
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

/// Parameters for creating a task in a list.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub name: String,
    pub description: Option<String>,
    /// 1 (urgent) through 4 (low).
    pub priority: Option<u8>,
    pub assignees: Option<Vec<UserId>>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    /// Date expression, see [`crate::domain::time_expr`].
    pub due_date: Option<String>,
    /// Date expression, see [`crate::domain::time_expr`].
    pub start_date: Option<String>,
    pub parent: Option<TaskId>,
    /// Milliseconds.
    pub time_estimate: Option<u64>,
    pub notify_all: Option<bool>,
}

impl NewTask {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notify_all: Some(true),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<u8>,
    /// Milliseconds.
    pub time_estimate: Option<u64>,
    pub archived: Option<bool>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub add_assignees: Vec<UserId>,
    pub remove_assignees: Vec<UserId>,
}

/// Filters for listing the tasks of a list.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub archived: Option<bool>,
    pub include_closed: Option<bool>,
    pub subtasks: Option<bool>,
    pub page: Option<u32>,
    pub order_by: Option<String>,
    pub reverse: Option<bool>,
    pub statuses: Vec<String>,
    pub assignees: Vec<UserId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_task() -> serde_json::Value {
        json!({
            "id": "9hx",
            "custom_id": null,
            "name": "New Task Name",
            "text_content": "New Task Content",
            "description": "New Task Content",
            "status": {"status": "in progress", "color": "#d3d3d3", "orderindex": 1, "type": "custom"},
            "orderindex": "1.00000000000000000000000000000000",
            "date_created": "1567780450202",
            "date_updated": "1567780450202",
            "date_closed": null,
            "archived": false,
            "creator": {"id": 183, "username": "John Doe", "color": "#827718", "profilePicture": null},
            "assignees": [{"id": 183, "username": "John Doe"}],
            "watchers": [],
            "checklists": [],
            "tags": [{"name": "urgent-fix", "tag_fg": "#000000", "tag_bg": "#ff0000", "creator": 183}],
            "parent": null,
            "priority": {"id": "1", "priority": "urgent", "color": "#f50000", "orderindex": "1"},
            "due_date": "1508369194377",
            "start_date": null,
            "points": 3,
            "time_estimate": 8640000,
            "time_spent": null,
            "team_id": "108",
            "url": "https://app.clickup.com/t/9hx",
            "permission_level": "create",
            "list": {"id": "123"},
            "project": {"id": "456", "name": "Folder", "hidden": false, "access": true},
            "folder": {"id": "456"},
            "space": {"id": "789"}
        })
    }

    #[test]
    fn test_build_task() {
        let task = Task::build(sample_task()).unwrap();

        assert_eq!(task.id, TaskId::from("9hx"));
        assert!(task.custom_id.is_none());
        assert_eq!(task.name, "New Task Name");
        assert_eq!(task.text_content.as_deref(), Some("New Task Content"));
        assert_eq!(task.description.as_deref(), Some("New Task Content"));
        assert_eq!(task.status.as_ref().unwrap().status, "in progress");
        assert_eq!(task.date_created.unwrap().timestamp_millis(), 1_567_780_450_202);
        assert!(task.date_closed.is_none());
        assert_eq!(task.creator.as_ref().unwrap().id, UserId::from(183));
        assert_eq!(task.assignees.len(), 1);
        assert!(task.watchers.is_empty());
        assert_eq!(task.tags[0].name, "urgent-fix");
        assert_eq!(task.tags[0].creator, Some(UserId::from(183)));
        assert!(task.parent.is_none());
        assert_eq!(task.priority.as_ref().unwrap().priority, "urgent");
        assert_eq!(task.due_date.unwrap().timestamp_millis(), 1_508_369_194_377);
        assert_eq!(task.points, Some(3.0));
        assert_eq!(task.time_estimate, Some(8_640_000));
        assert!(task.time_spent.is_none());
        assert_eq!(task.team_id.as_deref(), Some("108"));
        assert_eq!(task.url.as_deref(), Some("https://app.clickup.com/t/9hx"));
        assert_eq!(task.list.as_ref().unwrap().id, "123");
        assert_eq!(task.space.as_ref().unwrap().id, "789");
        assert!(!task.is_closed());
    }

    #[test]
    fn test_closed_status_kind() {
        let mut payload = sample_task();
        payload["status"] = json!({"status": "complete", "type": "closed"});
        assert!(Task::build(payload).unwrap().is_closed());
    }

    #[test]
    fn test_build_tasks() {
        let tasks = Tasks::build(json!({"tasks": [sample_task(), {"id": "abc", "name": "Second"}]}))
            .unwrap();
        assert_eq!(tasks.tasks.len(), 2);
        assert_eq!(tasks.tasks[1].name, "Second");
        assert!(tasks.tasks[1].status.is_none());
    }

    #[test]
    fn test_new_task_notifies_by_default() {
        let task = NewTask::new("Write docs");
        assert_eq!(task.notify_all, Some(true));
        assert!(task.description.is_none());
    }

    #[test]
    fn test_null_text_fields_default_to_empty() {
        let task = Task::build(json!({
            "id": "1",
            "name": null,
            "status": {"status": null, "type": "open"},
            "priority": {"priority": null, "color": "#f50000"},
            "tags": [{"name": null, "tag_fg": "#000000"}]
        }))
        .unwrap();

        assert_eq!(task.name, "");
        assert_eq!(task.status.as_ref().unwrap().status, "");
        assert_eq!(task.priority.as_ref().unwrap().priority, "");
        assert_eq!(task.tags[0].name, "");
        assert_eq!(task.tags[0].tag_fg.as_deref(), Some("#000000"));
    }
}
