use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{serde_util, Build, PriorityLabel, ResourceRef, Status, User, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ListId {
    fn from(s: String) -> Self {
        ListId(s)
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        ListId(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    pub id: ListId,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "serde_util::opt_lenient_u64")]
    pub orderindex: Option<u64>,
    pub content: Option<String>,
    /// The list's colour label, not the task statuses it offers.
    pub status: Option<Status>,
    pub priority: Option<PriorityLabel>,
    pub assignee: Option<User>,
    #[serde(deserialize_with = "serde_util::opt_lenient_u64")]
    pub task_count: Option<u64>,
    #[serde(with = "serde_util::epoch_millis")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::epoch_millis")]
    pub start_date: Option<DateTime<Utc>>,
    pub folder: Option<ResourceRef>,
    pub space: Option<ResourceRef>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub archived: bool,
    pub override_statuses: Option<bool>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub statuses: Vec<Status>,
    pub permission_level: Option<String>,
}

impl Build for List {
    const RESOURCE: &'static str = "list";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lists {
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub lists: Vec<List>,
}

impl Build for Lists {
    const RESOURCE: &'static str = "lists";
}

impl IntoIterator for Lists {
    type Item = List;
    type IntoIter = std::vec::IntoIter<List>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.into_iter()
    }
}

/// Parameters for creating a list inside a folder.
#[derive(Debug, Clone, Default)]
pub struct NewList {
    pub name: String,
    pub content: Option<String>,
    /// Date expression, see [`crate::domain::time_expr`].
    pub due_date: Option<String>,
    /// 1 (urgent) through 4 (low).
    pub priority: Option<u8>,
    pub assignee: Option<UserId>,
    /// Refers to the list colour rather than the task statuses in the list.
    pub status: Option<String>,
}

impl NewList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListUpdate {
    pub name: Option<String>,
    pub content: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<u8>,
    pub assignee: Option<UserId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_list() {
        let payload = json!({
            "id": "124",
            "name": "Updated List Name",
            "orderindex": 1,
            "content": "Updated List Content",
            "status": {"status": "red", "color": "#e50000", "hide_label": true},
            "priority": {"priority": "high", "color": "#f50000"},
            "assignee": null,
            "due_date": "1567780450202",
            "start_date": null,
            "folder": {"id": "456", "name": "Folder Name", "hidden": false, "access": true},
            "space": {"id": "789", "name": "Space Name", "access": true},
            "inbound_address": "add.task.124.ac725f.31518a6a-05bb-4997-92a6-1dcfe2f527ca@tasks.clickup.com",
            "archived": false,
            "override_statuses": false,
            "statuses": [
                {"status": "to do", "orderindex": 0, "color": "#d3d3d3", "type": "open"},
                {"status": "complete", "orderindex": 1, "color": "#6bc950", "type": "closed"}
            ],
            "permission_level": "create"
        });

        let list = List::build(payload).unwrap();

        assert_eq!(list.id, ListId::from("124"));
        assert_eq!(list.name, "Updated List Name");
        assert_eq!(list.orderindex, Some(1));
        assert_eq!(list.content.as_deref(), Some("Updated List Content"));
        assert_eq!(list.status.as_ref().unwrap().status, "red");
        assert_eq!(list.status.as_ref().unwrap().hide_label, Some(true));
        assert_eq!(list.priority.as_ref().unwrap().priority, "high");
        assert!(list.assignee.is_none());
        assert_eq!(list.due_date.unwrap().timestamp_millis(), 1_567_780_450_202);
        assert!(list.start_date.is_none());
        assert_eq!(list.folder.as_ref().unwrap().id, "456");
        assert_eq!(list.space.as_ref().unwrap().name.as_deref(), Some("Space Name"));
        assert!(!list.archived);
        assert_eq!(list.override_statuses, Some(false));
        assert_eq!(list.statuses.len(), 2);
        assert_eq!(list.statuses[1].kind.as_deref(), Some("closed"));
        assert_eq!(list.statuses[1].orderindex.as_deref(), Some("1"));
        assert_eq!(list.permission_level.as_deref(), Some("create"));
    }

    #[test]
    fn test_absent_fields_default() {
        let list = List::build(json!({"id": 9})).unwrap();
        assert_eq!(list.id, ListId::from("9"));
        assert_eq!(list.name, "");
        assert!(list.status.is_none());
        assert!(list.statuses.is_empty());
        assert_eq!(list.task_count, None);
    }

    #[test]
    fn test_build_lists() {
        let lists = Lists::build(json!({
            "lists": [
                {"id": "1", "name": "Backlog", "task_count": "12"},
                {"id": "2", "name": "Sprint", "task_count": 3}
            ]
        }))
        .unwrap();

        let names: Vec<_> = lists.lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Backlog", "Sprint"]);
        assert_eq!(lists.lists[0].task_count, Some(12));
        assert_eq!(lists.lists[1].task_count, Some(3));
    }

    #[test]
    fn test_null_name_defaults_to_empty() {
        let list = List::build(json!({"id": "124", "name": null, "status": {"status": null}}))
            .unwrap();
        assert_eq!(list.name, "");
        assert_eq!(list.status.unwrap().status, "");
    }
}
