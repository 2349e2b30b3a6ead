use serde::{Deserialize, Serialize};
use std::fmt;

use super::{serde_util, Build, List, ResourceRef, Status};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FolderId {
    fn from(s: String) -> Self {
        FolderId(s)
    }
}

impl From<&str> for FolderId {
    fn from(s: &str) -> Self {
        FolderId(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(#[serde(deserialize_with = "serde_util::string_or_number")] pub String);

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SpaceId {
    fn from(s: String) -> Self {
        SpaceId(s)
    }
}

impl From<&str> for SpaceId {
    fn from(s: &str) -> Self {
        SpaceId(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    pub id: FolderId,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "serde_util::opt_lenient_u64")]
    pub orderindex: Option<u64>,
    pub override_statuses: Option<bool>,
    pub hidden: Option<bool>,
    pub space: Option<ResourceRef>,
    #[serde(deserialize_with = "serde_util::opt_lenient_u64")]
    pub task_count: Option<u64>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub archived: bool,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub statuses: Vec<Status>,
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub lists: Vec<List>,
    pub permission_level: Option<String>,
}

impl Build for Folder {
    const RESOURCE: &'static str = "folder";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folders {
    #[serde(deserialize_with = "serde_util::null_as_default")]
    pub folders: Vec<Folder>,
}

impl Build for Folders {
    const RESOURCE: &'static str = "folders";
}

impl IntoIterator for Folders {
    type Item = Folder;
    type IntoIter = std::vec::IntoIter<Folder>;

    fn into_iter(self) -> Self::IntoIter {
        self.folders.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_folder() {
        let folder = Folder::build(json!({
            "id": "457",
            "name": "Updated Folder Name",
            "orderindex": 0,
            "override_statuses": false,
            "hidden": false,
            "space": {"id": "789", "name": "Space Name", "access": true},
            "task_count": "0",
            "lists": [{"id": "124", "name": "Inside"}]
        }))
        .unwrap();

        assert_eq!(folder.id, FolderId::from("457"));
        assert_eq!(folder.name, "Updated Folder Name");
        assert_eq!(folder.orderindex, Some(0));
        assert_eq!(folder.override_statuses, Some(false));
        assert_eq!(folder.hidden, Some(false));
        assert_eq!(folder.space.as_ref().unwrap().id, "789");
        assert_eq!(folder.task_count, Some(0));
        assert_eq!(folder.lists.len(), 1);
        assert_eq!(folder.lists[0].name, "Inside");
        assert!(folder.permission_level.is_none());
    }

    #[test]
    fn test_build_folders() {
        let folders = Folders::build(json!({
            "folders": [{"id": "1", "name": "A"}, {"id": "2", "name": "B", "hidden": true}]
        }))
        .unwrap();

        let ids: Vec<_> = folders.into_iter().map(|f| f.id.0).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_null_name_defaults_to_empty() {
        let folder = Folder::build(json!({"id": "457", "name": null})).unwrap();
        assert_eq!(folder.name, "");
    }
}
