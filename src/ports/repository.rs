use std::path::Path;

use async_trait::async_trait;

use super::ClientResult;
use crate::domain::{
    Attachment, Comment, CommentId, CommentUpdate, Comments, Folder, FolderId, Folders, List,
    ListId, ListUpdate, Lists, NewComment, NewList, NewTask, SpaceId, Task, TaskId, TaskQuery,
    TaskUpdate, Tasks, ViewId,
};

#[async_trait]
pub trait ListRepository: Send + Sync {
    async fn get_list(&self, list_id: &ListId) -> ClientResult<List>;
    async fn get_lists(&self, folder_id: &FolderId) -> ClientResult<Lists>;
    async fn create_list(&self, folder_id: &FolderId, list: &NewList) -> ClientResult<List>;
    async fn update_list(&self, list_id: &ListId, update: &ListUpdate) -> ClientResult<List>;
    async fn delete_list(&self, list_id: &ListId) -> ClientResult<()>;
}

#[async_trait]
pub trait FolderRepository: Send + Sync {
    async fn get_folder(&self, folder_id: &FolderId) -> ClientResult<Folder>;
    async fn get_folders(&self, space_id: &SpaceId) -> ClientResult<Folders>;
    async fn create_folder(&self, space_id: &SpaceId, name: &str) -> ClientResult<Folder>;
    async fn update_folder(&self, folder_id: &FolderId, name: &str) -> ClientResult<Folder>;
    async fn delete_folder(&self, folder_id: &FolderId) -> ClientResult<()>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get_task(&self, task_id: &TaskId) -> ClientResult<Task>;
    async fn get_tasks(&self, list_id: &ListId, query: &TaskQuery) -> ClientResult<Tasks>;
    async fn create_task(&self, list_id: &ListId, task: &NewTask) -> ClientResult<Task>;
    async fn update_task(&self, task_id: &TaskId, update: &TaskUpdate) -> ClientResult<Task>;
    async fn delete_task(&self, task_id: &TaskId) -> ClientResult<()>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn get_task_comments(&self, task_id: &TaskId) -> ClientResult<Comments>;
    async fn get_list_comments(&self, list_id: &ListId) -> ClientResult<Comments>;
    async fn get_chat_comments(&self, view_id: &ViewId) -> ClientResult<Comments>;
    async fn create_task_comment(
        &self,
        task_id: &TaskId,
        comment: &NewComment,
    ) -> ClientResult<Comment>;
    async fn create_list_comment(
        &self,
        list_id: &ListId,
        comment: &NewComment,
    ) -> ClientResult<Comment>;
    async fn update_comment(&self, comment_id: &CommentId, update: &CommentUpdate)
        -> ClientResult<()>;
    async fn delete_comment(&self, comment_id: &CommentId) -> ClientResult<()>;
}

#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    async fn upload_attachment(&self, task_id: &TaskId, file_path: &Path)
        -> ClientResult<Attachment>;
}
