use async_trait::async_trait;

use super::{to_body, ClickUpRepository};
use crate::adapters::api::dto::{CreateCommentBody, UpdateCommentBody};
use crate::adapters::api::path::ApiPath;
use crate::domain::{
    Build, Comment, CommentId, CommentUpdate, Comments, ListId, NewComment, TaskId, ViewId,
};
use crate::ports::{ClientResult, CommentRepository, Transport};

impl<T: Transport> ClickUpRepository<T> {
    async fn fetch_comments(&self, path: ApiPath) -> ClientResult<Comments> {
        let payload = self.transport.get(&path.to_string()).await?;
        Ok(Comments::build(payload)?)
    }

    async fn post_comment(&self, path: ApiPath, comment: &NewComment) -> ClientResult<Comment> {
        let body = to_body(&CreateCommentBody::from(comment))?;
        let payload = self.transport.post(&path.to_string(), body).await?;
        Ok(Comment::build(payload)?)
    }
}

#[async_trait]
impl<T: Transport> CommentRepository for ClickUpRepository<T> {
    async fn get_task_comments(&self, task_id: &TaskId) -> ClientResult<Comments> {
        self.fetch_comments(ApiPath::new("task").segment(task_id).segment("comment"))
            .await
    }

    async fn get_list_comments(&self, list_id: &ListId) -> ClientResult<Comments> {
        self.fetch_comments(ApiPath::new("list").segment(list_id).segment("comment"))
            .await
    }

    async fn get_chat_comments(&self, view_id: &ViewId) -> ClientResult<Comments> {
        self.fetch_comments(ApiPath::new("view").segment(view_id).segment("comment"))
            .await
    }

    async fn create_task_comment(
        &self,
        task_id: &TaskId,
        comment: &NewComment,
    ) -> ClientResult<Comment> {
        let path = ApiPath::new("task").segment(task_id).segment("comment");
        self.post_comment(path, comment).await
    }

    async fn create_list_comment(
        &self,
        list_id: &ListId,
        comment: &NewComment,
    ) -> ClientResult<Comment> {
        let path = ApiPath::new("list").segment(list_id).segment("comment");
        self.post_comment(path, comment).await
    }

    async fn update_comment(
        &self,
        comment_id: &CommentId,
        update: &CommentUpdate,
    ) -> ClientResult<()> {
        let body = to_body(&UpdateCommentBody::from(update))?;
        let path = ApiPath::new("comment").segment(comment_id);
        self.transport.put(&path.to_string(), body).await?;
        Ok(())
    }

    async fn delete_comment(&self, comment_id: &CommentId) -> ClientResult<()> {
        let path = ApiPath::new("comment").segment(comment_id);
        self.transport.delete(&path.to_string()).await?;
        tracing::info!("Deleted comment {}", comment_id);
        Ok(())
    }
}
