use async_trait::async_trait;
use chrono::Utc;

use super::{to_body, ClickUpRepository};
use crate::adapters::api::dto::{CreateTaskBody, UpdateTaskBody};
use crate::adapters::api::path::ApiPath;
use crate::domain::{Build, ListId, NewTask, Task, TaskId, TaskQuery, TaskUpdate, Tasks};
use crate::ports::{ClientResult, TaskRepository, Transport};

fn tasks_path(list_id: &ListId, query: &TaskQuery) -> ApiPath {
    ApiPath::new("list")
        .segment(list_id)
        .segment("task")
        .opt_param("archived", query.archived)
        .opt_param("include_closed", query.include_closed)
        .opt_param("subtasks", query.subtasks)
        .opt_param("page", query.page)
        .opt_param("order_by", query.order_by.as_deref())
        .opt_param("reverse", query.reverse)
        .array_param("statuses", query.statuses.as_slice())
        .array_param("assignees", query.assignees.as_slice())
}

#[async_trait]
impl<T: Transport> TaskRepository for ClickUpRepository<T> {
    async fn get_task(&self, task_id: &TaskId) -> ClientResult<Task> {
        let path = ApiPath::new("task").segment(task_id);
        let payload = self.transport.get(&path.to_string()).await?;
        Ok(Task::build(payload)?)
    }

    async fn get_tasks(&self, list_id: &ListId, query: &TaskQuery) -> ClientResult<Tasks> {
        let path = tasks_path(list_id, query);
        let payload = self.transport.get(&path.to_string()).await?;
        Ok(Tasks::build(payload)?)
    }

    async fn create_task(&self, list_id: &ListId, task: &NewTask) -> ClientResult<Task> {
        let body = to_body(&CreateTaskBody::build(task, Utc::now())?)?;
        let path = ApiPath::new("list").segment(list_id).segment("task");
        let payload = self.transport.post(&path.to_string(), body).await?;
        Ok(Task::build(payload)?)
    }

    async fn update_task(&self, task_id: &TaskId, update: &TaskUpdate) -> ClientResult<Task> {
        let body = to_body(&UpdateTaskBody::build(update, Utc::now())?)?;
        let path = ApiPath::new("task").segment(task_id);
        let payload = self.transport.put(&path.to_string(), body).await?;
        Ok(Task::build(payload)?)
    }

    async fn delete_task(&self, task_id: &TaskId) -> ClientResult<()> {
        let path = ApiPath::new("task").segment(task_id);
        self.transport.delete(&path.to_string()).await?;
        tracing::info!("Deleted task {}", task_id);
        Ok(())
    }
}
