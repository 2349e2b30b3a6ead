use async_trait::async_trait;
use chrono::Utc;

use super::{to_body, ClickUpRepository};
use crate::adapters::api::dto::ListBody;
use crate::adapters::api::path::ApiPath;
use crate::domain::{Build, FolderId, List, ListId, ListUpdate, Lists, NewList};
use crate::ports::{ClientResult, ListRepository, Transport};

#[async_trait]
impl<T: Transport> ListRepository for ClickUpRepository<T> {
    async fn get_list(&self, list_id: &ListId) -> ClientResult<List> {
        let path = ApiPath::new("list").segment(list_id);
        let payload = self.transport.get(&path.to_string()).await?;
        Ok(List::build(payload)?)
    }

    async fn get_lists(&self, folder_id: &FolderId) -> ClientResult<Lists> {
        let path = ApiPath::new("folder").segment(folder_id).segment("list");
        let payload = self.transport.get(&path.to_string()).await?;
        Ok(Lists::build(payload)?)
    }

    async fn create_list(&self, folder_id: &FolderId, list: &NewList) -> ClientResult<List> {
        let body = to_body(&ListBody::create(list, Utc::now())?)?;
        let path = ApiPath::new("folder").segment(folder_id).segment("list");
        let payload = self.transport.post(&path.to_string(), body).await?;
        Ok(List::build(payload)?)
    }

    async fn update_list(&self, list_id: &ListId, update: &ListUpdate) -> ClientResult<List> {
        let body = to_body(&ListBody::update(update, Utc::now())?)?;
        let path = ApiPath::new("list").segment(list_id);
        let payload = self.transport.put(&path.to_string(), body).await?;
        Ok(List::build(payload)?)
    }

    async fn delete_list(&self, list_id: &ListId) -> ClientResult<()> {
        let path = ApiPath::new("list").segment(list_id);
        self.transport.delete(&path.to_string()).await?;
        tracing::info!("Deleted list {}", list_id);
        Ok(())
    }
}
