use async_trait::async_trait;

use super::{to_body, ClickUpRepository};
use crate::adapters::api::dto::FolderBody;
use crate::adapters::api::path::ApiPath;
use crate::domain::{Build, Folder, FolderId, Folders, SpaceId};
use crate::ports::{ClientResult, FolderRepository, Transport};

#[async_trait]
impl<T: Transport> FolderRepository for ClickUpRepository<T> {
    async fn get_folder(&self, folder_id: &FolderId) -> ClientResult<Folder> {
        let path = ApiPath::new("folder").segment(folder_id);
        let payload = self.transport.get(&path.to_string()).await?;
        Ok(Folder::build(payload)?)
    }

    async fn get_folders(&self, space_id: &SpaceId) -> ClientResult<Folders> {
        let path = ApiPath::new("space").segment(space_id).segment("folder");
        let payload = self.transport.get(&path.to_string()).await?;
        Ok(Folders::build(payload)?)
    }

    async fn create_folder(&self, space_id: &SpaceId, name: &str) -> ClientResult<Folder> {
        let body = to_body(&FolderBody {
            name: name.to_string(),
        })?;
        let path = ApiPath::new("space").segment(space_id).segment("folder");
        let payload = self.transport.post(&path.to_string(), body).await?;
        Ok(Folder::build(payload)?)
    }

    async fn update_folder(&self, folder_id: &FolderId, name: &str) -> ClientResult<Folder> {
        let body = to_body(&FolderBody {
            name: name.to_string(),
        })?;
        let path = ApiPath::new("folder").segment(folder_id);
        let payload = self.transport.put(&path.to_string(), body).await?;
        Ok(Folder::build(payload)?)
    }

    async fn delete_folder(&self, folder_id: &FolderId) -> ClientResult<()> {
        let path = ApiPath::new("folder").segment(folder_id);
        self.transport.delete(&path.to_string()).await?;
        tracing::info!("Deleted folder {}", folder_id);
        Ok(())
    }
}
