use std::path::Path;

use async_trait::async_trait;

use super::ClickUpRepository;
use crate::adapters::api::path::ApiPath;
use crate::domain::{Attachment, Build, TaskId};
use crate::ports::{AttachmentRepository, ClientError, ClientResult, FileUpload, Transport};

async fn read_upload(file_path: &Path) -> ClientResult<FileUpload> {
    let exists = tokio::fs::try_exists(file_path)
        .await
        .map_err(|e| ClientError::Io(format!("{}: {}", file_path.display(), e)))?;
    if !exists {
        return Err(ClientError::AttachmentNotFound(file_path.to_path_buf()));
    }

    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ClientError::AttachmentNotFound(file_path.to_path_buf()))?;

    let content = tokio::fs::read(file_path)
        .await
        .map_err(|e| ClientError::Io(format!("{}: {}", file_path.display(), e)))?;

    Ok(FileUpload { file_name, content })
}

#[async_trait]
impl<T: Transport> AttachmentRepository for ClickUpRepository<T> {
    async fn upload_attachment(
        &self,
        task_id: &TaskId,
        file_path: &Path,
    ) -> ClientResult<Attachment> {
        let upload = read_upload(file_path).await?;
        tracing::debug!(
            "Uploading {} ({} bytes) to task {}",
            upload.file_name,
            upload.content.len(),
            task_id
        );

        let path = ApiPath::new("task").segment(task_id).segment("attachment");
        let payload = self.transport.upload(&path.to_string(), upload).await?;
        Ok(Attachment::build(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockTransport;
    use mockall::predicate::{eq, function};
    use serde_json::json;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_upload_reads_file_and_posts_to_task() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("notes.txt");
        std::fs::File::create(&file_path)
            .unwrap()
            .write_all(b"meeting notes")
            .unwrap();

        let mut transport = MockTransport::new();
        transport
            .expect_upload()
            .with(
                eq("task/9hx/attachment"),
                function(|upload: &FileUpload| {
                    upload.file_name == "notes.txt" && upload.content == b"meeting notes"
                }),
            )
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "id": "ac434d4e.txt",
                    "version": "0",
                    "date": 1569988578766u64,
                    "title": "notes.txt",
                    "extension": "txt",
                    "url": "https://attachments-public.clickup.com/ac434d4e/notes.txt"
                }))
            });

        let repo = ClickUpRepository::with_transport(transport);
        let attachment = assert_ok!(repo.upload_attachment(&TaskId::from("9hx"), &file_path).await);
        assert_eq!(attachment.title, "notes.txt");
        assert_eq!(attachment.extension.as_deref(), Some("txt"));
    }

    #[tokio::test]
    async fn test_missing_file_is_reported_without_a_request() {
        let mut transport = MockTransport::new();
        transport.expect_upload().never();

        let repo = ClickUpRepository::with_transport(transport);
        let missing = Path::new("/definitely/not/here.png");
        let err = assert_err!(repo.upload_attachment(&TaskId::from("9hx"), missing).await);
        assert!(matches!(err, ClientError::AttachmentNotFound(p) if p == missing));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unreadable_location_is_an_io_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        let file_path = locked.join("notes.txt");
        std::fs::write(&file_path, b"meeting notes").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores directory permissions, so the stat still succeeds there.
        if std::fs::metadata(&file_path).is_ok() {
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut transport = MockTransport::new();
        transport.expect_upload().never();

        let repo = ClickUpRepository::with_transport(transport);
        let result = repo.upload_attachment(&TaskId::from("9hx"), &file_path).await;
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = assert_err!(result);
        assert!(matches!(err, ClientError::Io(ref msg) if msg.contains("notes.txt")));
    }
}
