//! Typed async client for the ClickUp REST API.
//!
//! ```no_run
//! use clickup_client::{ClickUpClient, NewTask, TaskRepository};
//!
//! # async fn run() -> Result<(), clickup_client::ClientError> {
//! let client = ClickUpClient::new("pk_your_token")?;
//! let task = NewTask {
//!     priority: Some(2),
//!     due_date: Some("tomorrow".into()),
//!     ..NewTask::new("Write release notes")
//! };
//! let created = client.create_task(&"901".into(), &task).await?;
//! println!("created {}", created.id);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::api::{ApiClient, AuthScheme, ClickUpRepository, ClientConfig, API_URL};
pub use domain::*;
pub use ports::{
    AttachmentRepository, ClientError, ClientResult, CommentRepository, FileUpload,
    FolderRepository, ListRepository, TaskRepository, Transport,
};

/// The reqwest-backed client.
pub type ClickUpClient = ClickUpRepository<ApiClient>;
