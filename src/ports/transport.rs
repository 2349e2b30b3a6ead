use async_trait::async_trait;
use serde_json::Value;

use super::ClientResult;

/// File content for a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// The request primitives every resource method is built from.
///
/// `path` is relative to the API root and may carry a query string.
/// Implementations apply the status policy and hand back the parsed body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> ClientResult<Value>;

    async fn post(&self, path: &str, body: Value) -> ClientResult<Value>;

    async fn put(&self, path: &str, body: Value) -> ClientResult<Value>;

    /// Returns the status code of the successful response.
    async fn delete(&self, path: &str) -> ClientResult<u16>;

    /// Multipart POST; sent without the JSON content type.
    async fn upload(&self, path: &str, file: FileUpload) -> ClientResult<Value>;
}
