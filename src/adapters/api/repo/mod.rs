//! The client facade: one method per API operation, grouped by resource.

mod attachments;
mod comments;
mod folders;
mod lists;
mod tasks;

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientConfig};
use crate::ports::{ClientError, ClientResult, Transport};

/// Resource methods on top of a [`Transport`].
///
/// Use [`crate::ClickUpClient`] for the reqwest-backed client; other transports
/// can be plugged in with [`ClickUpRepository::with_transport`].
#[derive(Debug, Clone)]
pub struct ClickUpRepository<T = ApiClient> {
    transport: T,
}

impl ClickUpRepository<ApiClient> {
    pub fn new(api_token: impl Into<String>) -> ClientResult<Self> {
        Ok(Self::with_transport(ApiClient::new(api_token)?))
    }

    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_transport(ApiClient::with_config(config)?))
    }
}

impl<T: Transport> ClickUpRepository<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

fn to_body<S: Serialize>(body: &S) -> ClientResult<Value> {
    serde_json::to_value(body).map_err(|e| ClientError::Serialization(e.to_string()))
}
