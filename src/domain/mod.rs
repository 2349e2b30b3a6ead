pub mod attachment;
pub mod comment;
pub mod error;
pub mod folder;
pub mod list;
pub mod priority;
pub mod serde_util;
pub mod status;
pub mod task;
pub mod time_expr;
pub mod user;

pub use attachment::*;
pub use comment::*;
pub use error::*;
pub use folder::*;
pub use list::*;
pub use priority::*;
pub use status::*;
pub use task::*;
pub use user::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Turns a raw response payload into a typed record.
///
/// Fields missing from the payload come out as their defaults; only a payload
/// of the wrong shape (not an object, or a field of the wrong type) is an error.
pub trait Build: DeserializeOwned {
    const RESOURCE: &'static str;

    fn build(payload: Value) -> DomainResult<Self> {
        if payload.is_null() {
            return Err(DomainError::MalformedPayload {
                resource: Self::RESOURCE,
                reason: "empty payload".to_string(),
            });
        }
        serde_json::from_value(payload).map_err(|e| DomainError::MalformedPayload {
            resource: Self::RESOURCE,
            reason: e.to_string(),
        })
    }
}
