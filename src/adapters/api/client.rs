use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::config::ClientConfig;
use super::dto::ErrorBody;
use super::path::url_join;
use crate::ports::{ClientError, ClientResult, FileUpload, Transport};

/// The reqwest-backed request dispatcher.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(api_token: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(ClientConfig::new(api_token))
    }

    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = url_join(&self.config.api_url, path);
        tracing::debug!("{} {}", method, url);

        self.client
            .request(method, url)
            .header(AUTHORIZATION, self.config.authorization())
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Reads the body and applies the status policy, leaving the body unparsed.
    async fn read_checked(&self, method: &Method, response: Response) -> ClientResult<String> {
        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        tracing::debug!("API Response ({}): {}", status, response_text);

        check_status(method, status, retry_after, &response_text)?;
        Ok(response_text)
    }

    async fn handle_response(&self, method: &Method, response: Response) -> ClientResult<Value> {
        let response_text = self.read_checked(method, response).await?;

        if response_text.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            ClientError::Serialization(format!(
                "Failed to parse response: {}. Response was: {}",
                e, response_text
            ))
        })
    }
}

/// Maps a status code onto the dispatcher's error policy.
///
/// 429 is a rate-limit error on every verb. 400 and 401 surface the server
/// message on every verb, 500 only on writes, and DELETE treats any other
/// failure as an API error too. Everything else is reported as unexpected.
pub(crate) fn check_status(
    method: &Method,
    status: StatusCode,
    retry_after: Option<u64>,
    body: &str,
) -> ClientResult<()> {
    if status.is_success() {
        return Ok(());
    }

    let code = status.as_u16();
    let is_write = *method == Method::POST || *method == Method::PUT;

    tracing::warn!("{} request failed with status {}", method, status);

    let recognized = match code {
        429 => {
            return Err(ClientError::RateLimited {
                status: code,
                retry_after,
            })
        }
        400 | 401 => true,
        500 => is_write || *method == Method::DELETE,
        _ => *method == Method::DELETE,
    };

    if !recognized {
        return Err(ClientError::UnexpectedStatus {
            status: code,
            body: body.to_string(),
        });
    }

    let (message, error_code) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { err: Some(err), ecode }) => (err, ecode),
        Ok(ErrorBody { err: None, ecode }) => (fallback_message(status, ""), ecode),
        Err(_) => (fallback_message(status, body), None),
    };

    Err(ClientError::Api {
        status: code,
        message,
        code: error_code,
    })
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get(&self, path: &str) -> ClientResult<Value> {
        let request = self
            .request(Method::GET, path)
            .header(CONTENT_TYPE, "application/json");
        let response = self.send(request).await?;
        self.handle_response(&Method::GET, response).await
    }

    async fn post(&self, path: &str, body: Value) -> ClientResult<Value> {
        let request = self.request(Method::POST, path).json(&body);
        let response = self.send(request).await?;
        self.handle_response(&Method::POST, response).await
    }

    async fn put(&self, path: &str, body: Value) -> ClientResult<Value> {
        let request = self.request(Method::PUT, path).json(&body);
        let response = self.send(request).await?;
        self.handle_response(&Method::PUT, response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<u16> {
        let request = self
            .request(Method::DELETE, path)
            .header(CONTENT_TYPE, "application/json");
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        self.read_checked(&Method::DELETE, response).await?;
        Ok(status)
    }

    async fn upload(&self, path: &str, file: FileUpload) -> ClientResult<Value> {
        let FileUpload { file_name, content } = file;
        let form = Form::new()
            .text("filename", file_name.clone())
            .part("attachment", Part::bytes(content).file_name(file_name));

        let request = self.request(Method::POST, path).multipart(form);
        let response = self.send(request).await?;
        self.handle_response(&Method::POST, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(method: Method, status: u16, body: &str) -> ClientError {
        check_status(&method, StatusCode::from_u16(status).unwrap(), None, body).unwrap_err()
    }

    #[test]
    fn test_success_passes() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            assert!(check_status(&method, StatusCode::OK, None, "{}").is_ok());
            assert!(check_status(&method, StatusCode::NO_CONTENT, None, "").is_ok());
        }
    }

    #[test]
    fn test_rate_limit_on_every_verb() {
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            let result = check_status(&method, StatusCode::TOO_MANY_REQUESTS, Some(30), "");
            assert!(matches!(
                result,
                Err(ClientError::RateLimited { status: 429, retry_after: Some(30) })
            ));
        }
    }

    #[test]
    fn test_client_errors_carry_server_message() {
        let body = r#"{"err": "Token invalid", "ECODE": "OAUTH_025"}"#;
        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            match err(method, 401, body) {
                ClientError::Api { status, message, code } => {
                    assert_eq!(status, 401);
                    assert_eq!(message, "Token invalid");
                    assert_eq!(code.as_deref(), Some("OAUTH_025"));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert!(matches!(err(Method::GET, 400, "{}"), ClientError::Api { status: 400, .. }));
    }

    #[test]
    fn test_server_error_only_recognized_on_writes() {
        assert!(matches!(err(Method::POST, 500, "{}"), ClientError::Api { status: 500, .. }));
        assert!(matches!(err(Method::PUT, 500, "{}"), ClientError::Api { status: 500, .. }));
        assert!(matches!(
            err(Method::GET, 500, "boom"),
            ClientError::UnexpectedStatus { status: 500, .. }
        ));
    }

    #[test]
    fn test_delete_treats_any_failure_as_api_error() {
        assert!(matches!(err(Method::DELETE, 404, ""), ClientError::Api { status: 404, .. }));
        assert!(matches!(
            err(Method::GET, 404, ""),
            ClientError::UnexpectedStatus { status: 404, .. }
        ));
        assert!(matches!(
            err(Method::POST, 403, ""),
            ClientError::UnexpectedStatus { status: 403, .. }
        ));
    }

    #[test]
    fn test_non_json_error_body_falls_back_to_text() {
        assert_eq!(err(Method::GET, 400, "bad things").message(), "bad things");
        assert_eq!(err(Method::PUT, 401, "").message(), "Unauthorized");
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(matches!(ApiClient::new(""), Err(ClientError::Config(_))));
    }
}
