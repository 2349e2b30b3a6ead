use serde::{Deserialize, Serialize};

use crate::ports::{ClientError, ClientResult};

pub const API_URL: &str = "https://api.clickup.com/api/v2/";

/// How the access token is placed in the `Authorization` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// Personal API tokens (`pk_...`) go in verbatim.
    #[default]
    PersonalToken,
    /// OAuth access tokens are sent as `Bearer <token>`.
    Bearer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_token: String,
    pub api_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub auth_scheme: AuthScheme,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            api_url: API_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("clickup-client/", env!("CARGO_PKG_VERSION")).to_string(),
            auth_scheme: AuthScheme::PersonalToken,
        }
    }
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    pub fn authorization(&self) -> String {
        match self.auth_scheme {
            AuthScheme::PersonalToken => self.api_token.clone(),
            AuthScheme::Bearer => format!("Bearer {}", self.api_token),
        }
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.api_token.trim().is_empty() {
            return Err(ClientError::Config("API token is empty".to_string()));
        }
        reqwest::Url::parse(&self.api_url)
            .map_err(|e| ClientError::Config(format!("Invalid API URL {:?}: {}", self.api_url, e)))?;
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("Timeout must be at least one second".to_string()));
        }
        Ok(())
    }
}
