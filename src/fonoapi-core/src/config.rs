use serde::{Deserialize, Serialize};

use crate::query::Endpoint;

pub const DEFAULT_API_URL: &str = "https://fonoapi.freshpixl.com/v1/";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// API token, generated at fonoapi.freshpixl.com/token/generate
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,

    // Transport timeouts
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Fail with `NoResults` instead of returning an empty result set
    #[serde(default)]
    pub strict_empty: bool,
    /// Log at info level when a lookup comes back empty
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_verbose() -> bool {
    true
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            strict_empty: false,
            verbose: default_verbose(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Full URL of an endpoint. The base URL gets a trailing slash if it lacks one.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        if self.api_url.ends_with('/') {
            format!("{}{}", self.api_url, endpoint.path())
        } else {
            format!("{}/{}", self.api_url, endpoint.path())
        }
    }

    /// Token with everything but the last four characters hidden, for display.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        let visible = chars.len().saturating_sub(4);
        chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}
