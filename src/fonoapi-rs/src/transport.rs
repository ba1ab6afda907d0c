use fonoapi_core::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;

/// Status and decoded body of one HTTP response.
///
/// A body that is not valid JSON is reported as `Value::Null`; the classifier
/// then treats it as malformed (on 200) or as a bare server error.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// Sends a JSON body with a POST and hands back whatever came back.
///
/// Network-level failures are `Error::Transport`; every HTTP status,
/// including 4xx and 5xx, is a successful transport round trip.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(Error::transport)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(Error::transport)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(Error::transport)?;

        let body = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    status,
                    error = %e,
                    len = bytes.len(),
                    "Response body is not valid JSON"
                );
                Value::Null
            }
        };

        Ok(RawResponse { status, body })
    }
}
