//! Blocking Fono API client
//!
//! Wraps the async [`Client`](crate::Client) with a private current-thread
//! runtime. Each call blocks the calling thread until the single request
//! completes or the transport times out. Do not call these methods from
//! inside an async runtime.

use crate::client::LookupOptions;
use crate::transport::Transport;
use fonoapi_core::{BrandQuery, ClientConfig, DeviceQuery, Error, Result, ResultSet};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

#[derive(Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(token))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: crate::Client::from_config(config)?,
            runtime: build_runtime()?,
        })
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            inner: crate::Client::with_transport(config, transport),
            runtime: build_runtime()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    pub fn get_device(&self, query: DeviceQuery) -> Result<ResultSet> {
        self.runtime.block_on(self.inner.get_device(query))
    }

    pub fn get_device_with(&self, query: DeviceQuery, options: LookupOptions) -> Result<ResultSet> {
        self.runtime.block_on(self.inner.get_device_with(query, options))
    }

    pub fn get_latest(&self, query: BrandQuery) -> Result<ResultSet> {
        self.runtime.block_on(self.inner.get_latest(query))
    }

    pub fn get_latest_with(&self, query: BrandQuery, options: LookupOptions) -> Result<ResultSet> {
        self.runtime.block_on(self.inner.get_latest_with(query, options))
    }
}

fn build_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RawResponse;
    use serde_json::{json, Value};

    struct FixedTransport;

    #[async_trait::async_trait]
    impl Transport for FixedTransport {
        async fn post_json(&self, _url: &str, _body: &Value) -> Result<RawResponse> {
            Ok(RawResponse {
                status: 200,
                body: json!([{"Brand": "LG", "DeviceName": "LG G6"}]),
            })
        }
    }

    #[test]
    fn test_runtime_builds_outside_async_context() {
        assert!(build_runtime().is_ok());
    }

    #[test]
    fn test_blocking_lookup_through_custom_transport() {
        let client =
            Client::with_transport(ClientConfig::new("token"), Arc::new(FixedTransport)).unwrap();
        let phones = client.get_latest(BrandQuery::new("LG")).unwrap();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones.as_raw_rows()[0].get("DeviceName"), Some("LG G6"));
    }
}
