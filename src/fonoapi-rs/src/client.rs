use crate::transport::{HttpTransport, Transport};
use fonoapi_core::{
    classify, BrandQuery, ClassifiedResponse, ClientConfig, DeviceQuery, Error, Query, Result,
    ResultSet,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Fono API Client
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

/// How a single lookup treats an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    /// Fail with `Error::NoResults` instead of returning an empty set
    pub strict: bool,
    /// Log at info level when nothing was found
    pub verbose: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            strict: false,
            verbose: true,
        }
    }
}

// Unset optionals serialize as null, the server expects every key to be present.
#[derive(Serialize)]
struct GetDeviceRequest<'a> {
    brand: Option<&'a str>,
    device: &'a str,
    position: Option<u32>,
    token: &'a str,
}

#[derive(Serialize)]
struct GetLatestRequest<'a> {
    brand: &'a str,
    limit: Option<u32>,
    token: &'a str,
}

impl Client {
    /// Create a client for the public API with default settings
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(token))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(
            Duration::from_secs(config.timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client that sends requests through a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Options used by `get_device` and `get_latest`, taken from the config
    pub fn default_options(&self) -> LookupOptions {
        LookupOptions {
            strict: self.config.strict_empty,
            verbose: self.config.verbose,
        }
    }

    /// Look up devices by name
    pub async fn get_device(&self, query: DeviceQuery) -> Result<ResultSet> {
        self.get_device_with(query, self.default_options()).await
    }

    pub async fn get_device_with(
        &self,
        query: DeviceQuery,
        options: LookupOptions,
    ) -> Result<ResultSet> {
        let body = encode(&GetDeviceRequest {
            brand: query.brand(),
            device: query.device(),
            position: query.position(),
            token: &self.config.token,
        })?;

        self.execute(query.into(), body, options).await
    }

    /// Latest devices of a brand
    pub async fn get_latest(&self, query: BrandQuery) -> Result<ResultSet> {
        self.get_latest_with(query, self.default_options()).await
    }

    pub async fn get_latest_with(
        &self,
        query: BrandQuery,
        options: LookupOptions,
    ) -> Result<ResultSet> {
        let body = encode(&GetLatestRequest {
            brand: query.brand(),
            limit: query.limit(),
            token: &self.config.token,
        })?;

        self.execute(query.into(), body, options).await
    }

    async fn execute(
        &self,
        query: Query,
        body: serde_json::Value,
        options: LookupOptions,
    ) -> Result<ResultSet> {
        let endpoint = query.endpoint();
        let url = self.config.endpoint_url(endpoint);

        tracing::debug!(endpoint = endpoint.path(), query = %query, "Sending lookup");
        let response = self.transport.post_json(&url, &body).await?;

        interpret(query, classify(response.status, &response.body), options)
    }
}

fn encode<T: Serialize>(request: &T) -> Result<serde_json::Value> {
    serde_json::to_value(request)
        .map_err(|e| Error::InvalidArgument(format!("failed to encode request: {}", e)))
}

/// Turn a classified response into the caller-facing result.
fn interpret(
    query: Query,
    classified: ClassifiedResponse,
    options: LookupOptions,
) -> Result<ResultSet> {
    match classified {
        ClassifiedResponse::Success(rows) => Ok(ResultSet::new(query, rows)),
        ClassifiedResponse::Empty if options.strict => Err(Error::NoResults { query }),
        ClassifiedResponse::Empty => {
            if options.verbose {
                match &query {
                    Query::Device(q) => tracing::info!(
                        "Could not retrieve device information for device {} from the Fono API",
                        q.device()
                    ),
                    Query::Brand(q) => tracing::info!(
                        "Could not retrieve brand information for brand {} from the Fono API",
                        q.brand()
                    ),
                }
            }
            Ok(ResultSet::empty(query))
        }
        ClassifiedResponse::InvalidToken => {
            tracing::warn!("Fono API rejected the token");
            Err(Error::InvalidToken)
        }
        ClassifiedResponse::ServerError {
            status,
            error,
            message,
        } => {
            tracing::warn!(status, error = %error, message = %message, "Fono API returned an error");
            Err(Error::Server {
                status,
                error,
                message,
            })
        }
        ClassifiedResponse::MalformedBody(detail) => Err(Error::Protocol(detail)),
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| FonoAPI Object: Use to connect to the FonoApi |")?;
        writeln!(f, "-------------------------------------------------")?;
        writeln!(f, "API URL   : {}", self.config.api_url)?;
        write!(f, "API Token : {}", self.config.masked_token())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.config.api_url)
            .field("token", &self.config.masked_token())
            .finish_non_exhaustive()
    }
}
