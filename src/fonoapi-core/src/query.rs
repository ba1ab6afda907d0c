use std::fmt;

use crate::{Error, Result};

/// Largest number of devices the `getlatest` endpoint will return.
pub const MAX_LIMIT: u32 = 100;

/// The two endpoints of the Fono API, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetDevice,
    GetLatest,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetDevice => "getdevice",
            Endpoint::GetLatest => "getlatest",
        }
    }
}

/// Lookup by (partial) device name, e.g. "i9305" or "A8".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceQuery {
    device: String,
    position: Option<u32>,
    brand: Option<String>,
}

impl DeviceQuery {
    pub fn new(device: impl Into<String>) -> Result<Self> {
        let device = device.into();
        if device.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "device name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            device,
            position: None,
            brand: None,
        })
    }

    /// Pick a single device out of the matches, counting from 0
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn position(&self) -> Option<u32> {
        self.position
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }
}

/// Lookup of the most recent devices of a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandQuery {
    brand: String,
    limit: Option<u32>,
}

impl BrandQuery {
    /// New brand query with the service maximum of 100 results
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            limit: Some(MAX_LIMIT),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Result<Self> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(Error::InvalidArgument(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, limit
            )));
        }
        self.limit = Some(limit);
        Ok(self)
    }

    /// Send `limit: null` and let the server pick its default
    pub fn without_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }
}

/// Parameters of one lookup, kept on the [`ResultSet`](crate::ResultSet) for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Device(DeviceQuery),
    Brand(BrandQuery),
}

impl Query {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Query::Device(_) => Endpoint::GetDevice,
            Query::Brand(_) => Endpoint::GetLatest,
        }
    }
}

impl From<DeviceQuery> for Query {
    fn from(query: DeviceQuery) -> Self {
        Query::Device(query)
    }
}

impl From<BrandQuery> for Query {
    fn from(query: BrandQuery) -> Self {
        Query::Brand(query)
    }
}

fn fmt_opt<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Device(q) => write!(
                f,
                "{{device: {:?}, position: {}, brand: {}}}",
                q.device,
                fmt_opt(q.position),
                fmt_opt(q.brand.as_deref().map(|b| format!("{:?}", b)))
            ),
            Query::Brand(q) => write!(
                f,
                "{{brand: {:?}, limit: {}}}",
                q.brand,
                fmt_opt(q.limit)
            ),
        }
    }
}
