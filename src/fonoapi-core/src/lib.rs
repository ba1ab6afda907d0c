//! Fono API Core Library
//!
//! Transport-free building blocks of the Fono API client:
//! - Query types for the `getdevice` and `getlatest` endpoints
//! - Response classification into success, empty and error outcomes
//! - Result sets with raw, aligned-row and tabular views
//! - The error taxonomy and client configuration

pub mod attributes;
pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod result_set;

// Re-export commonly used types
pub use attributes::DEFAULT_ATTRIBUTES;
pub use classify::{classify, ClassifiedResponse};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::AttributeMap;
pub use query::{BrandQuery, DeviceQuery, Endpoint, Query};
pub use result_set::{AlignedRows, ResultSet, Table};
