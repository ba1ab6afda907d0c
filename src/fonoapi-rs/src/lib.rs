//! Fono API Client Library
//!
//! HTTP client for Freshpixl's Fono API, which returns attributes of mobile
//! devices (brand, chipset, display, release date and so on).
//!
//! ```rust,no_run
//! use fonoapi::{Client, DeviceQuery};
//!
//! #[tokio::main]
//! async fn main() -> fonoapi::Result<()> {
//!     let client = Client::new("your-token")?;
//!     let phones = client.get_device(DeviceQuery::new("LG Stylo 3 Plus")?).await?;
//!     let table = phones.as_table(Some(&["Brand", "DeviceName", "os"]));
//!     println!("{} rows", table.num_rows());
//!     Ok(())
//! }
//! ```

pub mod blocking;
mod client;
mod transport;

pub use client::{Client, LookupOptions};
pub use transport::{HttpTransport, RawResponse, Transport};

pub use fonoapi_core;
pub use fonoapi_core::{
    AlignedRows, AttributeMap, BrandQuery, ClassifiedResponse, ClientConfig, DeviceQuery, Error,
    Query, Result, ResultSet, Table, DEFAULT_ATTRIBUTES,
};
