//! Latest Devices Example
//!
//! Fetches the newest devices of a brand with the blocking client and lists
//! every attribute name the service returned for them.
//!
//! Run with: cargo run --example latest_for_brand -- samsung 10

use fonoapi::{blocking, BrandQuery, ClientConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fonoapi=info,fonoapi_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let brand = args.next().unwrap_or_else(|| "samsung".to_string());
    let limit: u32 = match args.next() {
        Some(n) => n.parse()?,
        None => 10,
    };

    let config = ClientConfig::load("fonoapi.json")?;
    let client = blocking::Client::from_config(config)?;

    let phones = client.get_latest(BrandQuery::new(brand).with_limit(limit)?)?;
    println!("{}\n", phones);

    for phone in &phones {
        println!("   {}", phone.get("DeviceName").unwrap_or("<unnamed>"));
    }

    let keys = phones.union_of_keys();
    println!("\n{} attributes returned: {}", keys.len(), keys.join(", "));

    Ok(())
}
