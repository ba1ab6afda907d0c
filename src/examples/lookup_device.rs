//! Device Lookup Example
//!
//! Looks up a device by name and prints a few attributes as a table.
//! Reads the client settings from `fonoapi.json` (at least `{"token": "..."}`).
//!
//! Run with: cargo run --example lookup_device -- "LG Stylo 3 Plus"

use fonoapi::{Client, ClientConfig, DeviceQuery};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fonoapi=info,fonoapi_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let device = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "LG Stylo 3 Plus".to_string());

    let config = ClientConfig::load("fonoapi.json")?;
    let client = Client::from_config(config)?;
    println!("{}\n", client);

    let phones = client.get_device(DeviceQuery::new(device)?).await?;
    println!("{}\n", phones);

    let table = phones.as_table(Some(&["Brand", "DeviceName", "announced", "os", "chipset"]));
    for i in 0..table.num_rows() {
        if let Some(row) = table.row(i) {
            let cells: Vec<&str> = row.iter().map(|v| v.unwrap_or("-")).collect();
            println!("   {}", cells.join(" | "));
        }
    }

    Ok(())
}
