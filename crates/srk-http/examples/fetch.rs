//! Fetch one URL through the configured transport chain.
//!
//! Run with: `cargo run --example fetch -- https://textures.example/skin.png`

use srk_core::transport::SkinTransport;
use srk_http::SkinRestorerConfig;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let arg = std::env::args().nth(1).ok_or("usage: fetch <url>")?;
    let url = Url::parse(&arg)?;

    let transport = SkinRestorerConfig::default().build_transport()?;
    let body = transport.fetch(&url)?;
    println!("fetched {} bytes from {url}", body.len());
    Ok(())
}
