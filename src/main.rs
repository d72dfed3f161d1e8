//! geocode-gateway CLI entry point
//!
//! Nominatim geocoding gateway - CLI + web API

use geocode_gateway::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
