//! Status command handler
//!
//! Probes a running server's welcome endpoint.

use crate::config::Config;
use crate::error::Result;
use clap::Args;
use std::time::Duration;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Server address to probe (defaults to the configured host:port)
    #[arg(long)]
    pub addr: Option<String>,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;
    let addr = args.addr.unwrap_or_else(|| config.server_addr());

    println!("geocode-gateway v{}", env!("CARGO_PKG_VERSION"));
    println!("Upstream: {}", config.upstream.base_url);
    println!("User-Agent: {}", config.upstream.user_agent);
    println!();

    check_server_status(&addr).await;
    Ok(())
}

/// Check if the server is running
async fn check_server_status(addr: &str) {
    let url = format!("http://{}/", addr);
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            println!("Server: UNKNOWN ({})", e);
            return;
        }
    };

    match client.get(&url).send().await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", addr);
                if let Ok(status) = response.json::<serde_json::Value>().await {
                    if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                        println!("  Version: {}", version);
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", addr);
        }
    }
}
