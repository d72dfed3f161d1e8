//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod lookup;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Nominatim geocoding gateway
#[derive(Parser)]
#[command(name = "geocode-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Look up coordinates for an address or place name
    Search(lookup::SearchArgs),

    /// Look up the address at a coordinate pair
    Reverse(lookup::ReverseArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Check whether a server is running
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Search(args) => lookup::search(args).await,
        Commands::Reverse(args) => lookup::reverse(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
