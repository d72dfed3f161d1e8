//! Search and reverse command handlers
//!
//! One-shot lookups through the same service the HTTP API uses.

use crate::cli::init_logging;
use crate::config::Config;
use crate::constants::limit::{MAX_LIMIT, MIN_LIMIT};
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, OutputFormatter};
use crate::geo::{GeocodeService, NominatimClient};
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Address or place name
    pub query: String,

    /// Maximum number of results (1-50)
    #[arg(long, short = 'l', value_parser = clap::value_parser!(u32).range(MIN_LIMIT as i64..=MAX_LIMIT as i64))]
    pub limit: Option<u32>,

    /// Output format (json or text)
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Reverse command arguments
#[derive(Args)]
pub struct ReverseArgs {
    /// Latitude (-90 to 90)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude (-180 to 180)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Output format (json or text)
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the search command
pub async fn search(args: SearchArgs) -> Result<()> {
    init_logging("warn");

    let formatter = formatter_for(&args.format)?;
    let config = Config::load()?;
    let limit = args.limit.unwrap_or(config.defaults.limit);
    let service = GeocodeService::new(NominatimClient::new(&config.upstream)?);

    let result = service.search(&args.query, limit).await?;
    println!("{}", formatter.format_search(&result)?);

    Ok(())
}

/// Run the reverse command
pub async fn reverse(args: ReverseArgs) -> Result<()> {
    init_logging("warn");

    let formatter = formatter_for(&args.format)?;
    let config = Config::load()?;
    let service = GeocodeService::new(NominatimClient::new(&config.upstream)?);

    let result = service.reverse_lookup(args.lat, args.lon).await?;
    println!("{}", formatter.format_reverse(&result)?);

    Ok(())
}

fn formatter_for(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| {
        let known: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format: {} (available: {})",
            name,
            known.join(", ")
        ))
    })
}
