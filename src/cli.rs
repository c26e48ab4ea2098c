use std::path::PathBuf;

use clap::Parser;

/// Terminal storefront: browse products, look up weather, create products.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Route to open at startup, e.g. "/products" or "/products/3".
    #[arg(long, default_value = "/")]
    pub start: String,

    /// UI tick interval in milliseconds.
    #[arg(long, default_value_t = 250)]
    pub tick_rate_ms: u64,
}
