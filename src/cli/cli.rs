use clap::Parser;

use heimdall::DEFAULT_PING_ROUTE;

/// Heimdall - demo server exposing the ping route
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 9999)]
    pub port: u16,

    /// Listen address
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// Path the ping route is mounted at
    #[arg(short, long, env = "PING_ROUTE", default_value = DEFAULT_PING_ROUTE)]
    pub route: String,
}
