//! Sales Receipts CLI
//!
//! Fetches every transaction for an event from the ticketing platform and
//! prints them as sales-receipt CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --event 1234 --token "$SESSION_COOKIE" > receipts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to see fetch progress on stderr

use clap::Parser;
use sales_receipts::fetch::DEFAULT_API_URL;
use sales_receipts::{export, ExportConfig, Result};
use std::io;
use std::process;

/// Export an event's ticket sales as bookkeeping sales receipts.
#[derive(Debug, Parser)]
#[command(name = "sales-receipts", version, about)]
struct Cli {
    /// Event ID to query
    #[arg(long = "event")]
    event_id: String,

    /// API token pulled from the 'connect.sid' cookie
    #[arg(long, default_value = "")]
    token: String,

    /// Transactions search endpoint
    #[arg(long, default_value = DEFAULT_API_URL, hide = true)]
    api_url: String,
}

impl Cli {
    fn config(self) -> ExportConfig {
        ExportConfig {
            event_id: self.event_id,
            token: self.token,
            api_url: self.api_url,
        }
    }
}

fn main() {
    env_logger::init();

    let config = Cli::parse().config();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &ExportConfig) -> Result<()> {
    let stdout = io::stdout();
    let handle = stdout.lock();
    export::run(config, handle)
}
