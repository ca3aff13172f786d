//! Fetch → flatten → write pipeline for a single event.

use crate::error::Result;
use crate::fetch::{fetch_customers, HttpPageSource, PageSource, DEFAULT_API_URL};
use crate::ledger::flatten;
use crate::writer::write_line_items;
use log::info;
use std::io::Write;

/// Settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Event whose transactions are exported
    pub event_id: String,

    /// Session token sent as the platform's session cookie
    pub token: String,

    /// Transactions search endpoint
    pub api_url: String,
}

impl ExportConfig {
    /// Creates a config targeting the platform's production endpoint.
    pub fn new(event_id: impl Into<String>, token: impl Into<String>) -> Self {
        ExportConfig {
            event_id: event_id.into(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Runs the export over HTTP and writes the CSV to `writer`.
pub fn run<W: Write>(config: &ExportConfig, writer: W) -> Result<()> {
    let mut source = HttpPageSource::new(config.api_url.as_str(), config.token.as_str())?;
    export_event(&mut source, &config.event_id, writer)
}

/// Fetches every page for `event_id`, flattens it, and writes the CSV.
///
/// Nothing is written until fetching and flattening have both succeeded, so a
/// failed run leaves `writer` untouched.
pub fn export_event<S: PageSource, W: Write>(
    source: &mut S,
    event_id: &str,
    writer: W,
) -> Result<()> {
    let customers = fetch_customers(source, event_id)?;
    let items = flatten(&customers)?;

    info!(
        "Writing {} line items for {} customers of event {:?}",
        items.len(),
        customers.len(),
        event_id
    );
    write_line_items(&items, writer)
}
