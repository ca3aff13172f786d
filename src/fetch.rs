//! Paginated retrieval of an event's customers from the transactions API.
//!
//! Pages are requested one at a time, starting at page 1, until the API
//! returns a page with no customers. Any failure aborts the whole fetch.

use crate::error::{ExportError, Result};
use crate::model::{Customer, TransactionsPage};
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use reqwest::StatusCode;
use std::time::Duration;

/// Transactions search endpoint of the ticketing platform.
pub const DEFAULT_API_URL: &str = "https://www.showtix4u.com/api/transactions/search";

/// Name of the platform's session cookie carrying the caller's token.
pub const SESSION_COOKIE: &str = "connect.sid";

/// A source of customer pages for an event.
///
/// `page` is 1-indexed. An empty result marks the end of the data.
pub trait PageSource {
    fn fetch_page(&mut self, event_id: &str, page: u32) -> Result<Vec<Customer>>;
}

/// Fetches pages from the transactions API over blocking HTTP.
pub struct HttpPageSource {
    client: Client,
    api_url: String,
    token: String,
}

impl HttpPageSource {
    /// Creates a source for the given endpoint, authenticating with `token`.
    ///
    /// No request timeout is set: a stalled call blocks until the peer gives up.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(ExportError::Request)?;

        Ok(HttpPageSource {
            client,
            api_url: api_url.into(),
            token: token.into(),
        })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&mut self, event_id: &str, page: u32) -> Result<Vec<Customer>> {
        let page_param = page.to_string();
        let request = self
            .client
            .get(&self.api_url)
            .query(&[("event_id", event_id), ("page", page_param.as_str())])
            .header(COOKIE, format!("{}={}", SESSION_COOKIE, self.token))
            .build()
            .map_err(ExportError::Request)?;

        let response = self
            .client
            .execute(request)
            .map_err(ExportError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ExportError::Status { status });
        }

        let body = response.bytes().map_err(ExportError::Transport)?;
        let decoded: TransactionsPage = serde_json::from_slice(&body)?;
        Ok(decoded.customers)
    }
}

/// Collects every customer for `event_id`, page by page.
///
/// Stops at the first empty page; that page contributes nothing.
pub fn fetch_customers<S: PageSource>(source: &mut S, event_id: &str) -> Result<Vec<Customer>> {
    let mut customers = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.fetch_page(event_id, page)?;
        if batch.is_empty() {
            debug!("Page {} for event {:?} is empty, stopping", page, event_id);
            break;
        }

        info!(
            "Fetched page {} for event {:?}: {} customers",
            page,
            event_id,
            batch.len()
        );
        customers.extend(batch);
        page += 1;
    }

    Ok(customers)
}
