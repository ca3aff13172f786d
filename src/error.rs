//! Error types for the sales-receipt export.

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while fetching, flattening, or writing receipts.
///
/// Every variant is fatal: nothing in the pipeline recovers or retries.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The transactions request could not be constructed
    #[error("failed to create transactions request: {0}")]
    Request(#[source] reqwest::Error),

    /// The transactions API could not be reached or its body could not be read
    #[error("failed to call transactions API: {0}")]
    Transport(#[source] reqwest::Error),

    /// The transactions API answered with something other than 200 OK
    #[error("non-success status code from transactions API: {status}")]
    Status { status: reqwest::StatusCode },

    /// The response body was not the expected JSON document
    #[error("failed to decode transactions response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A transaction timestamp did not match the fixed API layout
    #[error("failed to parse date string {value:?}: {reason}")]
    DateParse { value: String, reason: String },

    /// CSV serialization error
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to write to the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
