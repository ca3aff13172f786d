//! # Sales Receipts
//!
//! Exports an event's ticketing transactions as sales-receipt line items for
//! bookkeeping import.
//!
//! ## Pipeline
//!
//! - **Fetch**: pages through the transactions search API until an empty page
//! - **Flatten**: turns each transaction into donation, fee and ticket lines
//! - **Write**: emits the lines as CSV with amounts rounded to cents
//!
//! Every failure is returned as an [`ExportError`]; nothing is written unless
//! the whole fetch and flatten succeeds.
//!
//! ## Example
//!
//! ```no_run
//! use sales_receipts::{export, ExportConfig};
//!
//! let config = ExportConfig::new("1234", "session-token");
//! export::run(&config, std::io::stdout()).unwrap();
//! ```

pub mod amount;
pub mod error;
pub mod export;
pub mod fetch;
pub mod ledger;
pub mod model;
pub mod writer;

pub use amount::Amount;
pub use error::{ExportError, Result};
pub use export::{export_event, ExportConfig};
pub use fetch::{fetch_customers, HttpPageSource, PageSource};
pub use ledger::{flatten, format_receipt_date, LineItem};
pub use model::{Customer, Ticket, Transaction, TransactionsPage};
pub use writer::write_line_items;
