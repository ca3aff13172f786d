//! CSV serialization of line items in the bookkeeping import layout.

use crate::error::Result;
use crate::ledger::LineItem;
use std::io::Write;

/// Column titles of the sales-receipt import, in output order.
pub const HEADER: [&str; 9] = [
    "Sales Receipt No",
    "Customer",
    "Sales Receipt Date",
    "Deposit To",
    "Payment Method",
    "Memo",
    "Line Item Service Date",
    "Line Item",
    "Line Item Amount",
];

/// Writes the header row followed by one row per line item, in order.
///
/// Amounts are written with exactly two decimal places.
pub fn write_line_items<W: Write>(items: &[LineItem], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for item in items {
        csv_writer.write_record([
            item.transaction_id.to_string(),
            item.customer.clone(),
            item.receipt_date.clone(),
            item.deposit_to.clone(),
            item.payment_method.clone(),
            item.memo.clone(),
            item.service_date.clone(),
            item.account.clone(),
            item.amount.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
