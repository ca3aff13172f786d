//! Flattening of customer transactions into sales-receipt line items.
//!
//! Each transaction becomes an independent run of line items: a donation and
//! its card-fee deduction first, then one income line per ticket, with a
//! ticketing-fee line after every complimentary ticket.

use crate::amount::Amount;
use crate::error::{ExportError, Result};
use crate::model::{Customer, Transaction};
use chrono::{NaiveDateTime, Timelike};
use log::debug;
use rust_decimal::Decimal;

/// Account every receipt is deposited to.
pub const DEPOSIT_ACCOUNT: &str = "200.100 Undeposited Funds";

pub const DONATION_ACCOUNT: &str = "Contributed Income:Unrestricted Contributions";
pub const CARD_FEE_ACCOUNT: &str = "Credit Card Fees";
pub const TICKET_ACCOUNT: &str = "Program Income:BO Income";
pub const TICKETING_FEE_ACCOUNT: &str = "Ticketing Fees";

/// Processing fee charged on donations, as a signed multiplier: -0.035.
const CARD_FEE_RATE: Decimal = Decimal::from_parts(35, 0, 0, true, 3);

/// Flat fee booked against every zero-priced ticket: -1.50.
const TICKETING_FEE: Decimal = Decimal::from_parts(150, 0, 0, true, 2);

/// Layout of transaction timestamps returned by the API.
const CREATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3fZ";

/// Layout of dates written to the export.
const RECEIPT_DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the sales-receipt export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Sales receipt number (the platform transaction id)
    pub transaction_id: i64,

    /// Customer display name, `"Last, First"`
    pub customer: String,

    /// Receipt date, `YYYY-MM-DD`
    pub receipt_date: String,

    pub deposit_to: String,

    pub payment_method: String,

    pub memo: String,

    /// Line item service date; always equal to the receipt date
    pub service_date: String,

    /// Income or expense account the amount is booked to
    pub account: String,

    pub amount: Amount,
}

/// Flattens customers into line items, preserving customer, transaction and
/// ticket order.
///
/// Fails only if a transaction timestamp does not match the API layout.
pub fn flatten(customers: &[Customer]) -> Result<Vec<LineItem>> {
    let mut items = Vec::new();

    for customer in customers {
        for transaction in &customer.transactions {
            flatten_transaction(customer, transaction, &mut items)?;
        }
    }

    Ok(items)
}

/// Appends the line items for a single transaction.
fn flatten_transaction(
    customer: &Customer,
    transaction: &Transaction,
    items: &mut Vec<LineItem>,
) -> Result<()> {
    let date = format_receipt_date(&transaction.creation_date)?;
    let customer_name = customer.display_name();
    let memo = format!("Order: {}", transaction.id);
    let before = items.len();

    let line = |account: &str, amount: Amount| LineItem {
        transaction_id: transaction.id,
        customer: customer_name.clone(),
        receipt_date: date.clone(),
        deposit_to: DEPOSIT_ACCOUNT.to_string(),
        payment_method: transaction.tender_type.clone(),
        memo: memo.clone(),
        service_date: date.clone(),
        account: account.to_string(),
        amount,
    };

    if !transaction.donation.is_zero() {
        items.push(line(DONATION_ACCOUNT, transaction.donation));
        items.push(line(CARD_FEE_ACCOUNT, transaction.donation * CARD_FEE_RATE));
    }

    for ticket in &transaction.tickets {
        items.push(line(TICKET_ACCOUNT, ticket.price));
        if ticket.price.is_zero() {
            items.push(line(TICKETING_FEE_ACCOUNT, Amount::new(TICKETING_FEE)));
        }
    }

    debug!(
        "Order {} for {}: {} line items",
        transaction.id,
        customer_name,
        items.len() - before
    );

    Ok(())
}

/// Reformats an API timestamp such as `2023-05-01T12:00:00.000Z` as `2023-05-01`.
///
/// The input must match the layout exactly: zero-padded fields, exactly three
/// fractional digits, and a literal `Z`.
pub fn format_receipt_date(value: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(value, CREATION_DATE_FORMAT).map_err(|e| {
        ExportError::DateParse {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    // chrono stores `:60` leap seconds as an over-long nanosecond; seconds stop at 59.
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(ExportError::DateParse {
            value: value.to_string(),
            reason: "second out of range".to_string(),
        });
    }

    // chrono accepts unpadded and over-long numeric fields; the API layout does not.
    if parsed.format(CREATION_DATE_FORMAT).to_string() != value {
        return Err(ExportError::DateParse {
            value: value.to_string(),
            reason: format!("expected layout {}", CREATION_DATE_FORMAT),
        });
    }

    Ok(parsed.format(RECEIPT_DATE_FORMAT).to_string())
}
