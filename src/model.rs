//! Records decoded from the transactions search API.

use crate::amount::Amount;
use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One page of the transactions search response.
///
/// An absent or `null` `customers` field is treated the same as an empty page.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub customers: Vec<Customer>,
}

/// A purchaser and the transactions they made for the event.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,

    /// Transactions in the order the platform returned them
    #[serde(default, deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
}

impl Customer {
    /// Returns the bookkeeping display name, `"Last, First"`, with both parts trimmed.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name.trim(), self.first_name.trim())
    }
}

/// A single order placed by a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Platform order number, used as the sales receipt number
    pub id: i64,

    /// Optional donation added to the order (zero when none)
    #[serde(default, deserialize_with = "null_as_default")]
    pub donation: Amount,

    /// Order total as reported by the platform
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: Amount,

    /// Creation timestamp, e.g. `2023-05-01T12:00:00.000Z`
    pub creation_date: String,

    /// Payment method label, e.g. a card brand
    #[serde(default, deserialize_with = "null_as_default")]
    pub tender_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tickets: Vec<Ticket>,
}

/// A ticket sold within a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_decode_full_page() {
        let body = r#"{
            "customers": [{
                "first_name": "Jane",
                "last_name": "Doe",
                "transactions": [{
                    "id": 42,
                    "donation": 100,
                    "total": 112.5,
                    "creation_date": "2023-05-01T12:00:00.000Z",
                    "tender_type": "Visa",
                    "tickets": [{"price": 12.5}, {"price": 0}]
                }]
            }]
        }"#;

        let page: TransactionsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.customers.len(), 1);

        let tx = &page.customers[0].transactions[0];
        assert_eq!(tx.id, 42);
        assert_eq!(tx.donation, Amount::from_str("100").unwrap());
        assert_eq!(tx.total, Amount::from_str("112.5").unwrap());
        assert_eq!(tx.tender_type, "Visa");
        assert_eq!(tx.tickets.len(), 2);
        assert!(tx.tickets[1].price.is_zero());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{"customers": [], "page": 3, "total_pages": 2}"#;
        let page: TransactionsPage = serde_json::from_str(body).unwrap();
        assert!(page.customers.is_empty());
    }

    #[test]
    fn test_decode_missing_customers_is_empty_page() {
        let page: TransactionsPage = serde_json::from_str("{}").unwrap();
        assert!(page.customers.is_empty());
    }

    #[test]
    fn test_decode_null_fields_as_defaults() {
        let body = r#"{"customers": [
            {"first_name": null, "last_name": "Doe", "transactions": [{
                "id": 7,
                "donation": null,
                "total": null,
                "creation_date": "2023-05-01T12:00:00.000Z",
                "tender_type": null,
                "tickets": [{"price": null}]
            }, {
                "id": 8,
                "creation_date": "2023-05-01T12:00:00.000Z",
                "tickets": null
            }]},
            {"first_name": "Bo", "last_name": "Park", "transactions": null}
        ]}"#;

        let page: TransactionsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.customers.len(), 2);

        let doe = &page.customers[0];
        assert_eq!(doe.display_name(), "Doe, ");
        let tx = &doe.transactions[0];
        assert!(tx.donation.is_zero());
        assert!(tx.total.is_zero());
        assert_eq!(tx.tender_type, "");
        assert!(tx.tickets[0].price.is_zero());
        assert!(doe.transactions[1].tickets.is_empty());

        assert!(page.customers[1].transactions.is_empty());
    }

    #[test]
    fn test_decode_null_customers_is_empty_page() {
        let page: TransactionsPage = serde_json::from_str(r#"{"customers": null}"#).unwrap();
        assert!(page.customers.is_empty());
    }

    #[test]
    fn test_decode_null_creation_date_is_rejected() {
        let body = r#"{"customers": [{"first_name": "A", "last_name": "B",
            "transactions": [{"id": 1, "creation_date": null}]}]}"#;
        assert!(serde_json::from_str::<TransactionsPage>(body).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let result = serde_json::from_str::<TransactionsPage>(r#"{"customers": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_name_trims_parts() {
        let customer = Customer {
            first_name: " Jane ".to_string(),
            last_name: "  Doe\t".to_string(),
            transactions: Vec::new(),
        };
        assert_eq!(customer.display_name(), "Doe, Jane");
    }
}
