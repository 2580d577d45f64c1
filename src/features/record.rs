//! Raw transaction as received at the HTTP boundary.

use serde::{Deserialize, Serialize};

/// One transaction to score. Every field is required; a missing or mistyped
/// field is rejected by deserialization before it reaches the transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub amount: f64,
    pub customer_age: f64,
    pub hour: i64,
    pub transaction_type: String,
    pub merchant_category: String,
    pub card_type: String,
    pub country: String,
    pub device: String,
}
