// src/services/payment.rs
use chrono::{DateTime, Utc};
use serde_json::Value;

pub const TX_ID_PREFIX: &str = "TXN-";

/// `TXN-` followed by the last six digits of the epoch-millis timestamp.
/// Not unique: two payments in the same millisecond share an id.
pub fn transaction_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    format!("{}{:06}", TX_ID_PREFIX, millis)
}

/// Loose truthiness for the `amount` field: `null`, `false`, `0` and `""` are rejected,
/// anything else passes untouched.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
