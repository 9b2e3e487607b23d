// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(rename = "_debug", default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<ChatDebug>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatDebug {
    pub error: String,
}

#[derive(Deserialize, Default)]
pub struct UpiVerifyRequest {
    #[serde(default)]
    pub upi: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpiVerifyResponse {
    pub verified: bool,
    pub name: String,
    pub gateway: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct PaymentRequest {
    #[serde(default)]
    pub method: Option<String>,
    // Free-form on purpose: only truthiness is checked, the value is echoed as sent.
    #[serde(default)]
    pub amount: Option<Value>,
    /// `Some(Value::Null)` for an explicit `null`, `None` when the key is absent.
    #[serde(default, deserialize_with = "present")]
    pub details: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub success: bool,
    pub tx_id: String,
    pub method: String,
    pub amount: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}
