//! Thin client for an OpenAI-compatible chat-completions endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Model used for every chat completion.
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Returned when none of the known response layouts carries any text.
pub const NO_REPLY: &str = "No reply";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [OutgoingMessage<'a>; 1],
}

#[derive(Serialize)]
struct OutgoingMessage<'a> {
    role: &'a str,
    content: &'a str,
}

type ReplyExtractor = fn(&Value) -> Option<&str>;

/// Known response layouts, in priority order.
const REPLY_EXTRACTORS: [ReplyExtractor; 3] = [message_content, choice_text, data_envelope];

fn message_content(body: &Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")?.as_str()
}

fn choice_text(body: &Value) -> Option<&str> {
    body.pointer("/choices/0/text")?.as_str()
}

fn data_envelope(body: &Value) -> Option<&str> {
    body.pointer("/data/choices/0/message/content")?.as_str()
}

/// First non-empty reply any extractor finds, else [`NO_REPLY`].
pub fn extract_reply(body: &Value) -> String {
    REPLY_EXTRACTORS
        .iter()
        .filter_map(|extract| extract(body))
        .find(|text| !text.is_empty())
        .unwrap_or(NO_REPLY)
        .to_string()
}

/// Pulls `error.message` out of a provider error body when there is one.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message")?.as_str().map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("OpenAI API error {}", status))
}

#[derive(Clone, Debug)]
pub struct OpenAiClient {
    http: Client,
    api_base: String,
}

impl OpenAiClient {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }

    /// Sends `message` as a single user turn and returns the extracted reply.
    pub async fn chat_completion(&self, api_key: &str, message: &str) -> Result<String, UpstreamError> {
        let request = ChatCompletionRequest {
            model: CHAT_MODEL,
            messages: [OutgoingMessage { role: "user", content: message }],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status,
                message: error_message(status, &body),
            });
        }

        let body: Value = response.json().await.map_err(UpstreamError::Decode)?;
        debug!("chat completion response: {}", body);
        Ok(extract_reply(&body))
    }
}
