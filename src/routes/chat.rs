use axum::{Json, extract::State};
use tracing::{error, info};

use crate::{
    error::AppError,
    extract::JsonBody,
    message::{ChatDebug, ChatRequest, ChatResponse},
    state::SharedState,
};

pub const APOLOGY_REPLY: &str =
    "Sorry, I couldn't reach the AI assistant right now. Please try again in a moment.";

pub fn demo_reply(message: &str) -> String {
    format!(
        "Demo reply (OpenAI key not configured). You asked: \"{}\"",
        message
    )
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match payload.message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::Validation("Message is required".to_string())),
    };

    let Some(api_key) = state.config.openai_api_key.as_deref() else {
        info!("OpenAI key not configured, sending demo reply");
        return Ok(Json(ChatResponse {
            reply: demo_reply(&message),
            debug: None,
        }));
    };

    match state.openai.chat_completion(api_key, &message).await {
        Ok(reply) => Ok(Json(ChatResponse { reply, debug: None })),
        Err(err) => {
            error!(error = ?err, "OpenAI chat completion failed");
            if state.config.strict_ai_errors {
                return Err(AppError::Upstream(err.to_string()));
            }
            Ok(Json(ChatResponse {
                reply: APOLOGY_REPLY.to_string(),
                debug: Some(ChatDebug {
                    error: err.to_string(),
                }),
            }))
        }
    }
}
