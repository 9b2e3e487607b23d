use axum::{Json, extract::State};
use chrono::Utc;
use tracing::info;

use crate::{
    error::AppError,
    extract::JsonBody,
    message::{PaymentRequest, PaymentResponse},
    services::payment::{is_truthy, transaction_id},
    state::SharedState,
};

pub async fn process_payment_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<PaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let (method, amount) = match (payload.method, payload.amount) {
        (Some(method), Some(amount)) if !method.is_empty() && is_truthy(&amount) => (method, amount),
        _ => return Err(AppError::Validation("method and amount required".to_string())),
    };

    tokio::time::sleep(state.config.payment_delay).await;

    let tx_id = transaction_id(Utc::now());
    info!(%tx_id, %method, "payment processed (mock)");

    Ok(Json(PaymentResponse {
        success: true,
        tx_id,
        method,
        amount,
        details: payload.details,
    }))
}
