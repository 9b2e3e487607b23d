use axum::{Json, extract::State};
use tracing::info;

use crate::{
    error::AppError,
    extract::JsonBody,
    message::{UpiVerifyRequest, UpiVerifyResponse},
    services::upi::UpiId,
    state::SharedState,
};

// Mock: every well-formed id verifies after a fake network round trip.
pub async fn verify_upi_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<UpiVerifyRequest>,
) -> Result<Json<UpiVerifyResponse>, AppError> {
    let raw = payload.upi.unwrap_or_default();
    let upi = UpiId::parse(&raw)?;

    tokio::time::sleep(state.config.upi_verify_delay).await;
    info!(domain = upi.domain, "UPI id verified (mock)");

    Ok(Json(UpiVerifyResponse {
        verified: true,
        name: upi.display_name(),
        gateway: payload.gateway,
    }))
}
