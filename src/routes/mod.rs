// src/routes/mod.rs
pub mod chat;
pub mod payment;
pub mod upi;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use payment::process_payment_handler;
use tower_http::trace::TraceLayer;
use upi::verify_upi_handler;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/ai/chat", post(chat_handler))
        .route("/verify-upi", post(verify_upi_handler))
        .route("/process-payment", post(process_payment_handler))
}

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .nest("/api", api_routes())
        .route("/", get(|| async { "YOU ARE CONNECTED " }))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
