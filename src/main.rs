use tower_http::cors::CorsLayer;
use tracing::info;

use payment_assistant_backend::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;
    if config.openai_api_key.is_none() {
        info!("OPENAI_API_KEY not set, chat endpoint will answer with demo replies");
    }
    let addr = config.bind_addr();
    let state = AppState::shared(config)?;

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("payment assistant backend running at http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
