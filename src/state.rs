// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::openai::OpenAiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub openai: OpenAiClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let openai = OpenAiClient::new(&config.openai_api_base, config.openai_timeout)?;
        Ok(Self { config, openai })
    }

    pub fn shared(config: Config) -> anyhow::Result<SharedState> {
        Ok(Arc::new(Self::new(config)?))
    }
}
