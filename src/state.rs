// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::services::provider::GenerationProvider;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn GenerationProvider>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn GenerationProvider>) -> Result<Self, AppError> {
        // One client for the forwarding endpoint; the provider holds its own.
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("building http client: {e}")))?;

        Ok(Self {
            config,
            provider,
            http,
        })
    }
}
