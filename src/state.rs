// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::GenerationError;
use crate::services::chat_relay::ChatRelay;
use crate::services::generator::{GeminiClient, TextGenerator};
use crate::services::session_manager::SessionManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
    pub sessions: SessionManager,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, generation_timeout: Duration, sessions: SessionManager) -> Self {
        Self {
            relay: ChatRelay::new(generator, generation_timeout),
            sessions,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let gemini = GeminiClient::from_config(config)?;
        Ok(Self::new(
            Arc::new(gemini),
            config.generation_timeout,
            SessionManager::new(config.session_ttl, config.session_max_messages),
        ))
    }
}
