use condense_common::{AppConfig, Result};
use condense_llm::{ConverseClient, Summarizer};

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Request adapter for the inference endpoint
    pub summarizer: Summarizer<ConverseClient>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = ConverseClient::from_config(&config)?;
        let summarizer = Summarizer::new(client, config.model_id.clone());

        Ok(Self { config, summarizer })
    }
}
