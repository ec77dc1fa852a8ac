use async_trait::async_trait;
use condense_common::{AppConfig, CondenseError, Result};
use reqwest::Client;
use tracing::debug;

use crate::types::{ConverseRequest, ConverseResponse};

/// A chat-style inference endpoint: one request in, reply text out
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Send one converse request for `model_id` and return the reply text
    async fn converse(&self, model_id: &str, request: ConverseRequest) -> Result<String>;
}

/// HTTP client for a Converse-compatible runtime endpoint
///
/// One network call per invocation. No retry, and no request timeout
/// beyond the transport default.
#[derive(Debug, Clone)]
pub struct ConverseClient {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl ConverseClient {
    /// Create new converse client
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        debug!("Converse client initialized: {}", endpoint);
        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    /// Create a client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.endpoint_url(), config.api_key.clone())
    }
}

#[async_trait]
impl InferenceClient for ConverseClient {
    async fn converse(&self, model_id: &str, request: ConverseRequest) -> Result<String> {
        let url = format!("{}/model/{}/converse", self.endpoint, model_id);

        debug!(
            "Sending converse request - Model: {}, Content parts: {}",
            model_id,
            request
                .messages
                .iter()
                .map(|m| m.content.len())
                .sum::<usize>()
        );

        let mut builder = self.client.post(&url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CondenseError::network(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| CondenseError::endpoint(format!("Converse API error: {}", e)))?;

        let parsed: ConverseResponse = response
            .json()
            .await
            .map_err(|e| CondenseError::endpoint(format!("Failed to parse response: {}", e)))?;

        let text = parsed.into_text()?;
        debug!("Received reply - Length: {}", text.len());

        Ok(text)
    }
}
