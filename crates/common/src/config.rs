use crate::error::CondenseError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Condense application configuration
///
/// Built once at process start and passed by reference into constructors.
/// Nothing below this layer reads the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Endpoint region (used to derive the runtime URL)
    pub region: String,

    /// Model identifier sent on every converse call
    pub model_id: String,

    /// Full endpoint URL override (skips region-based derivation)
    pub endpoint_override: Option<String>,

    /// Bearer token for the endpoint, if the deployment requires one
    pub api_key: Option<String>,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            model_id: "anthropic.claude-3-sonnet-20240229-v1:0".to_string(),
            endpoint_override: None,
            api_key: None,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, CondenseError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            region: std::env::var("BEDROCK_REGION")
                .unwrap_or_else(|_| "us-east-1".to_string()),
            model_id: std::env::var("BEDROCK_MODEL_ID")
                .unwrap_or_else(|_| "anthropic.claude-3-sonnet-20240229-v1:0".to_string()),
            endpoint_override: std::env::var("BEDROCK_ENDPOINT_URL").ok(),
            api_key: std::env::var("BEDROCK_API_KEY").ok(),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Runtime endpoint URL, derived from the region unless overridden
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint_override {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CondenseError> {
        if self.region.is_empty() {
            return Err(CondenseError::config("Region cannot be empty"));
        }

        if self.model_id.is_empty() {
            return Err(CondenseError::config("Model ID cannot be empty"));
        }

        if let Some(url) = &self.endpoint_override {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CondenseError::config(
                    "Endpoint URL must start with http:// or https://",
                ));
            }
        }

        if self.server_port == 0 {
            return Err(CondenseError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
