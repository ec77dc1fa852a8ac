/// Condense error types
#[derive(Debug, thiserror::Error)]
pub enum CondenseError {
    /// Inference endpoint error (bad status, malformed response shape)
    #[error("Endpoint error: {0}")]
    Endpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CondenseError {
    /// Create endpoint error
    pub fn endpoint<S: Into<String>>(msg: S) -> Self {
        Self::Endpoint(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

// HTTP response conversion (used by the server front-end)
impl CondenseError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Json(_) => 400,
            Self::Endpoint(_) => 502,
            Self::Network(_) => 503,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}
