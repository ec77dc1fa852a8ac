use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use condense_common::CondenseError;
use serde::{Deserialize, Serialize};

/// Text summarization request
#[derive(Debug, Deserialize)]
pub struct TextSummarizeRequest {
    /// Raw content to summarize
    pub text: String,

    /// Style keyword; unrecognized or missing falls back to brief
    pub style: Option<String>,
}

/// Summarization response
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Summary text (bullet-formatted for bullet_points)
    pub summary: String,

    /// Style that governed the request
    pub style: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Configured model identifier
    pub model_id: String,

    /// Resolved endpoint URL
    pub endpoint: String,
}

/// Map an error to an HTTP response with its status code
pub fn error_response(err: &CondenseError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse {
        error: err.to_string(),
    })
}
