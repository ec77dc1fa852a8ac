use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use condense_common::{CondenseError, Result};
use serde::{Deserialize, Serialize};

/// Converse API request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseRequest {
    /// Ordered message sequence (always exactly one here)
    pub messages: Vec<Message>,

    /// Inference configuration
    pub inference_config: InferenceConfig,
}

/// A single chat message with ordered content parts
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message role
    pub role: Role,

    /// Content parts, in the order the endpoint should read them
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Create a user message
    pub fn user(content: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// One content part: inline text or an attached document
///
/// Serializes externally tagged, matching the wire shape
/// `{"text": ...}` / `{"document": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text(String),

    #[serde(rename = "document")]
    Document(DocumentBlock),
}

/// An attached document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentBlock {
    /// Document name shown to the model
    pub name: String,

    /// Format tag (e.g. "pdf")
    pub format: String,

    /// Byte payload
    pub source: DocumentSource,
}

impl DocumentBlock {
    /// Create a PDF document block from raw bytes
    pub fn pdf(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            format: "pdf".to_string(),
            source: DocumentSource {
                bytes: BASE64.encode(bytes),
            },
        }
    }
}

/// Document byte payload, base64 on the wire
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSource {
    pub bytes: String,
}

/// Inference configuration sent with every request
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Maximum output length bound
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for InferenceConfig {
    // Fixed per request: bounded output, deterministic decoding requested
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.0,
        }
    }
}

/// Converse API response body
///
/// Every layer is optional so that a malformed response becomes an
/// explicit error in [`ConverseResponse::into_text`] instead of a
/// deserialization failure with no context.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverseResponse {
    pub output: Option<ConverseOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConverseOutput {
    pub message: Option<OutputMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputMessage {
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputContent {
    pub text: Option<String>,
}

impl ConverseResponse {
    /// Extract the reply text at `output.message.content[0].text`
    ///
    /// Any missing layer is an error for the current request; there is
    /// no partial extraction and no default text.
    pub fn into_text(self) -> Result<String> {
        let message = self
            .output
            .ok_or_else(|| CondenseError::endpoint("response is missing `output`"))?
            .message
            .ok_or_else(|| CondenseError::endpoint("response is missing `output.message`"))?;

        let first = message
            .content
            .into_iter()
            .next()
            .ok_or_else(|| CondenseError::endpoint("response message has no content parts"))?;

        first
            .text
            .ok_or_else(|| CondenseError::endpoint("first content part has no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SummaryStyle;

    #[test]
    fn test_request_wire_shape() {
        let request = ConverseRequest {
            messages: vec![Message::user(vec![ContentBlock::Text(
                "summarize this".to_string(),
            )])],
            inference_config: InferenceConfig::default(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inferenceConfig"]["maxTokens"], 2000);
        assert_eq!(json["inferenceConfig"]["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["text"], "summarize this");
    }

    #[test]
    fn test_document_block_wire_shape() {
        let block = ContentBlock::Document(DocumentBlock::pdf("uploaded.pdf", b"%PDF-1.4"));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["document"]["name"], "uploaded.pdf");
        assert_eq!(json["document"]["format"], "pdf");
        // %PDF-1.4 in base64
        assert_eq!(json["document"]["source"]["bytes"], "JVBERi0xLjQ=");
    }

    #[test]
    fn test_into_text_well_formed() {
        let response: ConverseResponse = serde_json::from_value(serde_json::json!({
            "output": {"message": {"content": [{"text": "X"}]}}
        }))
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "X");
    }

    #[test]
    fn test_into_text_missing_layers() {
        for raw in [
            serde_json::json!({}),
            serde_json::json!({"output": {}}),
            serde_json::json!({"output": {"message": {}}}),
            serde_json::json!({"output": {"message": {"content": []}}}),
            serde_json::json!({"output": {"message": {"content": [{}]}}}),
        ] {
            let response: ConverseResponse = serde_json::from_value(raw).unwrap();
            assert!(response.into_text().is_err());
        }
    }

    #[test]
    fn test_prompt_survives_serialization() {
        let prompt = crate::prompts::build_prompt("verbatim body", SummaryStyle::Brief);
        let message = Message::user(vec![ContentBlock::Text(prompt)]);
        let json = serde_json::to_value(&message).unwrap();
        let text = json["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("verbatim body"));
        assert!(text.contains("3-4 concise sentences"));
    }
}
