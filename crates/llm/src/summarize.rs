use condense_common::Result;
use tracing::info;

use crate::client::InferenceClient;
use crate::prompts::{build_prompt, document_prompt};
use crate::style::SummaryStyle;
use crate::types::{ContentBlock, ConverseRequest, DocumentBlock, InferenceConfig, Message};

/// Name given to the attached document on the wire
const DOCUMENT_NAME: &str = "uploaded.pdf";

/// Request adapter: builds converse messages per style and returns the
/// extracted reply text
pub struct Summarizer<C> {
    client: C,
    model: String,
}

impl<C: InferenceClient> Summarizer<C> {
    /// Create new summarizer
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Summarize plain text
    pub async fn summarize_text(&self, text: &str, style: SummaryStyle) -> Result<String> {
        info!(
            "Summarizing text - Length: {} chars, Style: {}",
            text.len(),
            style.keyword()
        );

        let request = ConverseRequest {
            messages: vec![text_message(text, style)],
            inference_config: InferenceConfig::default(),
        };

        self.client.converse(&self.model, request).await
    }

    /// Summarize a PDF by attaching it as a document part
    pub async fn summarize_pdf(
        &self,
        bytes: &[u8],
        style: SummaryStyle,
        hint: Option<&str>,
    ) -> Result<String> {
        info!(
            "Summarizing PDF - Size: {} bytes, Style: {}, Hint: {}",
            bytes.len(),
            style.keyword(),
            hint.is_some()
        );

        let request = ConverseRequest {
            messages: vec![pdf_message(bytes, style, hint)],
            inference_config: InferenceConfig::default(),
        };

        self.client.converse(&self.model, request).await
    }
}

/// One text part holding the built prompt
fn text_message(text: &str, style: SummaryStyle) -> Message {
    Message::user(vec![ContentBlock::Text(build_prompt(text, style))])
}

/// Document part first, then the text part with the document prompt
fn pdf_message(bytes: &[u8], style: SummaryStyle, hint: Option<&str>) -> Message {
    Message::user(vec![
        ContentBlock::Document(DocumentBlock::pdf(DOCUMENT_NAME, bytes)),
        ContentBlock::Text(document_prompt(style, hint)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use condense_common::CondenseError;
    use std::sync::Mutex;

    /// Scripted client that records requests and replies with a fixed string
    struct ScriptedClient {
        requests: Mutex<Vec<ConverseRequest>>,
        reply: String,
    }

    impl ScriptedClient {
        fn new(reply: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait::async_trait]
    impl InferenceClient for ScriptedClient {
        async fn converse(&self, _model_id: &str, request: ConverseRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request);
            Ok(self.reply.clone())
        }
    }

    /// Client that always fails, to check errors pass through untouched
    struct FailingClient;

    #[async_trait::async_trait]
    impl InferenceClient for FailingClient {
        async fn converse(&self, _model_id: &str, _request: ConverseRequest) -> Result<String> {
            Err(CondenseError::endpoint("service unavailable"))
        }
    }

    #[tokio::test]
    async fn test_summarize_text_builds_single_text_part() {
        let client = ScriptedClient::new("the summary");
        let summarizer = Summarizer::new(client, "test-model");

        let result = summarizer
            .summarize_text("hello world", SummaryStyle::Brief)
            .await
            .unwrap();
        assert_eq!(result, "the summary");

        let requests = summarizer.client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let message = &requests[0].messages[0];
        assert_eq!(message.content.len(), 1);
        match &message.content[0] {
            ContentBlock::Text(prompt) => {
                assert!(prompt.contains("hello world"));
                assert!(prompt.contains("3-4 concise sentences"));
            }
            other => panic!("expected text part, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_summarize_empty_text_still_builds_message() {
        let client = ScriptedClient::new("ok");
        let summarizer = Summarizer::new(client, "test-model");

        summarizer
            .summarize_text("", SummaryStyle::Detailed)
            .await
            .unwrap();

        let requests = summarizer.client.requests.lock().unwrap();
        assert_eq!(requests[0].messages[0].content.len(), 1);
    }

    #[tokio::test]
    async fn test_summarize_pdf_builds_document_then_text() {
        let client = ScriptedClient::new("pdf summary");
        let summarizer = Summarizer::new(client, "test-model");

        summarizer
            .summarize_pdf(b"%PDF-1.4", SummaryStyle::Executive, Some("focus on risks"))
            .await
            .unwrap();

        let requests = summarizer.client.requests.lock().unwrap();
        let message = &requests[0].messages[0];
        assert_eq!(message.content.len(), 2);

        match &message.content[0] {
            ContentBlock::Document(doc) => {
                assert_eq!(doc.name, "uploaded.pdf");
                assert_eq!(doc.format, "pdf");
            }
            other => panic!("expected document part first, got {:?}", other),
        }

        match &message.content[1] {
            ContentBlock::Text(prompt) => {
                assert!(prompt.contains("executive summary"));
                assert!(prompt.contains("User hint / context: focus on risks"));
            }
            other => panic!("expected text part second, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_inference_config_is_fixed() {
        let client = ScriptedClient::new("ok");
        let summarizer = Summarizer::new(client, "test-model");

        summarizer
            .summarize_text("text", SummaryStyle::Brief)
            .await
            .unwrap();

        let requests = summarizer.client.requests.lock().unwrap();
        assert_eq!(requests[0].inference_config.max_tokens, 2000);
        assert_eq!(requests[0].inference_config.temperature, 0.0);
    }

    #[tokio::test]
    async fn test_endpoint_error_propagates() {
        let summarizer = Summarizer::new(FailingClient, "test-model");
        let result = summarizer.summarize_text("text", SummaryStyle::Brief).await;
        assert!(matches!(result, Err(CondenseError::Endpoint(_))));
    }
}
