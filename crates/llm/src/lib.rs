//! Condense LLM integration
//!
//! Converse API client, prompt construction, and the summarization adapter

mod client;
mod prompts;
mod style;
mod summarize;
mod types;

pub use client::{ConverseClient, InferenceClient};
pub use prompts::{build_prompt, document_prompt, DOCUMENT_PLACEHOLDER, DOCUMENT_PREAMBLE};
pub use style::SummaryStyle;
pub use summarize::Summarizer;
pub use types::{
    ContentBlock, ConverseRequest, ConverseResponse, DocumentBlock, InferenceConfig, Message, Role,
};
