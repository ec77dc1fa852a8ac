//! Prompt construction for summarization requests

use crate::style::SummaryStyle;

/// Preamble prepended to document-mode prompts
pub const DOCUMENT_PREAMBLE: &str = "You are a helpful assistant that summarizes PDF documents.\n\
Read the attached PDF and generate a summary in the requested style.\n";

/// Placeholder content sent alongside an attached document
pub const DOCUMENT_PLACEHOLDER: &str = "The content is in the attached PDF document.";

/// Build the prompt for a given content and style
///
/// Deterministic: the style instruction, a delimiter, and the content
/// verbatim. Empty content passes through unvalidated; rejecting it is
/// a front-end concern.
pub fn build_prompt(content: &str, style: SummaryStyle) -> String {
    format!(
        "{}\n\nContent to summarize:\n\"\"\"{}\"\"\"",
        style.instruction(),
        content
    )
}

/// Build the text portion of a document-mode prompt
///
/// Preamble, then the user hint as a labeled line when one is supplied,
/// then the style prompt over the document placeholder. No hint means
/// no hint line at all.
pub fn document_prompt(style: SummaryStyle, hint: Option<&str>) -> String {
    let mut base_text = String::from(DOCUMENT_PREAMBLE);

    if let Some(hint) = hint {
        base_text.push_str(&format!("\nUser hint / context: {}\n", hint));
    }

    format!("{}\n{}", base_text, build_prompt(DOCUMENT_PLACEHOLDER, style))
}
