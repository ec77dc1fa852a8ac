use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use condense_llm::SummaryStyle;
use futures_util::StreamExt;

use crate::format::format_bullets;
use crate::state::AppState;
use crate::types::{error_response, ErrorResponse, SummarizeResponse, TextSummarizeRequest};

#[post("/api/summarize/text")]
pub async fn summarize_text(
    req: web::Json<TextSummarizeRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if req.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Please enter some text.".to_string(),
        }));
    }

    let style = SummaryStyle::from_keyword(req.style.as_deref().unwrap_or("brief"));

    match state.summarizer.summarize_text(&req.text, style).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(render(summary, style))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[post("/api/summarize/pdf")]
pub async fn summarize_pdf(
    mut payload: Multipart,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let mut pdf_bytes: Vec<u8> = Vec::new();
    let mut style_field = None;
    let mut hint_field = None;

    while let Some(field) = payload.next().await {
        let mut field = field?;
        let name = field
            .content_disposition()
            .get_name()
            .unwrap_or("")
            .to_string();

        match name.as_str() {
            "file" => {
                while let Some(chunk) = field.next().await {
                    pdf_bytes.extend_from_slice(&chunk?);
                }
            }
            "style" => style_field = Some(read_text_field(&mut field).await?),
            "hint" => hint_field = Some(read_text_field(&mut field).await?),
            _ => {}
        }
    }

    if pdf_bytes.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Please upload a PDF file.".to_string(),
        }));
    }

    let style = SummaryStyle::from_keyword(style_field.as_deref().unwrap_or("brief"));
    let hint = hint_field.as_deref().map(str::trim).filter(|h| !h.is_empty());

    match state.summarizer.summarize_pdf(&pdf_bytes, style, hint).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(render(summary, style))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Collect a multipart text field into a string
async fn read_text_field(field: &mut actix_multipart::Field) -> actix_web::Result<String> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        data.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Apply the bullet transform where the style asks for it
fn render(summary: String, style: SummaryStyle) -> SummarizeResponse {
    let summary = if style == SummaryStyle::BulletPoints {
        format_bullets(&summary)
    } else {
        summary
    };

    SummarizeResponse {
        summary,
        style: style.keyword().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_applies_bullets_only_for_bullet_points() {
        let bulleted = render("a\n\nb".to_string(), SummaryStyle::BulletPoints);
        assert_eq!(bulleted.summary, "- a\n- b");
        assert_eq!(bulleted.style, "bullet_points");

        let plain = render("a\n\nb".to_string(), SummaryStyle::Brief);
        assert_eq!(plain.summary, "a\n\nb");
    }
}
