pub mod health;
pub mod summarize;

use actix_web::{get, HttpResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// The interactive summarizer page
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
