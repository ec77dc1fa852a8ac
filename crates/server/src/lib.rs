//! Condense HTTP server
//!
//! Actix-web front-end: the interactive summarizer page and its JSON API

mod format;
mod routes;
mod state;
mod types;

pub use format::format_bullets;
pub use state::AppState;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use condense_common::{AppConfig, Result};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

/// Start the HTTP server and block until it shuts down
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    tracing::info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(routes::index)
            .service(routes::health::health)
            .service(routes::summarize::summarize_text)
            .service(routes::summarize::summarize_pdf)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
