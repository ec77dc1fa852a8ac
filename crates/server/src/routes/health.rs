use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Report the configured model and endpoint without calling them
#[get("/api/health")]
pub async fn health(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        model_id: state.config.model_id.clone(),
        endpoint: state.config.endpoint_url(),
    }))
}
