use actix_web::{get, HttpResponse, Responder};

use crate::models::request::HealthResponse;

/// GET /api/health
/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "UP".into(),
    })
}
