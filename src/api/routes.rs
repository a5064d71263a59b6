use actix_web::{error::InternalError, web, HttpResponse};
use chrono::Utc;

use crate::{
    api::handlers::{health_check, solve_dungeon},
    models::{dungeon::ErrorCode, request::ErrorResponse},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .service(solve_dungeon)
            .service(health_check),
    );
}

/// Body extractor settings: unreadable JSON becomes a structured 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let reason = format!("JSON deserialization error: {err}");
        log::warn!("{reason}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse {
                reason,
                error_code: ErrorCode::InvalidInput,
                input: None,
                timestamp: Utc::now(),
            }),
        )
        .into()
    })
}
