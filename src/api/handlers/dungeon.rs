use actix_web::{post, web, HttpResponse};

use crate::{
    error::ApiError,
    logic::{solver::solve, validator::validate},
    models::{
        dungeon::SolveResult,
        request::{DungeonRequest, DungeonResponse},
    },
};

/// POST /api/dungeon/solve
/// Computes the minimum starting health for the dungeon and one optimal route.
#[utoipa::path(
    post,
    path = "/api/dungeon/solve",
    tag = "dungeon",
    request_body = DungeonRequest,
    responses(
        (status = 200, description = "Dungeon solved", body = DungeonResponse),
        (status = 400, description = "Malformed, out-of-range or unsolvable grid", body = ErrorResponse),
        (status = 500, description = "Unexpected failure while solving", body = ErrorResponse),
    )
)]
#[post("/dungeon/solve")]
pub async fn solve_dungeon(body: web::Json<DungeonRequest>) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    log::info!(
        "Solving dungeon with dimensions: {}x{}",
        request.rows(),
        request.cols()
    );

    let grid = validate(request.input.as_ref()).map_err(|violation| {
        log::warn!("Dungeon rejected: {violation}");
        ApiError::invalid(violation.to_string())
    })?;

    match solve(Some(grid)) {
        SolveResult::Success {
            input,
            min_hp,
            path,
        } => {
            log::info!(
                "Dungeon solved successfully. Minimum HP: {min_hp}, Path length: {}",
                path.len()
            );
            Ok(HttpResponse::Ok().json(DungeonResponse::from_positions(input, &path, min_hp)))
        }
        SolveResult::Failure {
            input,
            reason,
            error_code,
        } => {
            log::warn!("Dungeon solving failed: {reason} ({error_code})");
            Err(ApiError::from_failure(input, reason, error_code))
        }
    }
}
