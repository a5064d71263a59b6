use utoipa::OpenApi;

use crate::models::{
    dungeon::ErrorCode,
    request::{DungeonRequest, DungeonResponse, ErrorResponse, HealthResponse},
    Position,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dungeon Solver API",
        description = "Computes the minimum starting health a traveler needs to cross a dungeon grid from the top-left to the bottom-right cell, moving only right or down, and returns one optimal route.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::dungeon::solve_dungeon,
        crate::api::handlers::health::health_check,
    ),
    components(
        schemas(
            DungeonRequest, DungeonResponse,
            Position, ErrorCode, ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "dungeon", description = "Dungeon solving: minimum health and optimal path"),
        (name = "health",  description = "Service liveness"),
    )
)]
pub struct ApiDoc;
