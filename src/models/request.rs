use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{dungeon::ErrorCode, Matrix, Position, RawGrid};

/// Body of `POST /api/dungeon/solve`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DungeonRequest {
    /// Dungeon grid, rows then columns. Positive cells heal, negative cells hurt.
    #[serde(default)]
    #[schema(value_type = Vec<Vec<i32>>)]
    pub input: Option<RawGrid>,
}

impl DungeonRequest {
    pub fn rows(&self) -> usize {
        self.input.as_ref().map_or(0, Vec::len)
    }

    pub fn cols(&self) -> usize {
        self.input
            .as_ref()
            .and_then(|grid| grid.first())
            .and_then(Option::as_ref)
            .map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DungeonResponse {
    pub input: Matrix<i32>,
    /// Optimal route as `[row, col]` pairs from the top-left to the bottom-right cell.
    #[schema(value_type = Vec<Vec<usize>>)]
    pub path: Vec<[usize; 2]>,
    /// Minimum starting health needed to survive the route.
    pub min_hp: i32,
}

impl DungeonResponse {
    pub fn from_positions(input: Matrix<i32>, path: &[Position], min_hp: i32) -> Self {
        Self {
            input,
            path: path.iter().map(|p| [p.row, p.col]).collect(),
            min_hp,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub reason: String,
    pub error_code: ErrorCode,
    /// Echo of the rejected grid, when one was supplied and well-formed.
    pub input: Option<Matrix<i32>>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
