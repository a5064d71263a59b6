use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod dungeon;
pub mod request;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// Grid as it arrives from a caller: rows may be missing (`null` in JSON).
pub type RawGrid = Vec<Option<Vec<i32>>>;

/// A zero-based (row, col) position within the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
