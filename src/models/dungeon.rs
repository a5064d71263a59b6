use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Matrix, Position};

/// Classification of a failed solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed, out-of-range or heuristically unsolvable grid. Never retried.
    InvalidInput,
    /// Unexpected fault while computing.
    ProcessingError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ProcessingError => "PROCESSING_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single solve: either a full answer or a full failure, never partial.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveResult {
    Success {
        input: Matrix<i32>,
        min_hp: i32,
        path: Vec<Position>,
    },
    Failure {
        /// `None` when the grid itself was absent.
        input: Option<Matrix<i32>>,
        reason: String,
        error_code: ErrorCode,
    },
}

impl SolveResult {
    pub fn failure(
        input: Option<Matrix<i32>>,
        reason: impl Into<String>,
        error_code: ErrorCode,
    ) -> Self {
        SolveResult::Failure {
            input,
            reason: reason.into(),
            error_code,
        }
    }
}
