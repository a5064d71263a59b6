use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::Utc;

use crate::models::{
    dungeon::ErrorCode,
    request::ErrorResponse,
    Matrix,
};

/// Failure surfaced by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{reason}")]
    InvalidInput {
        reason: String,
        input: Option<Matrix<i32>>,
    },
    #[error("{reason}")]
    Processing {
        reason: String,
        input: Option<Matrix<i32>>,
    },
}

impl ApiError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            reason: reason.into(),
            input: None,
        }
    }

    pub fn from_failure(
        input: Option<Matrix<i32>>,
        reason: String,
        error_code: ErrorCode,
    ) -> Self {
        match error_code {
            ErrorCode::InvalidInput => ApiError::InvalidInput { reason, input },
            ErrorCode::ProcessingError => ApiError::Processing { reason, input },
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::InvalidInput { .. } => ErrorCode::InvalidInput,
            ApiError::Processing { .. } => ErrorCode::ProcessingError,
        }
    }

    fn input(&self) -> Option<&Matrix<i32>> {
        match self {
            ApiError::InvalidInput { input, .. } | ApiError::Processing { input, .. } => {
                input.as_ref()
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.error_code() {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::ProcessingError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            reason: self.to_string(),
            error_code: self.error_code(),
            input: self.input().cloned(),
            timestamp: Utc::now(),
        })
    }
}
