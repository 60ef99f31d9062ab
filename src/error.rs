use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request payload")]
    InvalidPayload,
    #[error("Invalid player data")]
    InvalidPlayer,
    #[error("Player already exists")]
    DuplicatePlayer,
    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidPayload | ApiError::InvalidPlayer => StatusCode::BAD_REQUEST,
            ApiError::DuplicatePlayer => StatusCode::CONFLICT,
            ApiError::Database(err) => {
                // Log the detail, keep the client message generic
                tracing::error!("database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
