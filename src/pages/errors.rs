use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::dtos::ErrorResponse;

#[derive(Debug, Error)]
pub enum PageError {
    /// No published article answers to the identifier.
    #[error("article not found")]
    NotFound { title: String },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        match self {
            PageError::NotFound { title } => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse { error, title }),
            )
                .into_response(),
        }
    }
}
