use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Query string shared by the roster endpoints.
#[derive(Debug, Deserialize)]
pub struct ParticipantParams {
    pub email: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::ActivityNotFound => StatusCode::NOT_FOUND,
            ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Store(error) => {
                tracing::error!(%error, "activity store failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
