use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http_responses::ErrorResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.queries.list_activities().await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing activities failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}
