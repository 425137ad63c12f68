use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http_responses::{
    MessageResponse, ParticipantParams,
};
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<ParticipantParams>,
) -> Response {
    let command = UnregisterParticipant::new(activity_name, params.email);
    let message = command.confirmation();

    match state.unregister_handler.handle(command).await {
        Ok(()) => Json(MessageResponse { message }).into_response(),
        Err(error) => error.into_response(),
    }
}
