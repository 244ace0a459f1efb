//! Tent routes: collection fetch and creation for the signed-in group.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use inventory::{CreateTentRequest, Tent};

use super::auth::AuthGroup;
use super::error_response;
use crate::services::tent::{self, TentError};
use crate::state::AppState;

pub(crate) fn tent_error_to_status(err: &TentError) -> StatusCode {
    match err {
        TentError::EmptyIdentifier | TentError::IdentifierTooLong(_) | TentError::UnitNotInMovement { .. } => {
            StatusCode::BAD_REQUEST
        }
        TentError::DuplicateIdentifier(_) => StatusCode::CONFLICT,
        TentError::CorruptRow(_) | TentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn tent_error_response(err: &TentError) -> Response {
    let status = tent_error_to_status(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "tent request failed");
    } else {
        tracing::debug!(error = %err, "tent request rejected");
    }
    error_response(status, &err.user_message())
}

/// `GET /api/tents`: list the group's tents.
pub async fn list_tents(State(state): State<AppState>, auth: AuthGroup) -> Result<Json<Vec<Tent>>, Response> {
    let tents = tent::list_tents(&state.pool, auth.group.id)
        .await
        .map_err(|e| tent_error_response(&e))?;
    Ok(Json(tents))
}

/// `POST /api/tents`: create a tent.
pub async fn create_tent(
    State(state): State<AppState>,
    auth: AuthGroup,
    Json(body): Json<CreateTentRequest>,
) -> Response {
    match tent::create_tent(&state.pool, auth.group.id, auth.group.movement, body).await {
        Ok(created) => {
            tracing::info!(
                group_id = %auth.group.id,
                tent_id = %created.id,
                identifier = %created.identifying_string,
                "tent created"
            );
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => tent_error_response(&e),
    }
}

#[cfg(test)]
#[path = "tents_test.rs"]
mod tests;
