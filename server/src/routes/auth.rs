//! Auth routes: group registration, email access codes, session management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use inventory::{Group, Movement};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::error_response;
use crate::services::email_auth::{self, EmailAuthError};
use crate::services::group::{self, GroupError, GroupRow};
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const SESSION_MAX_AGE_DAYS: i64 = 30;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Signed-in group extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthGroup {
    pub group: GroupRow,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthGroup
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(unauthenticated());
        }

        let app_state = AppState::from_ref(state);
        let group = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR)
            })?
            .ok_or_else(unauthenticated)?;

        Ok(Self { group, token: token.to_owned() })
    }
}

const GENERIC_ERROR: &str = "Une erreur inattendue s'est produite.";

fn unauthenticated() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "Vous devez être connecté.")
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn group_error_to_status(err: &GroupError) -> (StatusCode, String) {
    match err {
        GroupError::InvalidEmail => (StatusCode::BAD_REQUEST, "Adresse email invalide.".to_owned()),
        GroupError::InvalidName => (StatusCode::BAD_REQUEST, "Le nom du groupe est obligatoire.".to_owned()),
        GroupError::EmailTaken(_) => {
            (StatusCode::CONFLICT, "Un groupe est déjà inscrit avec cette adresse email.".to_owned())
        }
        GroupError::CorruptMovement(_) | GroupError::Database(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_owned())
        }
    }
}

pub(crate) fn email_auth_error_to_status(err: &EmailAuthError) -> (StatusCode, String) {
    match err {
        EmailAuthError::InvalidEmail => (StatusCode::BAD_REQUEST, "Adresse email invalide.".to_owned()),
        EmailAuthError::InvalidCode => (StatusCode::BAD_REQUEST, "Le code doit contenir 6 caractères.".to_owned()),
        EmailAuthError::UnknownGroup => {
            (StatusCode::NOT_FOUND, "Aucun groupe n'est inscrit avec cette adresse email.".to_owned())
        }
        EmailAuthError::VerificationFailed => (StatusCode::UNAUTHORIZED, "Code expiré ou incorrect.".to_owned()),
        EmailAuthError::EmailDelivery(_) => {
            (StatusCode::BAD_GATEWAY, "L'envoi de l'email a échoué, réessayez plus tard.".to_owned())
        }
        EmailAuthError::Group(inner) => group_error_to_status(inner),
        EmailAuthError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_owned()),
    }
}

fn log_and_respond(err: &EmailAuthError) -> Response {
    let (status, message) = email_auth_error_to_status(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "email auth failed");
    } else {
        tracing::debug!(error = %err, "email auth rejected");
    }
    error_response(status, &message)
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return the signed-in group.
pub async fn me(auth: AuthGroup) -> Json<Group> {
    Json(auth.group.to_wire())
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthGroup) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, group_id = %auth.group.id, "session delete failed");
    }

    let jar = CookieJar::new().add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct RegisterBody {
    pub name: String,
    pub email: String,
    pub movement: Movement,
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    pub email: String,
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    pub email: String,
    pub code: String,
}

/// Response for register / request-code. `code` is only filled when
/// `ECHO_ACCESS_CODES` is enabled.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CodeSentResponse {
    pub ok: bool,
    pub code: Option<String>,
}

/// `POST /api/auth/register`: create a group and send its first access code.
///
/// Input is validated and the rate limit charged before anything is written.
/// When the first code cannot be issued the group is deleted again, so the
/// same email can register once the failure is resolved.
pub async fn register(State(state): State<AppState>, Json(body): Json<RegisterBody>) -> Response {
    let Some(email) = group::normalize_email(&body.email) else {
        return group_error_response(&GroupError::InvalidEmail);
    };
    if group::normalize_group_name(&body.name).is_none() {
        return group_error_response(&GroupError::InvalidName);
    }
    if let Some(limited) = check_rate_limit(&state, &email) {
        return limited;
    }

    let row = match group::register_group(&state.pool, &body.name, &email, body.movement).await {
        Ok(row) => row,
        Err(e) => return group_error_response(&e),
    };

    match deliver_code(&state, &row.email).await {
        Ok(sent) => {
            tracing::info!(group_id = %row.id, movement = row.movement.as_str(), "group registered");
            Json(sent).into_response()
        }
        Err(e) => {
            if let Err(cleanup) = group::delete_group(&state.pool, row.id).await {
                tracing::error!(error = %cleanup, group_id = %row.id, "registration rollback failed");
            }
            log_and_respond(&e)
        }
    }
}

/// `POST /api/auth/email/request-code`: send a fresh access code.
pub async fn request_email_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    let Some(email) = group::normalize_email(&body.email) else {
        return log_and_respond(&EmailAuthError::InvalidEmail);
    };
    if let Some(limited) = check_rate_limit(&state, &email) {
        return limited;
    }
    match deliver_code(&state, &email).await {
        Ok(sent) => Json(sent).into_response(),
        Err(e) => log_and_respond(&e),
    }
}

fn group_error_response(err: &GroupError) -> Response {
    let (status, message) = group_error_to_status(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "group registration failed");
    }
    error_response(status, &message)
}

fn check_rate_limit(state: &AppState, email: &str) -> Option<Response> {
    let limited = state.rate_limiter.check_and_record(email).err()?;
    tracing::warn!(error = %limited, "access code request rate limited");
    Some(error_response(StatusCode::TOO_MANY_REQUESTS, "Trop de demandes, réessayez dans quelques minutes."))
}

/// Issue a code for a registered email and mail it.
async fn deliver_code(state: &AppState, email: &str) -> Result<CodeSentResponse, EmailAuthError> {
    let (row, code) = email_auth::request_access_code(&state.pool, email).await?;
    email_auth::send_access_code_email(state.mailer.as_ref(), &row, &code, &state.config.public_url).await?;
    let echoed = state.config.echo_access_codes.then_some(code);
    Ok(CodeSentResponse { ok: true, code: echoed })
}

/// `POST /api/auth/email/verify-code`: consume a code and open a session.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Response {
    let group_id = match email_auth::verify_access_code(&state.pool, &body.email, &body.code).await {
        Ok(id) => id,
        Err(e) => return log_and_respond(&e),
    };

    let token = match session::create_session(&state.pool, group_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, %group_id, "session creation failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR);
        }
    };
    tracing::info!(%group_id, "group signed in");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, Json(serde_json::json!({ "ok": true }))).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
