use super::*;
use crate::services::mailer::MailerError;
use crate::state::test_helpers;
use axum::extract::FromRequestParts;
use axum::http::Request;

// =============================================================================
// error mapping
// =============================================================================

#[test]
fn group_errors_map_to_client_statuses() {
    assert_eq!(group_error_to_status(&GroupError::InvalidEmail).0, StatusCode::BAD_REQUEST);
    assert_eq!(group_error_to_status(&GroupError::InvalidName).0, StatusCode::BAD_REQUEST);
    let (status, message) = group_error_to_status(&GroupError::EmailTaken("a@b.fr".to_owned()));
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(message.contains("déjà inscrit"));
}

#[test]
fn database_errors_do_not_leak_details() {
    let (status, message) = group_error_to_status(&GroupError::Database(sqlx::Error::RowNotFound));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, GENERIC_ERROR);

    let (status, message) = email_auth_error_to_status(&EmailAuthError::Db(sqlx::Error::PoolTimedOut));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, GENERIC_ERROR);
}

#[test]
fn email_auth_errors_map_to_statuses() {
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidEmail).0, StatusCode::BAD_REQUEST);
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidCode).0, StatusCode::BAD_REQUEST);
    assert_eq!(email_auth_error_to_status(&EmailAuthError::UnknownGroup).0, StatusCode::NOT_FOUND);
    assert_eq!(email_auth_error_to_status(&EmailAuthError::VerificationFailed).0, StatusCode::UNAUTHORIZED);
    assert_eq!(
        email_auth_error_to_status(&EmailAuthError::EmailDelivery(MailerError("down".to_owned()))).0,
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn nested_group_error_keeps_group_mapping() {
    let err = EmailAuthError::Group(GroupError::InvalidEmail);
    assert_eq!(email_auth_error_to_status(&err).0, StatusCode::BAD_REQUEST);
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("tok".to_owned(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::days(SESSION_MAX_AGE_DAYS)));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_session_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.secure(), Some(false));
}

// =============================================================================
// extractor + handlers that never reach the database
// =============================================================================

#[tokio::test]
async fn auth_group_rejects_missing_cookie() {
    let state = test_helpers::test_app_state();
    let (mut parts, ()) = Request::builder().uri("/api/tents").body(()).unwrap().into_parts();
    let Err(rejection) = AuthGroup::from_request_parts(&mut parts, &state).await else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_group_rejects_empty_cookie() {
    let state = test_helpers::test_app_state();
    let (mut parts, ()) = Request::builder()
        .uri("/api/tents")
        .header("cookie", "session_token=")
        .body(())
        .unwrap()
        .into_parts();
    let Err(rejection) = AuthGroup::from_request_parts(&mut parts, &state).await else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_code_rejects_invalid_email_before_database() {
    let state = test_helpers::test_app_state();
    let body = RequestCodeBody { email: "not-an-email".to_owned() };
    let response = request_email_code(State(state), Json(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn request_code_is_rate_limited_before_database() {
    let mut config = test_helpers::test_config();
    config.code_limits.per_email = 0;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("connect_lazy should not fail");
    let state = AppState::new(pool, config, std::sync::Arc::new(crate::services::mailer::LogMailer));

    let body = RequestCodeBody { email: "chefs@stmichel.fr".to_owned() };
    let response = request_email_code(State(state), Json(body)).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn register_body_parses_movement_code() {
    let body: RegisterBody =
        serde_json::from_str(r#"{"name":"Groupe","email":"g@x.fr","movement":"SUF"}"#).unwrap();
    assert_eq!(body.movement, Movement::Suf);
    assert!(serde_json::from_str::<RegisterBody>(r#"{"name":"G","email":"g@x.fr","movement":"XX"}"#).is_err());
}

// =============================================================================
// registration checks that run before the group is written
// =============================================================================

fn register_body(name: &str, email: &str) -> RegisterBody {
    RegisterBody { name: name.to_owned(), email: email.to_owned(), movement: Movement::Sgdf }
}

fn state_with_limits(per_email: usize, global: usize) -> AppState {
    let mut config = test_helpers::test_config();
    config.code_limits.per_email = per_email;
    config.code_limits.global = global;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("connect_lazy should not fail");
    AppState::new(pool, config, std::sync::Arc::new(crate::services::mailer::LogMailer))
}

#[tokio::test]
async fn register_rejects_invalid_email_before_database() {
    let state = test_helpers::test_app_state();
    let response = register(State(state), Json(register_body("Groupe", "chefs"))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_blank_name_before_database() {
    let state = test_helpers::test_app_state();
    let response = register(State(state), Json(register_body("   ", "chefs@stmichel.fr"))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_is_rate_limited_before_group_insert() {
    // The lazy pool has no server behind it: reaching the insert would be a 500.
    let state = state_with_limits(5, 0);
    let response = register(State(state), Json(register_body("Groupe", "chefs@stmichel.fr"))).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn invalid_registration_does_not_consume_rate_limit() {
    let state = state_with_limits(1, 100);
    let rejected = register(State(state.clone()), Json(register_body("", "chefs@stmichel.fr"))).await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert!(state.rate_limiter.check_and_record("chefs@stmichel.fr").is_ok());
}

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::mailer::test_helpers::RecordingMailer;
    use crate::services::mailer::Mailer;
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;

    async fn live_state(mailer: Arc<dyn Mailer>, per_email: usize) -> AppState {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required for live-db-tests");
        let pool = PgPoolOptions::new().connect(&url).await.expect("connect");
        sqlx::migrate!("src/db/migrations").run(&pool).await.expect("migrate");
        let mut config = test_helpers::test_config();
        config.database_url = url;
        config.code_limits.per_email = per_email;
        AppState::new(pool, config, mailer)
    }

    fn unique_email() -> String {
        format!("{}@register.test", uuid::Uuid::new_v4())
    }

    #[tokio::test]
    async fn rate_limited_registration_creates_no_group() {
        let state = live_state(Arc::new(RecordingMailer::default()), 0).await;
        let email = unique_email();

        let response = register(State(state.clone()), Json(register_body("Groupe", &email))).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let found = group::find_group_by_email(&state.pool, &email).await.expect("lookup");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn failed_delivery_rolls_back_and_allows_retry() {
        let failing = Arc::new(RecordingMailer { fail: true, ..RecordingMailer::default() });
        let state = live_state(failing, 5).await;
        let email = unique_email();

        let response = register(State(state.clone()), Json(register_body("Groupe", &email))).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let found = group::find_group_by_email(&state.pool, &email).await.expect("lookup");
        assert!(found.is_none());

        let working = AppState::new(
            state.pool.clone(),
            (*state.config).clone(),
            Arc::new(RecordingMailer::default()),
        );
        let retry = register(State(working), Json(register_body("Groupe", &email))).await;
        assert_eq!(retry.status(), StatusCode::OK);
    }
}
