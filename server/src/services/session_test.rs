use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::group;
    use inventory::Movement;
    use sqlx::postgres::PgPoolOptions;

    async fn pool() -> PgPool {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required for live-db-tests");
        let pool = PgPoolOptions::new().connect(&url).await.expect("connect");
        sqlx::migrate!("src/db/migrations").run(&pool).await.expect("migrate");
        pool
    }

    #[tokio::test]
    async fn session_round_trip_resolves_group() {
        let pool = pool().await;
        let email = format!("{}@session.test", Uuid::new_v4());
        let row = group::register_group(&pool, "Groupe Test", &email, Movement::Suf)
            .await
            .expect("register");

        let token = create_session(&pool, row.id).await.expect("session");
        let found = validate_session(&pool, &token).await.expect("validate");
        assert_eq!(found, Some(row));

        delete_session(&pool, &token).await.expect("delete");
        assert!(validate_session(&pool, &token).await.expect("validate").is_none());
    }
}
