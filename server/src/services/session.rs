//! Session management for signed-in groups.
//!
//! ARCHITECTURE
//! ============
//! A successful access-code verification creates a random session token that
//! is stored server-side and handed to the browser as an HttpOnly cookie.
//! Every authenticated request resolves the token back to its group.

use std::fmt::Write;

use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use super::group::{GroupError, GroupRow};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given group, returning the token.
pub async fn create_session(pool: &PgPool, group_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, group_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(group_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated group.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<GroupRow>, GroupError> {
    let row = sqlx::query(
        r"SELECT g.id, g.name, g.email, g.movement
          FROM sessions s
          JOIN groups g ON g.id = s.group_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(GroupRow::from_row).transpose()
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
