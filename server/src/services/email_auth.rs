//! Email access-code auth service.
//!
//! Creates and verifies short-lived six-character codes linked to the email a
//! group registered with. Codes are stored hashed and are single use.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::group::{self, GroupError, GroupRow};
use super::mailer::{Mailer, MailerError, OutgoingEmail};

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const MAX_FAILED_ATTEMPTS: i32 = 5;
const ACCESS_CODE_TEMPLATE: &str = include_str!("../../templates/access_code.html");
const ACCESS_CODE_SUBJECT: &str = "Votre code de connexion MonMatos";

#[derive(Debug, thiserror::Error)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("no group registered for this email")]
    UnknownGroup,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Group(#[from] GroupError),
    #[error(transparent)]
    EmailDelivery(#[from] MailerError),
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.chars().count() != CODE_LEN
        || !normalized
            .chars()
            .all(|c| u8::try_from(c).is_ok_and(|b| CODE_ALPHABET.contains(&b)))
    {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Issue a fresh code for a registered group, invalidating any pending one.
///
/// # Errors
///
/// Returns [`EmailAuthError::UnknownGroup`] if no group uses this email.
pub async fn request_access_code(pool: &PgPool, email: &str) -> Result<(GroupRow, String), EmailAuthError> {
    let normalized = group::normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let group = group::find_group_by_email(pool, &normalized)
        .await?
        .ok_or(EmailAuthError::UnknownGroup)?;

    sqlx::query("DELETE FROM email_login_codes WHERE email = $1 AND consumed_at IS NULL")
        .bind(&normalized)
        .execute(pool)
        .await?;

    let code = generate_access_code();
    let code_hash = hash_access_code(&code);

    sqlx::query("INSERT INTO email_login_codes (email, code_hash) VALUES ($1, $2)")
        .bind(&normalized)
        .bind(code_hash)
        .execute(pool)
        .await?;

    Ok((group, code))
}

/// Consume a code and return the group it signs in.
///
/// # Errors
///
/// Returns [`EmailAuthError::VerificationFailed`] for wrong, expired or used codes.
/// Each wrong guess counts as an attempt; the code is burned after five.
pub async fn verify_access_code(pool: &PgPool, email: &str, code: &str) -> Result<Uuid, EmailAuthError> {
    let normalized_email = group::normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let normalized_code = normalize_code(code).ok_or(EmailAuthError::InvalidCode)?;
    let code_hash = hash_access_code(&normalized_code);

    let update = sqlx::query(
        r"UPDATE email_login_codes
          SET consumed_at = now()
          WHERE id = (
              SELECT id
              FROM email_login_codes
              WHERE email = $1
                AND consumed_at IS NULL
                AND expires_at > now()
              ORDER BY created_at DESC
              LIMIT 1
          )
          AND code_hash = $2
          RETURNING id",
    )
    .bind(&normalized_email)
    .bind(&code_hash)
    .fetch_optional(pool)
    .await?;

    if update.is_none() {
        sqlx::query(
            r"UPDATE email_login_codes
              SET attempts = attempts + 1,
                  consumed_at = CASE WHEN attempts + 1 >= $2 THEN now() ELSE consumed_at END
              WHERE id = (
                  SELECT id
                  FROM email_login_codes
                  WHERE email = $1
                    AND consumed_at IS NULL
                    AND expires_at > now()
                  ORDER BY created_at DESC
                  LIMIT 1
              )",
        )
        .bind(&normalized_email)
        .bind(MAX_FAILED_ATTEMPTS)
        .execute(pool)
        .await?;
        return Err(EmailAuthError::VerificationFailed);
    }

    let row = sqlx::query("SELECT id FROM groups WHERE email = $1")
        .bind(&normalized_email)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(EmailAuthError::VerificationFailed);
    };

    Ok(row.get("id"))
}

/// Render and deliver the access-code email.
///
/// # Errors
///
/// Returns [`EmailAuthError::EmailDelivery`] when the mailer fails.
pub async fn send_access_code_email(
    mailer: &dyn Mailer,
    group: &GroupRow,
    code: &str,
    public_url: &str,
) -> Result<(), EmailAuthError> {
    let html = render_access_code_template(&group.name, &group.email, code, &sign_in_url(public_url));
    mailer
        .send(OutgoingEmail { to: group.email.clone(), subject: ACCESS_CODE_SUBJECT.to_owned(), html })
        .await?;
    Ok(())
}

/// Sign-in page under the configured public URL.
#[must_use]
pub fn sign_in_url(public_url: &str) -> String {
    format!("{}/connexion", public_url.trim_end_matches('/'))
}

#[must_use]
pub fn render_access_code_template(group_name: &str, email: &str, code: &str, sign_in_url: &str) -> String {
    ACCESS_CODE_TEMPLATE
        .replace("{{GROUP}}", group_name)
        .replace("{{EMAIL}}", email)
        .replace("{{CODE}}", code)
        .replace("{{SIGN_IN_URL}}", sign_in_url)
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;
