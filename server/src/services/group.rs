//! Group service: registration and lookup of scout groups.
//!
//! A group is the account unit of MonMatos: it signs in with its email and
//! owns a tent collection. Its movement fixes which units tents can belong to.

use inventory::{Group, Movement};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db;

const MAX_GROUP_NAME_LEN: usize = 80;
const GROUPS_EMAIL_KEY: &str = "groups_email_key";

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid group name")]
    InvalidName,
    #[error("email already registered: {0}")]
    EmailTaken(String),
    #[error("stored movement is invalid: {0}")]
    CorruptMovement(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from group queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub movement: Movement,
}

impl GroupRow {
    pub(crate) fn from_row(row: &PgRow) -> Result<Self, GroupError> {
        let movement: String = row.get("movement");
        Ok(Self {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            movement: movement.parse().map_err(|_| GroupError::CorruptMovement(movement))?,
        })
    }

    #[must_use]
    pub fn to_wire(&self) -> Group {
        Group {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            movement: self.movement,
        }
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Collapse inner whitespace and trim. Empty or overlong names are rejected.
#[must_use]
pub fn normalize_group_name(name: &str) -> Option<String> {
    let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() || normalized.chars().count() > MAX_GROUP_NAME_LEN {
        return None;
    }
    Some(normalized)
}

/// Register a new group.
///
/// # Errors
///
/// Returns [`GroupError::EmailTaken`] when another group already uses the email.
pub async fn register_group(
    pool: &PgPool,
    name: &str,
    email: &str,
    movement: Movement,
) -> Result<GroupRow, GroupError> {
    let name = normalize_group_name(name).ok_or(GroupError::InvalidName)?;
    let email = normalize_email(email).ok_or(GroupError::InvalidEmail)?;

    let result = sqlx::query(
        r"INSERT INTO groups (name, email, movement)
          VALUES ($1, $2, $3)
          RETURNING id, name, email, movement",
    )
    .bind(&name)
    .bind(&email)
    .bind(movement.as_str())
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => GroupRow::from_row(&row),
        Err(e) if db::is_unique_violation(&e, Some(GROUPS_EMAIL_KEY)) => Err(GroupError::EmailTaken(email)),
        Err(e) => Err(e.into()),
    }
}

/// Look up a group by its (already normalized) email.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn find_group_by_email(pool: &PgPool, email: &str) -> Result<Option<GroupRow>, GroupError> {
    let row = sqlx::query("SELECT id, name, email, movement FROM groups WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    row.as_ref().map(GroupRow::from_row).transpose()
}

/// Remove a group whose registration could not be completed. Its sessions,
/// codes and tents go with it through `ON DELETE CASCADE`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn delete_group(pool: &PgPool, id: Uuid) -> Result<(), GroupError> {
    sqlx::query("DELETE FROM groups WHERE id = $1").bind(id).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
#[path = "group_test.rs"]
mod tests;
