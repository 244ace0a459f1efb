//! Tent service: validation, creation and listing of a group's tents.
//!
//! DESIGN
//! ======
//! The UI runs an advisory duplicate check before submitting. The
//! authoritative rule is the `(group_id, identifying_string)` unique index;
//! a violation is reported as `TentError::DuplicateIdentifier` so the route
//! can answer with a readable 409 instead of a generic failure.

use inventory::{CreateTentRequest, MAX_IDENTIFIER_LEN, Movement, Tent, TentSize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db;

const TENTS_IDENTIFIER_KEY: &str = "tents_group_identifier_key";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TentError {
    #[error("identifying string is empty")]
    EmptyIdentifier,
    #[error("identifying string longer than {MAX_IDENTIFIER_LEN} characters: {0}")]
    IdentifierTooLong(String),
    #[error("unit {unit} does not belong to movement {movement}")]
    UnitNotInMovement { unit: &'static str, movement: &'static str },
    #[error("identifying string already used: {0}")]
    DuplicateIdentifier(String),
    #[error("stored tent row is invalid: {0}")]
    CorruptRow(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TentError {
    /// French, user-facing message shown in the UI notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyIdentifier => "L'identifiant de la tente est obligatoire.".to_owned(),
            Self::IdentifierTooLong(_) => {
                format!("L'identifiant ne doit pas dépasser {MAX_IDENTIFIER_LEN} caractères.")
            }
            Self::UnitNotInMovement { .. } => "Cette unité n'existe pas dans votre mouvement.".to_owned(),
            Self::DuplicateIdentifier(id) => format!("L'identifiant {id} est déjà attribué à une tente."),
            Self::CorruptRow(_) | Self::Database(_) => "Une erreur inattendue s'est produite.".to_owned(),
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Normalize and check a create request against the owning group's movement.
///
/// # Errors
///
/// Returns a validation variant of [`TentError`] for empty or overlong
/// identifiers and for units outside the movement.
pub fn validate_new_tent(movement: Movement, mut req: CreateTentRequest) -> Result<CreateTentRequest, TentError> {
    let identifier = req.identifying_string.trim().to_uppercase();
    if identifier.is_empty() {
        return Err(TentError::EmptyIdentifier);
    }
    if identifier.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(TentError::IdentifierTooLong(identifier));
    }
    if !movement.has_unit(req.unit) {
        return Err(TentError::UnitNotInMovement { unit: req.unit.as_str(), movement: movement.as_str() });
    }
    req.identifying_string = identifier;
    req.comments = req.comments.trim().to_owned();
    Ok(req)
}

// =============================================================================
// CRUD
// =============================================================================

const TENT_COLUMNS: &str = r#"id, identifying_string, state, unit, size, complete, integrated, tent_type, comments,
       to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at"#;

fn tent_from_row(row: &PgRow) -> Result<Tent, TentError> {
    let corrupt = |what: &str, value: &str| TentError::CorruptRow(format!("{what}={value}"));
    let id: Uuid = row.get("id");
    let state: String = row.get("state");
    let unit: String = row.get("unit");
    let tent_type: String = row.get("tent_type");
    let size: i16 = row.get("size");

    Ok(Tent {
        id: id.to_string(),
        identifying_string: row.get("identifying_string"),
        state: state.parse().map_err(|_| corrupt("state", &state))?,
        unit: unit.parse().map_err(|_| corrupt("unit", &unit))?,
        size: TentSize::new(i64::from(size)).map_err(|_| corrupt("size", &size.to_string()))?,
        complete: row.get("complete"),
        integrated: row.get("integrated"),
        tent_type: tent_type.parse().map_err(|_| corrupt("tent_type", &tent_type))?,
        comments: row.get("comments"),
        created_at: row.get("created_at"),
    })
}

/// Create a tent for a group.
///
/// # Errors
///
/// Returns validation errors from [`validate_new_tent`],
/// [`TentError::DuplicateIdentifier`] on a unique violation, or a database error.
pub async fn create_tent(
    pool: &PgPool,
    group_id: Uuid,
    movement: Movement,
    req: CreateTentRequest,
) -> Result<Tent, TentError> {
    let req = validate_new_tent(movement, req)?;

    let sql = format!(
        "INSERT INTO tents (group_id, identifying_string, state, unit, size, complete, integrated, tent_type, comments)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING {TENT_COLUMNS}"
    );
    let result = sqlx::query(&sql)
        .bind(group_id)
        .bind(&req.identifying_string)
        .bind(req.state.as_str())
        .bind(req.unit.as_str())
        .bind(i16::from(req.size.places()))
        .bind(req.complete)
        .bind(req.integrated)
        .bind(req.tent_type.as_str())
        .bind(&req.comments)
        .fetch_one(pool)
        .await;

    match result {
        Ok(row) => tent_from_row(&row),
        Err(e) if db::is_unique_violation(&e, Some(TENTS_IDENTIFIER_KEY)) => {
            Err(TentError::DuplicateIdentifier(req.identifying_string))
        }
        Err(e) => Err(e.into()),
    }
}

/// List every tent owned by a group, ordered by identifier.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_tents(pool: &PgPool, group_id: Uuid) -> Result<Vec<Tent>, TentError> {
    let sql = format!("SELECT {TENT_COLUMNS} FROM tents WHERE group_id = $1 ORDER BY identifying_string ASC");
    let rows = sqlx::query(&sql).bind(group_id).fetch_all(pool).await?;
    rows.iter().map(tent_from_row).collect()
}

#[cfg(test)]
#[path = "tent_test.rs"]
mod tests;
