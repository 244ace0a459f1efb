//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and enforce schema
//! migrations (groups, sessions, access codes, tents) before serving traffic.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::ServerConfig;

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

/// Postgres `unique_violation` SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// True when `err` is a unique-constraint violation, optionally on a named constraint.
#[must_use]
pub fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return false;
    }
    constraint.is_none_or(|name| db_err.constraint() == Some(name))
}
