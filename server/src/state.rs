//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool, the parsed configuration, the outbound mailer
//! and the access-code rate limiter.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;
use crate::services::mailer::{LogMailer, Mailer, ResendMailer};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<ServerConfig>,
    pub mailer: Arc<dyn Mailer>,
    /// In-memory rate limiter for access-code requests.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, config: ServerConfig, mailer: Arc<dyn Mailer>) -> Self {
        let rate_limiter = RateLimiter::new(config.code_limits);
        Self { pool, config: Arc::new(config), mailer, rate_limiter }
    }

    /// Build state with the mailer implied by the config: Resend when an API
    /// key is present, log-only otherwise.
    #[must_use]
    pub fn from_config(pool: PgPool, config: ServerConfig) -> Self {
        let mailer: Arc<dyn Mailer> = match &config.resend {
            Some(resend) => Arc::new(ResendMailer::new(resend)),
            None => {
                tracing::warn!("RESEND_API_KEY not set; access codes will only be logged");
                Arc::new(LogMailer)
            }
        };
        Self::new(pool, config, mailer)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
