//! Session state for the signed-in scout group.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and group-aware components. The group's movement
//! decides which units the tent form offers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use inventory::{Group, Movement};

/// Authentication state tracking the current group and loading status.
///
/// Starts in `loading` so server-rendered pages never redirect before the
/// browser had a chance to resolve the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub group: Option<Group>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { group: None, loading: true }
    }
}

impl AuthState {
    /// Record the outcome of `GET /api/auth/me`.
    pub fn resolve(&mut self, group: Option<Group>) {
        self.group = group;
        self.loading = false;
    }

    #[must_use]
    pub fn movement(&self) -> Option<Movement> {
        self.group.as_ref().map(|g| g.movement)
    }

    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group.as_ref().map(|g| g.name.as_str())
    }
}
