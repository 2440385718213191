//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` by the auth context and read by route guards and
//! user-aware components.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Authentication is derived from `user` so the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while a stored token is being validated on startup.
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// State shown while a stored token is checked against the server.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
