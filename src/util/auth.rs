//! Session operations and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The operations here are plain async functions over [`AuthApi`] and
//! [`TokenStore`] that return the next [`AuthState`]. The reactive context
//! writes their results into its signal; route components share the
//! unauthenticated redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::util::token_store::TokenStore;

/// Why a login attempt did not produce a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("login failed: {0}")]
    Api(#[from] ApiError),
}

/// Validate a stored token and return the resulting session.
///
/// With no stored token this returns signed out without touching the network.
/// An invalid token, a validation failure, or a "valid" answer carrying no
/// user all drop the stored token, unless a login replaced it while the
/// validation was in flight.
pub async fn restore_session(api: &impl AuthApi, store: &impl TokenStore) -> AuthState {
    let Some(token) = store.load() else {
        return AuthState::signed_out();
    };

    match api.validate_token(&token).await {
        Ok(validation) if validation.is_valid => {
            if let Some(user) = validation.user {
                log::debug!("restored session for {}", user.username);
                return AuthState::signed_in(user);
            }
            log::warn!("token reported valid without a user; discarding");
        }
        Ok(_) => log::info!("stored token is no longer valid"),
        Err(e) => log::error!("error validating token: {e}"),
    }
    if store.load().as_deref() == Some(token.as_str()) {
        store.clear();
    }
    AuthState::signed_out()
}

/// Reject blank credentials before any request is made.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] when the username is blank or the
/// password is empty.
pub fn check_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AuthError::InvalidInput("Enter both username and password."));
    }
    Ok(())
}

/// Exchange credentials for a token, persist it, and return the signed-in state.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] when either field is blank and
/// [`AuthError::Api`] when the server rejects or cannot be reached. The store
/// is left untouched on failure.
pub async fn login(
    api: &impl AuthApi,
    store: &impl TokenStore,
    username: &str,
    password: &str,
) -> Result<AuthState, AuthError> {
    check_credentials(username, password)?;

    let credentials = Credentials { username: username.to_owned(), password: password.to_owned() };
    let resp = api.login(&credentials).await.map_err(|e| {
        log::error!("login failed: {e}");
        AuthError::from(e)
    })?;

    store.save(&resp.token);
    log::debug!("signed in as {}", resp.user.username);
    Ok(AuthState::signed_in(resp.user))
}

/// Drop the stored token and return the signed-out state.
pub fn logout(store: &impl TokenStore) -> AuthState {
    store.clear();
    AuthState::signed_out()
}

/// True once auth has settled and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
