//! Reactive auth context shared with every route component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_auth`] once; components reach the session through
//! [`use_auth`]. The context owns the `RwSignal<AuthState>` and funnels every
//! transition through the operations in `util::auth`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::auth::{self, AuthError};
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

/// Handle to the current session. Cheap to copy into closures.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    config: StoredValue<ApiConfig>,
}

impl AuthContext {
    pub fn new(config: ApiConfig, initial: AuthState) -> Self {
        Self { state: RwSignal::new(initial), config: StoredValue::new(config) }
    }

    /// Underlying signal, for guards such as `install_unauth_redirect`.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    fn api(&self) -> HttpAuthApi {
        HttpAuthApi::new(self.config.get_value())
    }

    /// Validate any stored token and publish the result.
    pub async fn restore(self) {
        self.restore_with(&self.api(), &LocalStorageTokenStore).await;
    }

    /// [`restore`](Self::restore) against an explicit API and store.
    ///
    /// The result is dropped if the session settled while validation was in
    /// flight, e.g. the user signed in.
    pub async fn restore_with(self, api: &impl AuthApi, store: &impl TokenStore) {
        let next = auth::restore_session(api, store).await;
        self.state.update(|s| {
            if s.loading {
                *s = next;
            }
        });
    }

    /// Sign in with `username`/`password`.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] from the login attempt; the current session is
    /// left as it was.
    pub async fn login(self, username: String, password: String) -> Result<(), AuthError> {
        self.login_with(&self.api(), &LocalStorageTokenStore, &username, &password).await
    }

    /// [`login`](Self::login) against an explicit API and store.
    ///
    /// # Errors
    ///
    /// Same as [`login`](Self::login).
    pub async fn login_with(
        self,
        api: &impl AuthApi,
        store: &impl TokenStore,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let next = auth::login(api, store, username, password).await?;
        self.state.set(next);
        Ok(())
    }

    pub fn logout(&self) {
        self.logout_with(&LocalStorageTokenStore);
    }

    pub fn logout_with(&self, store: &impl TokenStore) {
        self.state.set(auth::logout(store));
    }
}

/// Install the auth context and, in the browser, start validating the stored token.
///
/// The session starts in the loading state so route guards wait for the
/// validation result instead of redirecting on first render.
pub fn provide_auth(config: ApiConfig) -> AuthContext {
    let ctx = AuthContext::new(config, AuthState::restoring());
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(ctx.restore());

    ctx
}

/// Current auth context.
///
/// # Panics
///
/// Panics when called outside a component tree set up by [`provide_auth`].
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth must be used within provide_auth")
}
