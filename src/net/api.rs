//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpAuthApi`] reports
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is surfaced as an [`ApiError`] so session logic can decide
//! whether to drop the stored token; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoginResponse, TokenValidation};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "login";
pub const VALIDATE_TOKEN_PATH: &str = "validate-token";

/// Failure talking to the auth API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("auth api not available outside the browser")]
    Unavailable,
}

/// Transport seam between session logic and the auth server.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a token and user via `POST /login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Check a stored token via `GET /validate-token`.
    async fn validate_token(&self, token: &str) -> Result<TokenValidation, ApiError>;
}

/// `Authorization` header value carrying `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// [`AuthApi`] backed by `gloo-net` fetch calls.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn login_url(&self) -> String {
        self.config.endpoint(LOGIN_PATH)
    }

    pub fn validate_token_url(&self) -> String {
        self.config.endpoint(VALIDATE_TOKEN_PATH)
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.login_url())
                .json(credentials)
                .map_err(|e| ApiError::Http(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Http(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn validate_token(&self, token: &str) -> Result<TokenValidation, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.validate_token_url())
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ApiError::Http(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<TokenValidation>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
