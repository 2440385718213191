//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! with the auth server.

pub mod api;
pub mod types;

#[cfg(test)]
#[path = "fake_api.rs"]
pub(crate) mod fake_api;
