//! Scripted [`AuthApi`] for native tests.

use std::cell::{Cell, RefCell};

use futures::channel::oneshot;

use super::api::{ApiError, AuthApi};
use super::types::{Credentials, LoginResponse, TokenValidation, User};

pub fn alice() -> User {
    User { id: "u1".to_owned(), username: "alice".to_owned() }
}

pub struct FakeApi {
    pub login_result: Result<LoginResponse, ApiError>,
    pub validate_result: Result<TokenValidation, ApiError>,
    pub login_calls: Cell<usize>,
    pub validate_calls: Cell<usize>,
    pub last_credentials: RefCell<Option<Credentials>>,
    pub last_token: RefCell<Option<String>>,
    validate_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            login_result: Err(ApiError::Unavailable),
            validate_result: Err(ApiError::Unavailable),
            login_calls: Cell::new(0),
            validate_calls: Cell::new(0),
            last_credentials: RefCell::new(None),
            last_token: RefCell::new(None),
            validate_gate: RefCell::new(None),
        }
    }

    pub fn with_login(mut self, result: Result<LoginResponse, ApiError>) -> Self {
        self.login_result = result;
        self
    }

    pub fn with_validation(mut self, result: Result<TokenValidation, ApiError>) -> Self {
        self.validate_result = result;
        self
    }

    /// Hold `validate_token` open until the returned sender fires or is dropped.
    pub fn gate_validation(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.validate_gate.borrow_mut() = Some(rx);
        tx
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        *self.last_credentials.borrow_mut() = Some(credentials.clone());
        self.login_result.clone()
    }

    async fn validate_token(&self, token: &str) -> Result<TokenValidation, ApiError> {
        self.validate_calls.set(self.validate_calls.get() + 1);
        *self.last_token.borrow_mut() = Some(token.to_owned());
        let gate = self.validate_gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.validate_result.clone()
    }
}
