//! Client for the sign-in / registration endpoints.
//!
//! A thin I/O wrapper: one request at a time, no retries, no timeouts.
//! Cookies set by the identity service are kept for later calls.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AuthMode {
    SignIn,
    Register,
}

impl AuthMode {
    fn endpoint(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "signin",
            AuthMode::Register => "register",
        }
    }
}

// The modal's form fields, sent as-is for both modes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    /// Live mismatch flag for the confirmation field.
    ///
    /// Stays off while the confirmation is still empty.
    pub fn password_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    SignedIn(Identity),
    Registered,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthGateError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("A request is already in flight")]
    InFlight,

    #[error("{0}")]
    Rejected(String),

    #[error("Failed to submit the form: {0}")]
    Network(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// Clears the in-flight flag when the request finishes or its future is dropped
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, AuthGateError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard(flag))
            .map_err(|_| AuthGateError::InFlight)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct AuthGate {
    client: Client,
    base_url: String,
    in_flight: AtomicBool,
}

impl AuthGate {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AuthGateError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| AuthGateError::Network(e.to_string()))?;

        Ok(AuthGate {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            in_flight: AtomicBool::new(false),
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the form in the given mode.
    ///
    /// Registration with differing passwords fails with
    /// `AuthGateError::PasswordMismatch` before anything is sent. A second
    /// call while one is outstanding fails with `AuthGateError::InFlight`.
    pub async fn submit(&self, mode: AuthMode, form: &AuthForm) -> Result<AuthOutcome, AuthGateError> {
        if mode == AuthMode::Register && form.password != form.confirm_password {
            return Err(AuthGateError::PasswordMismatch);
        }

        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        let result = self.send(mode, form).await;

        if let Err(ref e) = result {
            tracing::warn!(%mode, error = %e, "auth request failed");
        }
        result
    }

    async fn send(&self, mode: AuthMode, form: &AuthForm) -> Result<AuthOutcome, AuthGateError> {
        let url = format!("{}/{}", self.base_url, mode.endpoint());
        let response = self
            .client
            .post(url)
            .json(form)
            .send()
            .await
            .map_err(|e| AuthGateError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Something went wrong".to_string());
            return Err(AuthGateError::Rejected(message));
        }

        match mode {
            AuthMode::SignIn => {
                let mut identity = response
                    .json::<Identity>()
                    .await
                    .map_err(|e| AuthGateError::Network(e.to_string()))?;
                if identity.email.is_empty() {
                    identity.email = form.email.clone();
                }
                tracing::info!(name = %identity.name, "signed in");
                Ok(AuthOutcome::SignedIn(identity))
            }
            AuthMode::Register => Ok(AuthOutcome::Registered),
        }
    }
}
