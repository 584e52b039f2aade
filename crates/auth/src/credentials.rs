use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login rejected; user-visible message, no state change.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An admin operation was attempted without logging in first.
    #[error("admin session required")]
    SessionRequired,
}

/// The configured admin credential pair.
///
/// A static comparison, not an authentication design: there is exactly one
/// admin, and the pair lives in process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read the pair from `MAISON_ADMIN_USER` / `MAISON_ADMIN_PASSWORD`,
    /// falling back to the dev default.
    pub fn from_env() -> Self {
        let username = std::env::var("MAISON_ADMIN_USER").unwrap_or_else(|_| {
            tracing::warn!("MAISON_ADMIN_USER not set; using insecure dev default");
            "admin".to_string()
        });
        let password = std::env::var("MAISON_ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("MAISON_ADMIN_PASSWORD not set; using insecure dev default");
            "admin123".to_string()
        });
        Self { username, password }
    }

    /// Check a submitted pair against the configured one.
    ///
    /// No IO, no panics, no state change on rejection.
    pub fn verify(&self, username: &str, password: &str) -> Result<AdminSession, AuthError> {
        let user_ok = eq_bytes(self.username.as_bytes(), username.as_bytes());
        let pass_ok = eq_bytes(self.password.as_bytes(), password.as_bytes());

        if user_ok & pass_ok {
            Ok(AdminSession {
                username: self.username.clone(),
                logged_in_at: Utc::now(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Byte comparison that inspects every byte of equal-length inputs instead of
/// short-circuiting on the first mismatch.
fn eq_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Proof of a successful admin login.
///
/// Admin CRUD services take `&AdminSession`; there is no way to obtain one
/// except through [`AdminCredentials::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSession {
    username: String,
    logged_in_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }
}
