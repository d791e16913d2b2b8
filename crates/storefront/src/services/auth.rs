//! Simulated authentication service.
//!
//! There is no real identity provider: login and registration validate the
//! email, wait the configured simulated latency, and mint a fresh `User`
//! with a deterministic avatar URL derived from the email. The rest of the
//! system only consumes the resulting user record, so a real provider could
//! slot in behind the same two calls.

use std::time::Duration;

use tracing::{info, instrument};
use uuid::Uuid;

use shopbot_core::{Email, EmailError, User, UserId};

/// Errors that can occur during authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The supplied email failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// The simulated authentication service.
#[derive(Debug, Clone)]
pub struct AuthService {
    delay: Duration,
}

impl AuthService {
    /// Create an auth service with the given simulated latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Log in with an email address.
    ///
    /// The display name is derived from the email local part.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed.
    #[instrument(skip(self, email))]
    pub async fn login(&self, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        tokio::time::sleep(self.delay).await;

        let user = User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: email.local_part().to_owned(),
            avatar: Some(avatar_url(&email)),
            email,
        };
        info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// Register with a display name and email address.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed.
    #[instrument(skip(self, name, email))]
    pub async fn register(&self, name: &str, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        tokio::time::sleep(self.delay).await;

        let user = User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: name.to_owned(),
            avatar: Some(avatar_url(&email)),
            email,
        };
        info!(user_id = %user.id, "registered");
        Ok(user)
    }
}

/// Deterministic avatar URL derived from the email address.
fn avatar_url(email: &Email) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}")
}
