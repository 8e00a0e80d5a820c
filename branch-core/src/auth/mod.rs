//! Mock authentication (模拟登录)
//!
//! There is no identity provider behind the dashboard: any address with
//! an "@" and a six-character password signs in. The simulated latency
//! keeps the UI's loading states honest.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::models::SessionUser;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Simulated round-trip to the (nonexistent) auth backend.
const LOGIN_LATENCY: Duration = Duration::from_millis(1500);

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Auth errors; messages are shown verbatim on the login form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingCredentials,

    #[error("Invalid email or password. Use any email with @ and password with 6+ characters.")]
    InvalidCredentials,
}

/// An established session, handed to the frontend and kept until logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Session-holding login service.
pub struct AuthService {
    session: RwLock<Option<Session>>,
    latency: Duration,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("authenticated", &self.is_authenticated())
            .field("latency", &self.latency)
            .finish()
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    pub fn new() -> Self {
        Self::with_latency(LOGIN_LATENCY)
    }

    /// Override the simulated latency; tests pass `Duration::ZERO`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            session: RwLock::new(None),
            latency,
        }
    }

    /// Attempt to sign in.
    ///
    /// Empty fields fail before the simulated round-trip; the latency
    /// only applies once a credential check actually happens.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        tokio::time::sleep(self.latency).await;

        if !email.contains('@') || password.len() < MIN_PASSWORD_LEN {
            warn!(email = %email, "Login refused: bad credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            token: Uuid::new_v4().to_string(),
            user: SessionUser {
                id: 1,
                name: "Branch Manager".to_string(),
                email: email.to_string(),
                role: "manager".to_string(),
                branch: "Downtown Branch".to_string(),
            },
        };

        info!(email = %email, "Login succeeded");
        *self.session.write() = Some(session.clone());
        Ok(session)
    }

    /// Drop the current session. Signing out twice is fine.
    pub fn logout(&self) -> Option<Session> {
        let session = self.session.write().take();
        if let Some(ref session) = session {
            info!(email = %session.user.email, "Logged out");
        }
        session
    }

    /// The current session, if signed in.
    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }
}
