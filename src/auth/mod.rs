//! Admin authentication gate
//!
//! The OAuth code exchange lives behind the [`IdentityExchange`]
//! boundary; this module only decides whether the exchanged identity
//! may administer the dictionary. Authorization is a single
//! allow-listed email, compared exactly.

use thiserror::Error;

use crate::models::UserProfile;

/// Errors from the sign-in flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity provider rejected or failed the code exchange.
    #[error("authentication failed: {0}")]
    ExchangeFailed(String),

    /// The exchanged identity is not the allow-listed admin.
    #[error("Unauthorized email")]
    Unauthorized { email: String },
}

/// Boundary to the identity provider: turns an OAuth authorization
/// code into a verified user profile.
pub trait IdentityExchange {
    fn exchange_code(&self, code: &str) -> Result<UserProfile, AuthError>;
}

/// The single-admin authorization gate.
#[derive(Debug, Clone)]
pub struct AuthGate {
    allowed_email: String,
}

impl AuthGate {
    pub fn new(allowed_email: impl Into<String>) -> Self {
        Self {
            allowed_email: allowed_email.into(),
        }
    }

    /// Check a profile against the allow-list.
    pub fn authorize(&self, profile: &UserProfile) -> Result<(), AuthError> {
        if profile.email == self.allowed_email {
            Ok(())
        } else {
            log::warn!("rejected sign-in attempt from {}", profile.email);
            Err(AuthError::Unauthorized {
                email: profile.email.clone(),
            })
        }
    }

    /// Full sign-in: exchange the code, then authorize the identity.
    /// The profile is only released to the session when both succeed.
    pub fn sign_in(
        &self,
        provider: &dyn IdentityExchange,
        code: &str,
    ) -> Result<UserProfile, AuthError> {
        let profile = provider.exchange_code(code)?;
        self.authorize(&profile)?;
        log::info!("admin signed in: {}", profile.email);
        Ok(profile)
    }
}

/// Server-side session state for the admin workflow.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in user, if any (the `/auth/check` shape).
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, profile: UserProfile) {
        self.user = Some(profile);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}
