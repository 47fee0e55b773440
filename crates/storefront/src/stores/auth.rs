//! The session container and its credential provider port.
//!
//! Holds at most one logged-in user. Verifying credentials is an external
//! concern behind [`CredentialProvider`]; the shipped
//! [`MockCredentialProvider`] accepts anything, which is exactly what the
//! storefront runs on until a real backend exists. Swapping one in touches
//! the provider, never this container's contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kalartz_core::{Email, EmailError, UserId, UserRole};

use crate::error::{Result, StoreError};
use crate::storage::{self, StoragePort, keys};

/// Avatar assigned to every mock identity.
pub const MOCK_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face";

/// The currently authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Unique user id.
    pub id: UserId,
    /// Sign-in email address.
    pub email: Email,
    /// Which area of the storefront this session is routed to.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Profile image URL.
    pub avatar_url: String,
}

/// Registration input for a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Sign-in email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Requested role.
    pub role: UserRole,
}

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The provider rejected the credentials.
    ///
    /// The mock provider never produces this; a real backend will.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The provider rejected the registration (e.g., email already taken).
    #[error("registration rejected: {0}")]
    RegistrationRejected(String),

    /// Persisting or clearing the session record failed.
    #[error("session store error: {0}")]
    Store(#[from] StoreError),
}

/// Verifies credentials and mints session identities.
///
/// This is the seam where a real authentication backend plugs in. Both
/// operations are async because any real implementation is a network call.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Verify a login attempt and return the resulting identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the email/password
    /// pair is not accepted.
    async fn authenticate(
        &self,
        email: &Email,
        password: &str,
        role: UserRole,
    ) -> std::result::Result<SessionUser, AuthError>;

    /// Create a new account and return its identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RegistrationRejected`] when the account cannot
    /// be created.
    async fn register(&self, new_user: NewUser) -> std::result::Result<SessionUser, AuthError>;
}

/// A provider that accepts every login and registration.
///
/// Synthesizes the identity locally: a fresh id, the display name taken
/// from the email's local part, and the fixed [`MOCK_AVATAR_URL`]. The
/// password is not inspected.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCredentialProvider;

#[async_trait]
impl CredentialProvider for MockCredentialProvider {
    async fn authenticate(
        &self,
        email: &Email,
        _password: &str,
        role: UserRole,
    ) -> std::result::Result<SessionUser, AuthError> {
        Ok(SessionUser {
            id: UserId::generate(),
            email: email.clone(),
            role,
            name: email.local_part().to_owned(),
            avatar_url: MOCK_AVATAR_URL.to_owned(),
        })
    }

    async fn register(&self, new_user: NewUser) -> std::result::Result<SessionUser, AuthError> {
        Ok(SessionUser {
            id: UserId::generate(),
            email: new_user.email,
            role: new_user.role,
            name: new_user.name,
            avatar_url: MOCK_AVATAR_URL.to_owned(),
        })
    }
}

/// The session state container.
///
/// Persists the user under [`keys::SESSION_USER`]. `loading` starts true
/// and drops to false once hydration has run; the consuming UI gates
/// protected routes on it so a stored session is not misread as
/// logged-out during startup.
pub struct AuthStore<P = MockCredentialProvider> {
    storage: Arc<dyn StoragePort>,
    provider: P,
    user: Option<SessionUser>,
    loading: bool,
}

impl<P: CredentialProvider> AuthStore<P> {
    /// Create a not-yet-hydrated session container.
    #[must_use]
    pub fn new(storage: Arc<dyn StoragePort>, provider: P) -> Self {
        Self {
            storage,
            provider,
            user: None,
            loading: true,
        }
    }

    /// Load the persisted session, once, at startup.
    ///
    /// The loading gate opens whether or not the read succeeds; a corrupt
    /// session record must not wedge the whole UI behind a spinner.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the persisted blob is corrupt.
    pub fn hydrate(&mut self) -> Result<()> {
        let loaded = storage::load(self.storage.as_ref(), keys::SESSION_USER);
        self.loading = false;
        self.user = loaded?;
        if let Some(user) = &self.user {
            tracing::debug!(user = %user.id, role = %user.role, "session restored");
        }
        Ok(())
    }

    /// Log in with the given credentials and requested role.
    ///
    /// The identity is persisted before it becomes observable in memory,
    /// so disk and memory cannot disagree after a failed write.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the credentials or the
    /// session record cannot be persisted.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> std::result::Result<&SessionUser, AuthError> {
        let email = Email::parse(email)?;
        let user = self.provider.authenticate(&email, password, role).await?;
        storage::save(self.storage.as_ref(), keys::SESSION_USER, &user)
            .map_err(AuthError::Store)?;
        tracing::info!(user = %user.id, role = %user.role, "logged in");
        Ok(self.user.insert(user))
    }

    /// Register a new account and log it in.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the registration or the
    /// session record cannot be persisted.
    pub async fn register(
        &mut self,
        new_user: NewUser,
    ) -> std::result::Result<&SessionUser, AuthError> {
        let user = self.provider.register(new_user).await?;
        storage::save(self.storage.as_ref(), keys::SESSION_USER, &user)
            .map_err(AuthError::Store)?;
        tracing::info!(user = %user.id, role = %user.role, "registered");
        Ok(self.user.insert(user))
    }

    /// Clear the session and its persisted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted record cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        self.user = None;
        self.storage.remove(keys::SESSION_USER)?;
        tracing::info!("logged out");
        Ok(())
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// True until [`hydrate`](Self::hydrate) has run.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Rewrite the current state to storage (teardown flush).
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn flush(&self) -> Result<()> {
        match &self.user {
            Some(user) => storage::save(self.storage.as_ref(), keys::SESSION_USER, user),
            None => Ok(self.storage.remove(keys::SESSION_USER)?),
        }
    }
}
