use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::session::Identity;

/// Trait abstraction for the session backend.
///
/// Issues a logged-in identity or none. Invalid credentials and sign-up
/// conflicts surface as `CoreError::Auth` with the backend's message, which
/// the frontend shows inline.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// The currently active identity, if any.
    async fn current_session(&self) -> Result<Option<Identity>, CoreError>;

    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, CoreError>;

    /// Register a new account and open a session for it.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, CoreError>;

    /// End the current session. Always clears local state; remote
    /// revocation is best-effort.
    async fn sign_out(&self) -> Result<(), CoreError>;
}
