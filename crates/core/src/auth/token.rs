use std::sync::{Arc, Mutex};

/// Shared access-token cell.
///
/// The REST session provider writes the token on sign-in/sign-out and the
/// REST holding store reads it for its `Authorization` header. Cloning
/// shares the same cell.
#[derive(Clone, Default)]
pub struct AuthToken {
    inner: Arc<Mutex<Option<String>>>,
}

impl AuthToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if a session is active.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.inner.lock().expect("auth token lock poisoned").clone()
    }

    /// Replace the token (`None` clears it).
    pub fn set(&self, token: Option<String>) {
        *self.inner.lock().expect("auth token lock poisoned") = token;
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself
        f.debug_struct("AuthToken")
            .field("present", &self.get().is_some())
            .finish()
    }
}
