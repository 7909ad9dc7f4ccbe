use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use super::traits::SessionProvider;
use crate::errors::CoreError;
use crate::models::session::Identity;

/// In-memory session provider for tests and demos.
///
/// Keeps a user table and at most one active session. Error messages
/// mirror the hosted backend's wording so frontends can display them
/// unchanged.
pub struct InMemorySessionProvider {
    users: Mutex<HashMap<String, (String, Uuid)>>,
    session: Mutex<Option<Identity>>,
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            session: Mutex::new(None),
        }
    }

    /// Pre-register a user without opening a session.
    pub fn register(&self, email: impl Into<String>, password: impl Into<String>) -> Uuid {
        let user_id = Uuid::new_v4();
        self.users
            .lock()
            .expect("session provider lock poisoned")
            .insert(email.into(), (password.into(), user_id));
        user_id
    }
}

impl Default for InMemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    fn name(&self) -> &str {
        "InMemory"
    }

    async fn current_session(&self) -> Result<Option<Identity>, CoreError> {
        Ok(self
            .session
            .lock()
            .expect("session provider lock poisoned")
            .clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, CoreError> {
        let users = self.users.lock().expect("session provider lock poisoned");
        let user_id = match users.get(email) {
            Some((stored, user_id)) if stored == password => *user_id,
            _ => return Err(CoreError::Auth("Invalid login credentials".into())),
        };
        drop(users);

        let identity = Identity::new(user_id, email);
        *self.session.lock().expect("session provider lock poisoned") =
            Some(identity.clone());
        Ok(identity)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, CoreError> {
        let mut users = self.users.lock().expect("session provider lock poisoned");
        if users.contains_key(email) {
            return Err(CoreError::Auth("User already registered".into()));
        }
        let user_id = Uuid::new_v4();
        users.insert(email.to_string(), (password.to_string(), user_id));
        drop(users);

        let identity = Identity::new(user_id, email);
        *self.session.lock().expect("session provider lock poisoned") =
            Some(identity.clone());
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), CoreError> {
        *self.session.lock().expect("session provider lock poisoned") = None;
        Ok(())
    }
}
