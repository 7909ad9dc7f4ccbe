use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged-in identity as issued by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User id — all holdings created under this session are owned by it
    pub user_id: Uuid,

    /// Email the user signed in with
    pub email: String,
}

impl Identity {
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}
