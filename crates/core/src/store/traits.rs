use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::holding::{Holding, HoldingDraft};

/// Trait abstraction for the remote holdings table.
///
/// All calls are asynchronous and may fail; a failure carries a
/// human-readable message and leaves the stored rows untouched. The store
/// assigns `id` and `created_at` on creation; `owner_id` is immutable.
#[async_trait]
pub trait HoldingStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// List all holdings owned by `owner_id`, oldest first.
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Holding>, CoreError>;

    /// Create a holding for `owner_id` from a draft.
    /// Returns the id assigned by the store.
    async fn create(&self, owner_id: Uuid, draft: HoldingDraft) -> Result<Uuid, CoreError>;

    /// Replace the editable fields of an existing holding.
    /// `id`, `owner_id`, and `created_at` are untouched.
    async fn update(&self, id: Uuid, draft: HoldingDraft) -> Result<(), CoreError>;

    /// Delete a holding by id.
    async fn delete(&self, id: Uuid) -> Result<(), CoreError>;
}
