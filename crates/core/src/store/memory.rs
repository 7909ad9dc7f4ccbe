use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use super::traits::HoldingStore;
use crate::errors::CoreError;
use crate::models::holding::{Holding, HoldingDraft};

/// In-memory holding store for tests and demos.
///
/// Rows live in insertion order, which doubles as `created_at` order.
/// Mirrors the remote store's semantics: ids assigned on create, misses
/// on update/delete are errors rather than silent no-ops.
pub struct InMemoryHoldingStore {
    rows: Mutex<Vec<Holding>>,
}

impl InMemoryHoldingStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Total row count across all owners.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.lock().expect("holding store lock poisoned").len()
    }
}

impl Default for InMemoryHoldingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HoldingStore for InMemoryHoldingStore {
    fn name(&self) -> &str {
        "InMemory"
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<Holding>, CoreError> {
        let rows = self.rows.lock().expect("holding store lock poisoned");
        Ok(rows
            .iter()
            .filter(|h| h.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, owner_id: Uuid, draft: HoldingDraft) -> Result<Uuid, CoreError> {
        let holding = Holding {
            id: Uuid::new_v4(),
            owner_id,
            symbol: draft.symbol,
            company_name: draft.company_name,
            quantity: draft.quantity,
            purchase_price: draft.purchase_price,
            current_price: draft.current_price,
            created_at: Utc::now(),
        };
        let id = holding.id;
        let mut rows = self.rows.lock().expect("holding store lock poisoned");
        rows.push(holding);
        Ok(id)
    }

    async fn update(&self, id: Uuid, draft: HoldingDraft) -> Result<(), CoreError> {
        let mut rows = self.rows.lock().expect("holding store lock poisoned");
        let holding = rows
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))?;

        holding.symbol = draft.symbol;
        holding.company_name = draft.company_name;
        holding.quantity = draft.quantity;
        holding.purchase_price = draft.purchase_price;
        holding.current_price = draft.current_price;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let mut rows = self.rows.lock().expect("holding store lock poisoned");
        let idx = rows
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))?;
        rows.remove(idx);
        Ok(())
    }
}
