use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::traits::HoldingStore;
use crate::auth::token::AuthToken;
use crate::errors::CoreError;
use crate::models::holding::{Holding, HoldingDraft};

/// Name of the holdings table exposed by the backend.
const TABLE: &str = "holdings";

/// Holding store backed by a PostgREST-style REST API (Supabase et al.).
///
/// - **Filters**: row selection via query operators (`?id=eq.{uuid}`).
/// - **Auth**: `apikey` header plus `Authorization: Bearer` with the
///   session's access token (falls back to the api key when signed out).
/// - **Row-level security**: the backend scopes writes to the token's
///   user; the client additionally filters lists by `user_id`.
pub struct RestHoldingStore {
    client: Client,
    base_url: String,
    api_key: String,
    token: AuthToken,
}

impl RestHoldingStore {
    /// `base_url` is the project root (no trailing slash), e.g.
    /// `https://xyz.example.co`. `token` should be the same cell the
    /// REST session provider writes to.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, token: AuthToken) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            token,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{TABLE}", self.base_url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        let bearer = self.token.get().unwrap_or_else(|| self.api_key.clone());
        req.header("apikey", &self.api_key).bearer_auth(bearer)
    }
}

// ── Wire types ──────────────────────────────────────────────────────

/// Insert/update payload; the backend assigns `id` and `created_at`.
#[derive(Serialize)]
struct WriteRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<Uuid>,
    symbol: &'a str,
    company_name: &'a str,
    quantity: u32,
    purchase_price: f64,
    current_price: f64,
}

impl<'a> WriteRow<'a> {
    fn from_draft(owner_id: Option<Uuid>, draft: &'a HoldingDraft) -> Self {
        Self {
            user_id: owner_id,
            symbol: &draft.symbol,
            company_name: &draft.company_name,
            quantity: draft.quantity,
            purchase_price: draft.purchase_price,
            current_price: draft.current_price,
        }
    }
}

/// PostgREST error body (`{"message": "..."}`, other fields ignored).
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-success response to a `CoreError::Store`, preferring the
/// backend's human-readable message over the raw status code.
async fn store_error(operation: &str, resp: Response) -> CoreError {
    let status = resp.status();
    let message = match resp.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("HTTP {status}")),
        Err(_) => format!("HTTP {status}"),
    };
    CoreError::Store {
        operation: operation.to_string(),
        message,
    }
}

#[async_trait]
impl HoldingStore for RestHoldingStore {
    fn name(&self) -> &str {
        "Rest"
    }

    async fn list(&self, owner_id: Uuid) -> Result<Vec<Holding>, CoreError> {
        let url = format!(
            "{}?select=*&user_id=eq.{owner_id}&order=created_at.asc",
            self.table_url()
        );
        let resp = self.authorize(self.client.get(&url)).send().await?;
        if !resp.status().is_success() {
            return Err(store_error("list", resp).await);
        }

        let rows: Vec<Holding> = resp.json().await.map_err(|e| CoreError::Store {
            operation: "list".into(),
            message: format!("Failed to parse holdings response: {e}"),
        })?;
        debug!(count = rows.len(), "listed holdings");
        Ok(rows)
    }

    async fn create(&self, owner_id: Uuid, draft: HoldingDraft) -> Result<Uuid, CoreError> {
        let row = WriteRow::from_draft(Some(owner_id), &draft);
        let resp = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(store_error("create", resp).await);
        }

        let created: Vec<Holding> = resp.json().await.map_err(|e| CoreError::Store {
            operation: "create".into(),
            message: format!("Failed to parse created holding: {e}"),
        })?;
        created
            .first()
            .map(|h| h.id)
            .ok_or_else(|| CoreError::Store {
                operation: "create".into(),
                message: "Backend returned no created row".into(),
            })
    }

    async fn update(&self, id: Uuid, draft: HoldingDraft) -> Result<(), CoreError> {
        // owner_id is immutable — never part of an update payload
        let row = WriteRow::from_draft(None, &draft);
        let url = format!("{}?id=eq.{id}", self.table_url());
        let resp = self
            .authorize(self.client.patch(&url))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        match resp.status() {
            s if !s.is_success() => Err(store_error("update", resp).await),
            _ => {
                // Zero affected rows means the id didn't match anything
                let rows: Vec<Holding> = resp.json().await.unwrap_or_default();
                if rows.is_empty() {
                    Err(CoreError::HoldingNotFound(id.to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let url = format!("{}?id=eq.{id}", self.table_url());
        let resp = self
            .authorize(self.client.delete(&url))
            .header("Prefer", "return=representation")
            .send()
            .await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(CoreError::HoldingNotFound(id.to_string())),
            s if !s.is_success() => Err(store_error("delete", resp).await),
            _ => {
                let rows: Vec<Holding> = resp.json().await.unwrap_or_default();
                if rows.is_empty() {
                    Err(CoreError::HoldingNotFound(id.to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }
}
