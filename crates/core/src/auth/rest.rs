use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

use super::token::AuthToken;
use super::traits::SessionProvider;
use crate::errors::CoreError;
use crate::models::session::Identity;

/// Session provider backed by a GoTrue-style auth API (Supabase et al.).
///
/// Endpoints: `/auth/v1/signup`, `/auth/v1/token?grant_type=password`,
/// `/auth/v1/logout`, `/auth/v1/user`. The access token is published
/// through the shared `AuthToken` cell so the REST holding store can
/// authorize its calls with it.
pub struct RestSessionProvider {
    client: Client,
    base_url: String,
    api_key: String,
    token: AuthToken,
}

impl RestSessionProvider {
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

    fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{endpoint}", self.base_url)
    }

    /// POST credentials to an endpoint that opens a session on success.
    async fn open_session(&self, endpoint: &str, email: &str, password: &str) -> Result<Identity, CoreError> {
        let resp = self
            .client
            .post(self.auth_url(endpoint))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(auth_error(resp).await);
        }

        let session: SessionPayload = resp.json().await.map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse session response: {e}"))
        })?;
        self.token.set(Some(session.access_token));
        Ok(Identity::new(session.user.id, session.user.email))
    }
}

// ── GoTrue response types ───────────────────────────────────────────

#[derive(Deserialize)]
struct SessionPayload {
    access_token: String,
    user: UserPayload,
}

#[derive(Deserialize)]
struct UserPayload {
    id: Uuid,
    email: String,
}

/// GoTrue error bodies vary: `error_description` for token grants,
/// `msg` or `message` elsewhere. Take whichever is present.
#[derive(Deserialize)]
struct AuthErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

async fn auth_error(resp: Response) -> CoreError {
    let status = resp.status();
    let message = match resp.text().await {
        Ok(body) => serde_json::from_str::<AuthErrorBody>(&body)
            .ok()
            .and_then(|e| e.error_description.or(e.msg).or(e.message))
            .unwrap_or_else(|| format!("HTTP {status}")),
        Err(_) => format!("HTTP {status}"),
    };
    CoreError::Auth(message)
}

#[async_trait]
impl SessionProvider for RestSessionProvider {
    fn name(&self) -> &str {
        "Rest"
    }

    async fn current_session(&self) -> Result<Option<Identity>, CoreError> {
        let Some(token) = self.token.get() else {
            return Ok(None);
        };

        let resp = self
            .client
            .get(self.auth_url("user"))
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .send()
            .await?;
        match resp.status() {
            // Expired or revoked token — treat as signed out
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                self.token.set(None);
                Ok(None)
            }
            s if !s.is_success() => Err(auth_error(resp).await),
            _ => {
                let user: UserPayload = resp.json().await.map_err(|e| {
                    CoreError::Deserialization(format!("Failed to parse user response: {e}"))
                })?;
                Ok(Some(Identity::new(user.id, user.email)))
            }
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, CoreError> {
        self.open_session("token?grant_type=password", email, password)
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, CoreError> {
        self.open_session("signup", email, password).await
    }

    async fn sign_out(&self) -> Result<(), CoreError> {
        let token = self.token.get();
        self.token.set(None);

        // Best-effort remote revocation; the session is gone locally either way
        if let Some(token) = token {
            let result = self
                .client
                .post(self.auth_url("logout"))
                .header("apikey", &self.api_key)
                .bearer_auth(&token)
                .send()
                .await;
            if let Err(e) = result {
                warn!(error = %e, "sign-out revocation failed");
            }
        }
        Ok(())
    }
}
