pub mod auth;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod store;
pub mod symbols;

use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use auth::traits::SessionProvider;
use errors::CoreError;
use models::chart::ChartPoint;
use models::holding::{Holding, HoldingDraft};
use models::metrics::PortfolioMetrics;
use models::session::Identity;
use providers::traits::QuoteProvider;
use services::{chart_service::ChartService, metrics_service::MetricsService};
use store::traits::HoldingStore;
use symbols::ListedSymbol;

/// Callback invoked whenever the session changes (sign-in, sign-up,
/// sign-out). Receives the new identity, or `None` after sign-out.
pub type SessionListener = Box<dyn Fn(Option<&Identity>) + Send + Sync>;

/// Main entry point for the Portfolio Tracker core library.
///
/// The controller between the collaborators: the session provider supplies
/// an identity, holdings are loaded for that identity from the holding
/// store, and metrics are recomputed whenever the snapshot changes. The
/// frontend reads `(holdings, metrics)` and forwards user intents back
/// through the `add`/`edit`/`delete` methods, each of which mutates the
/// store and reloads.
///
/// The displayed metrics always correspond to the most recently loaded
/// snapshot. A failed store call is logged and surfaced; the prior
/// snapshot and metrics are kept untouched, and nothing is retried.
#[must_use]
pub struct PortfolioTracker {
    store: Arc<dyn HoldingStore>,
    sessions: Arc<dyn SessionProvider>,
    quotes: Arc<dyn QuoteProvider>,
    metrics_service: MetricsService,
    chart_service: ChartService,
    holdings: Vec<Holding>,
    metrics: PortfolioMetrics,
    session: Option<Identity>,
    listeners: Vec<SessionListener>,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("holdings", &self.holdings.len())
            .field("session", &self.session.as_ref().map(|s| &s.email))
            .field("store", &self.store.name())
            .field("quotes", &self.quotes.name())
            .finish()
    }
}

impl PortfolioTracker {
    pub fn new(
        store: Arc<dyn HoldingStore>,
        sessions: Arc<dyn SessionProvider>,
        quotes: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            store,
            sessions,
            quotes,
            metrics_service: MetricsService::new(),
            chart_service: ChartService::new(),
            holdings: Vec::new(),
            metrics: PortfolioMetrics::default(),
            session: None,
            listeners: Vec::new(),
        }
    }

    /// Pick up an already-active session at startup and load its holdings.
    /// Without a session this is a no-op.
    pub async fn init(&mut self) -> Result<(), CoreError> {
        self.session = self.sessions.current_session().await?;
        if self.session.is_some() {
            self.reload().await?;
        }
        Ok(())
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Sign in, then load the holdings owned by the new identity.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), CoreError> {
        let identity = self.sessions.sign_in(email, password).await?;
        self.session = Some(identity);
        self.notify_session_changed();
        self.reload().await
    }

    /// Register a new account, open a session for it, and load (empty)
    /// holdings.
    pub async fn sign_up(&mut self, email: &str, password: &str) -> Result<(), CoreError> {
        let identity = self.sessions.sign_up(email, password).await?;
        self.session = Some(identity);
        self.notify_session_changed();
        self.reload().await
    }

    /// End the session and clear the snapshot. Metrics reset to their
    /// zero/none default.
    pub async fn sign_out(&mut self) -> Result<(), CoreError> {
        self.sessions.sign_out().await?;
        self.session = None;
        self.holdings.clear();
        self.metrics = PortfolioMetrics::default();
        self.notify_session_changed();
        Ok(())
    }

    /// Subscribe to session changes. Listeners fire on every sign-in,
    /// sign-up, and sign-out, after the session field has been updated.
    pub fn on_session_change(&mut self, listener: SessionListener) {
        self.listeners.push(listener);
    }

    /// The currently signed-in identity, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Identity> {
        self.session.as_ref()
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// Reload the snapshot from the store and recompute metrics.
    ///
    /// On failure the previous snapshot and metrics stay in place — the
    /// error is logged and returned, nothing is retried.
    pub async fn reload(&mut self) -> Result<(), CoreError> {
        let owner_id = self.owner_id()?;
        match self.store.list(owner_id).await {
            Ok(holdings) => {
                self.holdings = holdings;
                self.recompute_metrics();
                Ok(())
            }
            Err(e) => {
                error!(store = self.store.name(), error = %e, "failed to load holdings");
                Err(e)
            }
        }
    }

    /// Create a holding from a form draft.
    ///
    /// The draft is clamped to valid values, the current price is stamped
    /// from the quote provider at submit time, and the snapshot is reloaded
    /// after the store accepts the row. Returns the id assigned by the
    /// store.
    pub async fn add_holding(&mut self, draft: HoldingDraft) -> Result<Uuid, CoreError> {
        let owner_id = self.owner_id()?;
        let draft = self.prepare_draft(draft).await?;

        let id = match self.store.create(owner_id, draft).await {
            Ok(id) => id,
            Err(e) => {
                error!(store = self.store.name(), error = %e, "failed to add holding");
                return Err(e);
            }
        };
        self.reload().await?;
        Ok(id)
    }

    /// Replace the editable fields of an existing holding.
    ///
    /// Same sanitization as `add_holding`; the current price is re-stamped.
    /// `id`, owner, and creation time are untouched.
    pub async fn edit_holding(&mut self, id: Uuid, draft: HoldingDraft) -> Result<(), CoreError> {
        self.owner_id()?;
        let draft = self.prepare_draft(draft).await?;

        if let Err(e) = self.store.update(id, draft).await {
            error!(store = self.store.name(), error = %e, "failed to update holding");
            return Err(e);
        }
        self.reload().await
    }

    /// Delete a holding by id and reload the snapshot.
    pub async fn delete_holding(&mut self, id: Uuid) -> Result<(), CoreError> {
        self.owner_id()?;
        if let Err(e) = self.store.delete(id).await {
            error!(store = self.store.name(), error = %e, "failed to delete holding");
            return Err(e);
        }
        self.reload().await
    }

    /// The current snapshot, in store order (oldest first).
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Look up a holding in the snapshot by id.
    #[must_use]
    pub fn holding(&self, id: Uuid) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    /// Number of holdings in the snapshot.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    // ── Metrics & Chart ─────────────────────────────────────────────

    /// Metrics for the current snapshot.
    #[must_use]
    pub fn metrics(&self) -> &PortfolioMetrics {
        &self.metrics
    }

    /// Chart-ready per-position values for the current snapshot.
    #[must_use]
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.chart_service.position_values(&self.holdings)
    }

    // ── Quotes & Symbols ────────────────────────────────────────────

    /// Current price for a symbol, for the form's price preview when a
    /// suggestion is picked.
    pub async fn quote(&self, symbol: &str) -> Result<f64, CoreError> {
        self.quotes.current_price(symbol).await
    }

    /// Symbol-picker suggestions matching a query.
    #[must_use]
    pub fn search_symbols(&self, query: &str) -> Vec<&'static ListedSymbol> {
        symbols::search(query)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn owner_id(&self) -> Result<Uuid, CoreError> {
        self.session
            .as_ref()
            .map(|s| s.user_id)
            .ok_or(CoreError::NotSignedIn)
    }

    /// Sanitize a form draft and stamp the current price at submit time.
    async fn prepare_draft(&self, draft: HoldingDraft) -> Result<HoldingDraft, CoreError> {
        let mut draft = draft.sanitized();
        if draft.symbol.is_empty() {
            return Err(CoreError::Validation("Stock symbol must not be empty".into()));
        }
        draft.current_price = self.quotes.current_price(&draft.symbol).await?;
        Ok(draft)
    }

    fn recompute_metrics(&mut self) {
        self.metrics = self.metrics_service.compute(&self.holdings);
        debug!(
            holdings = self.holdings.len(),
            total_value = self.metrics.total_value,
            "recomputed metrics"
        );
    }

    fn notify_session_changed(&self) {
        for listener in &self.listeners {
            listener(self.session.as_ref());
        }
    }
}
