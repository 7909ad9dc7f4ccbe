use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for the current-price lookup.
///
/// The shipped implementation is a random-number stand-in; a real
/// market-data feed implements this trait and drops in without touching
/// the metrics engine or the facade.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the current price per share for a ticker symbol.
    async fn current_price(&self, symbol: &str) -> Result<f64, CoreError>;
}
