use async_trait::async_trait;
use rand::Rng;

use super::traits::QuoteProvider;
use crate::errors::CoreError;

/// Default lower bound for simulated prices (whole currency units).
const DEFAULT_MIN_PRICE: u32 = 100;
/// Default upper bound for simulated prices (inclusive).
const DEFAULT_MAX_PRICE: u32 = 10_000;

/// Simulated quote source: draws a uniform whole-number price per request.
///
/// Stands in for a real market-data feed. Prices are independent draws —
/// there is no per-symbol continuity between requests.
pub struct SimulatedQuoteProvider {
    min_price: u32,
    max_price: u32,
}

impl SimulatedQuoteProvider {
    /// Provider with the default 100..=10000 price range.
    pub fn new() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }

    /// Provider with a custom inclusive price range.
    /// Swaps the bounds if they are given in the wrong order.
    pub fn with_range(min_price: u32, max_price: u32) -> Self {
        Self {
            min_price: min_price.min(max_price),
            max_price: min_price.max(max_price),
        }
    }
}

impl Default for SimulatedQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for SimulatedQuoteProvider {
    fn name(&self) -> &str {
        "Simulated"
    }

    async fn current_price(&self, _symbol: &str) -> Result<f64, CoreError> {
        let price = rand::rng().random_range(self.min_price..=self.max_price);
        Ok(f64::from(price))
    }
}
