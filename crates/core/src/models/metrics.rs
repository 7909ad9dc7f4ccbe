use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Aggregate metrics derived from the current holdings snapshot.
///
/// Recomputed from scratch whenever the snapshot changes; never persisted.
/// A pure function of the holdings list — no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Sum over holdings of `current_price × quantity`
    pub total_value: f64,

    /// Sum over holdings of `(current_price − purchase_price) × quantity`
    pub total_gain_loss: f64,

    /// Holding with the highest fractional return, `None` when empty.
    /// With a single holding this equals `worst_performer`.
    pub top_performer: Option<Holding>,

    /// Holding with the lowest fractional return, `None` when empty
    pub worst_performer: Option<Holding>,
}

impl Default for PortfolioMetrics {
    fn default() -> Self {
        Self {
            total_value: 0.0,
            total_gain_loss: 0.0,
            top_performer: None,
            worst_performer: None,
        }
    }
}
