use crate::models::chart::ChartPoint;
use crate::models::holding::Holding;

/// Generates chart-ready data from the holdings snapshot.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One point per holding, in snapshot order: the symbol and the
    /// current position value (`current_price × quantity`).
    #[must_use]
    pub fn position_values(&self, holdings: &[Holding]) -> Vec<ChartPoint> {
        holdings
            .iter()
            .map(|holding| ChartPoint {
                symbol: holding.symbol.clone(),
                value: holding.position_value(),
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
