use serde::{Deserialize, Serialize};

/// A single data point for the portfolio distribution chart.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Ticker symbol labelling this point (e.g., "RELIANCE")
    pub symbol: String,

    /// Position value: `current_price × quantity`
    pub value: f64,
}
