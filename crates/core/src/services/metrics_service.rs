use crate::models::holding::Holding;
use crate::models::metrics::PortfolioMetrics;

/// Computes aggregate portfolio metrics from a holdings snapshot.
///
/// Pure business logic — no I/O, no state, no side effects. Safe to call
/// repeatedly on the same snapshot; the input is never mutated.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute `PortfolioMetrics` for a holdings snapshot.
    ///
    /// An empty snapshot short-circuits to the zero/none default rather
    /// than computing anything.
    ///
    /// Sums are accumulated in a single pass. Ranking stable-sorts borrowed
    /// holdings descending by fractional return: the top performer is the
    /// first element of that order, the worst performer the last. With a
    /// single holding both ends are the same holding.
    #[must_use]
    pub fn compute(&self, holdings: &[Holding]) -> PortfolioMetrics {
        if holdings.is_empty() {
            return PortfolioMetrics::default();
        }

        let mut total_value = 0.0;
        let mut total_gain_loss = 0.0;
        for holding in holdings {
            total_value += holding.position_value();
            total_gain_loss += holding.gain_loss();
        }

        let mut ranked: Vec<&Holding> = holdings.iter().collect();
        // total_cmp keeps the comparator total: fractional_return never
        // yields NaN, and +∞ (zero cost basis, positive price) sorts first.
        ranked.sort_by(|a, b| {
            Self::fractional_return(b).total_cmp(&Self::fractional_return(a))
        });

        PortfolioMetrics {
            total_value,
            total_gain_loss,
            top_performer: ranked.first().map(|h| (*h).clone()),
            worst_performer: ranked.last().map(|h| (*h).clone()),
        }
    }

    /// Fractional return of a holding, used only for ranking:
    /// `(current_price − purchase_price) / purchase_price`.
    ///
    /// Zero purchase price would divide by zero; the policy is `+∞` when
    /// the current price is positive (free shares that are now worth
    /// something) and `0` otherwise, applied identically at both ranking
    /// ends.
    #[must_use]
    pub fn fractional_return(holding: &Holding) -> f64 {
        if holding.purchase_price == 0.0 {
            if holding.current_price > 0.0 {
                f64::INFINITY
            } else {
                0.0
            }
        } else {
            (holding.current_price - holding.purchase_price) / holding.purchase_price
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
