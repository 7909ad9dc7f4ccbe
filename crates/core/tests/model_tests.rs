// ═══════════════════════════════════════════════════════════════════
// Model Tests — Holding, HoldingDraft sanitization, PortfolioMetrics,
// ChartService, symbol catalog
// ═══════════════════════════════════════════════════════════════════

use chrono::Utc;
use uuid::Uuid;

use portfolio_tracker_core::models::holding::{Holding, HoldingDraft};
use portfolio_tracker_core::models::metrics::PortfolioMetrics;
use portfolio_tracker_core::models::session::Identity;
use portfolio_tracker_core::services::chart_service::ChartService;
use portfolio_tracker_core::symbols;

fn holding(symbol: &str, quantity: u32, purchase_price: f64, current_price: f64) -> Holding {
    Holding {
        id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        symbol: symbol.to_string(),
        company_name: format!("{symbol} Ltd."),
        quantity,
        purchase_price,
        current_price,
        created_at: Utc::now(),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Holding
// ═══════════════════════════════════════════════════════════════════

mod holding_model {
    use super::*;

    #[test]
    fn position_value_and_gain_loss() {
        let h = holding("TCS", 10, 100.0, 150.0);
        assert_eq!(h.position_value(), 1500.0);
        assert_eq!(h.gain_loss(), 500.0);

        let loser = holding("INFY", 5, 200.0, 180.0);
        assert_eq!(loser.gain_loss(), -100.0);
    }

    #[test]
    fn serde_uses_backend_column_names() {
        let h = holding("TCS", 10, 100.0, 150.0);
        let json = serde_json::to_string(&h).unwrap();
        // owner_id serializes as the backend's user_id column
        assert!(json.contains("\"user_id\""));
        assert!(!json.contains("\"owner_id\""));
        assert!(json.contains("\"company_name\""));
        assert!(json.contains("\"purchase_price\""));
        assert!(json.contains("\"current_price\""));
        assert!(json.contains("\"created_at\""));
    }

    #[test]
    fn serde_roundtrip() {
        let h = holding("RELIANCE", 3, 2400.0, 2750.5);
        let json = serde_json::to_string(&h).unwrap();
        let back: Holding = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  HoldingDraft sanitization
// ═══════════════════════════════════════════════════════════════════

mod draft {
    use super::*;

    #[test]
    fn new_leaves_current_price_unstamped() {
        let d = HoldingDraft::new("TCS", "Tata Consultancy Services Ltd.", 5, 3200.0);
        assert_eq!(d.current_price, 0.0);
    }

    #[test]
    fn sanitized_uppercases_and_trims_symbol() {
        let d = HoldingDraft::new("  reliance ", " Reliance Industries Ltd. ", 1, 100.0).sanitized();
        assert_eq!(d.symbol, "RELIANCE");
        assert_eq!(d.company_name, "Reliance Industries Ltd.");
    }

    #[test]
    fn sanitized_clamps_zero_quantity_to_one() {
        let d = HoldingDraft::new("TCS", "TCS Ltd.", 0, 100.0).sanitized();
        assert_eq!(d.quantity, 1);
    }

    #[test]
    fn sanitized_clamps_negative_prices_to_zero() {
        let mut d = HoldingDraft::new("TCS", "TCS Ltd.", 1, -10.0);
        d.current_price = -250.0;
        let d = d.sanitized();
        assert_eq!(d.purchase_price, 0.0);
        assert_eq!(d.current_price, 0.0);
    }

    #[test]
    fn sanitized_clamps_non_finite_prices_to_zero() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let d = HoldingDraft::new("TCS", "TCS Ltd.", 1, bad).sanitized();
            assert_eq!(d.purchase_price, 0.0);
        }
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let mut d = HoldingDraft::new("TCS", "Tata Consultancy Services Ltd.", 7, 3199.95);
        d.current_price = 3250.0;
        let d = d.sanitized();
        assert_eq!(d.quantity, 7);
        assert_eq!(d.purchase_price, 3199.95);
        assert_eq!(d.current_price, 3250.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Metrics default & identity
// ═══════════════════════════════════════════════════════════════════

mod metrics_and_identity {
    use super::*;

    #[test]
    fn metrics_default_is_zero_none() {
        let m = PortfolioMetrics::default();
        assert_eq!(m.total_value, 0.0);
        assert_eq!(m.total_gain_loss, 0.0);
        assert!(m.top_performer.is_none());
        assert!(m.worst_performer.is_none());
    }

    #[test]
    fn identity_construction() {
        let user_id = Uuid::new_v4();
        let identity = Identity::new(user_id, "user@example.com");
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "user@example.com");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart service
// ═══════════════════════════════════════════════════════════════════

mod chart {
    use super::*;

    #[test]
    fn one_point_per_holding_in_snapshot_order() {
        let holdings = vec![
            holding("TCS", 10, 100.0, 150.0),
            holding("ITC", 2, 50.0, 100.0),
        ];
        let points = ChartService::new().position_values(&holdings);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].symbol, "TCS");
        assert_eq!(points[0].value, 1500.0);
        assert_eq!(points[1].symbol, "ITC");
        assert_eq!(points[1].value, 200.0);
    }

    #[test]
    fn empty_snapshot_yields_no_points() {
        assert!(ChartService::new().position_values(&[]).is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Symbol catalog
// ═══════════════════════════════════════════════════════════════════

mod symbol_catalog {
    use super::*;

    #[test]
    fn empty_query_returns_whole_catalog() {
        assert_eq!(symbols::search("").len(), symbols::LISTED_SYMBOLS.len());
    }

    #[test]
    fn matches_symbol_prefix_case_insensitively() {
        let hits = symbols::search("rel");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "RELIANCE");
    }

    #[test]
    fn matches_company_name_substring() {
        let hits = symbols::search("state bank");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "SBIN");
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(symbols::search("zzzz").is_empty());
    }

    #[test]
    fn query_is_trimmed() {
        let hits = symbols::search("  infy  ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "INFY");
    }
}
