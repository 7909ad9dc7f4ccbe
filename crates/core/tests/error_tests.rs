// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn auth() {
        let err = CoreError::Auth("Invalid login credentials".into());
        assert_eq!(err.to_string(), "Authentication failed: Invalid login credentials");
    }

    #[test]
    fn not_signed_in() {
        assert_eq!(CoreError::NotSignedIn.to_string(), "Not signed in");
    }

    #[test]
    fn store() {
        let err = CoreError::Store {
            operation: "list".into(),
            message: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "Store error during list: permission denied");
    }

    #[test]
    fn holding_not_found() {
        let err = CoreError::HoldingNotFound("abc-123".into());
        assert_eq!(err.to_string(), "Holding not found: abc-123");
    }

    #[test]
    fn quote() {
        let err = CoreError::Quote {
            provider: "Simulated".into(),
            message: "no quote".into(),
        };
        assert_eq!(err.to_string(), "Quote error (Simulated): no quote");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("Stock symbol must not be empty".into());
        assert_eq!(err.to_string(), "Validation failed: Stock symbol must not be empty");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        // Trigger a real serde_json error
        let result: Result<String, _> = serde_json::from_str("{{invalid json");
        let json_err = result.unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Deserialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Deserialization, got {:?}", other),
        }
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

mod bounds {
    use super::*;

    #[test]
    fn core_error_implements_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::Auth("test".into()));
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn core_error_implements_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CoreError>();
    }

    #[test]
    fn core_error_implements_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<CoreError>();
    }
}

// ── Edge cases ──────────────────────────────────────────────────────

mod edge_cases {
    use super::*;

    #[test]
    fn very_long_error_message() {
        let long_msg = "x".repeat(10_000);
        let err = CoreError::Auth(long_msg.clone());
        assert_eq!(err.to_string(), format!("Authentication failed: {}", long_msg));
    }

    #[test]
    fn unicode_in_error_message() {
        let err = CoreError::Store {
            operation: "作成".into(),
            message: "接続エラー".into(),
        };
        assert_eq!(err.to_string(), "Store error during 作成: 接続エラー");
    }

    #[test]
    fn newlines_in_error_message() {
        let err = CoreError::Network("line1\nline2\nline3".into());
        assert!(err.to_string().contains("line1\nline2\nline3"));
    }
}
