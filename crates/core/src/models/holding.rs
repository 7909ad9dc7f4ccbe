use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One owned stock position.
///
/// `id` and `created_at` are assigned by the holding store on creation;
/// `owner_id` is set at creation and never changes afterwards. A holding
/// cannot exist without an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Opaque record identifier, assigned by the store
    pub id: Uuid,

    /// User id of the owning session (column `user_id` in the backend table)
    #[serde(rename = "user_id")]
    pub owner_id: Uuid,

    /// Ticker symbol, uppercased (e.g., "RELIANCE", "TCS")
    pub symbol: String,

    /// Human-readable company name (e.g., "Reliance Industries Ltd.")
    pub company_name: String,

    /// Number of shares held; always >= 1
    pub quantity: u32,

    /// Price per share at acquisition; always >= 0
    pub purchase_price: f64,

    /// Most recently observed price per share; always >= 0.
    /// Stamped from the quote provider on every create/edit.
    pub current_price: f64,

    /// Creation timestamp, assigned by the store. Drives list ordering.
    pub created_at: DateTime<Utc>,
}

impl Holding {
    /// Current value of this position: `current_price × quantity`.
    #[must_use]
    pub fn position_value(&self) -> f64 {
        self.current_price * f64::from(self.quantity)
    }

    /// Absolute gain/loss of this position:
    /// `(current_price − purchase_price) × quantity`.
    #[must_use]
    pub fn gain_loss(&self) -> f64 {
        (self.current_price - self.purchase_price) * f64::from(self.quantity)
    }
}

/// Form payload for creating or editing a holding.
///
/// Edits are a full replace of these fields; `id`, `owner_id`, and
/// `created_at` stay with the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingDraft {
    pub symbol: String,
    pub company_name: String,
    pub quantity: u32,
    pub purchase_price: f64,
    pub current_price: f64,
}

impl HoldingDraft {
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        quantity: u32,
        purchase_price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            quantity,
            purchase_price,
            current_price: 0.0,
        }
    }

    /// Clamp the draft to valid values instead of rejecting it:
    /// quantity at least 1, prices finite and non-negative, symbol trimmed
    /// and uppercased, company name trimmed.
    ///
    /// The one input that cannot be clamped into shape is an empty symbol —
    /// the facade rejects that with `CoreError::Validation`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            symbol: self.symbol.trim().to_uppercase(),
            company_name: self.company_name.trim().to_string(),
            quantity: self.quantity.max(1),
            purchase_price: clamp_price(self.purchase_price),
            current_price: clamp_price(self.current_price),
        }
    }
}

fn clamp_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}
