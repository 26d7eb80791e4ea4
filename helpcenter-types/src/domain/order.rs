use serde::{Deserialize, Serialize};

/// Lifecycle state of an order on the provider side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Attempted,
    Paid,
    #[serde(other)]
    Unknown,
}

/// An order as returned by the provider's REST API.
///
/// Amounts are in the smallest currency unit (paise for INR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    pub amount: i64,
    #[serde(default)]
    pub amount_paid: i64,
    #[serde(default)]
    pub amount_due: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub attempts: u32,
    /// Free-form key/value notes. The provider sends `[]` when empty.
    #[serde(default)]
    pub notes: serde_json::Value,
    pub created_at: i64,
}
