use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of the `event` field of an inbound webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PaymentAuthorized,
    PaymentCaptured,
    PaymentFailed,
    OrderPaid,
    RefundCreated,
    RefundProcessed,
    Other(String),
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name {
            "payment.authorized" => Self::PaymentAuthorized,
            "payment.captured" => Self::PaymentCaptured,
            "payment.failed" => Self::PaymentFailed,
            "order.paid" => Self::OrderPaid,
            "refund.created" => Self::RefundCreated,
            "refund.processed" => Self::RefundProcessed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl AsRef<str> for EventKind {
    fn as_ref(&self) -> &str {
        match self {
            Self::PaymentAuthorized => "payment.authorized",
            Self::PaymentCaptured => "payment.captured",
            Self::PaymentFailed => "payment.failed",
            Self::OrderPaid => "order.paid",
            Self::RefundCreated => "refund.created",
            Self::RefundProcessed => "refund.processed",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A webhook notification delivered by the payment provider.
///
/// Only parsed after its signature has been checked against the raw body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub account_id: Option<String>,
    pub event: String,
    #[serde(default)]
    pub contains: Vec<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default)]
    pub created_at: i64,
}

impl WebhookEvent {
    pub fn kind(&self) -> EventKind {
        EventKind::from(self.event.as_str())
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        super::unix_to_utc(self.created_at)
    }

    /// Id of the payment entity carried in the payload, if any.
    pub fn payment_id(&self) -> Option<&str> {
        self.payload
            .pointer("/payment/entity/id")
            .and_then(|v| v.as_str())
    }

    /// Id of the order entity, falling back to the payment's `order_id`.
    pub fn order_id(&self) -> Option<&str> {
        self.payload
            .pointer("/order/entity/id")
            .or_else(|| self.payload.pointer("/payment/entity/order_id"))
            .and_then(|v| v.as_str())
    }
}
