//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Order DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in smallest currency unit (e.g., paise)
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Merchant-side receipt reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    /// Free-form key/value notes attached to the order
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub notes: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub partial_payment: bool,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl CreateOrderRequest {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            receipt: None,
            notes: serde_json::Map::new(),
            partial_payment: false,
        }
    }

    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = Some(receipt.into());
        self
    }
}

/// Request to capture an authorized payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturePaymentRequest {
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout Verification DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Fields handed back to the browser by the checkout widget after payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVerification {
    #[serde(alias = "razorpay_order_id")]
    pub order_id: String,
    #[serde(alias = "razorpay_payment_id")]
    pub payment_id: String,
    #[serde(alias = "razorpay_signature")]
    pub signature: String,
}

/// Result of a checkout signature check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub verified: bool,
    pub payment_id: String,
}

/// Public checkout configuration. Never carries the key secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfigResponse {
    pub key_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Webhook DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Acknowledgement returned for an accepted webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookAck {
    pub status: String,
    pub event: String,
}

impl WebhookAck {
    pub fn ok(event: impl Into<String>) -> Self {
        Self {
            status: "ok".into(),
            event: event.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_defaults_to_inr() {
        let req: CreateOrderRequest = serde_json::from_str(r#"{"amount": 5000}"#).unwrap();
        assert_eq!(req.currency, "INR");
        assert!(!req.partial_payment);
    }

    #[test]
    fn test_create_order_omits_empty_fields() {
        let json = serde_json::to_value(CreateOrderRequest::new(100, "INR")).unwrap();
        assert_eq!(json, serde_json::json!({"amount": 100, "currency": "INR"}));
    }

    #[test]
    fn test_verification_accepts_checkout_field_names() {
        let json = r#"{
            "razorpay_order_id": "order_1",
            "razorpay_payment_id": "pay_1",
            "razorpay_signature": "abc"
        }"#;
        let v: PaymentVerification = serde_json::from_str(json).unwrap();
        assert_eq!(v.order_id, "order_1");
        assert_eq!(v.payment_id, "pay_1");
        assert_eq!(v.signature, "abc");
    }
}
