//! Payment Application Service
//!
//! Orchestrates checkout and webhook intake through the gateway port.
//! Contains NO infrastructure logic - pure orchestration and validation.

use std::sync::Arc;

use helpcenter_gateway::validate_webhook_signature;
use helpcenter_types::{
    AppError, CheckoutConfigResponse, CreateOrderRequest, EventKind, Order, Payment,
    PaymentGateway, PaymentVerification, VerifyPaymentResponse, WebhookEvent,
};

/// Application service for payment operations.
///
/// Generic over `G: PaymentGateway` - the client is built once at startup and
/// injected here. The webhook secret belongs to this endpoint and is handed
/// to the validator on every call, never stored alongside the client.
pub struct PaymentService<G: PaymentGateway> {
    gateway: Arc<G>,
    webhook_secret: String,
}

impl<G: PaymentGateway> PaymentService<G> {
    /// Creates a new payment service around a shared gateway client.
    pub fn new(gateway: Arc<G>, webhook_secret: impl Into<String>) -> Self {
        Self {
            gateway,
            webhook_secret: webhook_secret.into(),
        }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Public settings for the checkout widget.
    pub fn checkout_config(&self) -> CheckoutConfigResponse {
        CheckoutConfigResponse {
            key_id: self.gateway.key_id().to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Orders & Payments
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a new order.
    pub async fn create_order(&self, mut req: CreateOrderRequest) -> Result<Order, AppError> {
        if req.amount <= 0 {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }

        let currency = req.currency.trim().to_ascii_uppercase();
        if currency.is_empty() {
            return Err(AppError::BadRequest("Currency cannot be empty".into()));
        }
        req.currency = currency;

        let order = self.gateway.create_order(req).await?;
        tracing::info!(order_id = %order.id, amount = order.amount, "Order created");
        Ok(order)
    }

    /// Gets an order by provider ID.
    pub async fn get_order(&self, id: &str) -> Result<Order, AppError> {
        let id = non_empty_id(id, "order")?;
        self.gateway.fetch_order(id).await.map_err(Into::into)
    }

    /// Gets a payment by provider ID.
    pub async fn get_payment(&self, id: &str) -> Result<Payment, AppError> {
        let id = non_empty_id(id, "payment")?;
        self.gateway.fetch_payment(id).await.map_err(Into::into)
    }

    /// Checks the signature returned by the checkout widget.
    pub fn verify_payment(
        &self,
        verification: &PaymentVerification,
    ) -> Result<VerifyPaymentResponse, AppError> {
        if !self.gateway.verify_payment_signature(verification) {
            tracing::warn!(
                order_id = %verification.order_id,
                payment_id = %verification.payment_id,
                "Checkout signature mismatch"
            );
            return Err(AppError::Unauthorized("Invalid payment signature".into()));
        }

        Ok(VerifyPaymentResponse {
            verified: true,
            payment_id: verification.payment_id.clone(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Webhooks
    // ─────────────────────────────────────────────────────────────────────────────

    /// Authenticates and parses an inbound webhook.
    ///
    /// `raw_body` must be the untouched request body; the signature is checked
    /// before the body is parsed.
    pub fn receive_webhook(
        &self,
        raw_body: &str,
        signature: Option<&str>,
    ) -> Result<WebhookEvent, AppError> {
        let signature =
            signature.ok_or_else(|| AppError::BadRequest("Missing webhook signature".into()))?;

        if !validate_webhook_signature(raw_body, signature, &self.webhook_secret) {
            tracing::warn!("Rejected webhook with invalid signature");
            return Err(AppError::Unauthorized("Invalid webhook signature".into()));
        }

        let event: WebhookEvent = serde_json::from_str(raw_body)
            .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {}", e)))?;

        tracing::debug!(
            event = %event.event,
            created_at = ?event.created_at_utc(),
            "Webhook signature verified"
        );

        match event.kind() {
            EventKind::PaymentCaptured | EventKind::OrderPaid => tracing::info!(
                event = %event.event,
                payment_id = event.payment_id().unwrap_or("-"),
                order_id = event.order_id().unwrap_or("-"),
                "Payment completed"
            ),
            EventKind::PaymentFailed => tracing::warn!(
                payment_id = event.payment_id().unwrap_or("-"),
                "Payment failed"
            ),
            EventKind::Other(name) => tracing::debug!(event = %name, "Unhandled webhook event"),
            kind => tracing::info!(event = %kind, "Webhook received"),
        }

        Ok(event)
    }
}

fn non_empty_id<'a>(id: &'a str, what: &str) -> Result<&'a str, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest(format!("Missing {} id", what)));
    }
    Ok(id)
}
