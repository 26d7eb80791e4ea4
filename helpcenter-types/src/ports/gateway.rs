//! Payment gateway port trait.
//!
//! This is the primary outbound port in our hexagonal architecture.
//! The provider REST client implements it; tests substitute an in-memory double.

use crate::domain::{Order, Payment};
use crate::dto::{CreateOrderRequest, PaymentVerification};
use crate::error::GatewayError;

/// Capabilities of a configured payment client.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Public key id the checkout widget is initialised with.
    fn key_id(&self) -> &str;

    // ─────────────────────────────────────────────────────────────────────────────
    // Orders
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates an order that a checkout can later pay.
    async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, GatewayError>;

    /// Fetches an order by its provider id.
    async fn fetch_order(&self, id: &str) -> Result<Order, GatewayError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────────

    /// Fetches a payment by its provider id.
    async fn fetch_payment(&self, id: &str) -> Result<Payment, GatewayError>;

    /// Captures an authorized payment.
    async fn capture_payment(
        &self,
        id: &str,
        amount: i64,
        currency: &str,
    ) -> Result<Payment, GatewayError>;

    /// Checks the signature the checkout returned for an order/payment pair.
    ///
    /// Pure check against the key secret; performs no I/O.
    fn verify_payment_signature(&self, verification: &PaymentVerification) -> bool;
}
