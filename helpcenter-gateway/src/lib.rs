//! # Help Center Gateway
//!
//! Outbound adapter for the payment provider.
//! This crate provides the REST client that implements the `PaymentGateway` port,
//! the process-wide client slot, and the HMAC signature checks.

pub mod razorpay;
pub mod security;
pub mod slot;

pub use razorpay::{DEFAULT_API_URL, RazorpayClient};
pub use security::{sign_webhook, validate_webhook_signature, verify_payment_signature};
pub use slot::ClientSlot;

use helpcenter_types::Credentials;
use std::sync::Arc;

/// Build the shared payment client for this process.
///
/// Outside production the instance is cached in `slot`, so repeated calls
/// (e.g. from a hot-reloading dev loop) hand back the same client. Once the
/// slot holds a client, later calls ignore their `credentials` and `api_url`
/// and return the cached instance unchanged.
///
/// # Examples
///
/// ```ignore
/// let slot = ClientSlot::new(RuntimeMode::Development);
/// let client = build_client(&slot, &credentials, DEFAULT_API_URL);
/// ```
pub fn build_client(
    slot: &ClientSlot<RazorpayClient>,
    credentials: &Credentials,
    api_url: &str,
) -> Arc<RazorpayClient> {
    slot.get_or_init(|| RazorpayClient::with_base_url(credentials.clone(), api_url))
}
