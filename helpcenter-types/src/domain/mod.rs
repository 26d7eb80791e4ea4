//! Domain types for the payment adapter.

mod credentials;
mod order;
mod payment;
mod webhook;

pub use credentials::{Credentials, RuntimeMode};
pub use order::{Order, OrderStatus};
pub use payment::{Payment, PaymentStatus};
pub use webhook::{EventKind, WebhookEvent};

/// Converts a provider unix timestamp (seconds) into a UTC datetime.
pub(crate) fn unix_to_utc(secs: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(secs, 0)
}
