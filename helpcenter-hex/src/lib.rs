//! # Help Center Hex
//!
//! Application service layer and HTTP adapter for the help center.
//!
//! ## Architecture
//!
//! - `service/` - Application service (checkout and webhook intake)
//! - `inbound/` - HTTP adapter (Axum server) and the page shell
//!
//! The service is generic over `G: PaymentGateway`, allowing
//! different gateway implementations to be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PaymentService;
