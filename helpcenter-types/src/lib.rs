//! # Help Center Types
//!
//! Domain types and port traits for the help center and its payment adapter.
//! This crate has ZERO external IO dependencies - only data structures,
//! configuration values, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Credentials, runtime mode, orders, payments, webhook events
//! - `ports/` - The `PaymentGateway` trait that outbound adapters implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Gateway, configuration and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Credentials, EventKind, Order, OrderStatus, Payment, PaymentStatus, RuntimeMode, WebhookEvent,
};
pub use dto::*;
pub use error::{AppError, ConfigError, GatewayError};
pub use ports::PaymentGateway;
