//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer,
//! plus the page shell used by the help center route.

mod handlers;
pub mod layout;
mod server;

pub use handlers::SIGNATURE_HEADER;
pub use layout::PageShell;
pub use server::HttpServer;
