//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use helpcenter_types::PaymentGateway;

use super::handlers::{self, AppState};
use super::layout::PageShell;
use crate::PaymentService;

/// HTTP Server for the help center and its payment endpoints.
pub struct HttpServer<G: PaymentGateway> {
    state: Arc<AppState<G>>,
}

impl<G: PaymentGateway> HttpServer<G> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PaymentService<G>) -> Self {
        Self {
            state: Arc::new(AppState {
                service,
                shell: PageShell,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/help-center", get(handlers::help_center::<G>))
            .route("/api/payments/config", get(handlers::checkout_config::<G>))
            .route("/api/payments/orders", post(handlers::create_order::<G>))
            .route("/api/payments/orders/{id}", get(handlers::get_order::<G>))
            .route("/api/payments/verify", post(handlers::verify_payment::<G>))
            .route("/api/payments/webhook", post(handlers::receive_webhook::<G>))
            .route("/api/payments/{id}", get(handlers::get_payment::<G>))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
