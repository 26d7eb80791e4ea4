//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};

use helpcenter_types::{
    AppError, CreateOrderRequest, PaymentGateway, PaymentVerification, WebhookAck,
};

use super::layout::PageShell;
use crate::PaymentService;

/// Header carrying the provider's webhook signature.
pub const SIGNATURE_HEADER: &str = "x-razorpay-signature";

const HELP_CENTER_CONTENT: &str = r#"<main class="mx-auto w-full max-w-3xl flex-1 px-6 py-12">
<h1 class="text-3xl font-semibold">Help Center</h1>
<p class="mt-4">Answers to common questions about orders, payments and refunds.</p>
<section class="mt-8">
<h2 class="text-xl font-medium">Payments</h2>
<p>Payments are confirmed once the provider notifies us that they were captured.</p>
</section>
<section class="mt-8">
<h2 class="text-xl font-medium">Refunds</h2>
<p>Refunds are returned to the original payment method.</p>
</section>
</main>"#;

/// Application state shared across handlers.
pub struct AppState<G: PaymentGateway> {
    pub service: PaymentService<G>,
    pub shell: PageShell,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Help center page, rendered inside the page shell.
pub async fn help_center<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
) -> impl IntoResponse {
    Html(state.shell.render_document("Help Center", HELP_CENTER_CONTENT))
}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout
// ─────────────────────────────────────────────────────────────────────────────

/// Public checkout configuration.
pub async fn checkout_config<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
) -> impl IntoResponse {
    Json(state.service.checkout_config())
}

/// Create an order.
#[tracing::instrument(skip(state), fields(amount = req.amount))]
pub async fn create_order<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.service.create_order(req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Get order by ID.
#[tracing::instrument(skip(state), fields(order_id = %id))]
pub async fn get_order<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.service.get_order(&id).await?;
    Ok(Json(order))
}

/// Get payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.get_payment(&id).await?;
    Ok(Json(payment))
}

/// Verify the signature returned by the checkout widget.
#[tracing::instrument(skip(state, req), fields(order_id = %req.order_id, payment_id = %req.payment_id))]
pub async fn verify_payment<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    Json(req): Json<PaymentVerification>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.service.verify_payment(&req)?;
    Ok(Json(response))
}

// ─────────────────────────────────────────────────────────────────────────────
// Webhooks
// ─────────────────────────────────────────────────────────────────────────────

/// Receive a provider webhook.
///
/// The body is taken as a raw `String` so the signature is checked over the
/// exact bytes that were sent.
#[tracing::instrument(skip_all)]
pub async fn receive_webhook<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let signature = match headers.get(SIGNATURE_HEADER) {
        Some(value) => Some(value.to_str().map_err(|_| {
            AppError::BadRequest("Malformed webhook signature header".into())
        })?),
        None => None,
    };

    let event = state.service.receive_webhook(&body, signature)?;
    Ok(Json(WebhookAck::ok(event.event)))
}
