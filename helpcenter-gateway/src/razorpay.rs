//! REST client for the Razorpay API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use helpcenter_types::{
    CapturePaymentRequest, CreateOrderRequest, Credentials, GatewayError, Order, Payment,
    PaymentGateway, PaymentVerification,
};

use crate::security;

/// Production API root.
pub const DEFAULT_API_URL: &str = "https://api.razorpay.com/v1";

/// Configured payment client.
///
/// Authenticates every request with HTTP Basic auth built from the key pair.
/// Construction never fails, even with empty credentials.
pub struct RazorpayClient {
    base_url: String,
    credentials: Credentials,
    http: reqwest::Client,
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

impl RazorpayClient {
    /// Creates a client against the production API.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_API_URL)
    }

    /// Creates a client against an alternative API root.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let resp = self
            .http
            .get(self.url(path))
            .basic_auth(
                self.credentials.key_id(),
                Some(self.credentials.key_secret()),
            )
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let resp = self
            .http
            .post(self.url(path))
            .basic_auth(
                self.credentials.key_id(),
                Some(self.credentials.key_secret()),
            )
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()));
        }

        let (code, description) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error.code, envelope.error.description),
            Err(_) => (String::new(), body),
        };
        tracing::warn!(status = status.as_u16(), %code, "Provider returned an error");

        Err(GatewayError::Api {
            status: status.as_u16(),
            code,
            description,
        })
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    fn key_id(&self) -> &str {
        self.credentials.key_id()
    }

    #[instrument(skip(self, req), fields(amount = req.amount, currency = %req.currency))]
    async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, GatewayError> {
        self.post("/orders", &req).await
    }

    #[instrument(skip(self))]
    async fn fetch_order(&self, id: &str) -> Result<Order, GatewayError> {
        self.get(&format!("/orders/{}", id)).await
    }

    #[instrument(skip(self))]
    async fn fetch_payment(&self, id: &str) -> Result<Payment, GatewayError> {
        self.get(&format!("/payments/{}", id)).await
    }

    #[instrument(skip(self))]
    async fn capture_payment(
        &self,
        id: &str,
        amount: i64,
        currency: &str,
    ) -> Result<Payment, GatewayError> {
        let body = CapturePaymentRequest {
            amount,
            currency: currency.to_string(),
        };
        self.post(&format!("/payments/{}/capture", id), &body).await
    }

    fn verify_payment_signature(&self, verification: &PaymentVerification) -> bool {
        security::verify_payment_signature(
            &verification.order_id,
            &verification.payment_id,
            &verification.signature,
            self.credentials.key_secret(),
        )
    }
}
