//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use helpcenter_gateway::{sign_webhook, verify_payment_signature};
    use helpcenter_types::{
        AppError, CreateOrderRequest, EventKind, GatewayError, Order, OrderStatus, Payment,
        PaymentGateway, PaymentStatus, PaymentVerification,
    };

    use crate::PaymentService;

    pub const KEY_SECRET: &str = "mock_key_secret";
    pub const WEBHOOK_SECRET: &str = "whsec_test";

    /// Simple in-memory gateway for testing the service layer.
    pub struct MockGateway {
        orders: Mutex<HashMap<String, Order>>,
        created: Mutex<Vec<CreateOrderRequest>>,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self {
                orders: Mutex::new(HashMap::new()),
                created: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        fn key_id(&self) -> &str {
            "rzp_test_mock"
        }

        async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, GatewayError> {
            let mut orders = self.orders.lock().unwrap();
            let order = Order {
                id: format!("order_{}", orders.len() + 1),
                entity: "order".into(),
                amount: req.amount,
                amount_paid: 0,
                amount_due: req.amount,
                currency: req.currency.clone(),
                receipt: req.receipt.clone(),
                status: OrderStatus::Created,
                attempts: 0,
                notes: serde_json::Value::Array(vec![]),
                created_at: 1_700_000_000,
            };
            orders.insert(order.id.clone(), order.clone());
            self.created.lock().unwrap().push(req);
            Ok(order)
        }

        async fn fetch_order(&self, id: &str) -> Result<Order, GatewayError> {
            self.orders
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| GatewayError::Api {
                    status: 404,
                    code: "NOT_FOUND".into(),
                    description: format!("order {} not found", id),
                })
        }

        async fn fetch_payment(&self, id: &str) -> Result<Payment, GatewayError> {
            if id != "pay_1" {
                return Err(GatewayError::Api {
                    status: 400,
                    code: "BAD_REQUEST_ERROR".into(),
                    description: "The id provided does not exist".into(),
                });
            }
            Ok(Payment {
                id: id.into(),
                entity: "payment".into(),
                amount: 5000,
                currency: "INR".into(),
                status: PaymentStatus::Captured,
                order_id: Some("order_1".into()),
                method: Some("upi".into()),
                captured: true,
                email: None,
                contact: None,
                description: None,
                created_at: 1_700_000_100,
            })
        }

        async fn capture_payment(
            &self,
            _id: &str,
            _amount: i64,
            _currency: &str,
        ) -> Result<Payment, GatewayError> {
            Err(GatewayError::Http("capture not supported by mock".into()))
        }

        fn verify_payment_signature(&self, v: &PaymentVerification) -> bool {
            verify_payment_signature(&v.order_id, &v.payment_id, &v.signature, KEY_SECRET)
        }
    }

    fn service() -> PaymentService<MockGateway> {
        PaymentService::new(Arc::new(MockGateway::new()), WEBHOOK_SECRET)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Orders
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_order_normalizes_currency() {
        let service = service();
        let order = service
            .create_order(CreateOrderRequest::new(5000, " inr "))
            .await
            .unwrap();

        assert_eq!(order.currency, "INR");
        assert_eq!(service.gateway().created.lock().unwrap()[0].currency, "INR");
    }

    #[tokio::test]
    async fn test_create_order_rejects_non_positive_amount() {
        let service = service();
        for amount in [0, -100] {
            let result = service
                .create_order(CreateOrderRequest::new(amount, "INR"))
                .await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }
        assert!(service.gateway().created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_order_rejects_blank_currency() {
        let result = service()
            .create_order(CreateOrderRequest::new(100, "  "))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_get_order_round_trip_and_not_found() {
        let service = service();
        let created = service
            .create_order(CreateOrderRequest::new(100, "INR"))
            .await
            .unwrap();

        let fetched = service.get_order(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        let missing = service.get_order("order_999").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let blank = service.get_order(" ").await;
        assert!(matches!(blank, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_get_payment_maps_provider_errors() {
        let service = service();
        assert!(service.get_payment("pay_1").await.unwrap().captured);
        assert!(matches!(
            service.get_payment("pay_unknown").await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_checkout_config_exposes_only_key_id() {
        let config = service().checkout_config();
        assert_eq!(config.key_id, "rzp_test_mock");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checkout Verification
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_verify_payment() {
        let service = service();
        let good = PaymentVerification {
            order_id: "order_1".into(),
            payment_id: "pay_1".into(),
            signature: sign_webhook(b"order_1|pay_1", KEY_SECRET),
        };

        let response = service.verify_payment(&good).unwrap();
        assert!(response.verified);
        assert_eq!(response.payment_id, "pay_1");

        let bad = PaymentVerification {
            payment_id: "pay_2".into(),
            ..good
        };
        assert!(matches!(
            service.verify_payment(&bad),
            Err(AppError::Unauthorized(_))
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Webhooks
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_receive_webhook_accepts_signed_body() {
        let body = r#"{"event":"payment.captured"}"#;
        let signature = sign_webhook(body.as_bytes(), WEBHOOK_SECRET);

        let event = service().receive_webhook(body, Some(&signature)).unwrap();
        assert_eq!(event.kind(), EventKind::PaymentCaptured);
    }

    #[test]
    fn test_receive_webhook_requires_signature() {
        let result = service().receive_webhook(r#"{"event":"payment.captured"}"#, None);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_receive_webhook_rejects_forged_signature() {
        let body = r#"{"event":"payment.captured"}"#;
        let zeros = "0".repeat(64);

        let result = service().receive_webhook(body, Some(&zeros));
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_receive_webhook_checks_signature_before_parsing() {
        let garbage = "not json at all";

        let unsigned = service().receive_webhook(garbage, Some("deadbeef"));
        assert!(matches!(unsigned, Err(AppError::Unauthorized(_))));

        let signature = sign_webhook(garbage.as_bytes(), WEBHOOK_SECRET);
        let signed = service().receive_webhook(garbage, Some(&signature));
        assert!(matches!(signed, Err(AppError::BadRequest(_))));
    }
}
