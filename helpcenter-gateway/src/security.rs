//! Signature utilities for provider webhooks and checkout callbacks.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

fn hmac_hex(message: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

fn matches(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// Signs a webhook payload using HMAC-SHA256, hex-encoded (lowercase).
pub fn sign_webhook(payload: &[u8], secret: &str) -> String {
    hmac_hex(payload, secret)
}

/// Validates the signature header of an inbound webhook.
///
/// `raw_body` must be the request body exactly as received, before any JSON
/// parsing: the digest is computed over its bytes, so whitespace and key order
/// matter. Returns `false` on any mismatch, never an error.
pub fn validate_webhook_signature(raw_body: &str, signature: &str, secret: &str) -> bool {
    let expected = sign_webhook(raw_body.as_bytes(), secret);
    matches(&expected, signature)
}

/// Verifies the signature the checkout returns for an order/payment pair.
///
/// The provider signs `"{order_id}|{payment_id}"` with the API key secret.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    key_secret: &str,
) -> bool {
    let message = format!("{}|{}", order_id, payment_id);
    let expected = hmac_hex(message.as_bytes(), key_secret);
    matches(&expected, signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"event":"payment.captured"}"#;
    const SECRET: &str = "whsec_test";

    #[test]
    fn test_valid_signature_is_accepted() {
        let signature = sign_webhook(BODY.as_bytes(), SECRET);

        assert_eq!(signature.len(), 64);
        assert!(validate_webhook_signature(BODY, &signature, SECRET));
    }

    #[test]
    fn test_known_hmac_vector() {
        let signature = sign_webhook(b"The quick brown fox jumps over the lazy dog", "key");
        assert_eq!(
            signature,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_all_zero_signature_is_rejected() {
        let zeros = "0".repeat(64);
        assert!(!validate_webhook_signature(BODY, &zeros, SECRET));
    }

    #[test]
    fn test_single_byte_signature_mutation_is_rejected() {
        let signature = sign_webhook(BODY.as_bytes(), SECRET);

        for i in 0..signature.len() {
            let mut bytes = signature.clone().into_bytes();
            bytes[i] = if bytes[i] == b'a' { b'b' } else { b'a' };
            let mutated = String::from_utf8(bytes).unwrap();
            assert!(
                !validate_webhook_signature(BODY, &mutated, SECRET),
                "mutation at byte {} was accepted",
                i
            );
        }
    }

    #[test]
    fn test_body_mutation_is_rejected() {
        let body = r#"{"event":"payment.captured","id":"evt_1"}"#;
        let signature = sign_webhook(body.as_bytes(), SECRET);

        let reordered = r#"{"id":"evt_1","event":"payment.captured"}"#;
        let spaced = r#"{"event": "payment.captured","id":"evt_1"}"#;
        let trailing_newline = format!("{}\n", body);

        assert!(validate_webhook_signature(body, &signature, SECRET));
        assert!(!validate_webhook_signature(reordered, &signature, SECRET));
        assert!(!validate_webhook_signature(spaced, &signature, SECRET));
        assert!(!validate_webhook_signature(&trailing_newline, &signature, SECRET));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let signature = sign_webhook(BODY.as_bytes(), SECRET);
        assert!(!validate_webhook_signature(BODY, &signature, "whsec_other"));
    }

    #[test]
    fn test_comparison_is_exact() {
        let signature = sign_webhook(BODY.as_bytes(), SECRET);

        assert!(!validate_webhook_signature(BODY, &signature.to_uppercase(), SECRET));
        assert!(!validate_webhook_signature(BODY, &signature[..63], SECRET));
        assert!(!validate_webhook_signature(BODY, "", SECRET));
    }

    #[test]
    fn test_empty_secret_still_signs() {
        let signature = sign_webhook(BODY.as_bytes(), "");
        assert!(validate_webhook_signature(BODY, &signature, ""));
        assert!(!validate_webhook_signature(BODY, &signature, SECRET));
    }

    #[test]
    fn test_payment_signature_verification() {
        let key_secret = "key_secret_123";
        let signature = sign_webhook(b"order_9A33XWu170gUtm|pay_29QQoUBi66xm2f", key_secret);

        assert!(verify_payment_signature(
            "order_9A33XWu170gUtm",
            "pay_29QQoUBi66xm2f",
            &signature,
            key_secret
        ));
        assert!(!verify_payment_signature(
            "pay_29QQoUBi66xm2f",
            "order_9A33XWu170gUtm",
            &signature,
            key_secret
        ));
        assert!(!verify_payment_signature(
            "order_9A33XWu170gUtm",
            "pay_29QQoUBi66xm2f",
            &signature,
            "wrong_secret"
        ));
    }
}
