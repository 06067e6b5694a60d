//! Webhook signature verification for Wallet Pay deliveries.
//!
//! Wallet Pay signs every webhook call with HMAC-SHA256 keyed by the store
//! API key. The signed message is built from four dot-separated fields:
//!
//! ```text
//! {HTTP method}.{URI path}.{timestamp}.{base64(json_body)}
//! ```
//!
//! The timestamp travels in the `WalletPay-Timestamp` header and the
//! base64-encoded digest in `WalletPay-Signature`.

use serde::Serialize;

use crate::objects::webhook::WebhookEvent;

/// Header carrying the nanosecond timestamp used in the signed message.
pub const WEBHOOK_TIMESTAMP_HEADER: &str = "WalletPay-Timestamp";

/// Header carrying `Base64(HmacSHA256(message))`.
pub const WEBHOOK_SIGNATURE_HEADER: &str = "WalletPay-Signature";

/// Errors produced by signature operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// No API key was configured, so there is nothing to key the HMAC with.
    #[error("api key is not defined")]
    MissingSecret,
}

/// An inbound webhook delivery as seen by the merchant endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    pub method: String,
    pub uri_path: String,
    pub body_json: String,
}

impl WebhookRequest {
    /// Build a request from the body exactly as it arrived on the wire.
    ///
    /// Prefer this constructor: the signature covers the provider's own
    /// serialization, so keeping the raw bytes avoids any key-ordering or
    /// number-formatting drift.
    pub fn from_raw(
        method: impl Into<String>,
        uri_path: impl Into<String>,
        raw_body: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            uri_path: uri_path.into(),
            body_json: raw_body.into(),
        }
    }

    /// Build a request by re-serializing an already parsed body.
    ///
    /// The body is written as compact JSON. Maps keep insertion order, so a
    /// `serde_json::Value` parsed from the delivery reproduces the original
    /// text. A typed struct reproduces the wire bytes only if its field order
    /// and value formatting match Wallet Pay's; [`WebhookEvent`] does (dates as
    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`, absent optional fields omitted). Numbers
    /// that Wallet Pay writes differently from `serde_json`, or keys the
    /// struct does not model, will still break the signature, so
    /// [`from_raw`](Self::from_raw) remains the safe choice.
    pub fn from_body<T: Serialize>(
        method: impl Into<String>,
        uri_path: impl Into<String>,
        body: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method: method.into(),
            uri_path: uri_path.into(),
            body_json: serde_json::to_string(body)?,
        })
    }
}

/// The two header-derived values accompanying a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSign {
    pub timestamp: String,
    pub signature: String,
}

impl WebhookSign {
    pub fn new(timestamp: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            signature: signature.into(),
        }
    }
}

/// Build the canonical message `{method}.{uri_path}.{timestamp}.{base64(body)}`.
pub fn canonical_message(request: &WebhookRequest, timestamp: &str) -> String {
    format!(
        "{}.{}.{}.{}",
        request.method,
        request.uri_path,
        timestamp,
        fast32::base64::RFC4648.encode(request.body_json.as_bytes())
    )
}

/// Verifies webhook deliveries against the store API key.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Box<[u8]>,
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl WebhookVerifier {
    /// Create a verifier keyed by the store API key.
    ///
    /// An empty key is accepted here and reported by every operation as
    /// [`SignatureError::MissingSecret`].
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().into(),
        }
    }

    fn key(&self) -> Result<ring::hmac::Key, SignatureError> {
        if self.secret.is_empty() {
            return Err(SignatureError::MissingSecret);
        }
        Ok(ring::hmac::Key::new(ring::hmac::HMAC_SHA256, &self.secret))
    }

    /// Compute the base64 signature Wallet Pay would send for `request`.
    pub fn compute_signature(
        &self,
        request: &WebhookRequest,
        timestamp: &str,
    ) -> Result<String, SignatureError> {
        let key = self.key()?;
        let message = canonical_message(request, timestamp);
        let tag = ring::hmac::sign(&key, message.as_bytes());
        Ok(fast32::base64::RFC4648.encode(tag.as_ref()))
    }

    /// Check a delivery's signature.
    ///
    /// Returns `Ok(true)` only when `sign.signature` is exactly the base64
    /// digest of the canonical message. Malformed signatures are a plain
    /// `Ok(false)`; only a missing key is an error.
    pub fn verify(
        &self,
        request: &WebhookRequest,
        sign: &WebhookSign,
    ) -> Result<bool, SignatureError> {
        let key = self.key()?;

        let Ok(tag) = fast32::base64::RFC4648.decode_str(&sign.signature) else {
            return Ok(false);
        };
        // Only the canonical padded encoding of a tag may match.
        if fast32::base64::RFC4648.encode(&tag) != sign.signature {
            return Ok(false);
        }

        let message = canonical_message(request, &sign.timestamp);
        Ok(ring::hmac::verify(&key, message.as_bytes(), &tag).is_ok())
    }

    /// Decode the body of a delivery into a typed event.
    ///
    /// Call this after [`verify`](Self::verify) has returned `true`.
    pub fn parse_event(request: &WebhookRequest) -> Result<WebhookEvent, serde_json::Error> {
        serde_json::from_str(&request.body_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::OrderStatus;
    use crate::objects::webhook::WebhookEventType;

    const FIXTURE_BODY: &str = r#"{"eventDateTime":"2023-08-19T11:54:53.000Z","eventId":1123123,"type":"ORDER_PAID","payload":{"status":"EXPIRED","id":112342322,"number":"123324","externalId":"51679b31-49a5-40a9-bc1a-4e6a8d6674b3","customData":"","orderAmount":{"currencyCode":"USD","amount":"123.78"},"orderCompletedDateTime":"2023-08-19T11:54:53.000Z"}}"#;
    const FIXTURE_URI: &str = "https://example.com/api/wallet-pay/webhook";
    const FIXTURE_TIMESTAMP: &str = "168824905680291";
    const FIXTURE_SIGNATURE: &str = "oOgfOumUekI9EST5H7KaaKEMgTWXb08VqI5K3NCros8=";

    fn fixture_request() -> WebhookRequest {
        WebhookRequest::from_raw("POST", FIXTURE_URI, FIXTURE_BODY)
    }

    fn verifier() -> WebhookVerifier {
        WebhookVerifier::new("TEST_KEY")
    }

    #[test]
    fn test_reference_signature() {
        let computed = verifier()
            .compute_signature(&fixture_request(), FIXTURE_TIMESTAMP)
            .unwrap();
        assert_eq!(computed, FIXTURE_SIGNATURE);

        let sign = WebhookSign::new(FIXTURE_TIMESTAMP, FIXTURE_SIGNATURE);
        assert!(verifier().verify(&fixture_request(), &sign).unwrap());
    }

    #[test]
    fn test_path_only_uri() {
        let request = WebhookRequest::from_raw("POST", "/api/wallet-pay/webhook", FIXTURE_BODY);
        let computed = verifier()
            .compute_signature(&request, FIXTURE_TIMESTAMP)
            .unwrap();
        assert_eq!(computed, "yXUuCHHp3sdMwmM82fH+IPfQAKHJnEUTK34b4tYr0W4=");
    }

    #[test]
    fn test_invalid_signature() {
        let sign = WebhookSign::new(FIXTURE_TIMESTAMP, "notValidSingHash");
        assert!(!verifier().verify(&fixture_request(), &sign).unwrap());
    }

    #[test]
    fn test_not_base64_signature() {
        for bad in ["", "%%%%", "oOgfOumUekI9EST5H7KaaKEMgTWXb08VqI5K3NCros8"] {
            let sign = WebhookSign::new(FIXTURE_TIMESTAMP, bad);
            assert!(!verifier().verify(&fixture_request(), &sign).unwrap());
        }
    }

    #[test]
    fn test_single_character_mutation() {
        let request = fixture_request();
        for (i, c) in FIXTURE_SIGNATURE.char_indices() {
            let replacement = if c == 'A' { 'B' } else { 'A' };
            let mut mutated = FIXTURE_SIGNATURE.to_string();
            mutated.replace_range(i..i + c.len_utf8(), &replacement.to_string());
            let sign = WebhookSign::new(FIXTURE_TIMESTAMP, mutated);
            assert!(
                !verifier().verify(&request, &sign).unwrap(),
                "mutation at {i} verified"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let a = verifier().compute_signature(&fixture_request(), FIXTURE_TIMESTAMP);
        let b = verifier().compute_signature(&fixture_request(), FIXTURE_TIMESTAMP);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_field_changes_digest() {
        let base = verifier()
            .compute_signature(&fixture_request(), FIXTURE_TIMESTAMP)
            .unwrap();

        let variants = [
            (
                WebhookRequest::from_raw("GET", FIXTURE_URI, FIXTURE_BODY),
                FIXTURE_TIMESTAMP,
                verifier(),
            ),
            (
                WebhookRequest::from_raw("POST", "https://example.com/api/other", FIXTURE_BODY),
                FIXTURE_TIMESTAMP,
                verifier(),
            ),
            (fixture_request(), "168824905680292", verifier()),
            (
                WebhookRequest::from_raw("POST", FIXTURE_URI, FIXTURE_BODY.replace("123.78", "123.79")),
                FIXTURE_TIMESTAMP,
                verifier(),
            ),
            (
                fixture_request(),
                FIXTURE_TIMESTAMP,
                WebhookVerifier::new("OTHER_KEY"),
            ),
        ];

        for (request, timestamp, verifier) in variants {
            let digest = verifier.compute_signature(&request, timestamp).unwrap();
            assert_ne!(digest, base);
        }
    }

    #[test]
    fn test_missing_secret() {
        let verifier = WebhookVerifier::new("");
        let sign = WebhookSign::new(FIXTURE_TIMESTAMP, FIXTURE_SIGNATURE);
        assert_eq!(
            verifier.verify(&fixture_request(), &sign),
            Err(SignatureError::MissingSecret)
        );
        assert_eq!(
            verifier.compute_signature(&fixture_request(), FIXTURE_TIMESTAMP),
            Err(SignatureError::MissingSecret)
        );
    }

    #[test]
    fn test_reserialized_body_keeps_key_order() {
        let value: serde_json::Value = serde_json::from_str(FIXTURE_BODY).unwrap();
        let request = WebhookRequest::from_body("POST", FIXTURE_URI, &value).unwrap();
        assert_eq!(request.body_json, FIXTURE_BODY);

        let sign = WebhookSign::new(FIXTURE_TIMESTAMP, FIXTURE_SIGNATURE);
        assert!(verifier().verify(&request, &sign).unwrap());
    }

    #[test]
    fn test_typed_event_reserializes_to_signed_body() {
        let event = WebhookVerifier::parse_event(&fixture_request()).unwrap();
        let request = WebhookRequest::from_body("POST", FIXTURE_URI, &event).unwrap();
        assert_eq!(request.body_json, FIXTURE_BODY);

        let sign = WebhookSign::new(FIXTURE_TIMESTAMP, FIXTURE_SIGNATURE);
        assert!(verifier().verify(&request, &sign).unwrap());
    }

    #[test]
    fn test_absent_custom_data_is_omitted() {
        let body = FIXTURE_BODY.replace(r#""customData":"","#, "");
        let request = WebhookRequest::from_raw("POST", FIXTURE_URI, body.clone());
        let event = WebhookVerifier::parse_event(&request).unwrap();
        assert_eq!(event.payload.custom_data, None);

        let reserialized = WebhookRequest::from_body("POST", FIXTURE_URI, &event).unwrap();
        assert_eq!(reserialized.body_json, body);
    }

    #[test]
    fn test_parse_event() {
        let event = WebhookVerifier::parse_event(&fixture_request()).unwrap();
        assert_eq!(event.event_id, 1123123);
        assert_eq!(event.event_type, WebhookEventType::OrderPaid);
        assert_eq!(event.payload.status, Some(OrderStatus::Expired));
        assert_eq!(
            event.payload.external_id,
            "51679b31-49a5-40a9-bc1a-4e6a8d6674b3"
        );
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", verifier());
        assert!(!rendered.contains("TEST_KEY"));
    }
}
