//! Webhook verification helper.
//!
//! Convenience wrapper around [`WebhookVerifier`] for handlers that hold the
//! API key but no [`WalletPayClient`](super::WalletPayClient).

use crate::objects::webhook::WebhookEvent;
use crate::signature::{WebhookRequest, WebhookSign, WebhookVerifier};

use super::ClientError;

/// Verify and decode an incoming Wallet Pay webhook.
///
/// * `request` – method, URI path and raw body of the delivery.
/// * `sign` – values of the `WalletPay-Timestamp` and `WalletPay-Signature` headers.
/// * `api_key` – the store API key.
///
/// Returns `Ok(None)` when the signature does not match.
///
/// # Example
///
/// ```ignore
/// use wpay_sdk::client::verify_webhook;
/// use wpay_sdk::signature::{WebhookRequest, WebhookSign};
///
/// let request = WebhookRequest::from_raw("POST", uri_path, body);
/// let sign = WebhookSign::new(timestamp_header, signature_header);
/// if let Some(event) = verify_webhook(&request, &sign, api_key)? {
///     // authenticated
/// }
/// ```
pub fn verify_webhook(
    request: &WebhookRequest,
    sign: &WebhookSign,
    api_key: &str,
) -> Result<Option<WebhookEvent>, ClientError> {
    if !WebhookVerifier::new(api_key).verify(request, sign)? {
        return Ok(None);
    }
    Ok(Some(WebhookVerifier::parse_event(request)?))
}
