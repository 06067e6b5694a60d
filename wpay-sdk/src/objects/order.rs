//! Order creation and preview types.

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use super::{MoneyAmount, OrderStatus};

/// Request payload for `POST /wpay/store-api/v1/order`.
///
/// Field limits enforced by Wallet Pay:
///
/// * `description` – 5 to 100 characters
/// * `return_url`, `fail_return_url`, `custom_data`, `external_id` – at most 255 characters
/// * `timeout_seconds` – 30 to 864000
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub amount: MoneyAmount,
    pub description: Option<String>,
    /// Redirect after the order is paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Redirect after expiration or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_return_url: Option<String>,
    /// Echoed back through webhooks and order polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    /// Order id in the merchant system; deduplicates retried creations.
    pub external_id: String,
    /// Order TTL. Falls back to the client's configured default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
    /// Telegram `user_id` of the paying customer.
    pub customer_telegram_user_id: i64,
}

impl CreateOrderRequest {
    pub fn new(
        amount: MoneyAmount,
        description: impl Into<String>,
        external_id: impl Into<String>,
        customer_telegram_user_id: i64,
    ) -> Self {
        Self {
            amount,
            description: Some(description.into()),
            return_url: None,
            fail_return_url: None,
            custom_data: None,
            external_id: external_id.into(),
            timeout_seconds: None,
            customer_telegram_user_id,
        }
    }

    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    pub fn with_fail_return_url(mut self, url: impl Into<String>) -> Self {
        self.fail_return_url = Some(url.into());
        self
    }

    pub fn with_custom_data(mut self, data: impl Into<String>) -> Self {
        self.custom_data = Some(data.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u32) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// Wallet Pay order id.
///
/// The API sends ids as JSON numbers in some places and strings in others;
/// both are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(s) => OrderId(s),
            Repr::Number(n) => OrderId(n.to_string()),
        })
    }
}

/// Order summary returned by order creation and preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPreview {
    pub id: OrderId,
    pub status: OrderStatus,
    pub number: String,
    pub amount: MoneyAmount,
    #[serde(with = "super::timestamp")]
    pub created_date_time: OffsetDateTime,
    #[serde(with = "super::timestamp")]
    pub expiration_date_time: OffsetDateTime,
    #[serde(default, with = "super::timestamp::option")]
    pub completed_date_time: Option<OffsetDateTime>,
    /// Link to pay the order inside the Wallet bot.
    pub pay_link: String,
    /// Link opening the Wallet mini app directly.
    #[serde(default)]
    pub direct_pay_link: Option<String>,
}
