//! Webhook event types delivered by Wallet Pay.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{MoneyAmount, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookEventType {
    OrderPaid,
    OrderFailed,
}

/// A single webhook event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(with = "super::timestamp")]
    pub event_date_time: OffsetDateTime,
    /// Idempotency key of the event; repeated deliveries share it.
    pub event_id: i64,
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
    pub payload: WebhookPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    /// Sent with `ORDER_FAILED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub id: i64,
    pub number: String,
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    pub order_amount: MoneyAmount,
    /// JSON-encoded payment option, sent with `ORDER_PAID`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_payment_option: Option<String>,
    #[serde(with = "super::timestamp")]
    pub order_completed_date_time: OffsetDateTime,
}
