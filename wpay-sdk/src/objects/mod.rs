//! Request and response types of the Wallet Pay store API.

pub mod order;
pub mod reconciliation;
pub mod timestamp;
pub mod webhook;

use serde::{Deserialize, Serialize};

pub use order::{CreateOrderRequest, OrderId, OrderPreview};
pub use reconciliation::{OrderAmount, OrderList, OrderListQuery, OrderReconciliationItem, PaymentOption};
pub use webhook::{WebhookEvent, WebhookEventType, WebhookPayload};

/// Currencies accepted by Wallet Pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Ton,
    Btc,
    Usdt,
    Eur,
    Usd,
    Rub,
}

/// An amount of money in a given currency.
///
/// The amount travels as a decimal string (e.g. `"10.5"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAmount {
    pub currency_code: CurrencyCode,
    pub amount: rust_decimal::Decimal,
}

impl MoneyAmount {
    pub fn new(currency_code: CurrencyCode, amount: rust_decimal::Decimal) -> Self {
        Self {
            currency_code,
            amount,
        }
    }
}

/// Operation result status present on every API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    /// The order with this external id already exists and matches the request.
    Already,
    /// The order with this external id exists but differs from the request.
    Conflict,
    AccessDenied,
    InvalidRequest,
    InternalError,
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseStatus::Success => write!(f, "SUCCESS"),
            ResponseStatus::Already => write!(f, "ALREADY"),
            ResponseStatus::Conflict => write!(f, "CONFLICT"),
            ResponseStatus::AccessDenied => write!(f, "ACCESS_DENIED"),
            ResponseStatus::InvalidRequest => write!(f, "INVALID_REQUEST"),
            ResponseStatus::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Active,
    Expired,
    Paid,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Active => write!(f, "ACTIVE"),
            OrderStatus::Expired => write!(f, "EXPIRED"),
            OrderStatus::Paid => write!(f, "PAID"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Envelope wrapping every store API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    /// Verbose reason of a non-success result.
    pub message: Option<String>,
    /// Payload, present when the status is a success.
    pub data: Option<T>,
}

/// A well-formed response whose status is not a success.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request rejected with status {status}: {message}")]
pub struct ApiRejection {
    pub status: ResponseStatus,
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// `SUCCESS`, or `ALREADY` for an idempotent order re-creation.
    pub fn is_success(&self) -> bool {
        matches!(self.status, ResponseStatus::Success | ResponseStatus::Already)
    }

    /// Unwrap the payload of a successful response.
    pub fn into_data(self) -> Result<T, ApiRejection> {
        match self.data {
            Some(data) if self.is_success() => Ok(data),
            _ => Err(ApiRejection {
                status: self.status,
                message: self.message.unwrap_or_default(),
            }),
        }
    }
}
