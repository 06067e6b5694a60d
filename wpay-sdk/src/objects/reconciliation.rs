//! Reconciliation endpoints: order listing and store totals.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::order::OrderId;
use super::{MoneyAmount, OrderStatus};

/// Largest page Wallet Pay serves from the order list.
pub const MAX_ORDER_LIST_COUNT: u32 = 10_000;

/// Query parameters for `GET /wpay/store-api/v1/reconciliation/order-list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListQuery {
    /// Number of leading orders to skip.
    pub offset: u64,
    /// Page size, 0 to [`MAX_ORDER_LIST_COUNT`].
    pub count: u32,
}

impl OrderListQuery {
    pub fn new(offset: u64, count: u32) -> Self {
        Self { offset, count }
    }
}

/// Store orders sorted by creation time, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderList {
    pub items: Vec<OrderReconciliationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReconciliationItem {
    pub id: OrderId,
    pub status: OrderStatus,
    pub amount: MoneyAmount,
    pub external_id: String,
    pub customer_telegram_user_id: i64,
    #[serde(with = "super::timestamp")]
    pub created_date_time: OffsetDateTime,
    #[serde(with = "super::timestamp")]
    pub expiration_date_time: OffsetDateTime,
    #[serde(default, with = "super::timestamp::option")]
    pub payment_date_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub selected_payment_option: Option<PaymentOption>,
}

/// The currency the customer actually paid with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub amount: MoneyAmount,
    pub amount_fee: MoneyAmount,
    pub amount_net: MoneyAmount,
    pub exchange_rate: String,
}

/// Response payload of `GET /wpay/store-api/v1/reconciliation/order-amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAmount {
    pub total_amount: rust_decimal::Decimal,
}
