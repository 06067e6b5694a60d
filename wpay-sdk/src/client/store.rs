//! Store API client (merchant backend → Wallet Pay).
//!
//! Every request carries the store API key in the `Wpay-Store-Api-Key`
//! header. Webhooks coming back from Wallet Pay are verified with the same
//! key.

use std::fmt::Display;

use reqwest::{Client, Method, RequestBuilder};

use super::{ClientError, parse_response};
use crate::config::ClientConfig;
use crate::objects::{
    ApiResponse, CreateOrderRequest, OrderAmount, OrderList, OrderListQuery, OrderPreview,
};
use crate::signature::{SignatureError, WebhookRequest, WebhookSign, WebhookVerifier};

/// Header carrying the store API key.
pub const API_KEY_HEADER: &str = "Wpay-Store-Api-Key";

const CREATE_ORDER_PATH: &str = "/wpay/store-api/v1/order";
const ORDER_PREVIEW_PATH: &str = "/wpay/store-api/v1/order/preview";
const ORDER_LIST_PATH: &str = "/wpay/store-api/v1/reconciliation/order-list";
const ORDER_AMOUNT_PATH: &str = "/wpay/store-api/v1/reconciliation/order-amount";

/// Typed HTTP client for the Wallet Pay **store API**.
///
/// The client holds no mutable state, so clones may be used from many tasks
/// at once. Each call issues exactly one request.
#[derive(Debug, Clone)]
pub struct WalletPayClient {
    http: Client,
    config: ClientConfig,
    verifier: WebhookVerifier,
}

impl WalletPayClient {
    /// Create a new `WalletPayClient`.
    ///
    /// An empty API key is not rejected here; every operation reports it as
    /// [`ClientError::MissingApiKey`] instead.
    pub fn new(config: ClientConfig) -> Self {
        let verifier = WebhookVerifier::new(&config.api_key);
        Self {
            http: Client::new(),
            config,
            verifier,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy or a local timeout).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /wpay/store-api/v1/order` – create an order.
    ///
    /// `timeout_seconds` falls back to the configured default when unset.
    pub async fn create_order(
        &self,
        mut payload: CreateOrderRequest,
    ) -> Result<ApiResponse<OrderPreview>, ClientError> {
        let request = self.request(Method::POST, CREATE_ORDER_PATH)?;

        if payload.timeout_seconds.is_none() {
            payload.timeout_seconds = self.config.default_timeout_seconds;
        }
        let body = serde_json::to_string(&payload)?;

        let resp = request.body(body).send().await?;
        parse_response(resp).await
    }

    /// `GET /wpay/store-api/v1/order/preview?id={order_id}` – fetch an order.
    pub async fn get_order_preview(
        &self,
        order_id: impl Display,
    ) -> Result<ApiResponse<OrderPreview>, ClientError> {
        let resp = self
            .request(Method::GET, ORDER_PREVIEW_PATH)?
            .query(&[("id", order_id.to_string())])
            .send()
            .await?;

        parse_response(resp).await
    }

    /// `GET /wpay/store-api/v1/reconciliation/order-list` – list store orders
    /// sorted by creation time, ascending.
    pub async fn get_order_list(
        &self,
        query: &OrderListQuery,
    ) -> Result<ApiResponse<OrderList>, ClientError> {
        let resp = self
            .request(Method::GET, ORDER_LIST_PATH)?
            .query(query)
            .send()
            .await?;

        parse_response(resp).await
    }

    /// `GET /wpay/store-api/v1/reconciliation/order-amount` – total amount of
    /// store orders.
    pub async fn get_order_amount(&self) -> Result<ApiResponse<OrderAmount>, ClientError> {
        let resp = self
            .request(Method::GET, ORDER_AMOUNT_PATH)?
            .send()
            .await?;

        parse_response(resp).await
    }

    /// Verifier keyed by this client's API key.
    pub fn webhook_verifier(&self) -> &WebhookVerifier {
        &self.verifier
    }

    /// Check the signature of an inbound webhook delivery.
    pub fn verify_webhook(
        &self,
        request: &WebhookRequest,
        sign: &WebhookSign,
    ) -> Result<bool, SignatureError> {
        self.verifier.verify(request, sign)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        if !self.config.has_api_key() {
            return Err(ClientError::MissingApiKey);
        }
        let url = self.config.base_url.join(path)?;

        tracing::debug!(method = %method, endpoint = path, "Sending Wallet Pay request");

        Ok(self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json"))
    }
}
