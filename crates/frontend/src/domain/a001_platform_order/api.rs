//! Клиент сервиса заказов.
//!
//! `OrdersApi` is the seam the store and the controllers are built on; the
//! dashboard injects `HttpOrdersApi`, tests inject a fake.

use crate::shared::api_utils::join_url;
use async_trait::async_trait;
use contracts::domain::a001_platform_order::aggregate::Order;
use contracts::domain::a001_platform_order::dto::{OrderListPayload, OrderPage};
use contracts::shared::pagination::PageRequest;
use contracts::usecases::u501_sync_orders::SyncResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Ошибки обращения к сервису заказов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера (нет ответа)
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to {action}: {status} {status_text}")]
    HttpStatus {
        action: String,
        status: u16,
        status_text: String,
    },

    /// Тело ответа не удалось разобрать ни в одну из известных форм
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait OrdersApi {
    /// `GET /orders?limit={n}&page={p}`
    async fn fetch_orders(&self, request: PageRequest) -> Result<OrderPage, ApiError>;

    /// `GET /orders/{order_id}`
    async fn fetch_order(&self, order_id: &str) -> Result<Order, ApiError>;

    /// `POST /orders/sync`
    async fn sync_orders(&self) -> Result<SyncResponse, ApiError>;
}

/// `OrdersApi` over HTTP/JSON using the browser fetch API.
#[derive(Debug, Clone)]
pub struct HttpOrdersApi {
    base_url: String,
}

impl HttpOrdersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl OrdersApi for HttpOrdersApi {
    async fn fetch_orders(&self, request: PageRequest) -> Result<OrderPage, ApiError> {
        let url = self.url(&format!("orders?{}", request.query_string()));
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let payload: OrderListPayload = read_json(response, "fetch orders").await?;
        Ok(payload.into_page())
    }

    async fn fetch_order(&self, order_id: &str) -> Result<Order, ApiError> {
        let url = self.url(&format!("orders/{}", urlencoding::encode(order_id)));
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, &format!("fetch order {}", order_id)).await
    }

    async fn sync_orders(&self) -> Result<SyncResponse, ApiError> {
        let response = Request::post(&self.url("orders/sync"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, "sync orders").await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, action: &str) -> Result<T, ApiError> {
    check_status(response.status(), response.status_text(), action)?;

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    decode_body(&text)
}

/// Non-2xx → `HttpStatus` carrying the code and reason text
fn check_status(status: u16, status_text: String, action: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        action: action.to_string(),
        status,
        status_text,
    })
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
