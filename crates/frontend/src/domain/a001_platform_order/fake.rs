//! In-memory `OrdersApi` for controller tests.
//!
//! Serves a fixed dataset page by page, counts calls, and can fail or hold
//! individual requests until a `oneshot` gate is released.

use super::api::{ApiError, OrdersApi};
use async_trait::async_trait;
use contracts::domain::a001_platform_order::aggregate::{Order, OrderItem};
use contracts::domain::a001_platform_order::dto::OrderPage;
use contracts::shared::pagination::{PageRequest, Pagination};
use contracts::usecases::u501_sync_orders::SyncResponse;
use rust_decimal::Decimal;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use tokio::sync::oneshot;

pub fn sample_order(order_id: &str, platform: &str, status: &str, amount: i64) -> Order {
    Order {
        order_id: order_id.to_string(),
        platform: platform.to_string(),
        order_date: "2025-01-20".to_string(),
        items: vec![OrderItem::from("Running Shoes")],
        total_amount: Decimal::from(amount),
        payment_mode: "UPI".to_string(),
        tracking_id: String::new(),
        delivery_status: status.to_string(),
        delivery_address: String::new(),
        tracking_url: String::new(),
        email_snippet: String::new(),
    }
}

/// `ORD-001` .. `ORD-{count}`, alternating platforms and statuses.
pub fn sample_orders(count: usize) -> Vec<Order> {
    (1..=count)
        .map(|i| {
            let (platform, status) = if i % 2 == 1 {
                ("Amazon", "Delivered")
            } else {
                ("Flipkart", "Pending")
            };
            sample_order(&format!("ORD-{:03}", i), platform, status, i as i64 * 100)
        })
        .collect()
}

#[derive(Default)]
pub struct FakeOrdersApi {
    orders: RefCell<Vec<Order>>,
    /// Добавляются в набор при следующей синхронизации
    incoming: RefCell<Vec<Order>>,
    requests: RefCell<Vec<PageRequest>>,
    sync_calls: Cell<usize>,
    failing_pages: RefCell<HashSet<u32>>,
    fail_sync: Cell<bool>,
    page_gates: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
    sync_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeOrdersApi {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: RefCell::new(orders),
            ..Self::default()
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }

    pub fn sync_calls(&self) -> usize {
        self.sync_calls.get()
    }

    pub fn fail_page(&self, page: u32) {
        self.failing_pages.borrow_mut().insert(page);
    }

    pub fn recover_page(&self, page: u32) {
        self.failing_pages.borrow_mut().remove(&page);
    }

    pub fn fail_sync(&self, fail: bool) {
        self.fail_sync.set(fail);
    }

    /// Orders the next successful sync will add.
    pub fn queue_new_orders(&self, orders: Vec<Order>) {
        self.incoming.borrow_mut().extend(orders);
    }

    /// The next fetch of `page` waits until the returned sender fires.
    pub fn hold_page(&self, page: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.page_gates.borrow_mut().insert(page, rx);
        tx
    }

    /// The next sync call waits until the returned sender fires.
    pub fn hold_sync(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.sync_gate.borrow_mut() = Some(rx);
        tx
    }
}

#[async_trait(?Send)]
impl OrdersApi for FakeOrdersApi {
    async fn fetch_orders(&self, request: PageRequest) -> Result<OrderPage, ApiError> {
        self.requests.borrow_mut().push(request);

        let gate = self.page_gates.borrow_mut().remove(&request.page);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.failing_pages.borrow().contains(&request.page) {
            return Err(ApiError::HttpStatus {
                action: "fetch orders".to_string(),
                status: 500,
                status_text: "Internal Server Error".to_string(),
            });
        }

        let orders = self.orders.borrow();
        let limit = request.limit.value();
        let total = orders.len() as u64;
        let orders = orders
            .iter()
            .skip(request.page.saturating_sub(1) as usize * limit as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(OrderPage {
            orders,
            pagination: Pagination {
                page: request.page,
                limit,
                total,
                total_pages: Pagination::pages_for(total, limit),
            },
        })
    }

    async fn fetch_order(&self, order_id: &str) -> Result<Order, ApiError> {
        self.orders
            .borrow()
            .iter()
            .find(|order| order.order_id == order_id)
            .cloned()
            .ok_or_else(|| ApiError::HttpStatus {
                action: format!("fetch order {}", order_id),
                status: 404,
                status_text: "Not Found".to_string(),
            })
    }

    async fn sync_orders(&self) -> Result<SyncResponse, ApiError> {
        self.sync_calls.set(self.sync_calls.get() + 1);

        let gate = self.sync_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.fail_sync.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }

        let incoming: Vec<Order> = self.incoming.borrow_mut().drain(..).collect();
        let new_order_count = incoming.len() as u64;
        // новые заказы идут первыми, как в ответе сервиса
        let mut orders = self.orders.borrow_mut();
        let existing = std::mem::take(&mut *orders);
        *orders = incoming.into_iter().chain(existing).collect();

        Ok(SyncResponse {
            message: "Sync complete.".to_string(),
            new_order_count,
        })
    }
}
