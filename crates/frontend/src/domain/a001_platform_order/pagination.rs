//! Page navigation over the order store.
//!
//! Page numbers are clamped into `[1, totalPages]` and page sizes are limited
//! to `PageSize` before any request is issued. The resulting state always
//! comes from the server's response.

use super::api::{ApiError, OrdersApi};
use super::store::{Commit, OrderStore};
use contracts::shared::pagination::{PageRequest, PageSize, Pagination};

pub struct PaginationController<A> {
    store: OrderStore<A>,
}

impl<A: OrdersApi> PaginationController<A> {
    pub fn new(store: OrderStore<A>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &OrderStore<A> {
        &self.store
    }

    pub fn state(&self) -> Pagination {
        self.store.pagination()
    }

    /// Загружает страницу `page` с текущим размером страницы
    pub async fn go_to_page(&self, page: u32) -> Result<Commit, ApiError> {
        let target = self.state().clamp_page(page);
        if target != page {
            log::warn!("Page {} is out of range, loading page {}", page, target);
        }
        let request = PageRequest {
            page: target,
            limit: self.store.request().limit,
        };
        self.store.load(request).await
    }

    /// Switches the page size and returns to page 1.
    pub async fn change_page_size(&self, size: PageSize) -> Result<Commit, ApiError> {
        self.store.load(PageRequest::first(size)).await
    }

    pub async fn refresh(&self) -> Result<Commit, ApiError> {
        self.store.refresh().await
    }
}
