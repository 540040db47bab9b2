//! Хранилище заказов текущей страницы.
//!
//! The store owns one immutable `OrderBook` snapshot (orders + pagination)
//! and replaces it wholesale when a fetch completes. Every fetch takes a
//! ticket with a sequence number; a response whose ticket is not the latest
//! issued is discarded, so out-of-order completions never overwrite newer data.

use super::api::{ApiError, OrdersApi};
use contracts::domain::a001_platform_order::aggregate::Order;
use contracts::domain::a001_platform_order::dto::OrderPage;
use contracts::shared::pagination::{PageRequest, PageSize, Pagination};
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of the loaded page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderBook {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

impl From<OrderPage> for OrderBook {
    fn from(page: OrderPage) -> Self {
        Self {
            orders: page.orders,
            pagination: page.pagination,
        }
    }
}

/// Handle for one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: PageRequest,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The snapshot was replaced.
    Applied,
    /// A newer fetch was issued meanwhile; the response was dropped.
    Stale,
}

#[derive(Debug)]
struct StoreState {
    book: Rc<OrderBook>,
    /// Parameters of the last applied fetch
    request: PageRequest,
    latest_seq: u64,
}

pub struct OrderStore<A> {
    api: Rc<A>,
    state: Rc<RefCell<StoreState>>,
}

impl<A> Clone for OrderStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: Rc::clone(&self.state),
        }
    }
}

impl<A: OrdersApi> OrderStore<A> {
    pub fn new(api: Rc<A>, page_size: PageSize) -> Self {
        let pagination = Pagination {
            limit: page_size.value(),
            ..Pagination::default()
        };
        Self {
            api,
            state: Rc::new(RefCell::new(StoreState {
                book: Rc::new(OrderBook {
                    orders: Vec::new(),
                    pagination,
                }),
                request: PageRequest::first(page_size),
                latest_seq: 0,
            })),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current snapshot. Cheap: the book is shared, not copied.
    pub fn snapshot(&self) -> Rc<OrderBook> {
        Rc::clone(&self.state.borrow().book)
    }

    pub fn pagination(&self) -> Pagination {
        self.state.borrow().book.pagination
    }

    /// Parameters of the page currently shown.
    pub fn request(&self) -> PageRequest {
        self.state.borrow().request
    }

    /// Issues a new ticket; every earlier ticket becomes stale.
    pub fn begin(&self, request: PageRequest) -> FetchTicket {
        let mut state = self.state.borrow_mut();
        state.latest_seq += 1;
        FetchTicket {
            seq: state.latest_seq,
            request,
        }
    }

    /// Applies a fetch result if its ticket is still the latest.
    ///
    /// A failed fetch leaves the snapshot untouched and hands the error back;
    /// failures of superseded fetches are dropped like their successes.
    pub fn commit(
        &self,
        ticket: FetchTicket,
        result: Result<OrderPage, ApiError>,
    ) -> Result<Commit, ApiError> {
        let mut state = self.state.borrow_mut();
        if ticket.seq != state.latest_seq {
            log::debug!(
                "Discarding stale response #{} (latest #{})",
                ticket.seq,
                state.latest_seq
            );
            return Ok(Commit::Stale);
        }

        let page = result?;
        log::debug!(
            "Applying response #{}: {} orders, page {}/{}",
            ticket.seq,
            page.orders.len(),
            page.pagination.page,
            page.pagination.total_pages
        );
        state.book = Rc::new(OrderBook::from(page));
        state.request = ticket.request;
        Ok(Commit::Applied)
    }

    /// Fetches `request` and applies it unless superseded.
    pub async fn load(&self, request: PageRequest) -> Result<Commit, ApiError> {
        let ticket = self.begin(request);
        log::debug!(
            "Fetching orders #{}: page {}, limit {}",
            ticket.seq,
            request.page,
            request.limit
        );

        let result = self.api.fetch_orders(request).await;
        if let Err(e) = &result {
            log::error!("Failed to fetch orders: {}", e);
        }
        self.commit(ticket, result)
    }

    /// Re-fetches the page currently shown.
    pub async fn refresh(&self) -> Result<Commit, ApiError> {
        self.load(self.request()).await
    }
}
