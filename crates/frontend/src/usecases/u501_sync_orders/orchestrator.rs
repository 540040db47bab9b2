//! Синхронизация заказов с маркетплейсами.
//!
//! `Idle -> Syncing -> Idle`. While a sync is in flight further triggers are
//! ignored without touching the network. A successful sync reloads page 1 at
//! the current page size; any failure leaves the loaded orders as they were.

use crate::domain::a001_platform_order::api::{ApiError, OrdersApi};
use crate::domain::a001_platform_order::store::OrderStore;
use contracts::shared::pagination::PageRequest;
use std::cell::Cell;
use std::rc::Rc;

pub const SYNC_FAILED_MESSAGE: &str = "Failed to sync orders. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Syncing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Сообщение для всплывающего уведомления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A sync was already running; nothing was sent.
    Ignored,
    Finished(Notification),
}

pub struct SyncOrchestrator<A> {
    store: OrderStore<A>,
    phase: Rc<Cell<SyncPhase>>,
}

/// Returns the orchestrator to `Idle` however the sync ends.
struct SyncingGuard(Rc<Cell<SyncPhase>>);

impl Drop for SyncingGuard {
    fn drop(&mut self) {
        self.0.set(SyncPhase::Idle);
    }
}

impl<A: OrdersApi> SyncOrchestrator<A> {
    pub fn new(store: OrderStore<A>) -> Self {
        Self {
            store,
            phase: Rc::new(Cell::new(SyncPhase::Idle)),
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase.get()
    }

    pub fn is_syncing(&self) -> bool {
        self.phase() == SyncPhase::Syncing
    }

    pub async fn trigger_sync(&self) -> SyncOutcome {
        if self.is_syncing() {
            log::debug!("Sync already in progress, trigger ignored");
            return SyncOutcome::Ignored;
        }
        self.phase.set(SyncPhase::Syncing);
        let _guard = SyncingGuard(Rc::clone(&self.phase));

        let notification = match self.run().await {
            Ok(summary) => {
                log::info!("{}", summary);
                Notification::success(summary)
            }
            Err(e) => {
                log::error!("Sync failed: {}", e);
                Notification::error(SYNC_FAILED_MESSAGE)
            }
        };
        SyncOutcome::Finished(notification)
    }

    async fn run(&self) -> Result<String, ApiError> {
        let response = self.store.api().sync_orders().await?;
        let limit = self.store.request().limit;
        self.store.load(PageRequest::first(limit)).await?;
        Ok(response.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_platform_order::fake::{sample_order, sample_orders, FakeOrdersApi};
    use contracts::shared::pagination::PageSize;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll, Waker};

    fn poll_once<F: Future + ?Sized>(fut: Pin<&mut F>) -> Poll<F::Output> {
        let mut cx = Context::from_waker(Waker::noop());
        fut.poll(&mut cx)
    }

    async fn setup(count: usize) -> (Rc<FakeOrdersApi>, OrderStore<FakeOrdersApi>, SyncOrchestrator<FakeOrdersApi>) {
        let api = Rc::new(FakeOrdersApi::new(sample_orders(count)));
        let store = OrderStore::new(Rc::clone(&api), PageSize::Ten);
        store.refresh().await.unwrap();
        let orchestrator = SyncOrchestrator::new(store.clone());
        (api, store, orchestrator)
    }

    #[tokio::test]
    async fn test_successful_sync_reloads_first_page() {
        let (api, store, orchestrator) = setup(25).await;
        store
            .load(PageRequest { page: 3, limit: PageSize::TwentyFive })
            .await
            .unwrap();
        api.queue_new_orders(vec![
            sample_order("AMZ-9", "Amazon", "Pending", 10),
            sample_order("AMZ-10", "Amazon", "Pending", 20),
            sample_order("FLP-9", "Flipkart", "Delivered", 30),
        ]);

        let outcome = orchestrator.trigger_sync().await;

        assert_eq!(
            outcome,
            SyncOutcome::Finished(Notification::success("Sync complete. 3 new orders added."))
        );
        assert_eq!(orchestrator.phase(), SyncPhase::Idle);
        let book = store.snapshot();
        assert_eq!(book.pagination.page, 1);
        assert_eq!(book.pagination.limit, 25);
        assert_eq!(book.pagination.total, 28);
        assert_eq!(book.orders[0].order_id, "AMZ-9");
    }

    #[tokio::test]
    async fn test_trigger_while_syncing_is_ignored() {
        let (api, _store, orchestrator) = setup(5).await;
        let release = api.hold_sync();

        let mut first = Box::pin(orchestrator.trigger_sync());
        assert!(poll_once(first.as_mut()).is_pending());
        assert!(orchestrator.is_syncing());

        assert_eq!(orchestrator.trigger_sync().await, SyncOutcome::Ignored);
        assert_eq!(api.sync_calls(), 1);

        release.send(()).unwrap();
        assert!(matches!(first.await, SyncOutcome::Finished(_)));
        assert_eq!(orchestrator.phase(), SyncPhase::Idle);
        assert_eq!(api.sync_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_sync_keeps_orders() {
        let (api, store, orchestrator) = setup(12).await;
        let before = store.snapshot();
        let fetches = api.fetch_calls();
        api.fail_sync(true);

        let outcome = orchestrator.trigger_sync().await;

        assert_eq!(
            outcome,
            SyncOutcome::Finished(Notification::error(SYNC_FAILED_MESSAGE))
        );
        assert_eq!(*store.snapshot(), *before);
        assert_eq!(api.fetch_calls(), fetches);
        assert_eq!(orchestrator.phase(), SyncPhase::Idle);
    }

    #[tokio::test]
    async fn test_failed_reload_after_sync_keeps_orders() {
        let (api, store, orchestrator) = setup(12).await;
        store
            .load(PageRequest { page: 2, limit: PageSize::Ten })
            .await
            .unwrap();
        let before = store.snapshot();
        api.fail_page(1);

        let outcome = orchestrator.trigger_sync().await;

        assert_eq!(
            outcome,
            SyncOutcome::Finished(Notification::error(SYNC_FAILED_MESSAGE))
        );
        assert_eq!(*store.snapshot(), *before);

        // после ошибки можно запустить снова
        api.recover_page(1);
        assert_eq!(
            orchestrator.trigger_sync().await,
            SyncOutcome::Finished(Notification::success("Sync complete. 0 new orders added."))
        );
        assert_eq!(store.pagination().page, 1);
    }
}
