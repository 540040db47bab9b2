pub mod state;
pub mod table;

use self::state::{create_state, persist_state, OrderListState};
use self::table::OrderTable;
use super::details::OrderDetailModal;
use crate::domain::a001_platform_order::api::HttpOrdersApi;
use crate::domain::a001_platform_order::pagination::PaginationController;
use crate::domain::a001_platform_order::store::{Commit, OrderBook, OrderStore};
use crate::shared::api_utils::api_base;
use crate::shared::components::feedback::{ErrorMessage, LoadingSpinner, Toast};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_count, format_inr};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::usecases::u501_sync_orders::orchestrator::{
    Notification, NotificationKind, SyncOrchestrator, SyncOutcome,
};
use contracts::domain::a001_platform_order::filter::{
    filter_orders, platform_options, status_options, Choice,
};
use contracts::domain::a001_platform_order::stats::OrderStats;
use contracts::shared::pagination::PageSize;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

/// Операция со списком, которую можно повторить после ошибки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListOp {
    Refresh,
    GoToPage(u32),
    ChangePageSize(PageSize),
}

/// One `<option>` of a filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
struct OptionRow {
    value: String,
    label: String,
    selected: bool,
}

fn option_rows(values: Vec<String>, current: &Choice) -> Vec<OptionRow> {
    values
        .into_iter()
        .map(|value| OptionRow {
            selected: current.as_select_value() == value,
            label: value.clone(),
            value,
        })
        .collect()
}

#[component]
pub fn OrdersDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let toast_timeout_ms = config.orders.toast_timeout_ms;

    let state = create_state(config.orders.default_page_size);
    let api = Rc::new(HttpOrdersApi::new(api_base(&config.api)));
    let store = OrderStore::new(Rc::clone(&api), state.get_untracked().page_size);
    let pager = StoredValue::new_local(Rc::new(PaginationController::new(store.clone())));
    let sync = StoredValue::new_local(Rc::new(SyncOrchestrator::new(store.clone())));
    let store = StoredValue::new_local(store);
    let api = StoredValue::new_local(api);

    // Reactive copy of the store snapshot, replaced as a whole
    let book = RwSignal::new(OrderBook::default());
    let in_flight = RwSignal::new(0u32);
    let loaded_once = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let failed_op = StoredValue::new(None::<ListOp>);
    let syncing = RwSignal::new(false);
    let toast = RwSignal::new(None::<Notification>);
    let toast_seq = StoredValue::new(0u64);
    let selected_order = RwSignal::new(None::<String>);

    let publish = move || {
        let store = store.get_value();
        book.set((*store.snapshot()).clone());
        let size = store.request().limit;
        if state.with_untracked(|s| s.page_size != size) {
            state.update(|s| s.page_size = size);
        }
    };

    let run_op = move |op: ListOp| {
        let pager = pager.get_value();
        in_flight.update(|n| *n += 1);
        spawn_local(async move {
            let result = match op {
                ListOp::Refresh => pager.refresh().await,
                ListOp::GoToPage(page) => pager.go_to_page(page).await,
                ListOp::ChangePageSize(size) => pager.change_page_size(size).await,
            };
            match result {
                Ok(Commit::Applied) => {
                    error.set(None);
                    failed_op.set_value(None);
                }
                Ok(Commit::Stale) => {}
                Err(e) => {
                    error.set(Some(e.to_string()));
                    failed_op.set_value(Some(op));
                }
            }
            publish();
            loaded_once.set(true);
            in_flight.update(|n| *n = n.saturating_sub(1));
        });
    };

    let show_toast = move |notification: Notification| {
        let seq = toast_seq.get_value() + 1;
        toast_seq.set_value(seq);
        toast.set(Some(notification));
        spawn_local(async move {
            TimeoutFuture::new(toast_timeout_ms).await;
            if toast_seq.get_value() == seq {
                toast.set(None);
            }
        });
    };

    let on_sync = move || {
        let sync = sync.get_value();
        if sync.is_syncing() {
            log!("Sync already in progress, click ignored");
            return;
        }
        syncing.set(true);
        spawn_local(async move {
            let outcome = sync.trigger_sync().await;
            syncing.set(sync.is_syncing());
            if let SyncOutcome::Finished(notification) = outcome {
                if notification.kind == NotificationKind::Success {
                    error.set(None);
                    failed_op.set_value(None);
                }
                publish();
                show_toast(notification);
            }
        });
    };

    let retry = Callback::new(move |_| {
        let op = failed_op.get_value().unwrap_or(ListOp::Refresh);
        log!("Retrying {:?}", op);
        run_op(op);
    });

    // Начальная загрузка
    run_op(ListOp::Refresh);

    // Persist filters and page size on every change
    Effect::new(move |_| {
        state.track();
        persist_state(state);
    });

    let criteria = Memo::new(move |_| state.with(OrderListState::criteria));
    let filtered = Memo::new(move |_| book.with(|b| filter_orders(&b.orders, &criteria.get())));
    let stats = Memo::new(move |_| filtered.with(|orders| OrderStats::from_orders(orders)));
    let platforms = Memo::new(move |_| book.with(|b| platform_options(&b.orders)));
    let statuses = Memo::new(move |_| book.with(|b| status_options(&b.orders)));
    let active_filters = Signal::derive(move || criteria.with(|c| c.active_count()));
    let is_expanded = RwSignal::new(state.get_untracked().filters_expanded);
    Effect::new(move |_| {
        let expanded = is_expanded.get();
        state.update(|s| s.filters_expanded = expanded);
    });

    let loading = Signal::derive(move || in_flight.get() > 0);

    view! {
        <div class="page orders-dashboard">
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">"Order Summary Dashboard"</h1>
                    <p class="page-header__subtitle">
                        "Track and manage your e-commerce orders from multiple platforms"
                    </p>
                </div>
                <div class="page-header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Medium
                        on_click=move |_| on_sync()
                        disabled=Signal::derive(move || syncing.get())
                    >
                        {icon("refresh")}
                        {move || if syncing.get() { "Syncing..." } else { "Sync Orders" }}
                    </Button>
                </div>
            </div>

            <Show
                when=move || loaded_once.get()
                fallback=|| view! { <LoadingSpinner text="Loading orders..." /> }
            >
                <div class="stat-cards">
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=Signal::derive(move || format_count(stats.with(|s| s.total)))
                        tone=StatTone::Primary
                    />
                    <StatCard
                        label="Delivered"
                        icon_name="delivered"
                        value=Signal::derive(move || format_count(stats.with(|s| s.delivered)))
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Pending"
                        icon_name="pending"
                        value=Signal::derive(move || format_count(stats.with(|s| s.pending)))
                        tone=StatTone::Warning
                    />
                    <StatCard
                        label="Total Value"
                        icon_name="payments"
                        value=Signal::derive(move || format_inr(stats.with(|s| s.total_amount)))
                    />
                </div>

                <FilterPanel
                    is_expanded=is_expanded
                    active_filters_count=active_filters
                    header_content=move || view! {
                        <div class="search-box">
                            {icon("search")}
                            <input
                                type="text"
                                class="search-box__input"
                                placeholder="Search by order ID or item name..."
                                prop:value=move || state.with(|s| s.search_term.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.search_term = value);
                                }
                            />
                        </div>
                    }
                    filter_content=move || view! {
                        <div class="filter-fields">
                            <label class="filter-field">
                                "Platform"
                                <select
                                    prop:value=move || state.with(|s| s.platform.as_select_value().to_string())
                                    on:change=move |ev| {
                                        let value = Choice::from_select_value(&event_target_value(&ev));
                                        state.update(|s| s.platform = value);
                                    }
                                >
                                    {move || {
                                        let values = platforms.get();
                                        let rows = state.with_untracked(|s| option_rows(values, &s.platform));
                                        rows.into_iter().map(|row| view! {
                                            <option value=row.value selected=row.selected>{row.label}</option>
                                        }).collect_view()
                                    }}
                                </select>
                            </label>
                            <label class="filter-field">
                                "Status"
                                <select
                                    prop:value=move || state.with(|s| s.status.as_select_value().to_string())
                                    on:change=move |ev| {
                                        let value = Choice::from_select_value(&event_target_value(&ev));
                                        state.update(|s| s.status = value);
                                    }
                                >
                                    {move || {
                                        let values = statuses.get();
                                        let rows = state.with_untracked(|s| option_rows(values, &s.status));
                                        rows.into_iter().map(|row| view! {
                                            <option value=row.value selected=row.selected>{row.label}</option>
                                        }).collect_view()
                                    }}
                                </select>
                            </label>
                            <label class="filter-field">
                                "From"
                                <input
                                    type="date"
                                    prop:value=move || state.with(|s| s.date_start.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.date_start = value);
                                    }
                                />
                            </label>
                            <label class="filter-field">
                                "To"
                                <input
                                    type="date"
                                    prop:value=move || state.with(|s| s.date_end.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.date_end = value);
                                    }
                                />
                            </label>
                            <button
                                class="button button--secondary"
                                on:click=move |_| state.update(OrderListState::clear_filters)
                                disabled=move || active_filters.get() == 0
                            >
                                "Clear filters"
                            </button>
                        </div>
                    }
                    filter_tags=move || view! {
                        <div class="filter-tags">
                            {move || state.with(|s| s.chips()).into_iter().map(|(chip, label)| {
                                view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| state.update(|s| s.remove_chip(chip)))
                                    />
                                }
                            }).collect_view()}
                        </div>
                    }
                />

                {move || error.get().map(|message| view! {
                    <ErrorMessage message=message on_retry=retry />
                })}

                <div class="card orders-card">
                    <OrderTable
                        orders=filtered
                        on_open=Callback::new(move |id: String| selected_order.set(Some(id)))
                    />
                    <PaginationControls
                        pagination=Signal::derive(move || book.with(|b| b.pagination))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page: u32| run_op(ListOp::GoToPage(page)))
                        on_page_size_change=Callback::new(move |size: PageSize| run_op(ListOp::ChangePageSize(size)))
                        disabled=loading
                    />
                </div>
            </Show>

            {move || selected_order.get().map(|order_id| view! {
                <OrderDetailModal
                    order_id=order_id
                    api=api
                    on_close=Callback::new(move |_| selected_order.set(None))
                />
            })}

            {move || toast.get().map(|n| view! {
                <div class="toast-container">
                    <Toast
                        message=n.message
                        is_error={n.kind == NotificationKind::Error}
                        on_close=Callback::new(move |_| toast.set(None))
                    />
                </div>
            })}
        </div>
    }
}
