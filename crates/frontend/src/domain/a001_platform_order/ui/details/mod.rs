pub mod model;

use self::model::{safe_tracking_url, sanitize_email_snippet};
use crate::domain::a001_platform_order::api::{HttpOrdersApi, OrdersApi};
use crate::shared::components::feedback::LoadingSpinner;
use crate::shared::components::table::format_inr;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_date_long;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_platform_order::aggregate::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Box<Order>),
    Failed(String),
}

/// Order card. Fetches the order by id on its own, independent of the list.
#[component]
pub fn OrderDetailModal(
    order_id: String,
    api: StoredValue<Rc<HttpOrdersApi>, LocalStorage>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(DetailState::Loading);
    let id = StoredValue::new(order_id.clone());

    let load = move || {
        state.set(DetailState::Loading);
        let api = api.get_value();
        let order_id = id.get_value();
        spawn_local(async move {
            match api.fetch_order(&order_id).await {
                Ok(order) => state.set(DetailState::Loaded(Box::new(order))),
                Err(e) => {
                    log::error!("Failed to fetch order details {}: {}", order_id, e);
                    state.set(DetailState::Failed(e.to_string()));
                }
            }
        });
    };
    load();

    view! {
        <Modal title="Order Details".to_string() subtitle=order_id on_close=on_close>
            {move || match state.get() {
                DetailState::Loading => view! {
                    <LoadingSpinner text="Loading order details..." />
                }.into_any(),
                DetailState::Failed(message) => view! {
                    <div class="order-details__error">
                        <p class="error-message__text">{message}</p>
                        <button class="button button--primary" on:click=move |_| load()>
                            "Retry"
                        </button>
                    </div>
                }.into_any(),
                DetailState::Loaded(order) => view! { <OrderDetails order=*order /> }.into_any(),
            }}
        </Modal>
    }
}

#[component]
fn OrderDetails(order: Order) -> impl IntoView {
    let email_html = sanitize_email_snippet(&order.email_snippet);
    let tracking_url = safe_tracking_url(&order.tracking_url).map(str::to_string);
    let items: Vec<String> = order.item_names().map(str::to_string).collect();

    view! {
        <div class="order-details">
            <div class="order-details__grid">
                <div class="order-details__field">
                    <label>"Platform"</label>
                    <p>{order.platform.clone()}</p>
                </div>
                <div class="order-details__field">
                    <label>"Tracking ID"</label>
                    <p class="order-details__mono">{order.tracking_id.clone()}</p>
                </div>
                <div class="order-details__field">
                    <label>"Order Date"</label>
                    <p>{format_date_long(&order.order_date)}</p>
                </div>
                <div class="order-details__field">
                    <label>"Delivery Status"</label>
                    <StatusBadge status=order.delivery_status.clone() />
                </div>
                <div class="order-details__field">
                    <label>"Total Amount"</label>
                    <p class="order-details__amount">{format_inr(order.total_amount)}</p>
                </div>
                <div class="order-details__field">
                    <label>"Payment Mode"</label>
                    <p>{icon("payments")}{order.payment_mode.clone()}</p>
                </div>
            </div>

            <section class="order-details__section">
                <label>{icon("orders")}"Items Ordered"</label>
                <ul class="order-details__items">
                    {items.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                </ul>
            </section>

            <section class="order-details__section">
                <label>{icon("shipments")}"Delivery Address"</label>
                <p>{order.delivery_address.clone()}</p>
            </section>

            <section class="order-details__section">
                <label>"Email Preview"</label>
                <div class="order-details__email" inner_html=email_html></div>
            </section>

            {tracking_url.map(|url| view! {
                <a
                    class="button button--primary order-details__track"
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {icon("external-link")}
                    "Track Order"
                </a>
            })}
        </div>
    }
}
