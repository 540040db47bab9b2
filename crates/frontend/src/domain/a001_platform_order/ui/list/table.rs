use crate::shared::components::table::format_inr;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a001_platform_order::aggregate::Order;
use leptos::prelude::*;

/// CSS modifier for the platform pill
pub fn platform_class(platform: &str) -> &'static str {
    match platform.trim().to_lowercase().as_str() {
        "amazon" => "platform-pill platform-pill--amazon",
        "flipkart" => "platform-pill platform-pill--flipkart",
        "myntra" => "platform-pill platform-pill--myntra",
        _ => "platform-pill",
    }
}

/// First item name and the "+N more item(s)" line, if any
pub fn items_summary(order: &Order) -> (String, Option<String>) {
    let Some(first) = order.items.first() else {
        return ("No items".to_string(), None);
    };
    let name = match first.name() {
        "" => "Unknown item".to_string(),
        name => name.to_string(),
    };
    let more = match order.items.len() {
        1 => None,
        2 => Some("+1 more item".to_string()),
        n => Some(format!("+{} more items", n - 1)),
    };
    (name, more)
}

#[component]
pub fn OrderTable(
    /// Filtered orders of the current page
    #[prop(into)]
    orders: Signal<Vec<Order>>,
    on_open: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !orders.with(|o| o.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    {icon("orders")}
                    <h3>"No orders found"</h3>
                    <p>"Try adjusting your search or filter criteria."</p>
                </div>
            }
        >
            <div class="table-wrapper">
                <table class="table orders-table">
                    <thead>
                        <tr>
                            <th>"Platform"</th>
                            <th>"Order ID"</th>
                            <th>"Date"</th>
                            <th>"Items"</th>
                            <th class="text-right">"Amount"</th>
                            <th>"Tracking ID"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || orders.get()
                            key=|order| order.order_id.clone()
                            children=move |order| {
                                let order_id = order.order_id.clone();
                                let (first_item, more) = items_summary(&order);
                                view! {
                                    <tr class="table__row--clickable" on:click=move |_| on_open.run(order_id.clone())>
                                        <td>
                                            <span class={platform_class(&order.platform)}>{order.platform.clone()}</span>
                                        </td>
                                        <td class="orders-table__id">{order.order_id.clone()}</td>
                                        <td>{format_date(&order.order_date)}</td>
                                        <td>
                                            <div>{first_item}</div>
                                            {more.map(|m| view! { <div class="orders-table__more">{m}</div> })}
                                        </td>
                                        <td class="text-right">{format_inr(order.total_amount)}</td>
                                        <td class="orders-table__tracking">{order.tracking_id.clone()}</td>
                                        <td><StatusBadge status=order.delivery_status.clone() /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
