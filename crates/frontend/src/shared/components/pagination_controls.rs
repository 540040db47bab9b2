use crate::shared::icons::icon;
use contracts::shared::pagination::{PageLink, PageSize, Pagination};
use leptos::prelude::*;

/// PaginationControls component - page links, page size selector and result range
///
/// Pages are 1-indexed. Nothing is rendered while there is at most one page.
#[component]
pub fn PaginationControls(
    /// Pagination as returned by the last applied fetch
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<PageSize>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<PageSize>,

    /// Blocks navigation while a request is running
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get();
    let range_text = move || {
        let p = pagination.get();
        let (first, last) = p.visible_range();
        format!("Showing {} to {} of {} results", first, last, p.total)
    };

    view! {
        <Show when=move || { pagination.get().total_pages > 1 }>
            <div class="pagination-controls">
                <span class="pagination-info">{range_text}</span>

                <label class="pagination-size">
                    "Show:"
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            let val = event_target_value(&ev).parse().unwrap_or(10);
                            on_page_size_change.run(PageSize::snap(val));
                        }
                        prop:value=move || page_size.get().to_string()
                        disabled=move || is_disabled()
                    >
                        {PageSize::ALL.iter().map(|&size| {
                            view! {
                                <option value={size.to_string()} selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    "per page"
                </label>

                <div class="pagination-pages">
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(pagination.get().page.saturating_sub(1))
                        disabled=move || is_disabled() || !pagination.get().has_previous()
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    {move || {
                        let current = pagination.get().page;
                        pagination.get().page_links().into_iter().map(|link| match link {
                            PageLink::Page(n) => view! {
                                <button
                                    class={if n == current {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }}
                                    on:click=move |_| on_page_change.run(n)
                                    disabled=move || is_disabled()
                                >
                                    {n}
                                </button>
                            }.into_any(),
                            PageLink::Gap => view! {
                                <span class="pagination-gap">"..."</span>
                            }.into_any(),
                        }).collect_view()
                    }}
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(pagination.get().page + 1)
                        disabled=move || is_disabled() || !pagination.get().has_next()
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
