use crate::shared::icons::icon;
use leptos::prelude::*;

/// Error panel with a retry action
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: Signal<String>,
    /// Re-runs the operation that failed
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-message">
            <div class="error-message__icon">{icon("alert")}</div>
            <h3 class="error-message__title">"Something went wrong"</h3>
            <p class="error-message__text">{move || message.get()}</p>
            <button class="button button--primary" on:click=move |_| on_retry.run(())>
                {icon("refresh")}
                "Try Again"
            </button>
        </div>
    }
}

/// Toast notification. Hiding it is up to the owner.
#[component]
pub fn Toast(
    #[prop(into)]
    message: String,
    #[prop(optional)]
    is_error: bool,
    on_close: Callback<()>,
) -> impl IntoView {
    let class = if is_error {
        "toast toast--error"
    } else {
        "toast toast--success"
    };

    view! {
        <div class=class role="status">
            <span class="toast__icon">
                {if is_error { icon("alert") } else { icon("delivered") }}
            </span>
            <span class="toast__message">{message}</span>
            <button class="toast__close" on:click=move |_| on_close.run(())>
                {icon("x")}
            </button>
        </div>
    }
}

/// Inline loading indicator
#[component]
pub fn LoadingSpinner(
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="loading-spinner__circle"></div>
            <span class="loading-spinner__text">{text}</span>
        </div>
    }
}
