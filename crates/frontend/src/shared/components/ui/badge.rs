use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge variant for an order delivery status. Matching ignores case.
pub fn status_variant(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "delivered" => "success",
        "shipped" | "out for delivery" => "primary",
        "pending" => "warning",
        "cancelled" => "error",
        _ => "neutral",
    }
}

/// Delivery status badge
#[component]
pub fn StatusBadge(
    /// Status as stored on the order, shown unchanged
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let class = format!(
        "badge badge--status {}",
        variant_class(status_variant(&status))
    );

    view! {
        <span class=class>
            {status}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant_ignores_case() {
        assert_eq!(status_variant("Delivered"), "success");
        assert_eq!(status_variant("DELIVERED"), "success");
        assert_eq!(status_variant("Out for Delivery"), "primary");
        assert_eq!(status_variant("shipped"), "primary");
        assert_eq!(status_variant("Pending"), "warning");
        assert_eq!(status_variant("Cancelled"), "error");
        assert_eq!(status_variant("Returned"), "neutral");
        assert_eq!(status_variant(""), "neutral");
    }

    #[test]
    fn test_variant_class() {
        assert_eq!(variant_class("success"), "badge--success");
        assert_eq!(variant_class("unknown"), "badge--neutral");
    }
}
