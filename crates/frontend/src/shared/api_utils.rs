//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing order service URLs.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses `base_url` from the configuration when set. Otherwise constructs the
/// URL from the current window location, using the configured port for the
/// order service.
///
/// # Returns
/// - API base URL like "http://localhost:5000" (never with a trailing slash)
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    let explicit = config.base_url.trim();
    if !explicit.is_empty() {
        return explicit.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Join a base URL and a path
///
/// # Example
/// ```rust
/// use order_dashboard_frontend::shared::api_utils::join_url;
///
/// let url = join_url("http://localhost:5000/", "/orders/sync");
/// assert_eq!(url, "http://localhost:5000/orders/sync");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
