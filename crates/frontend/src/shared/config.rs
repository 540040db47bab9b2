use contracts::shared::pagination::PageSize;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub orders: OrdersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit service URL. Empty: same host as the page, on `port`.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrdersConfig {
    #[serde(default)]
    pub default_page_size: PageSize,
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u32,
}

fn default_port() -> u16 {
    5000
}

fn default_toast_timeout_ms() -> u32 {
    4000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_port(),
        }
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::default(),
            toast_timeout_ms: default_toast_timeout_ms(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 5000

[orders]
default_page_size = 10
toast_timeout_ms = 4000
"#;

/// localStorage key holding an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "order_dashboard.config";

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

/// Load configuration
///
/// Search order:
/// 1. TOML document stored in localStorage under `order_dashboard.config`
/// 2. Falls back to embedded default config
pub fn load_config() -> AppConfig {
    if let Some(raw) = stored_override() {
        match parse_config(&raw) {
            Ok(config) => {
                log::info!("Loaded configuration override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded configuration is invalid: {}", e);
        AppConfig::default()
    })
}

fn stored_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(CONFIG_STORAGE_KEY).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 5000);
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.orders.default_page_size, PageSize::Ten);
        assert_eq!(config.orders.toast_timeout_ms, 4000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [orders]
            default_page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.orders.default_page_size, PageSize::Fifty);
        assert_eq!(config.api.port, 5000);
    }

    #[test]
    fn test_unsupported_page_size_is_rejected() {
        let result = parse_config(
            r#"
            [orders]
            default_page_size = 30
            "#,
        );
        assert!(result.is_err());
    }
}
