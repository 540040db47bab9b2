use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Заказ с маркетплейса в том виде, в каком его отдаёт сервис заказов.
///
/// Клиент никогда не изменяет заказ: при каждой загрузке локальная копия
/// заменяется целиком.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub platform: String,
    /// Дата заказа как пришла с сервера ("2025-01-20" или ISO 8601)
    #[serde(default)]
    pub order_date: String,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_amount: Decimal,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub payment_mode: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub tracking_id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub delivery_status: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub delivery_address: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub tracking_url: String,
    /// Raw HTML from the platform e-mail. Must be sanitized before rendering.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email_snippet: String,
}

impl Order {
    /// Calendar date of the order, `None` when the stored value does not parse.
    pub fn order_date(&self) -> Option<NaiveDate> {
        parse_order_date(&self.order_date)
    }

    /// Normalized item names in their original order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(OrderItem::name)
    }
}

/// Позиция заказа: платформы присылают либо строку, либо объект с полем `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderItem {
    Name(String),
    Described {
        #[serde(default)]
        name: Option<String>,
    },
    Unknown(serde_json::Value),
}

impl OrderItem {
    /// Item name; objects without a usable `name` read as empty.
    pub fn name(&self) -> &str {
        match self {
            OrderItem::Name(name) => name,
            OrderItem::Described { name: Some(name) } => name,
            OrderItem::Described { name: None } | OrderItem::Unknown(_) => "",
        }
    }
}

impl From<&str> for OrderItem {
    fn from(name: &str) -> Self {
        OrderItem::Name(name.to_string())
    }
}

/// Parses "YYYY-MM-DD", RFC 3339 and naive "YYYY-MM-DDTHH:MM:SS[.f]" values.
pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<OrderItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<OrderItem>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

// Сумма приходит числом или строкой; через f64 не проходим, чтобы не терять копейки
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(Decimal::ZERO),
        serde_json::Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|e| D::Error::custom(format!("invalid total_amount {}: {}", text, e)))
        }
        serde_json::Value::String(s) => Decimal::from_str(s.trim())
            .map_err(|e| D::Error::custom(format!("invalid total_amount {:?}: {}", s, e))),
        other => Err(D::Error::custom(format!(
            "total_amount must be a number, got {}",
            other
        ))),
    }
}
