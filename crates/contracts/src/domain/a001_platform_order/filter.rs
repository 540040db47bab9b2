//! Клиентская фильтрация заказов текущей страницы.
//!
//! Фильтр не хранит состояния: результат каждый раз пересчитывается с нуля
//! из списка заказов и критериев. Все условия объединяются через И, порядок
//! заказов сохраняется.

use super::aggregate::{parse_order_date, Order};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Значение выпадающего списка, означающее «без фильтра»
pub const ALL: &str = "All";

/// A dropdown selection: either the "All" sentinel or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Choice {
    #[default]
    All,
    Exact(String),
}

impl Choice {
    /// Maps a `<select>` value; "All" and the empty string select everything.
    pub fn from_select_value(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Choice::All
        } else {
            Choice::Exact(value.to_string())
        }
    }

    pub fn as_select_value(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Exact(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Exact(expected) => expected == value,
        }
    }
}

/// Inclusive date bounds; an unset side imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range from `<input type="date">` values; empty or invalid text leaves the side unset.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_order_date(start),
            end: parse_order_date(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// An order whose date does not parse fails every bound that is set.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub platform: Choice,
    pub status: Choice,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn matches(&self, order: &Order) -> bool {
        self.matches_search(order)
            && self.platform.matches(&order.platform)
            && self.status.matches(&order.delivery_status)
            && self.date_range.contains(order.order_date())
    }

    /// Case-insensitive substring of the order id or of any item name.
    pub fn matches_search(&self, order: &Order) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        order.order_id.to_lowercase().contains(&needle)
            || order
                .item_names()
                .any(|name| name.to_lowercase().contains(&needle))
    }

    /// Number of criteria that restrict the result (for the filter badge).
    pub fn active_count(&self) -> usize {
        [
            !self.search_term.is_empty(),
            !self.platform.is_all(),
            !self.status.is_all(),
            self.date_range.start.is_some(),
            self.date_range.end.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_neutral(&self) -> bool {
        self.active_count() == 0
    }
}

/// Returns the orders satisfying every criterion, in input order.
pub fn filter_orders(orders: &[Order], criteria: &FilterCriteria) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| criteria.matches(order))
        .cloned()
        .collect()
}

/// "All" followed by the distinct platforms of `orders`, first-seen order.
pub fn platform_options(orders: &[Order]) -> Vec<String> {
    distinct_with_all(orders.iter().map(|o| o.platform.as_str()))
}

/// "All" followed by the distinct delivery statuses of `orders`, first-seen order.
pub fn status_options(orders: &[Order]) -> Vec<String> {
    distinct_with_all(orders.iter().map(|o| o.delivery_status.as_str()))
}

fn distinct_with_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for value in values {
        if !options.iter().any(|existing| existing == value) {
            options.push(value.to_string());
        }
    }
    options
}
