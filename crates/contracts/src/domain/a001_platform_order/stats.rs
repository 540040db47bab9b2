use super::aggregate::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const STATUS_DELIVERED: &str = "Delivered";
pub const STATUS_PENDING: &str = "Pending";

/// Итоги по отфильтрованным заказам (карточки над таблицей)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: usize,
    pub delivered: usize,
    pub pending: usize,
    pub total_amount: Decimal,
}

impl OrderStats {
    /// Status checks are exact and case-sensitive, matching the stored value.
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut stats, order| {
            stats.total += 1;
            match order.delivery_status.as_str() {
                STATUS_DELIVERED => stats.delivered += 1,
                STATUS_PENDING => stats.pending += 1,
                _ => {}
            }
            stats.total_amount += order.total_amount;
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_platform_order::filter::{filter_orders, Choice, FilterCriteria};

    fn order(id: &str, platform: &str, status: &str, amount: Decimal) -> Order {
        Order {
            order_id: id.to_string(),
            platform: platform.to_string(),
            order_date: "2025-01-20".to_string(),
            items: Vec::new(),
            total_amount: amount,
            payment_mode: String::new(),
            tracking_id: String::new(),
            delivery_status: status.to_string(),
            delivery_address: String::new(),
            tracking_url: String::new(),
            email_snippet: String::new(),
        }
    }

    #[test]
    fn test_platform_filter_scenario() {
        let orders = vec![
            order("AMZ-1", "Amazon", "Delivered", Decimal::from(100)),
            order("FLP-1", "Flipkart", "Pending", Decimal::from(50)),
        ];
        let criteria = FilterCriteria {
            platform: Choice::Exact("Amazon".to_string()),
            ..Default::default()
        };

        let filtered = filter_orders(&orders, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].order_id, "AMZ-1");
        assert_eq!(
            OrderStats::from_orders(&filtered),
            OrderStats {
                total: 1,
                delivered: 1,
                pending: 0,
                total_amount: Decimal::from(100),
            }
        );
    }

    #[test]
    fn test_other_statuses_count_only_in_total() {
        let orders = vec![
            order("A", "Amazon", "Delivered", Decimal::ZERO),
            order("B", "Amazon", "delivered", Decimal::ZERO),
            order("C", "Amazon", "Shipped", Decimal::ZERO),
            order("D", "Amazon", "Pending", Decimal::ZERO),
        ];
        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.pending, 1);
        assert!(stats.delivered + stats.pending <= stats.total);
    }

    #[test]
    fn test_amount_sum_is_exact() {
        // 0.1 складываем тысячу раз: на f64 это дало бы 99.9999999999986
        let orders: Vec<Order> = (0..1000)
            .map(|i| order(&i.to_string(), "Amazon", "Pending", Decimal::new(1, 1)))
            .collect();
        let stats = OrderStats::from_orders(&orders);
        assert_eq!(stats.total_amount, Decimal::from(100));
        assert!(stats.total_amount >= Decimal::ZERO);
    }

    #[test]
    fn test_empty() {
        assert_eq!(OrderStats::from_orders(&[]), OrderStats::default());
    }
}
