use super::aggregate::Order;
use crate::shared::pagination::Pagination;
use serde::{Deserialize, Serialize};

/// Ответ `GET /orders?limit={n}&page={p}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

fn default_page() -> u32 {
    1
}

/// Тело ответа списка заказов.
///
/// Старые версии сервиса отдают голый массив заказов без метаданных
/// пагинации, поэтому принимаем обе формы.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OrderListPayload {
    Paged(OrderListResponse),
    Legacy(Vec<Order>),
}

impl OrderListPayload {
    pub fn into_page(self) -> OrderPage {
        match self {
            OrderListPayload::Paged(response) => {
                let len = response.orders.len();
                let limit = response.limit.unwrap_or(len as u32);
                let total = response.total.unwrap_or(len as u64);
                let total_pages = response
                    .total_pages
                    .unwrap_or_else(|| Pagination::pages_for(total, limit));
                OrderPage {
                    orders: response.orders,
                    pagination: Pagination {
                        page: response.page.max(1),
                        limit,
                        total,
                        total_pages,
                    },
                }
            }
            OrderListPayload::Legacy(orders) => {
                let pagination = Pagination::single_page(orders.len());
                OrderPage { orders, pagination }
            }
        }
    }
}

/// One page of orders together with the pagination the server reported for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_response() {
        let payload: OrderListPayload = serde_json::from_str(
            r#"{
                "orders": [{"order_id": "AMZ-1"}, {"order_id": "AMZ-2"}],
                "page": 2, "limit": 2, "total": 7, "totalPages": 4
            }"#,
        )
        .unwrap();

        let page = payload.into_page();
        assert_eq!(page.orders.len(), 2);
        assert_eq!(
            page.pagination,
            Pagination { page: 2, limit: 2, total: 7, total_pages: 4 }
        );
    }

    #[test]
    fn test_legacy_array_gets_single_page_metadata() {
        let payload: OrderListPayload = serde_json::from_str(
            r#"[{"order_id": "AMZ-1"}, {"order_id": "FLP-1"}, {"order_id": "MYN-1"}]"#,
        )
        .unwrap();

        let page = payload.into_page();
        assert_eq!(page.orders[2].order_id, "MYN-1");
        assert_eq!(
            page.pagination,
            Pagination { page: 1, limit: 3, total: 3, total_pages: 1 }
        );
    }

    #[test]
    fn test_missing_total_pages_is_derived() {
        let payload: OrderListPayload =
            serde_json::from_str(r#"{"orders": [], "page": 1, "limit": 10, "total": 21}"#).unwrap();
        assert_eq!(payload.into_page().pagination.total_pages, 3);
    }

    #[test]
    fn test_unrecognized_shape_is_an_error() {
        assert!(serde_json::from_str::<OrderListPayload>(r#"{"data": []}"#).is_err());
    }
}
