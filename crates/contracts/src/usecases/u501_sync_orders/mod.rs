use serde::{Deserialize, Serialize};

/// Ответ `POST /orders/sync`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub new_order_count: u64,
}

impl SyncResponse {
    /// Text of the success notification shown after a sync.
    pub fn summary(&self) -> String {
        let message = self.message.trim();
        if message.is_empty() {
            format!("{} new orders added.", self.new_order_count)
        } else {
            format!("{} {} new orders added.", message, self.new_order_count)
        }
    }
}
