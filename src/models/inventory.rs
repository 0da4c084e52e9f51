use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inventory row from `inventory_items`
///
/// One row per (user, item_type); `quantity` counts the stack.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    #[serde(skip_serializing, default)]
    pub id: i64,
    pub user_id: String,
    pub item_type: String,
    pub quantity: i32,
    pub last_used: Option<DateTime<Utc>>,
}
