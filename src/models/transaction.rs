use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable ledger entry from `transactions`
///
/// Every point mutation the bot applies leaves one of these behind. The
/// surrogate `id` never leaves the process; `uuid` is the identifier
/// clients see. `user_id` is serialized once on the history envelope, not
/// per entry. `source_transaction` links a control-distribution entry
/// back to the award that triggered it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    #[serde(skip_serializing, default)]
    pub id: i64,
    pub uuid: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    pub user_id: String,
    pub points_change: f64,
    pub reason: Option<String>,
    pub source_transaction: Option<String>,
    pub is_control_distribution: bool,
}
