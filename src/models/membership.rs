use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership row from the `memberships` table (one-to-one with users)
///
/// Written by the bot whenever external subscription data changes; the
/// multiplier scales point awards and is read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Membership {
    pub user_id: String,
    pub months_subscribed: f64,
    pub multiplier: i32,
    pub last_updated: DateTime<Utc>,
}
