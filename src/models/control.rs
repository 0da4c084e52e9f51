use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directed controller -> target edge from `control_relationships`
///
/// The controller periodically receives `control_percent` of the target's
/// point awards (the redistribution job lives outside this API). A target
/// has at most one controller at a time, enforced by a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ControlRelationship {
    pub controller_id: String,
    pub target_id: String,
    pub control_percent: f64,
    pub start_time: DateTime<Utc>,
    pub last_checkin: DateTime<Utc>,
}

/// Immunity grant from `buyer_immunity`
///
/// Blocks `buyer_id` from re-establishing control over `target_id`.
/// Grants do not expire.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BuyerImmunity {
    pub target_id: String,
    pub buyer_id: String,
    pub granted_at: DateTime<Utc>,
}
