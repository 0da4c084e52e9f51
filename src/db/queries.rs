use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{
    BuyerImmunity, ControlRelationship, InventoryItem, Membership, Transaction, User,
};

/// Top-N non-eliminated users touched at or after the cutoff
///
/// Rank order is points descending; equal balances fall back to channel id
/// so repeated reads return the same board.
pub async fn top_active_users(
    pool: &PgPool,
    cutoff: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, points, is_eliminated, elimination_reason, created_at, updated_at
        FROM users
        WHERE updated_at >= $1
            AND is_eliminated = FALSE
        ORDER BY points DESC, id ASC
        LIMIT $2
        "#,
    )
    .bind(cutoff)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Look up a single user by channel id
pub async fn fetch_user(pool: &PgPool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, points, is_eliminated, elimination_reason, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Membership row for a user, if one exists
pub async fn fetch_membership(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<Membership>, sqlx::Error> {
    sqlx::query_as::<_, Membership>(
        r#"
        SELECT user_id, months_subscribed, multiplier, last_updated
        FROM memberships
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// All inventory stacks a user holds
pub async fn fetch_inventory(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as::<_, InventoryItem>(
        r#"
        SELECT id, user_id, item_type, quantity, last_used
        FROM inventory_items
        WHERE user_id = $1
        ORDER BY item_type ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// The control edge targeting a user (at most one by the unique constraint)
pub async fn fetch_controller_of(
    pool: &PgPool,
    target_id: &str,
) -> Result<Option<ControlRelationship>, sqlx::Error> {
    sqlx::query_as::<_, ControlRelationship>(
        r#"
        SELECT controller_id, target_id, control_percent, start_time, last_checkin
        FROM control_relationships
        WHERE target_id = $1
        "#,
    )
    .bind(target_id)
    .fetch_optional(pool)
    .await
}

/// All control edges a user holds over others
pub async fn fetch_controlled_targets(
    pool: &PgPool,
    controller_id: &str,
) -> Result<Vec<ControlRelationship>, sqlx::Error> {
    sqlx::query_as::<_, ControlRelationship>(
        r#"
        SELECT controller_id, target_id, control_percent, start_time, last_checkin
        FROM control_relationships
        WHERE controller_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(controller_id)
    .fetch_all(pool)
    .await
}

/// Immunity grants protecting a target, most recent first
pub async fn fetch_immunities(
    pool: &PgPool,
    target_id: &str,
) -> Result<Vec<BuyerImmunity>, sqlx::Error> {
    sqlx::query_as::<_, BuyerImmunity>(
        r#"
        SELECT target_id, buyer_id, granted_at
        FROM buyer_immunity
        WHERE target_id = $1
        ORDER BY granted_at DESC, buyer_id ASC
        "#,
    )
    .bind(target_id)
    .fetch_all(pool)
    .await
}

/// Most recent ledger entries for a user, newest first
///
/// `id DESC` breaks ties between entries the bot wrote within the same
/// timestamp tick.
pub async fn recent_transactions(
    pool: &PgPool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, uuid, timestamp, user_id, points_change, reason,
            source_transaction, is_control_distribution
        FROM transactions
        WHERE user_id = $1
        ORDER BY timestamp DESC, id DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
