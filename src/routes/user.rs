use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TRANSACTION_LIMIT, MAX_TRANSACTION_LIMIT};
use crate::db::queries::{
    fetch_controlled_targets, fetch_controller_of, fetch_immunities, fetch_inventory,
    fetch_membership, fetch_user, recent_transactions,
};
use crate::error::{AppError, Result};
use crate::models::{
    BuyerImmunity, ControlRelationship, InventoryItem, Membership, Transaction, User,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TransactionParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub user: User,
    pub membership: Option<Membership>,
    pub inventory: Vec<InventoryItem>,
    /// Incoming control edge; at most one by the unique-target constraint
    pub controlled_by: Option<ControlRelationship>,
    /// Outgoing control edges this user holds over others
    pub controlling: Vec<ControlRelationship>,
    /// Immunity grants protecting this user from specific buyers
    pub immunities: Vec<BuyerImmunity>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionHistoryResponse {
    pub user_id: String,
    pub transactions: Vec<Transaction>,
    pub timestamp: String,
}

/// Full game state for one user
///
/// Aggregates the user row with its membership, inventory, both sides of
/// the control graph and any immunity grants, so the overlay can render a
/// profile card with a single request.
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfileResponse>> {
    let user = fetch_user(&state.pool, &user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let membership = fetch_membership(&state.pool, &user_id).await?;
    let inventory = fetch_inventory(&state.pool, &user_id).await?;
    let controlled_by = fetch_controller_of(&state.pool, &user_id).await?;
    let controlling = fetch_controlled_targets(&state.pool, &user_id).await?;
    let immunities = fetch_immunities(&state.pool, &user_id).await?;

    Ok(Json(UserProfileResponse {
        user,
        membership,
        inventory,
        controlled_by,
        controlling,
        immunities,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Recent ledger entries for one user, newest first
pub async fn get_user_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<TransactionParams>,
) -> Result<Json<TransactionHistoryResponse>> {
    let limit = clamp_limit(params.limit);

    // Unknown channel ids get a 404 rather than an empty ledger
    if fetch_user(&state.pool, &user_id).await?.is_none() {
        return Err(AppError::UserNotFound);
    }

    let transactions = recent_transactions(&state.pool, &user_id, limit).await?;

    tracing::debug!(
        "Returning {} ledger entries for user {}",
        transactions.len(),
        user_id
    );

    Ok(Json(TransactionHistoryResponse {
        user_id,
        transactions,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Clamp a caller-supplied history limit into the allowed range
fn clamp_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_TRANSACTION_LIMIT)
        .clamp(1, MAX_TRANSACTION_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_default() {
        assert_eq!(clamp_limit(None), DEFAULT_TRANSACTION_LIMIT);
    }

    #[test]
    fn test_clamp_limit_in_range_passthrough() {
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(MAX_TRANSACTION_LIMIT)), MAX_TRANSACTION_LIMIT);
    }

    #[test]
    fn test_clamp_limit_bounds() {
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(10_000)), MAX_TRANSACTION_LIMIT);
    }
}
