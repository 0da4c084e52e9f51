use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_MINUTES, LEADERBOARD_LIMIT};
use crate::db::queries::top_active_users;
use crate::error::{AppError, Result};
use crate::models::{round_points, User};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub minutes: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub position: usize,
    pub username: String,
    pub points: f64,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub status: &'static str,
    pub users: Vec<LeaderboardEntry>,
    pub timestamp: String,
}

/// Active-user leaderboard
///
/// Returns the top 25 non-eliminated users by points among those whose rows
/// were updated within the activity window (`minutes`, default 30). The
/// `status` field reports whether the stream looks active, i.e. whether
/// anybody qualified at all.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<LeaderboardResponse>> {
    let minutes = params.minutes.unwrap_or(DEFAULT_WINDOW_MINUTES);

    // A zero or negative window is allowed: the cutoff simply lands at or
    // after "now" and the board comes back empty. Only values that overflow
    // the time arithmetic are rejected.
    let cutoff = Duration::try_minutes(minutes)
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .ok_or_else(|| AppError::InvalidInput("minutes out of range".to_string()))?;

    let users = top_active_users(&state.pool, cutoff, LEADERBOARD_LIMIT).await?;

    tracing::debug!(
        "Leaderboard matched {} users within {} minutes",
        users.len(),
        minutes
    );

    Ok(Json(build_response(users, Utc::now())))
}

/// Build the ranked response from rows already in leaderboard order
fn build_response(users: Vec<User>, generated_at: DateTime<Utc>) -> LeaderboardResponse {
    let entries: Vec<LeaderboardEntry> = users
        .into_iter()
        .enumerate()
        .map(|(i, user)| LeaderboardEntry {
            position: i + 1,
            username: user.username,
            points: round_points(user.points),
        })
        .collect();

    LeaderboardResponse {
        status: if entries.is_empty() { "inactive" } else { "active" },
        users: entries,
        timestamp: generated_at.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_row(id: &str, username: &str, points: f64) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            points,
            is_eliminated: false,
            elimination_reason: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_positions_are_one_based_in_row_order() {
        let rows = vec![
            user_row("UCaaa", "first", 300.0),
            user_row("UCbbb", "second", 200.0),
            user_row("UCccc", "third", 100.0),
        ];

        let response = build_response(rows, Utc::now());

        assert_eq!(response.status, "active");
        assert_eq!(response.users.len(), 3);
        assert_eq!(response.users[0].position, 1);
        assert_eq!(response.users[0].username, "first");
        assert_eq!(response.users[2].position, 3);
        assert_eq!(response.users[2].username, "third");
    }

    #[test]
    fn test_empty_rows_report_inactive() {
        let response = build_response(Vec::new(), Utc::now());

        assert_eq!(response.status, "inactive");
        assert!(response.users.is_empty());
    }

    #[test]
    fn test_entry_points_are_rounded_for_display() {
        let rows = vec![user_row("UCaaa", "precise", 12.34)];

        let response = build_response(rows, Utc::now());

        assert_eq!(response.users[0].points, 12.3);
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let generated_at = Utc::now();
        let response = build_response(Vec::new(), generated_at);

        assert_eq!(response.timestamp, generated_at.to_rfc3339());
        assert!(DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
