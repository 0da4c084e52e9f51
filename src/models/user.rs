use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User row from the `users` table
///
/// `id` is the YouTube channel ID. `points` is a real number and can go
/// negative; `updated_at` reflects the most recent mutation to the row and
/// drives the leaderboard's activity filter.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub points: f64,
    pub is_eliminated: bool,
    pub elimination_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Round a point balance to one decimal place for display
///
/// Uses the runtime's rounding primitive (half away from zero after the
/// FP multiply). Stored balances stay exact; only responses round.
pub fn round_points(points: f64) -> f64 {
    (points * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_points_one_decimal() {
        assert_eq!(round_points(12.34), 12.3);
        assert_eq!(round_points(3.14159), 3.1);
        assert_eq!(round_points(1234.56), 1234.6);
    }

    #[test]
    fn test_round_points_already_exact() {
        assert_eq!(round_points(7.0), 7.0);
        assert_eq!(round_points(46.8), 46.8);
        assert_eq!(round_points(0.0), 0.0);
    }

    #[test]
    fn test_round_points_carries_past_integer() {
        assert_eq!(round_points(99.96), 100.0);
        assert_eq!(round_points(99.99), 100.0);
    }

    #[test]
    fn test_round_points_negative_balances() {
        // Balances are not bounded below
        assert_eq!(round_points(-3.27), -3.3);
        assert_eq!(round_points(-0.26), -0.3);
    }

    #[test]
    fn test_round_points_half_rounds_away_from_zero() {
        // 12.35 * 10.0 lands exactly on 123.5 in binary; the runtime
        // primitive resolves the tie away from zero
        assert_eq!(round_points(12.35), 12.4);
    }
}
