/// Number of rows the leaderboard returns
/// The stream overlay renders exactly one screen of 25 entries
pub const LEADERBOARD_LIMIT: i64 = 25;

/// Default activity window in minutes
/// Users whose rows were untouched for longer count as offline
pub const DEFAULT_WINDOW_MINUTES: i64 = 30;

/// Default number of ledger entries returned by the transaction history
pub const DEFAULT_TRANSACTION_LIMIT: i64 = 50;

/// Upper bound for caller-supplied transaction history limits
pub const MAX_TRANSACTION_LIMIT: i64 = 200;

/// The single origin allowed to call /api/* cross-origin
/// (the GitHub Pages deployment of the stream overlay)
pub const ALLOWED_ORIGIN: &str = "https://esemicolonr.github.io";
