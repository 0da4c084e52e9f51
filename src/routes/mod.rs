pub mod leaderboard;
pub mod status;
pub mod user;

pub use leaderboard::get_leaderboard;
pub use status::{get_status, test_api};
pub use user::{get_user_profile, get_user_transactions};
