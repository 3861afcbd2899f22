mod leaderboard;

pub use leaderboard::{LeaderboardConfig, LeaderboardService};
