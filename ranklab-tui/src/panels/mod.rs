//! Render widgets: the chart and its sibling leaderboard table.

mod chart;
mod leaderboard;

pub use chart::ChartPanel;
pub use leaderboard::LeaderboardPanel;
