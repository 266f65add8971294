//! Leaderboard data
//!
//! Per-period leaderboard files are merged into one de-duplicated
//! `Directory` of contributors.

mod bots;
pub mod loader;
mod merge;
mod types;

pub use bots::BotFilter;
pub use loader::{DirectoryLoader, LoadingState};
pub use merge::{ContributorRepository, merge_leaderboards, read_leaderboard};
pub use types::{ActivityStat, Contributor, DailyActivity, Directory, LeaderboardFile, SkippedFile};
