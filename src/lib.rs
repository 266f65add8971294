//! rollcall library - terminal contributor directory
//!
//! Exposes the leaderboard merge and the TUI pieces for the binary and tests.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod detail;
pub mod directory;
pub mod error;
pub mod heatmap;
pub mod help;
pub mod notification;
pub mod repository;
pub mod scroll;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use app::App;
pub use config::Config;
