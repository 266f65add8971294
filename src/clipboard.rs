//! Copying to the clipboard
//!
//! `system` goes through the desktop clipboard, `osc52` asks the terminal
//! to do it (works over SSH and inside tmux). `auto` tries the system
//! clipboard first.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, copy_to_clipboard};
