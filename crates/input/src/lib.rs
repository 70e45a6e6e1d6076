//! Terminal input module (simulation-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] and host
//! commands, and tracks held movement keys so terminals without key-release
//! events still produce press/release pairs.

pub mod handler;
pub mod map;

pub use tui_runner_types as types;

pub use handler::{HorizontalDirection, KeyTracker};
pub use map::{game_key, handle_key_event, host_command, should_quit, GameKey, HostCommand};
