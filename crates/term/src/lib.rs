//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. The core produces a
//! [`Scene`](crate::core::Scene) of world-space rectangles; [`SceneView`]
//! rasterizes it into a character [`FrameBuffer`], and [`TerminalRenderer`]
//! flushes that buffer to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only re-encode cells that changed between frames
//! - Scale world units to cells so the whole viewport fits a standard terminal

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{SceneView, Viewport};
