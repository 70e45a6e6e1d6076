//! Simulation core - pure, deterministic, and testable
//!
//! This crate holds the per-frame physics, the scrolling camera and the run
//! state machine. It does no terminal or file I/O of its own: levels come in
//! through a [`LevelSource`](level::LevelSource) and frames go out as a
//! [`Scene`].
//!
//! # Module Structure
//!
//! - [`player`]: player kinematic state and input intents
//! - [`physics`]: per-tick movement and collision resolution
//! - [`camera`]: smoothed horizontal scrolling
//! - [`session`]: run lifecycle, score and level progression
//! - [`scene`]: drawable output (screen-space rectangles + HUD text)
//! - [`config`]: environment-driven runtime settings
//!
//! # Rules
//!
//! - **Movement**: 5 units per tick horizontally, no acceleration
//! - **Gravity**: +1 unit/tick² always, jump impulse -20
//! - **Collision**: axis-aligned rectangles, horizontal first, one platform
//!   resolved per tick
//! - **Hazards**: falling below the viewport or touching an obstacle ends the run
//! - **Progression**: three levels, +100 per level cleared
//!
//! # Example
//!
//! ```
//! use tui_runner_core::{GameSession, ViewportSize};
//! use tui_runner_core::level::MemorySource;
//! use tui_runner_core::types::{InputEvent, SessionPhase};
//!
//! // No documents: the built-in layouts are used.
//! let mut session = GameSession::new(MemorySource::new(), ViewportSize::default());
//! session.start();
//!
//! session.handle_input(InputEvent::MoveRightPress);
//! for _ in 0..10 {
//!     session.tick();
//! }
//!
//! assert_eq!(session.phase(), SessionPhase::Running);
//! assert_eq!(session.player().x, 150.0);
//! ```
//!
//! # Timing
//!
//! One call to [`GameSession::tick`](session::GameSession::tick) is one
//! simulation step. The host decides the frame rate (16ms by default).

pub mod camera;
pub mod config;
pub mod physics;
pub mod player;
pub mod scene;
pub mod session;
pub mod snapshot;

pub use tui_runner_level as level;
pub use tui_runner_types as types;

// Re-export commonly used types for convenience
pub use camera::Camera;
pub use config::{RunnerConfig, ViewportSize};
pub use physics::{step, StepOutcome, VerticalContact};
pub use player::PlayerState;
pub use scene::{avatar_image, compose, compose_into, hud_text, DrawItem, DrawKind, Scene};
pub use session::{DeathCause, GameSession, SessionEvent};
pub use snapshot::SessionSnapshot;
