//! Shared types and tuning constants for the runner simulation.
//!
//! Everything in here is plain data with no dependencies, so the level loader,
//! the simulation core, the terminal view and the input layer can all agree on
//! geometry and events without depending on each other.
//!
//! # Coordinate system
//!
//! Level space uses `f64` units with the origin at the top-left corner:
//! `x` grows to the right, `y` grows downwards. The default viewport is
//! 800x600 units.
//!
//! # Simulation constants
//!
//! All motion constants are expressed per tick (one host frame):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_SIZE` | 50 | Side of the square player avatar |
//! | `PLAYER_SPEED` | 5 | Horizontal speed while a move key is held |
//! | `GRAVITY` | 1 | Added to vertical velocity every tick |
//! | `JUMP_IMPULSE` | -20 | Vertical velocity set by a jump |
//! | `CAMERA_OFFSET` | 300 | Desired gap between viewport left edge and player |
//! | `CAMERA_SMOOTHNESS` | 0.1 | Fraction of the remaining distance covered per tick |
//! | `LEVEL_WIDTH_PADDING` | 200 | Added to the right-most geometry edge |
//! | `SCORE_PER_LEVEL` | 100 | Awarded for every goal reached |
//! | `MAX_LEVELS` | 3 | Length of a run |
//!
//! # Examples
//!
//! ```
//! use tui_runner_types::{InputEvent, Rect};
//!
//! let floor = Rect::new(0.0, 350.0, 400.0, 50.0);
//! let player = Rect::new(100.0, 300.0, 50.0, 50.0);
//!
//! // Touching edges do not count as an overlap.
//! assert!(!player.intersects(&floor));
//! assert!(Rect::new(100.0, 301.0, 50.0, 50.0).intersects(&floor));
//!
//! assert_eq!(InputEvent::from_str("jump"), Some(InputEvent::Jump));
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default viewport width in level units
pub const VIEWPORT_WIDTH: f64 = 800.0;

/// Default viewport height in level units (falling below it ends the run)
pub const VIEWPORT_HEIGHT: f64 = 600.0;

/// Side length of the square player avatar
pub const PLAYER_SIZE: f64 = 50.0;

/// Horizontal speed while a move intent is held
pub const PLAYER_SPEED: f64 = 5.0;

/// Gravity acceleration (units per tick²)
pub const GRAVITY: f64 = 1.0;

/// Vertical velocity applied by a jump
pub const JUMP_IMPULSE: f64 = -20.0;

/// Spawn point used at the start of every level
pub const SPAWN_X: f64 = 100.0;
pub const SPAWN_Y: f64 = 300.0;

/// Desired distance between the left viewport edge and the player
pub const CAMERA_OFFSET: f64 = 300.0;

/// Per-tick camera smoothing factor, in (0, 1)
pub const CAMERA_SMOOTHNESS: f64 = 0.1;

/// Padding added after the right-most piece of geometry
pub const LEVEL_WIDTH_PADDING: f64 = 200.0;

/// Score awarded per level cleared
pub const SCORE_PER_LEVEL: u32 = 100;

/// Number of levels in a run
pub const MAX_LEVELS: u8 = 3;

/// Number of avatar animation frames
pub const AVATAR_FRAMES: u8 = 3;

/// Ticks between avatar animation frames
pub const AVATAR_SWAP_DELAY: u32 = 10;


/// Axis-aligned rectangle in level space.
///
/// `(x, y)` is the top-left corner. Rectangles are plain values; "moving" one
/// means building a new one with [`Rect::at`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same size, new top-left corner.
    pub const fn at(&self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Overlap test with open intervals on both axes.
    ///
    /// Rectangles that only share an edge do not intersect. A player resting
    /// exactly on a platform is therefore free to walk along it.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Discrete input events delivered by the host.
///
/// Jump is edge-triggered. Horizontal movement is level-triggered: a press
/// sets the intent and only the matching release clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Jump,
    MoveLeftPress,
    MoveLeftRelease,
    MoveRightPress,
    MoveRightRelease,
    /// Toggle pause
    Pause,
    /// Leave the current run (back to idle)
    Escape,
}

impl InputEvent {
    /// Parse an event name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jump" => Some(InputEvent::Jump),
            "moveleftpress" => Some(InputEvent::MoveLeftPress),
            "moveleftrelease" => Some(InputEvent::MoveLeftRelease),
            "moverightpress" => Some(InputEvent::MoveRightPress),
            "moverightrelease" => Some(InputEvent::MoveRightRelease),
            "pause" => Some(InputEvent::Pause),
            "escape" => Some(InputEvent::Escape),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Jump => "jump",
            InputEvent::MoveLeftPress => "moveLeftPress",
            InputEvent::MoveLeftRelease => "moveLeftRelease",
            InputEvent::MoveRightPress => "moveRightPress",
            InputEvent::MoveRightRelease => "moveRightRelease",
            InputEvent::Pause => "pause",
            InputEvent::Escape => "escape",
        }
    }
}

/// Session lifecycle phase.
///
/// `Idle → Running → {LevelTransition → Running | GameOver}`. A
/// `LevelTransition` is only observable after the final level is cleared,
/// where it is terminal; intermediate transitions complete within the tick
/// that reached the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    LevelTransition,
    GameOver,
}

impl SessionPhase {
    /// Whether the run has ended and needs an explicit restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::LevelTransition | SessionPhase::GameOver)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    /// Every level was cleared
    Won,
    /// Fell out of the level or touched an obstacle
    Died,
}

/// Final result handed to whoever shows the end-of-run screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunResult {
    pub score: u32,
    pub level_number: u8,
    pub outcome: RunOutcome,
}
