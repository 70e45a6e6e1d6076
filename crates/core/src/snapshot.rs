use crate::player::PlayerState;
use crate::types::{RunResult, SessionPhase};

/// Plain copy of everything a renderer or test needs from a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub paused: bool,
    /// Monotonic run id (increments on every new run)
    pub run_id: u32,
    pub level_number: u8,
    pub score: u32,
    pub tick_count: u64,
    pub player: PlayerState,
    pub camera_x: f64,
    pub target_camera_x: f64,
    pub level_width: f64,
    /// 1-based avatar animation frame
    pub avatar_frame: u8,
    pub result: Option<RunResult>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            paused: false,
            run_id: 0,
            level_number: 1,
            score: 0,
            tick_count: 0,
            player: PlayerState::spawn(),
            camera_x: 0.0,
            target_camera_x: 0.0,
            level_width: 0.0,
            avatar_frame: 1,
            result: None,
        }
    }
}
