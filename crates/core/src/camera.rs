//! Horizontal scrolling camera.

use crate::types::{CAMERA_OFFSET, CAMERA_SMOOTHNESS};

/// Horizontal camera that eases toward a point `CAMERA_OFFSET` units left of
/// the player, never showing anything outside `[0, level_width]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    camera_x: f64,
    target_camera_x: f64,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera_x(&self) -> f64 {
        self.camera_x
    }

    pub fn target_camera_x(&self) -> f64 {
        self.target_camera_x
    }

    /// Where the camera wants to be for a player at `player_x`.
    pub fn target_for(player_x: f64, viewport_width: f64, level_width: f64) -> f64 {
        let max_scroll = (level_width - viewport_width).max(0.0);
        (player_x - CAMERA_OFFSET).clamp(0.0, max_scroll)
    }

    /// Move a fraction of the way toward the current target.
    pub fn update(&mut self, player_x: f64, viewport_width: f64, level_width: f64) {
        self.target_camera_x = Self::target_for(player_x, viewport_width, level_width);
        self.camera_x += (self.target_camera_x - self.camera_x) * CAMERA_SMOOTHNESS;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// World x to screen x.
    pub fn to_screen_x(&self, world_x: f64) -> f64 {
        world_x - self.camera_x
    }
}
