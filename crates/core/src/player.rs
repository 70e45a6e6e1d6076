//! Player kinematic state and input intents.

use crate::types::{InputEvent, Rect, JUMP_IMPULSE, PLAYER_SIZE, SPAWN_X, SPAWN_Y};

/// The player avatar: a `PLAYER_SIZE` square with velocity and held intents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Top-left corner
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub is_jumping: bool,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl PlayerState {
    /// Player at rest at `(x, y)` with no intents.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            is_jumping: false,
            moving_left: false,
            moving_right: false,
        }
    }

    /// Player at the level spawn point.
    pub fn spawn() -> Self {
        Self::at(SPAWN_X, SPAWN_Y)
    }

    /// Move back to the spawn point and stop, keeping held intents.
    ///
    /// Used between levels: the keys the user is holding are still held.
    pub fn respawn(&mut self) {
        *self = Self {
            moving_left: self.moving_left,
            moving_right: self.moving_right,
            ..Self::spawn()
        };
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Start a jump unless one is already in progress.
    pub fn try_jump(&mut self) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.vy = JUMP_IMPULSE;
        true
    }

    /// Apply a movement or jump event. Returns false for events the player
    /// does not handle (pause, escape) and for a jump that was refused.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Jump => self.try_jump(),
            InputEvent::MoveLeftPress => {
                self.moving_left = true;
                true
            }
            InputEvent::MoveLeftRelease => {
                self.moving_left = false;
                true
            }
            InputEvent::MoveRightPress => {
                self.moving_right = true;
                true
            }
            InputEvent::MoveRightRelease => {
                self.moving_right = false;
                true
            }
            InputEvent::Pause | InputEvent::Escape => false,
        }
    }

    pub fn release_all(&mut self) {
        self.moving_left = false;
        self.moving_right = false;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::spawn()
    }
}
