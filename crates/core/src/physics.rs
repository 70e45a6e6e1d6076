//! Per-tick movement and collision resolution.
//!
//! One call to [`step`] runs, in order:
//!
//! 1. **Horizontal**: velocity is `-PLAYER_SPEED`, `0` or `+PLAYER_SPEED`.
//!    Right is evaluated after left, so holding both moves right. The move is
//!    rejected outright if the player would overlap any platform (no sliding),
//!    then `x` is clamped to `[0, level_width - PLAYER_SIZE]`.
//! 2. **Vertical**: gravity is added every tick, even when standing. Only the
//!    first platform (in level order) hit by the candidate position is
//!    resolved: landing on top grounds the player, hitting the underside
//!    zeroes the rise but still commits the candidate position. Overlapping
//!    several platforms in one tick is not resolved any further.
//! 3. **Fall-out**: below the viewport ends the run.
//! 4. **Hazard**: touching an obstacle ends the run.
//! 5. **Goal**: touching the goal completes the level.
//!
//! A fatal result skips the remaining checks.

use crate::level::Level;
use crate::player::PlayerState;
use crate::types::{GRAVITY, PLAYER_SIZE, PLAYER_SPEED};

/// Result of one physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    FellOut,
    HitObstacle,
    ReachedGoal,
}

/// How the vertical step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// Landed on (or kept standing on) a platform
    Grounded,
    /// Hit the underside of a platform while rising
    HeadBump,
    Airborne,
}

/// Advance the player by one tick against `level`.
pub fn step(player: &mut PlayerState, level: &Level, viewport_height: f64) -> StepOutcome {
    step_horizontal(player, level);
    step_vertical(player, level);

    if player.y > viewport_height {
        return StepOutcome::FellOut;
    }

    let body = player.rect();
    if level.obstacles().iter().any(|o| body.intersects(o)) {
        return StepOutcome::HitObstacle;
    }

    match level.goal() {
        Some(goal) if body.intersects(&goal) => StepOutcome::ReachedGoal,
        _ => StepOutcome::Continue,
    }
}

/// Horizontal part of [`step`]. Returns true if the move was committed.
pub fn step_horizontal(player: &mut PlayerState, level: &Level) -> bool {
    player.vx = 0.0;
    if player.moving_left {
        player.vx = -PLAYER_SPEED;
    }
    if player.moving_right {
        player.vx = PLAYER_SPEED;
    }

    let candidate = player.rect().at(player.x + player.vx, player.y);
    let blocked = level.platforms().iter().any(|p| candidate.intersects(p));
    if !blocked {
        player.x = candidate.x;
    }

    let max_x = (level.level_width() - PLAYER_SIZE).max(0.0);
    player.x = player.x.clamp(0.0, max_x);
    !blocked
}

/// Vertical part of [`step`].
pub fn step_vertical(player: &mut PlayerState, level: &Level) -> VerticalContact {
    player.vy += GRAVITY;

    let current = player.rect();
    let candidate = current.at(player.x, player.y + player.vy);
    let hit = level.platforms().iter().find(|p| candidate.intersects(p));

    match hit {
        Some(platform) if player.vy > 0.0 && current.bottom() <= platform.top() => {
            player.y = platform.top() - PLAYER_SIZE;
            player.vy = 0.0;
            player.is_jumping = false;
            VerticalContact::Grounded
        }
        // The snap below the platform is overwritten by the candidate Y, so a
        // head bump only kills the rise.
        Some(platform) if player.vy < 0.0 && current.top() >= platform.bottom() => {
            player.y = candidate.y;
            player.vy = 0.0;
            VerticalContact::HeadBump
        }
        _ => {
            player.y = candidate.y;
            VerticalContact::Airborne
        }
    }
}
