//! Physics and camera properties over the bundled and built-in levels

use std::path::PathBuf;

use tui_runner::core::physics::{step, step_horizontal, step_vertical, StepOutcome, VerticalContact};
use tui_runner::core::{Camera, PlayerState};
use tui_runner::level::{fallback_level, DirSource, Level, LevelLoader};
use tui_runner::types::{Rect, MAX_LEVELS, PLAYER_SIZE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

fn all_levels() -> Vec<Level> {
    let loader = LevelLoader::new(DirSource::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("levels"),
    ));
    let mut levels: Vec<Level> = (1..=MAX_LEVELS).map(|n| loader.load_numbered(n)).collect();
    levels.extend((1..=MAX_LEVELS).filter_map(fallback_level));
    levels
}

#[test]
fn test_grounded_stability_on_every_platform() {
    for level in all_levels() {
        for platform in level.platforms() {
            let mut player = PlayerState::at(platform.x, platform.top() - PLAYER_SIZE);
            for _ in 0..5 {
                assert_eq!(step_vertical(&mut player, &level), VerticalContact::Grounded);
                assert_eq!(player.y, platform.top() - PLAYER_SIZE, "{}", level.level_name());
                assert_eq!(player.vy, 0.0);
            }
        }
    }
}

#[test]
fn test_jump_from_spawn_lands_on_same_platform() {
    let mut level = Level::new(1, None, "jump");
    level.add_platform(Rect::new(0.0, 350.0, 400.0, 50.0));

    let mut player = PlayerState::at(100.0, 300.0);
    assert!(player.try_jump());
    assert_eq!(player.vy, -20.0);

    let mut landed_at = None;
    for tick in 1..=100 {
        step(&mut player, &level, VIEWPORT_HEIGHT);
        if !player.is_jumping {
            landed_at = Some(tick);
            break;
        }
    }
    assert_eq!(landed_at, Some(40));
    assert_eq!(player.y, 300.0);
    assert_eq!(player.vy, 0.0);
}

#[test]
fn test_second_jump_only_after_landing() {
    let mut level = Level::new(1, None, "jump");
    level.add_platform(Rect::new(0.0, 350.0, 400.0, 50.0));
    let mut player = PlayerState::at(100.0, 300.0);

    assert!(player.try_jump());
    step(&mut player, &level, VIEWPORT_HEIGHT);
    assert!(!player.try_jump());

    while player.is_jumping {
        step(&mut player, &level, VIEWPORT_HEIGHT);
    }
    assert!(player.try_jump());
}

#[test]
fn test_horizontal_travel_stays_inside_level() {
    for level in all_levels() {
        let mut player = PlayerState::at(level.level_width(), 0.0);
        player.moving_right = true;
        step_horizontal(&mut player, &level);
        assert!(player.x <= level.level_width() - PLAYER_SIZE);

        let mut player = PlayerState::at(-30.0, 0.0);
        player.moving_left = true;
        step_horizontal(&mut player, &level);
        assert_eq!(player.x, 0.0);
    }
}

#[test]
fn test_walking_off_a_ledge_falls_out() {
    let mut level = Level::new(1, None, "ledge");
    level.add_platform(Rect::new(0.0, 350.0, 200.0, 50.0));
    level.set_level_width(2000.0);

    let mut player = PlayerState::at(100.0, 300.0);
    player.moving_right = true;

    let mut outcome = StepOutcome::Continue;
    for _ in 0..200 {
        outcome = step(&mut player, &level, VIEWPORT_HEIGHT);
        if outcome != StepOutcome::Continue {
            break;
        }
    }
    assert_eq!(outcome, StepOutcome::FellOut);
    assert!(player.x > 200.0);
}

#[test]
fn test_camera_target_always_in_bounds() {
    for level in all_levels() {
        let max_scroll = (level.level_width() - VIEWPORT_WIDTH).max(0.0);
        let mut x = -100.0;
        while x < level.level_width() + 100.0 {
            let target = Camera::target_for(x, VIEWPORT_WIDTH, level.level_width());
            assert!((0.0..=max_scroll).contains(&target));
            x += 37.0;
        }
    }
}

#[test]
fn test_camera_converges_geometrically() {
    let level_width = 3000.0;
    let mut camera = Camera::new();
    let player_x = 1500.0;
    camera.update(player_x, VIEWPORT_WIDTH, level_width);

    let mut gap = (camera.target_camera_x() - camera.camera_x()).abs();
    for _ in 0..50 {
        camera.update(player_x, VIEWPORT_WIDTH, level_width);
        let next = (camera.target_camera_x() - camera.camera_x()).abs();
        assert!(next <= gap * 0.9 + 1e-9);
        gap = next;
    }
    assert!(gap < 10.0);
}
