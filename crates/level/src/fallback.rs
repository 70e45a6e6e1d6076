//! Built-in layouts used when a level document is missing or broken.

use crate::level::Level;
use crate::types::Rect;

struct FallbackLayout {
    name: &'static str,
    background: &'static str,
    platforms: &'static [Rect],
    obstacles: &'static [Rect],
    goal: Rect,
}

/// Indexed by `level_number - 1`.
static FALLBACK_LEVELS: [FallbackLayout; 3] = [
    FallbackLayout {
        name: "Level 1",
        background: "leveltest.png",
        platforms: &[
            Rect::new(0.0, 350.0, 400.0, 50.0),
            Rect::new(500.0, 350.0, 400.0, 50.0),
            Rect::new(200.0, 250.0, 200.0, 20.0),
        ],
        obstacles: &[Rect::new(600.0, 300.0, 50.0, 50.0)],
        goal: Rect::new(850.0, 300.0, 50.0, 50.0),
    },
    FallbackLayout {
        name: "Level 2",
        background: "background.png",
        platforms: &[
            Rect::new(0.0, 350.0, 300.0, 50.0),
            Rect::new(400.0, 350.0, 300.0, 50.0),
            Rect::new(150.0, 200.0, 150.0, 20.0),
            Rect::new(500.0, 150.0, 150.0, 20.0),
        ],
        obstacles: &[
            Rect::new(250.0, 300.0, 50.0, 50.0),
            Rect::new(550.0, 100.0, 50.0, 50.0),
        ],
        goal: Rect::new(750.0, 100.0, 50.0, 50.0),
    },
    FallbackLayout {
        name: "Level 3",
        background: "background.png",
        platforms: &[
            Rect::new(0.0, 350.0, 200.0, 50.0),
            Rect::new(300.0, 350.0, 200.0, 50.0),
            Rect::new(600.0, 350.0, 200.0, 50.0),
            Rect::new(100.0, 250.0, 100.0, 20.0),
            Rect::new(400.0, 200.0, 100.0, 20.0),
            Rect::new(700.0, 150.0, 100.0, 20.0),
        ],
        obstacles: &[
            Rect::new(150.0, 300.0, 50.0, 50.0),
            Rect::new(450.0, 150.0, 50.0, 50.0),
        ],
        goal: Rect::new(850.0, 100.0, 50.0, 50.0),
    },
];

/// Built-in layout for `level_number`, if there is one.
pub fn fallback_level(level_number: u8) -> Option<Level> {
    let index = usize::from(level_number).checked_sub(1)?;
    let layout = FALLBACK_LEVELS.get(index)?;

    let mut level = Level::new(
        u32::from(level_number),
        Some(layout.background.to_string()),
        layout.name,
    );
    for &platform in layout.platforms {
        level.add_platform(platform);
    }
    for &obstacle in layout.obstacles {
        level.add_obstacle(obstacle);
    }
    level.set_goal(Some(layout.goal));
    Some(level)
}

/// Built-in layout, or an empty level when none exists for that number.
pub fn fallback_or_empty(level_number: u8) -> Level {
    fallback_level(level_number)
        .unwrap_or_else(|| Level::new(u32::from(level_number), None, format!("Level {level_number}")))
}
