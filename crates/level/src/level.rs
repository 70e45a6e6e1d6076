//! Canonical in-memory level representation.

use crate::types::{Rect, LEVEL_WIDTH_PADDING};

/// One playable level: solid platforms, lethal obstacles and an optional goal.
///
/// `level_width` is either derived from geometry (right-most edge plus
/// [`LEVEL_WIDTH_PADDING`]) or explicitly supplied by the level document. A
/// derived width is kept current by every geometry mutation, so the camera and
/// the physics clamp can always trust it.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    level_id: u32,
    level_name: String,
    background_path: Option<String>,
    platforms: Vec<Rect>,
    obstacles: Vec<Rect>,
    goal: Option<Rect>,
    level_width: f64,
    explicit_width: bool,
}

impl Level {
    pub fn new(level_id: u32, background_path: Option<String>, level_name: impl Into<String>) -> Self {
        let mut level = Self {
            level_id,
            level_name: level_name.into(),
            background_path,
            platforms: Vec::new(),
            obstacles: Vec::new(),
            goal: None,
            level_width: 0.0,
            explicit_width: false,
        };
        level.calculate_level_width();
        level
    }

    /// Build a level from complete geometry, deriving the width once.
    ///
    /// A `level_width` that is absent or not positive means derived.
    pub(crate) fn from_parts(
        level_id: u32,
        level_name: String,
        background_path: Option<String>,
        platforms: Vec<Rect>,
        obstacles: Vec<Rect>,
        goal: Option<Rect>,
        level_width: Option<f64>,
    ) -> Self {
        let mut level = Self {
            level_id,
            level_name,
            background_path,
            platforms,
            obstacles,
            goal,
            level_width: 0.0,
            explicit_width: false,
        };
        match level_width {
            Some(width) if width > 0.0 => level.set_level_width(width),
            _ => level.calculate_level_width(),
        }
        level
    }

    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    pub fn set_level_id(&mut self, level_id: u32) {
        self.level_id = level_id;
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn set_level_name(&mut self, level_name: impl Into<String>) {
        self.level_name = level_name.into();
    }

    pub fn background_path(&self) -> Option<&str> {
        self.background_path.as_deref()
    }

    pub fn set_background_path(&mut self, background_path: Option<String>) {
        self.background_path = background_path;
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn goal(&self) -> Option<Rect> {
        self.goal
    }

    pub fn level_width(&self) -> f64 {
        self.level_width
    }

    /// True when the width came from the level document rather than geometry.
    pub fn has_explicit_width(&self) -> bool {
        self.explicit_width
    }

    pub fn add_platform(&mut self, rect: Rect) {
        self.platforms.push(rect);
        self.geometry_changed();
    }

    pub fn add_obstacle(&mut self, rect: Rect) {
        self.obstacles.push(rect);
        self.geometry_changed();
    }

    pub fn set_goal(&mut self, goal: Option<Rect>) {
        self.goal = goal;
        self.geometry_changed();
    }

    /// Pin the level width. Non-positive values switch back to a derived width.
    pub fn set_level_width(&mut self, width: f64) {
        if width > 0.0 {
            self.level_width = width;
            self.explicit_width = true;
        } else {
            self.calculate_level_width();
        }
    }

    /// Derive the width from geometry, dropping any explicit width.
    pub fn calculate_level_width(&mut self) {
        self.explicit_width = false;
        self.level_width = self.geometry_extent() + LEVEL_WIDTH_PADDING;
    }

    /// Right-most edge over platforms, obstacles and goal (0 when empty).
    pub fn geometry_extent(&self) -> f64 {
        self.platforms
            .iter()
            .chain(self.obstacles.iter())
            .chain(self.goal.iter())
            .map(Rect::right)
            .fold(0.0, f64::max)
    }

    fn geometry_changed(&mut self) {
        if !self.explicit_width {
            self.calculate_level_width();
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(0, None, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_level_is_padding_wide() {
        let level = Level::default();
        assert_eq!(level.level_width(), LEVEL_WIDTH_PADDING);
        assert!(level.platforms().is_empty());
        assert!(level.goal().is_none());
    }

    #[test]
    fn derived_width_tracks_geometry() {
        let mut level = Level::new(1, None, "test");
        level.add_platform(Rect::new(0.0, 350.0, 400.0, 50.0));
        assert_eq!(level.level_width(), 600.0);

        level.add_obstacle(Rect::new(600.0, 300.0, 50.0, 50.0));
        assert_eq!(level.level_width(), 850.0);

        level.set_goal(Some(Rect::new(850.0, 300.0, 50.0, 50.0)));
        assert_eq!(level.level_width(), 1100.0);

        // Removing the goal shrinks it again.
        level.set_goal(None);
        assert_eq!(level.level_width(), 850.0);
    }

    #[test]
    fn explicit_width_is_not_overwritten_by_geometry() {
        let mut level = Level::default();
        level.set_level_width(3000.0);
        level.add_platform(Rect::new(0.0, 350.0, 5000.0, 50.0));
        assert_eq!(level.level_width(), 3000.0);
        assert!(level.has_explicit_width());

        level.set_level_width(0.0);
        assert!(!level.has_explicit_width());
        assert_eq!(level.level_width(), 5200.0);
    }
}
