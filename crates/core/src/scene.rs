//! Drawable scene produced once per frame.
//!
//! The scene is an ordered list of rectangles in screen space (back to
//! front), each optionally carrying an image reference the host may use
//! instead of a flat fill. Only x is shifted by the camera.
//!
//! Composing into a reused [`Scene`] does not allocate once the scene has
//! seen the level: sprite names are static and the level background is
//! kept in [`Scene::background`] and only rewritten when it changes.

use std::fmt::Write as _;

use crate::level::Level;
use crate::snapshot::SessionSnapshot;
use crate::types::{Rect, AVATAR_FRAMES};

pub const GOAL_IMAGE: &str = "flag.png";

/// Player sprite per animation frame (frame 1 first).
pub const AVATAR_IMAGES: [&str; AVATAR_FRAMES as usize] = ["avatar1.png", "avatar2.png", "avatar3.png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Background,
    Platform,
    Obstacle,
    Goal,
    Player,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub kind: DrawKind,
    /// Screen-space rectangle
    pub rect: Rect,
    /// Sprite name. The background item carries none; see [`Scene::background`].
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub items: Vec<DrawItem>,
    /// Background image of the level being drawn
    pub background: Option<String>,
    pub hud: String,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.background = None;
        self.hud.clear();
    }

    /// Image reference for `item`, resolving the background.
    pub fn image_of<'a>(&'a self, item: &DrawItem) -> Option<&'a str> {
        match item.kind {
            DrawKind::Background => self.background.as_deref(),
            _ => item.image,
        }
    }

    /// Items of one kind, in draw order.
    pub fn of_kind(&self, kind: DrawKind) -> impl Iterator<Item = &DrawItem> + '_ {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}

pub fn hud_text(score: u32, level_number: u8) -> String {
    format!("Score: {score} | Level: {level_number}")
}

/// Sprite for an animation frame. Out-of-range frames clamp to the table.
pub fn avatar_image(frame: u8) -> &'static str {
    let index = usize::from(frame.clamp(1, AVATAR_FRAMES) - 1);
    AVATAR_IMAGES[index]
}

fn set_background(slot: &mut Option<String>, path: Option<&str>) {
    match (slot.as_mut(), path) {
        (Some(current), Some(path)) if current.as_str() == path => {}
        (Some(current), Some(path)) => {
            current.clear();
            current.push_str(path);
        }
        (None, Some(path)) => *slot = Some(path.to_string()),
        (_, None) => *slot = None,
    }
}

/// Fill `out` with the scene for `level` as seen in `snap`, reusing its
/// allocations.
pub fn compose_into(out: &mut Scene, level: &Level, snap: &SessionSnapshot, viewport_width: f64, viewport_height: f64) {
    out.items.clear();
    out.hud.clear();
    set_background(&mut out.background, level.background_path());
    let shift = |r: &Rect| r.at(r.x - snap.camera_x, r.y);

    out.items.push(DrawItem {
        kind: DrawKind::Background,
        rect: Rect::new(0.0, 0.0, viewport_width, viewport_height),
        image: None,
    });
    for platform in level.platforms() {
        out.items.push(DrawItem {
            kind: DrawKind::Platform,
            rect: shift(platform),
            image: None,
        });
    }
    for obstacle in level.obstacles() {
        out.items.push(DrawItem {
            kind: DrawKind::Obstacle,
            rect: shift(obstacle),
            image: None,
        });
    }
    if let Some(goal) = level.goal() {
        out.items.push(DrawItem {
            kind: DrawKind::Goal,
            rect: shift(&goal),
            image: Some(GOAL_IMAGE),
        });
    }
    out.items.push(DrawItem {
        kind: DrawKind::Player,
        rect: shift(&snap.player.rect()),
        image: Some(avatar_image(snap.avatar_frame)),
    });

    let _ = write!(out.hud, "Score: {} | Level: {}", snap.score, snap.level_number);
}

pub fn compose(level: &Level, snap: &SessionSnapshot, viewport_width: f64, viewport_height: f64) -> Scene {
    let mut scene = Scene::new();
    compose_into(&mut scene, level, snap, viewport_width, viewport_height);
    scene
}
