//! Format-neutral intermediate produced by both document parsers.

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::types::Rect;

/// Shape fields shared by both schemas. These are the only required fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDoc {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<RectDoc> for Rect {
    fn from(r: RectDoc) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RectDoc {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

/// Fully-defaulted level description.
///
/// Every optional document field has already been resolved to its default
/// here, so building the canonical [`Level`] cannot fail.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LevelRecord {
    pub level_id: u32,
    pub level_name: String,
    pub background_path: Option<String>,
    /// `None` means derive from geometry.
    pub level_width: Option<f64>,
    pub platforms: Vec<Rect>,
    pub obstacles: Vec<Rect>,
    pub goal: Option<Rect>,
}

impl From<LevelRecord> for Level {
    fn from(record: LevelRecord) -> Self {
        Level::from_parts(
            record.level_id,
            record.level_name,
            record.background_path,
            record.platforms,
            record.obstacles,
            record.goal,
            record.level_width,
        )
    }
}
