//! Native level document format.
//!
//! ```json
//! {
//!   "levelId": 1,
//!   "levelName": "First Steps",
//!   "backgroundPath": "leveltest.png",
//!   "levelWidth": 1100,
//!   "platforms": [{ "x": 0, "y": 350, "width": 400, "height": 50 }],
//!   "obstacles": [],
//!   "goal": { "x": 850, "y": 300, "width": 50, "height": 50 }
//! }
//! ```
//!
//! Every top-level field is optional; unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::record::{LevelRecord, RectDoc};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomLevelDoc {
    #[serde(default)]
    level_id: Option<u32>,
    #[serde(default)]
    level_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background_path: Option<String>,
    #[serde(default)]
    level_width: Option<f64>,
    #[serde(default)]
    platforms: Option<Vec<RectDoc>>,
    #[serde(default)]
    obstacles: Option<Vec<RectDoc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal: Option<RectDoc>,
}

impl From<CustomLevelDoc> for LevelRecord {
    fn from(doc: CustomLevelDoc) -> Self {
        Self {
            level_id: doc.level_id.unwrap_or_default(),
            level_name: doc.level_name.unwrap_or_default(),
            background_path: doc.background_path,
            level_width: doc.level_width,
            platforms: to_rects(doc.platforms),
            obstacles: to_rects(doc.obstacles),
            goal: doc.goal.map(Into::into),
        }
    }
}

fn to_rects(docs: Option<Vec<RectDoc>>) -> Vec<crate::types::Rect> {
    docs.unwrap_or_default().into_iter().map(Into::into).collect()
}

/// Parse an already-decoded custom document.
pub(crate) fn parse(doc: serde_json::Value) -> Result<LevelRecord, serde_json::Error> {
    let doc: CustomLevelDoc = serde_json::from_value(doc)?;
    Ok(doc.into())
}

/// Serialize a level into the custom format.
///
/// Loading the output reproduces the level's id, name, background, width and
/// geometry. The width is always written, so it comes back as explicit.
pub fn save(level: &Level) -> Result<String, serde_json::Error> {
    let doc = CustomLevelDoc {
        level_id: Some(level.level_id()),
        level_name: Some(level.level_name().to_string()),
        background_path: level.background_path().map(str::to_string),
        level_width: Some(level.level_width()),
        platforms: Some(level.platforms().iter().copied().map(Into::into).collect()),
        obstacles: Some(level.obstacles().iter().copied().map(Into::into).collect()),
        goal: level.goal().map(Into::into),
    };
    serde_json::to_string_pretty(&doc)
}
