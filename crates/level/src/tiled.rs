//! Tile-editor map export.
//!
//! Only object-group layers are read. Each object is classified by keyword,
//! looking at both the layer name and the object's own `type` (or `name` when
//! the type is empty):
//!
//! | Category | Keywords |
//! |----------|----------|
//! | platform | `platform` |
//! | obstacle | `obstacle`, `spike`, `enemy` |
//! | goal | `goal`, `flag`, `finish` |
//!
//! Categories are tried in that order and the first hit wins. Objects that
//! match nothing are dropped. A map-level custom property named `background`
//! with a string value becomes the background path.

use serde::Deserialize;

use crate::record::LevelRecord;
use crate::types::Rect;

/// Value of the top-level `type` field that marks a tile-editor map.
pub const MAP_DISCRIMINATOR: &str = "map";

const OBJECT_GROUP: &str = "objectgroup";
const BACKGROUND_PROPERTY: &str = "background";

#[derive(Debug, Deserialize)]
struct TiledMap {
    /// Map width in tiles
    #[serde(default)]
    width: u32,
    /// Tile width in pixels; map height is irrelevant to a side-scroller
    #[serde(default)]
    tilewidth: u32,
    #[serde(default)]
    layers: Vec<TiledLayer>,
    #[serde(default)]
    properties: Vec<TiledProperty>,
}

#[derive(Debug, Deserialize)]
struct TiledLayer {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    objects: Vec<TiledObject>,
}

#[derive(Debug, Deserialize)]
struct TiledObject {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TiledProperty {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: serde_json::Value,
}

/// What an object in the map turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    Platform,
    Obstacle,
    Goal,
}

impl ObjectCategory {
    const ORDER: [ObjectCategory; 3] = [
        ObjectCategory::Platform,
        ObjectCategory::Obstacle,
        ObjectCategory::Goal,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            ObjectCategory::Platform => &["platform"],
            ObjectCategory::Obstacle => &["obstacle", "spike", "enemy"],
            ObjectCategory::Goal => &["goal", "flag", "finish"],
        }
    }

    /// Classify by layer name and object type/name, case-insensitively.
    pub fn classify(layer_name: &str, object_type: &str) -> Option<Self> {
        let layer = layer_name.to_lowercase();
        let object = object_type.to_lowercase();
        Self::ORDER.into_iter().find(|category| {
            category
                .keywords()
                .iter()
                .any(|k| layer.contains(k) || object.contains(k))
        })
    }
}

impl TiledObject {
    fn type_label(&self) -> &str {
        match (self.kind.as_deref(), self.name.as_deref()) {
            (Some(kind), _) if !kind.is_empty() => kind,
            (_, Some(name)) => name,
            _ => "",
        }
    }
}

/// Parse an already-decoded tile-editor map.
pub(crate) fn parse(doc: serde_json::Value) -> Result<LevelRecord, serde_json::Error> {
    let map: TiledMap = serde_json::from_value(doc)?;

    let pixel_width = f64::from(map.width) * f64::from(map.tilewidth);
    let mut record = LevelRecord {
        level_width: (pixel_width > 0.0).then_some(pixel_width),
        ..Default::default()
    };

    for layer in map.layers.iter().filter(|l| l.kind == OBJECT_GROUP) {
        for object in &layer.objects {
            let rect = Rect::new(object.x, object.y, object.width, object.height);
            match ObjectCategory::classify(&layer.name, object.type_label()) {
                Some(ObjectCategory::Platform) => record.platforms.push(rect),
                Some(ObjectCategory::Obstacle) => record.obstacles.push(rect),
                Some(ObjectCategory::Goal) => record.goal = Some(rect),
                None => {}
            }
        }
    }

    for property in &map.properties {
        if property.name == BACKGROUND_PROPERTY {
            if let Some(path) = property.value.as_str() {
                record.background_path = Some(path.to_string());
            }
        }
    }

    Ok(record)
}
