//! Level loader tests against the bundled level files and in-memory documents

use std::path::PathBuf;

use tui_runner::level::{
    fallback_level, parse_level, save, DirSource, Level, LevelLoader, LevelSource, LoadError,
    MemorySource,
};
use tui_runner::types::Rect;

fn bundled_levels() -> DirSource {
    DirSource::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("levels"))
}

#[test]
fn test_bundled_custom_level() {
    let loader = LevelLoader::new(bundled_levels());
    let level = loader.load("level1.json").unwrap();

    assert_eq!(level.level_id(), 1);
    assert_eq!(level.level_name(), "Meadow");
    assert_eq!(level.background_path(), Some("leveltest.png"));
    assert_eq!(level.platforms().len(), 3);
    assert_eq!(level.obstacles(), &[Rect::new(650.0, 300.0, 50.0, 50.0)]);
    assert_eq!(level.goal(), Some(Rect::new(900.0, 300.0, 50.0, 50.0)));
    // Widest platform ends at 1000, plus padding.
    assert_eq!(level.level_width(), 1200.0);
    assert!(!level.has_explicit_width());
}

#[test]
fn test_bundled_level_with_explicit_width() {
    let loader = LevelLoader::new(bundled_levels());
    let level = loader.load("level2.json").unwrap();
    assert_eq!(level.level_width(), 1400.0);
    assert!(level.has_explicit_width());
}

#[test]
fn test_bundled_tile_map_level() {
    let loader = LevelLoader::new(bundled_levels());
    let level = loader.load_numbered(3);

    // No levelId in a tile map: stamped with the level number.
    assert_eq!(level.level_id(), 3);
    assert_eq!(level.level_width(), 1200.0);
    assert_eq!(level.background_path(), Some("background.png"));
    assert_eq!(level.platforms().len(), 4);
    assert_eq!(
        level.obstacles(),
        &[
            Rect::new(500.0, 300.0, 50.0, 50.0),
            Rect::new(850.0, 300.0, 50.0, 50.0)
        ]
    );
    // The camera hint in the markers layer matches nothing and is dropped.
    assert_eq!(level.goal(), Some(Rect::new(1100.0, 300.0, 50.0, 50.0)));
}

#[test]
fn test_obstacles_layer_without_object_type() {
    let doc = r#"{
        "type": "map",
        "width": 40, "height": 15, "tilewidth": 20, "tileheight": 40,
        "layers": [{
            "type": "objectgroup",
            "name": "Obstacles",
            "objects": [{"x": 250, "y": 300, "width": 50, "height": 50}]
        }]
    }"#;
    let level = parse_level(doc).unwrap();
    assert_eq!(level.obstacles(), &[Rect::new(250.0, 300.0, 50.0, 50.0)]);
    assert!(level.platforms().is_empty());
    assert!(level.goal().is_none());
}

#[test]
fn test_save_then_load_round_trip() {
    let mut level = Level::new(7, Some("caves.png".to_string()), "Caves");
    level.add_platform(Rect::new(0.0, 350.0, 300.0, 50.0));
    level.add_platform(Rect::new(380.5, 320.25, 120.0, 20.0));
    level.add_obstacle(Rect::new(420.0, 270.0, 40.0, 50.0));
    level.set_goal(Some(Rect::new(600.0, 300.0, 50.0, 50.0)));

    let loaded = parse_level(&save(&level).unwrap()).unwrap();
    assert_eq!(loaded.level_id(), 7);
    assert_eq!(loaded.level_name(), "Caves");
    assert_eq!(loaded.background_path(), Some("caves.png"));
    assert_eq!(loaded.platforms(), level.platforms());
    assert_eq!(loaded.obstacles(), level.obstacles());
    assert_eq!(loaded.goal(), level.goal());
    assert_eq!(loaded.level_width(), level.level_width());
}

#[test]
fn test_round_trip_of_bundled_level() {
    let source = bundled_levels();
    let first = parse_level(&source.read("level2.json").unwrap()).unwrap();
    let again = parse_level(&save(&first).unwrap()).unwrap();
    assert_eq!(again.platforms(), first.platforms());
    assert_eq!(again.obstacles(), first.obstacles());
    assert_eq!(again.goal(), first.goal());
    assert_eq!(again.level_width(), first.level_width());
}

#[test]
fn test_missing_shape_field_fails_whole_document() {
    let doc = r#"{"platforms": [{"x": 0, "y": 350, "width": 400}]}"#;
    assert!(matches!(parse_level(doc), Err(LoadError::Malformed(_))));
}

#[test]
fn test_missing_directory_falls_back() {
    let loader = LevelLoader::new(DirSource::new("/definitely/not/a/level/dir"));
    assert!(matches!(
        loader.load("level1.json"),
        Err(LoadError::NotFound { .. })
    ));

    let level = loader.load_numbered(2);
    let expected = fallback_level(2).unwrap();
    assert_eq!(level.platforms(), expected.platforms());
    assert_eq!(level.goal(), expected.goal());
}

#[test]
fn test_malformed_document_falls_back() {
    let source = MemorySource::new().with("level1.json", r#"{"platforms": "nope"}"#);
    let level = LevelLoader::new(source).load_numbered(1);
    assert_eq!(level.level_name(), "Level 1");
    assert_eq!(level.obstacles(), &[Rect::new(600.0, 300.0, 50.0, 50.0)]);
}

#[test]
fn test_tile_map_built_with_json_macro() {
    let doc = serde_json::json!({
        "type": "map",
        "width": 30,
        "height": 15,
        "tilewidth": 20,
        "tileheight": 40,
        "layers": [
            {
                "type": "objectgroup",
                "name": "Platforms",
                "objects": [
                    {"type": "platform", "x": 0, "y": 350, "width": 600, "height": 50}
                ]
            },
            {
                "type": "objectgroup",
                "name": "Markers",
                "objects": [
                    {"name": "goal", "x": 520, "y": 300, "width": 50, "height": 50}
                ]
            }
        ]
    });
    let level = parse_level(&doc.to_string()).unwrap();
    assert_eq!(level.level_width(), 600.0);
    assert_eq!(level.platforms(), &[Rect::new(0.0, 350.0, 600.0, 50.0)]);
    assert_eq!(level.goal(), Some(Rect::new(520.0, 300.0, 50.0, 50.0)));
}
