//! Level data model and loader.
//!
//! Levels come in two JSON dialects:
//!
//! - **Custom**: the game's own schema (see [`custom`]), also produced by
//!   [`save`].
//! - **Tile map**: exports from tile-map editors, recognised by a top-level
//!   `"type": "map"` (see [`tiled`]).
//!
//! Both parsers are tolerant. Only the four shape fields of each object are
//! required; everything else falls back to a default. Each parser produces a
//! [`LevelRecord`] which is then turned into the canonical [`Level`].
//!
//! A level that cannot be loaded is never fatal: [`LevelLoader::load_numbered`]
//! substitutes a built-in layout from [`fallback`].
//!
//! # Example
//!
//! ```
//! use tui_runner_level::{parse_level, save};
//!
//! let level = parse_level(r#"{
//!     "levelId": 1,
//!     "platforms": [{"x": 0, "y": 350, "width": 400, "height": 50}]
//! }"#).unwrap();
//! assert_eq!(level.level_width(), 600.0);
//!
//! let again = parse_level(&save(&level).unwrap()).unwrap();
//! assert_eq!(again.platforms(), level.platforms());
//! ```

pub mod custom;
pub mod fallback;
pub mod level;
pub mod loader;
pub mod record;
pub mod source;
pub mod tiled;

pub use tui_runner_types as types;

pub use custom::save;
pub use fallback::{fallback_level, fallback_or_empty};
pub use level::Level;
pub use loader::{parse_level, LevelFormat, LevelLoader, LoadError};
pub use record::LevelRecord;
pub use source::{level_source_id, DirSource, LevelSource, MemorySource};
pub use tiled::ObjectCategory;
