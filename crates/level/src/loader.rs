//! Level loading: format detection, error taxonomy and fallback policy.

use thiserror::Error;
use tracing::{debug, warn};

use crate::fallback::fallback_or_empty;
use crate::level::Level;
use crate::record::LevelRecord;
use crate::source::{level_source_id, LevelSource};
use crate::{custom, tiled};

/// Why a level document could not be turned into a [`Level`].
///
/// Callers treat every variant the same way: the document does not exist as
/// far as gameplay is concerned and a fallback layout is used instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("level source not found: {source_id}")]
    NotFound { source_id: String },

    #[error("failed to read level source {source_id}: {err}")]
    Io {
        source_id: String,
        #[source]
        err: std::io::Error,
    },

    #[error("malformed level document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Which schema a document was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFormat {
    Custom,
    TileMap,
}

impl LevelFormat {
    /// Detect the schema from the top-level `type` discriminator.
    pub fn detect(doc: &serde_json::Value) -> Self {
        match doc.get("type").and_then(serde_json::Value::as_str) {
            Some(tiled::MAP_DISCRIMINATOR) => LevelFormat::TileMap,
            _ => LevelFormat::Custom,
        }
    }
}

/// Parse a level document in either format.
///
/// Never returns a partially populated level: any missing shape field or
/// syntax error fails the whole document.
pub fn parse_level(text: &str) -> Result<Level, LoadError> {
    let doc: serde_json::Value = serde_json::from_str(text)?;
    if !doc.is_object() {
        return Err(LoadError::Malformed(serde::de::Error::custom(
            "level document must be a JSON object",
        )));
    }

    let record: LevelRecord = match LevelFormat::detect(&doc) {
        LevelFormat::TileMap => tiled::parse(doc)?,
        LevelFormat::Custom => custom::parse(doc)?,
    };
    Ok(Level::from(record))
}

/// Loads levels from a [`LevelSource`].
#[derive(Debug, Clone)]
pub struct LevelLoader<S> {
    source: S,
}

impl<S: LevelSource> LevelLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load a single document by id.
    pub fn load(&self, source_id: &str) -> Result<Level, LoadError> {
        let text = self.source.read(source_id)?;
        parse_level(&text)
    }

    /// Load the n-th level of a run, substituting the built-in layout (or an
    /// empty level) when the document is missing or malformed.
    ///
    /// Documents without a `levelId` are stamped with `level_number`.
    pub fn load_numbered(&self, level_number: u8) -> Level {
        let source_id = level_source_id(level_number);
        match self.load(&source_id) {
            Ok(mut level) => {
                if level.level_id() == 0 {
                    level.set_level_id(u32::from(level_number));
                }
                debug!(source_id = %source_id, width = level.level_width(), "loaded level document");
                level
            }
            Err(err) => {
                warn!(source_id = %source_id, error = %err, "using built-in level layout");
                fallback_or_empty(level_number)
            }
        }
    }
}
