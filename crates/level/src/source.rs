//! Level document repositories.
//!
//! The simulation never touches the filesystem directly; it asks a
//! [`LevelSource`] for the text behind an opaque id such as `level2.json`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::loader::LoadError;

/// Resolves opaque source ids into level documents.
pub trait LevelSource {
    /// Fetch the raw document. A missing document is `LoadError::NotFound`.
    fn read(&self, source_id: &str) -> Result<String, LoadError>;
}

impl<S: LevelSource + ?Sized> LevelSource for &S {
    fn read(&self, source_id: &str) -> Result<String, LoadError> {
        (**self).read(source_id)
    }
}

impl<S: LevelSource + ?Sized> LevelSource for Box<S> {
    fn read(&self, source_id: &str) -> Result<String, LoadError> {
        (**self).read(source_id)
    }
}

/// Conventional id for the n-th level of a run.
pub fn level_source_id(level_number: u8) -> String {
    format!("level{level_number}.json")
}

/// Reads level documents from a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LevelSource for DirSource {
    fn read(&self, source_id: &str) -> Result<String, LoadError> {
        let path = self.root.join(source_id);
        std::fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                source_id: source_id.to_string(),
            },
            _ => LoadError::Io {
                source_id: source_id.to_string(),
                err,
            },
        })
    }
}

/// In-memory documents, keyed by source id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source_id: impl Into<String>, doc: impl Into<String>) -> Self {
        self.insert(source_id, doc);
        self
    }

    pub fn insert(&mut self, source_id: impl Into<String>, doc: impl Into<String>) {
        self.docs.insert(source_id.into(), doc.into());
    }
}

impl LevelSource for MemorySource {
    fn read(&self, source_id: &str) -> Result<String, LoadError> {
        self.docs
            .get(source_id)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                source_id: source_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ids_follow_file_convention() {
        assert_eq!(level_source_id(1), "level1.json");
        assert_eq!(level_source_id(3), "level3.json");
    }

    #[test]
    fn memory_source_reports_missing_ids() {
        let source = MemorySource::new().with("level1.json", "{}");
        assert_eq!(source.read("level1.json").unwrap(), "{}");
        assert!(matches!(
            source.read("level2.json"),
            Err(LoadError::NotFound { .. })
        ));
    }

    #[test]
    fn dir_source_maps_missing_file_to_not_found() {
        let source = DirSource::new("/nonexistent/tui-runner/levels");
        assert!(matches!(
            source.read("level1.json"),
            Err(LoadError::NotFound { .. })
        ));
    }
}
