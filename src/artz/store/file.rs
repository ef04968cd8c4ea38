use super::ArticleStore;
use crate::error::{ArtzError, Result};
use std::path::PathBuf;

/// File-backed storage, kept as an interface-conformance stub.
///
/// None of the mutating operations touch the filesystem (or anything else);
/// the backing sequences are never populated, so every instance behaves as a
/// permanently empty store. The type exists to show that the service accepts
/// any [`ArticleStore`], not to provide persistence.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    titles: Vec<String>,
    contents: Vec<String>,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            titles: Vec::new(),
            contents: Vec::new(),
        }
    }

    /// Directory this store would persist to, were it implemented.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl ArticleStore for FileStore {
    fn save(&mut self, _title: &str, _content: &str) -> Result<()> {
        // Would write the article under `root`; intentionally not implemented.
        Ok(())
    }

    fn update(&mut self, _title: &str, _content: &str) -> Result<()> {
        // Would rewrite the article file; intentionally not implemented.
        Ok(())
    }

    fn delete(&mut self, _title: &str) -> Result<()> {
        // Would remove the article file; intentionally not implemented.
        Ok(())
    }

    fn titles(&self) -> Vec<String> {
        self.titles.clone()
    }

    fn content(&self, title: &str) -> Result<String> {
        self.contents
            .iter()
            .zip(&self.titles)
            .find(|(_, t)| *t == title)
            .map(|(c, _)| c.clone())
            .ok_or_else(|| ArtzError::ArticleNotFound(title.to_string()))
    }
}
