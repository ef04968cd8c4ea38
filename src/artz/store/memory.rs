use super::ArticleStore;
use crate::error::{ArtzError, Result};

/// In-memory storage over two index-aligned sequences.
/// Does NOT persist data.
///
/// Invariant: `titles.len() == contents.len()` at all times. Insertion
/// appends to both sequences; deletion removes the same index from both.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    titles: Vec<String>,
    contents: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Index of the first entry whose title matches exactly.
    fn position(&self, title: &str) -> Option<usize> {
        self.titles.iter().position(|t| t == title)
    }
}

impl ArticleStore for InMemoryStore {
    fn save(&mut self, title: &str, content: &str) -> Result<()> {
        self.titles.push(title.to_string());
        self.contents.push(content.to_string());
        Ok(())
    }

    fn update(&mut self, title: &str, content: &str) -> Result<()> {
        if let Some(i) = self.position(title) {
            self.contents[i] = content.to_string();
        }
        Ok(())
    }

    fn delete(&mut self, title: &str) -> Result<()> {
        if let Some(i) = self.position(title) {
            self.titles.remove(i);
            self.contents.remove(i);
        }
        Ok(())
    }

    fn titles(&self) -> Vec<String> {
        self.titles.clone()
    }

    fn content(&self, title: &str) -> Result<String> {
        self.position(title)
            .map(|i| self.contents[i].clone())
            .ok_or_else(|| ArtzError::ArticleNotFound(title.to_string()))
    }
}
