//! # Service Facade
//!
//! The service layer is a **thin facade** over the storage layer. It is the
//! single entry point callers use, regardless of which backend was injected.
//!
//! ## Role and Responsibilities
//!
//! The service:
//! - **Forwards** every operation verbatim to the held store
//! - **Returns structured types** (`Result<T>`)
//!
//! ## What the Service Does NOT Do
//!
//! - **Business logic or validation**: there is none; the store's contract
//!   is the contract
//! - **I/O**: no stdout, stderr, or terminal assumptions
//! - **Backend construction**: the store is supplied at construction
//!   (constructor injection) and the service works against the
//!   [`ArticleStore`] trait alone
//!
//! ## Generic Over ArticleStore
//!
//! `ArticleService<S: ArticleStore>` is generic over the backend:
//! - `ArticleService<InMemoryStore>` for the working demo
//! - `ArticleService<FileStore>` for the conformance stub
//!
//! Swapping backends requires no change to this module.

use crate::error::Result;
use crate::model::Article;
use crate::store::ArticleStore;

/// Pass-through facade holding one injected [`ArticleStore`].
pub struct ArticleService<S: ArticleStore> {
    store: S,
}

impl<S: ArticleStore> ArticleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_article(&mut self, title: &str, content: &str) -> Result<()> {
        self.store.save(title, content)
    }

    pub fn edit_article(&mut self, title: &str, content: &str) -> Result<()> {
        self.store.update(title, content)
    }

    pub fn delete_article(&mut self, title: &str) -> Result<()> {
        self.store.delete(title)
    }

    pub fn get_titles(&self) -> Vec<String> {
        self.store.titles()
    }

    /// # Errors
    ///
    /// Propagates `ArticleNotFound` from the backend unchanged.
    pub fn get_content(&self, title: &str) -> Result<String> {
        self.store.content(title)
    }

    /// Assemble full articles in `get_titles()` order, for display or
    /// serialization. Under duplicate titles this repeats the first match's
    /// content, which is exactly what a title-keyed reader would see.
    pub fn get_articles(&self) -> Result<Vec<Article>> {
        self.get_titles()
            .into_iter()
            .map(|title| {
                let content = self.store.content(&title)?;
                Ok(Article { title, content })
            })
            .collect()
    }
}
