//! # Storage Layer
//!
//! This module defines the storage abstraction for artz. The [`ArticleStore`]
//! trait is the capability set every backend must support; the service layer
//! depends on this trait alone.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **substitution**: any backend can replace any other at the
//!   construction site, with no change to the service
//! - Keep the service **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: Working backend over two index-aligned
//!   `Vec<String>` sequences (titles, contents). No persistence.
//!
//! - [`file::FileStore`]: Stub backend kept as an interface-conformance
//!   example. Every mutating operation is a documented no-op; it always
//!   behaves as an empty store.
//!
//! ## Matching Semantics
//!
//! All keyed operations match by exact string equality, first match wins
//! under a linear scan. This determines behavior when duplicate titles
//! exist: only the first is ever updated, deleted, or read.

use crate::error::Result;

pub mod file;
pub mod memory;

/// Abstract interface for article storage.
///
/// Implementations must preserve insertion order and the first-match-wins
/// contract of the keyed operations.
pub trait ArticleStore {
    /// Append a new article unconditionally. Duplicate titles are allowed;
    /// no existence check is performed.
    fn save(&mut self, title: &str, content: &str) -> Result<()>;

    /// Replace the content of the first article whose title matches.
    /// Silently does nothing when no title matches.
    fn update(&mut self, title: &str, content: &str) -> Result<()>;

    /// Remove the first article whose title matches.
    /// Silently does nothing when no title matches.
    fn delete(&mut self, title: &str) -> Result<()>;

    /// Snapshot of all titles in insertion order. Mutating the returned
    /// vector does not affect the store.
    fn titles(&self) -> Vec<String>;

    /// Content of the first article whose title matches.
    ///
    /// # Errors
    ///
    /// Returns [`ArtzError::ArticleNotFound`](crate::error::ArtzError) when
    /// no stored article has that title.
    fn content(&self, title: &str) -> Result<String>;
}
