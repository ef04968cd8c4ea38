//! # Artz Architecture
//!
//! Artz is a small, deliberately simple demonstration of the Dependency
//! Inversion Principle: an article service that depends only on a storage
//! *capability*, never on a concrete backend.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Demo driver (main.rs, args.rs)                             │
//! │  - Parses arguments, picks a backend, prints articles       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (service.rs)                                 │
//! │  - Thin pass-through facade over one injected store         │
//! │  - No logic, no validation, no I/O                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ArticleStore trait                              │
//! │  - InMemoryStore (working), FileStore (stub)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Constructor Injection
//!
//! [`service::ArticleService`] receives its backend at construction and never
//! builds one itself. Swapping `InMemoryStore` for `FileStore` (or any future
//! backend) requires no change to the service — that is the whole point of
//! the exercise.
//!
//! ## Module Overview
//!
//! - [`service`]: The pass-through facade — entry point for all operations
//! - [`store`]: Storage capability trait and its backends
//! - [`model`]: The `Article` data type
//! - [`error`]: Error types

pub mod error;
pub mod model;
pub mod service;
pub mod store;
