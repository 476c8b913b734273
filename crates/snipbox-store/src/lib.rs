//! Snipbox Store - SQLite persistence for snippets
//!
//! Provides:
//! - Connection helpers
//! - Embedded, checksummed schema migrations
//! - `SqliteSnippetRepo`, the SQLite implementation of `SnippetRepository`
//! - `SearchQuery`, the predicate builder behind snippet search

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{SearchPredicate, SearchQuery, SqliteSnippetRepo};
