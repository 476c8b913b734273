//! Repository layer mapping snippet operations onto SQLite

pub mod search_query;
pub mod snippet_repo;

pub use search_query::{SearchPredicate, SearchQuery};
pub use snippet_repo::SqliteSnippetRepo;
