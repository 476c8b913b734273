//! Repository seam between the engine and a concrete store

use crate::errors::SnipError;
use crate::model::{SearchCriteria, Snippet, DEFAULT_LATEST_LIMIT, MAX_EXPIRY_DAYS};

/// Result type for repository operations
pub type RepoResult<T> = std::result::Result<T, SnipError>;

/// Typed access to persisted snippets
///
/// Implementations hold no cached records; every call is one round-trip to
/// the store, and the store's clock decides creation, expiry and liveness.
pub trait SnippetRepository {
    /// Persist a snippet that expires `expires_days` after the store's now
    ///
    /// Performs no validation of `title` or `content`.
    /// `expires_days` must lie in `1..=MAX_EXPIRY_DAYS`.
    ///
    /// # Errors
    /// - `MalformedInput`: `expires_days` is zero or above [`MAX_EXPIRY_DAYS`]
    /// - `Configuration`: no store attached
    /// - `Persistence`: the insert failed
    fn insert(&self, title: &str, content: &str, expires_days: u32) -> RepoResult<i64>;

    /// Fetch one live snippet
    ///
    /// # Errors
    /// - `NotFound`: `id < 1`, no such row, or the row has expired
    /// - `Configuration`: no store attached
    /// - `Persistence`: the lookup failed
    fn get(&self, id: i64) -> RepoResult<Snippet>;

    /// Up to `limit` live snippets, newest id first
    ///
    /// # Errors
    /// - `Configuration`: no store attached
    /// - `Persistence`: the query failed
    fn latest(&self, limit: u32) -> RepoResult<Vec<Snippet>>;

    /// `latest` with the default page size
    ///
    /// # Errors
    /// Same as [`SnippetRepository::latest`].
    fn latest_default(&self) -> RepoResult<Vec<Snippet>> {
        self.latest(DEFAULT_LATEST_LIMIT)
    }

    /// Snippets matching every present criterion; liveness is not implied
    ///
    /// # Errors
    /// - `Configuration`: no store attached
    /// - `Persistence`: the query failed
    fn search(&self, criteria: &SearchCriteria) -> RepoResult<Vec<Snippet>>;
}
