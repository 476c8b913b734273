//! SQLite snippet repository
//!
//! Creation time, expiry and liveness are all computed from SQLite's clock
//! inside the statement that needs them, so callers with skewed clocks
//! cannot disagree about them.

#![allow(clippy::result_large_err)]

use crate::db::register_functions;
use crate::errors::{not_configured, persistence, snippet_not_found, Result};
use crate::repo::search_query::SearchQuery;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use snipbox_core::errors::{SnipError, SnipErrorKind};
use snipbox_core::model::{SearchCriteria, Snippet, MAX_EXPIRY_DAYS};
use snipbox_core::repository::SnippetRepository;

/// SQLite implementation of [`SnippetRepository`]
///
/// Borrows a connection and holds nothing else. A repository built with
/// [`SqliteSnippetRepo::detached`] has no store and fails every operation
/// with `Configuration`.
#[derive(Debug, Clone, Copy)]
pub struct SqliteSnippetRepo<'c> {
    conn: Option<&'c Connection>,
}

impl<'c> SqliteSnippetRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn: Some(conn) }
    }

    /// A repository with no store attached
    pub fn detached() -> Self {
        Self { conn: None }
    }

    pub fn is_attached(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self, op: &str) -> Result<&'c Connection> {
        self.conn.ok_or_else(|| not_configured(op))
    }
}

impl SnippetRepository for SqliteSnippetRepo<'_> {
    fn insert(&self, title: &str, content: &str, expires_days: u32) -> Result<i64> {
        const OP: &str = "snippet_insert";
        let conn = self.conn(OP)?;

        if !(1..=MAX_EXPIRY_DAYS).contains(&expires_days) {
            return Err(SnipError::new(SnipErrorKind::MalformedInput)
                .with_op(OP)
                .with_entity_id("expires_days")
                .with_message(format!(
                    "expiry must be between 1 and {MAX_EXPIRY_DAYS} days, got {expires_days}"
                )));
        }

        conn.execute(
            "INSERT INTO snippets (title, content, created_at, expires_at)
             SELECT ?1, ?2, clock.ts, clock.ts + ?3 * 86400
             FROM (SELECT CAST(strftime('%s', 'now') AS INTEGER) AS ts) AS clock",
            rusqlite::params![title, content, expires_days],
        )
        .map_err(|e| persistence(OP, e))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(snippet_id = id, expires_days, "snippet inserted");
        Ok(id)
    }

    fn get(&self, id: i64) -> Result<Snippet> {
        const OP: &str = "snippet_get";
        let conn = self.conn(OP)?;

        if id < 1 {
            return Err(snippet_not_found(OP, id));
        }

        conn.query_row(
            "SELECT id, title, content, created_at, expires_at
             FROM snippets
             WHERE expires_at > CAST(strftime('%s', 'now') AS INTEGER) AND id = ?1",
            [id],
            row_to_snippet,
        )
        .optional()
        .map_err(|e| persistence(OP, e))?
        .ok_or_else(|| snippet_not_found(OP, id))
    }

    fn latest(&self, limit: u32) -> Result<Vec<Snippet>> {
        const OP: &str = "snippet_latest";
        let conn = self.conn(OP)?;

        let mut stmt = conn
            .prepare(
                "SELECT id, title, content, created_at, expires_at
                 FROM snippets
                 WHERE expires_at > CAST(strftime('%s', 'now') AS INTEGER)
                 ORDER BY id DESC
                 LIMIT ?1",
            )
            .map_err(|e| persistence(OP, e))?;

        let result: std::result::Result<Vec<_>, _> = stmt
            .query_map([limit], row_to_snippet)
            .map_err(|e| persistence(OP, e))?
            .collect();
        result.map_err(|e| persistence(OP, e))
    }

    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Snippet>> {
        const OP: &str = "snippet_search";
        let conn = self.conn(OP)?;

        // Connections opened outside `db::configure` lack the fold function
        register_functions(conn).map_err(|e| persistence(OP, e))?;

        let query = SearchQuery::from_criteria(criteria);
        let (sql, params) = query.to_sql();
        tracing::debug!(predicate_count = query.predicates().len(), sql = %sql, "search query built");

        let mut stmt = conn.prepare(&sql).map_err(|e| persistence(OP, e))?;
        let result: std::result::Result<Vec<_>, _> = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), row_to_snippet)
            .map_err(|e| persistence(OP, e))?
            .collect();
        result.map_err(|e| persistence(OP, e))
    }
}

fn row_to_snippet(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: timestamp_column(row, 3)?,
        expires_at: timestamp_column(row, 4)?,
    })
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(idx)?;
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_returns_increasing_ids() {
        let conn = setup();
        let repo = SqliteSnippetRepo::new(&conn);

        let a = repo.insert("a", "first", 1).unwrap();
        let b = repo.insert("b", "second", 7).unwrap();
        assert!(a >= 1);
        assert!(b > a);
    }

    #[test]
    fn test_zero_expiry_is_rejected_before_store() {
        let conn = setup();
        let repo = SqliteSnippetRepo::new(&conn);

        let err = repo.insert("t", "c", 0).unwrap_err();
        assert_eq!(err.kind(), SnipErrorKind::MalformedInput);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_get_rejects_non_positive_ids() {
        let conn = setup();
        let repo = SqliteSnippetRepo::new(&conn);

        for id in [0, -1, i64::MIN] {
            assert_eq!(repo.get(id).unwrap_err().kind(), SnipErrorKind::NotFound);
        }
    }

    #[test]
    fn test_detached_repo_reports_configuration() {
        let repo = SqliteSnippetRepo::detached();
        assert!(!repo.is_attached());

        let err = repo.search(&SearchCriteria::new()).unwrap_err();
        assert_eq!(err.kind(), SnipErrorKind::Configuration);
        assert_eq!(err.op(), Some("snippet_search"));
    }

    #[test]
    fn test_missing_table_is_persistence_error() {
        let conn = Connection::open_in_memory().unwrap();
        let repo = SqliteSnippetRepo::new(&conn);

        let err = repo.latest(10).unwrap_err();
        assert_eq!(err.kind(), SnipErrorKind::Persistence);
        assert_eq!(err.op(), Some("snippet_latest"));
    }
}
