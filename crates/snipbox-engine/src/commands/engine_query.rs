//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for reads. It never writes
//! to the store.

#![allow(clippy::result_large_err)]

use snipbox_core::model::Snippet;
use snipbox_core::repository::{RepoResult, SnippetRepository};
use snipbox_core_types::RequestContext;

use crate::commands::snippet::{snippet_latest, snippet_search, snippet_view, SearchParams};

/// Read-only queries
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// One live snippet by raw id
    SnippetGet { id: String },
    /// The newest live snippets
    SnippetLatest { limit: Option<u32> },
    /// Filtered search; each `None` is an absent parameter
    SnippetSearch {
        title: Option<String>,
        content: Option<String>,
        max_age_days: Option<String>,
    },
}

/// Result of a read-only query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQueryResult {
    Snippet(Snippet),
    Snippets(Vec<Snippet>),
}

/// Apply a read-only query
pub fn apply_engine_query(
    query: EngineQuery,
    repo: &dyn SnippetRepository,
    ctx: &RequestContext,
) -> RepoResult<EngineQueryResult> {
    match query {
        EngineQuery::SnippetGet { id } => {
            snippet_view(repo, ctx, &id).map(EngineQueryResult::Snippet)
        }
        EngineQuery::SnippetLatest { limit } => {
            snippet_latest(repo, ctx, limit).map(EngineQueryResult::Snippets)
        }
        EngineQuery::SnippetSearch {
            title,
            content,
            max_age_days,
        } => {
            let params = SearchParams {
                title: title.as_deref(),
                content: content.as_deref(),
                max_age_days: max_age_days.as_deref(),
            };
            snippet_search(repo, ctx, params).map(EngineQueryResult::Snippets)
        }
    }
}
