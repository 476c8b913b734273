//! Snippet operations with boundary logging.
//!
//! ## Logging Ownership
//!
//! Each public function here emits:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Every event and every returned error carries the caller's request id.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use snipbox_core::errors::{SnipError, SnipErrorKind};
use snipbox_core::forms::{SnippetCreateForm, SnippetSearchForm};
use snipbox_core::model::Snippet;
use snipbox_core::repository::{RepoResult, SnippetRepository};
use snipbox_core::{log_op_end, log_op_error, log_op_start, SnipboxError};
use snipbox_core_types::RequestContext;

/// Raw, unparsed values of a create submission
#[derive(Debug, Clone, Copy)]
pub struct CreateParams<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub expires: &'a str,
}

/// Raw search parameters; `None` means the parameter was not sent
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub max_age_days: Option<&'a str>,
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn domain_error(op: &str, err: SnipboxError) -> SnipError {
    SnipError::from(err).with_op(op)
}

/// Create a snippet from raw form values
///
/// Parsing runs first, then every validation rule. Nothing is persisted
/// unless both succeed.
///
/// ## Errors
///
/// - `MalformedInput`: `expires` is not an integer
/// - `ValidationFailed`: one or more fields broke the creation policy
/// - `Configuration` / `Persistence`: from the repository
pub fn snippet_create<R>(
    repo: &R,
    ctx: &RequestContext,
    params: CreateParams<'_>,
) -> RepoResult<i64>
where
    R: SnippetRepository + ?Sized,
{
    const OP: &str = "snippet_create";
    log_op_start!(OP, request_id = %ctx.request_id);
    let start = Instant::now();

    let id = snippet_create_impl(repo, params).map_err(|e| {
        let e = e.with_request_id(ctx.request_id.clone());
        log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(start), request_id = %ctx.request_id);
        e
    })?;

    log_op_end!(
        OP,
        duration_ms = elapsed_ms(start),
        request_id = %ctx.request_id,
        snippet_id = id
    );
    Ok(id)
}

fn snippet_create_impl<R>(repo: &R, params: CreateParams<'_>) -> RepoResult<i64>
where
    R: SnippetRepository + ?Sized,
{
    const OP: &str = "snippet_create";

    let form = SnippetCreateForm::parse(params.title, params.content, params.expires)
        .map_err(|e| domain_error(OP, e))?;

    form.validate()
        .into_result()
        .map_err(|e| domain_error(OP, e))?;

    repo.insert(&form.title, &form.content, form.expires_days())
}

/// Fetch one live snippet by its raw id
///
/// An id that is not a positive integer is reported as `NotFound`, the same
/// as an id that names no live snippet.
///
/// ## Errors
///
/// - `NotFound`: bad id, unknown id, or expired snippet
/// - `Configuration` / `Persistence`: from the repository
pub fn snippet_view<R>(repo: &R, ctx: &RequestContext, raw_id: &str) -> RepoResult<Snippet>
where
    R: SnippetRepository + ?Sized,
{
    const OP: &str = "snippet_view";
    log_op_start!(OP, request_id = %ctx.request_id);
    let start = Instant::now();

    let result = match raw_id.trim().parse::<i64>() {
        Ok(id) => repo.get(id),
        Err(_) => Err(SnipError::new(SnipErrorKind::NotFound)
            .with_op(OP)
            .with_entity_id(raw_id)
            .with_message("snippet id must be a positive integer")),
    };

    let snippet = result.map_err(|e| {
        let e = e.with_request_id(ctx.request_id.clone());
        log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(start), request_id = %ctx.request_id);
        e
    })?;

    log_op_end!(
        OP,
        duration_ms = elapsed_ms(start),
        request_id = %ctx.request_id,
        snippet_id = snippet.id
    );
    Ok(snippet)
}

/// The newest live snippets, at most `limit` (default 10)
///
/// ## Errors
///
/// - `Configuration` / `Persistence`: from the repository
pub fn snippet_latest<R>(
    repo: &R,
    ctx: &RequestContext,
    limit: Option<u32>,
) -> RepoResult<Vec<Snippet>>
where
    R: SnippetRepository + ?Sized,
{
    const OP: &str = "snippet_latest";
    log_op_start!(OP, request_id = %ctx.request_id);
    let start = Instant::now();

    let result = match limit {
        Some(limit) => repo.latest(limit),
        None => repo.latest_default(),
    };

    let snippets = result.map_err(|e| {
        let e = e.with_request_id(ctx.request_id.clone());
        log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(start), request_id = %ctx.request_id);
        e
    })?;

    log_op_end!(
        OP,
        duration_ms = elapsed_ms(start),
        request_id = %ctx.request_id,
        result_len = snippets.len()
    );
    Ok(snippets)
}

/// Search snippets from raw query parameters
///
/// Liveness is not applied; use [`Snippet::is_live_at`] on the results if
/// only live snippets should be shown.
///
/// ## Errors
///
/// - `MalformedInput`: `max_age_days` is not a non-negative integer
/// - `Configuration` / `Persistence`: from the repository
pub fn snippet_search<R>(
    repo: &R,
    ctx: &RequestContext,
    params: SearchParams<'_>,
) -> RepoResult<Vec<Snippet>>
where
    R: SnippetRepository + ?Sized,
{
    const OP: &str = "snippet_search";
    log_op_start!(OP, request_id = %ctx.request_id);
    let start = Instant::now();

    let snippets = SnippetSearchForm::parse(params.title, params.content, params.max_age_days)
        .map_err(|e| domain_error(OP, e))
        .and_then(|criteria| repo.search(&criteria))
        .map_err(|e| {
            let e = e.with_request_id(ctx.request_id.clone());
            log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(start), request_id = %ctx.request_id);
            e
        })?;

    log_op_end!(
        OP,
        duration_ms = elapsed_ms(start),
        request_id = %ctx.request_id,
        result_len = snippets.len()
    );
    Ok(snippets)
}
