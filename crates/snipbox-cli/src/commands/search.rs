//! Search command
//!
//! Usage: snipbox search [--title <T>] [--content <C>] [--max-age-days <N>]
//!
//! Expired snippets are included; search does not filter on liveness.

use clap::Args;
use snipbox_core::repository::SnippetRepository;
use snipbox_core_types::RequestContext;
use snipbox_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};

use super::{emit, CliError};

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    /// Only snippets created within this many days
    #[arg(long)]
    pub max_age_days: Option<String>,
}

pub fn execute(
    args: SearchArgs,
    repo: &dyn SnippetRepository,
    ctx: &RequestContext,
) -> Result<(), CliError> {
    let query = EngineQuery::SnippetSearch {
        title: args.title,
        content: args.content,
        max_age_days: args.max_age_days,
    };

    match apply_engine_query(query, repo, ctx)? {
        EngineQueryResult::Snippets(snippets) => emit(&snippets),
        EngineQueryResult::Snippet(snippet) => emit(&[snippet]),
    }
}
