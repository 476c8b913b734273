//! Latest command
//!
//! Usage: snipbox latest [--limit <N>]

use clap::Args;
use snipbox_core::repository::SnippetRepository;
use snipbox_core_types::RequestContext;
use snipbox_engine::commands::snippet::snippet_latest;

use super::{emit, CliError};

#[derive(Debug, Args)]
pub struct LatestArgs {
    /// Maximum number of snippets (default 10)
    #[arg(long)]
    pub limit: Option<u32>,
}

pub fn execute(
    args: LatestArgs,
    repo: &dyn SnippetRepository,
    ctx: &RequestContext,
) -> Result<(), CliError> {
    let snippets = snippet_latest(repo, ctx, args.limit)?;
    emit(&snippets)
}
