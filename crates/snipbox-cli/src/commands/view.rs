//! View command
//!
//! Usage: snipbox view <ID>

use clap::Args;
use snipbox_core::repository::SnippetRepository;
use snipbox_core_types::RequestContext;
use snipbox_engine::commands::snippet::snippet_view;

use super::{emit, CliError};

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Snippet id
    pub id: String,
}

pub fn execute(
    args: ViewArgs,
    repo: &dyn SnippetRepository,
    ctx: &RequestContext,
) -> Result<(), CliError> {
    let snippet = snippet_view(repo, ctx, &args.id)?;
    emit(&snippet)
}
