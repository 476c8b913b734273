//! Create command
//!
//! Usage: snipbox create --title <TITLE> --content <CONTENT> --expires <DAYS>

use clap::Args;
use snipbox_core::repository::SnippetRepository;
use snipbox_core_types::RequestContext;
use snipbox_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};

use super::{emit, CliError};

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub content: String,

    /// Lifetime in days: 1, 7 or 365
    #[arg(long, default_value = "365")]
    pub expires: String,
}

pub fn execute(
    args: CreateArgs,
    repo: &dyn SnippetRepository,
    ctx: &RequestContext,
) -> Result<(), CliError> {
    let cmd = EngineCommand::SnippetCreate {
        title: args.title,
        content: args.content,
        expires: args.expires,
    };

    match apply_engine_command(cmd, repo, ctx) {
        Ok(EngineCommandResult::SnippetCreated { id }) => {
            emit(&serde_json::json!({ "id": id }))
        }
        Err(e) => {
            // Field errors go to stdout so scripts can re-render the form
            if let Some(field_errors) = e.field_errors() {
                emit(&serde_json::json!({ "field_errors": field_errors }))?;
            }
            Err(e.into())
        }
    }
}
