//! Engine-level write commands.

#![allow(clippy::result_large_err)]

use snipbox_core::repository::{RepoResult, SnippetRepository};
use snipbox_core_types::RequestContext;

use crate::commands::snippet::{snippet_create, CreateParams};

/// Commands that change the store
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Create a snippet from raw form values
    SnippetCreate {
        title: String,
        content: String,
        expires: String,
    },
}

/// Result of applying an engine command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    SnippetCreated { id: i64 },
}

/// Apply an engine command
pub fn apply_engine_command(
    cmd: EngineCommand,
    repo: &dyn SnippetRepository,
    ctx: &RequestContext,
) -> RepoResult<EngineCommandResult> {
    match cmd {
        EngineCommand::SnippetCreate {
            title,
            content,
            expires,
        } => {
            let params = CreateParams {
                title: &title,
                content: &content,
                expires: &expires,
            };
            let id = snippet_create(repo, ctx, params)?;
            Ok(EngineCommandResult::SnippetCreated { id })
        }
    }
}
