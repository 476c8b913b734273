//! Subcommand implementations

pub mod create;
pub mod latest;
pub mod search;
pub mod view;

use serde::Serialize;
use snipbox_core::errors::SnipError;

/// Failure of a CLI invocation
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Snip(#[from] SnipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// 1 for caller faults, 2 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Snip(e) if e.kind().is_client_error() => 1,
            _ => 2,
        }
    }
}

/// Print one JSON document to stdout
pub(crate) fn emit<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
