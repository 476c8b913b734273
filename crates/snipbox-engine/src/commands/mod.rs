//! Command orchestration layer.

pub mod engine_command;
pub mod engine_query;
pub mod snippet;
