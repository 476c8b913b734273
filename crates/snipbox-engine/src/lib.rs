//! Snipbox Engine - request-scoped orchestration
//!
//! Runs one caller request end to end: parse raw parameters, validate,
//! then persist or query through a `SnippetRepository`. The engine owns the
//! start/end/error log events for every operation.

pub mod commands;
