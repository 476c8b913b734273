//! Migration framework
//!
//! - Embedded SQL migrations applied in order
//! - Idempotent application recorded in `schema_version`
//! - Checksums to detect an applied migration whose SQL has changed

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
