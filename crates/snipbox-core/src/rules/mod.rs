//! Field validation rules
//!
//! `checks` holds the pure predicates; `validator` holds the per-submission
//! accumulator that records every failed check instead of stopping at the
//! first one.

pub mod checks;
pub mod validator;

pub use checks::{max_chars, not_blank, permitted_int};
pub use validator::Validator;
