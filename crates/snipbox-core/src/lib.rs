//! Snipbox Core - snippet domain model, validation and error facility
//!
//! - `Snippet` and `SearchCriteria` models
//! - Validation rules and the per-submission `Validator`
//! - Create/search forms that parse raw request parameters
//! - The `SnippetRepository` trait implemented by the store crate
//! - Structured error and logging facilities shared by every crate

pub mod errors;
pub mod forms;
pub mod logging_facility;
pub mod model;
pub mod repository;
pub mod rules;

// Re-export commonly used types
pub use errors::{FieldErrors, Result, SnipError, SnipErrorKind, SnipboxError};
pub use forms::{SnippetCreateForm, SnippetSearchForm};
pub use model::{SearchCriteria, Snippet};
pub use repository::{RepoResult, SnippetRepository};
pub use rules::Validator;
