pub mod criteria;
pub mod snippet;

pub use criteria::SearchCriteria;
pub use snippet::{
    Snippet, DEFAULT_LATEST_LIMIT, MAX_EXPIRY_DAYS, PERMITTED_EXPIRY_DAYS, TITLE_MAX_CHARS,
};
