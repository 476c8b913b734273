//! Submission forms
//!
//! Forms sit between raw request parameters and the repository. Parsing
//! failures surface as `MalformedInput` before any rule runs; rule failures
//! are collected by a fresh [`Validator`] per submission.

use crate::errors::{Result, SnipboxError};
use crate::model::{SearchCriteria, PERMITTED_EXPIRY_DAYS, TITLE_MAX_CHARS};
use crate::rules::{max_chars, not_blank, permitted_int, Validator};

pub const MSG_BLANK: &str = "This field cannot be blank";
pub const MSG_TITLE_TOO_LONG: &str = "This field cannot be more than 100 characters long";
pub const MSG_EXPIRES_NOT_PERMITTED: &str = "This field must equal 1, 7, or 365";

/// Parsed input for creating a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetCreateForm {
    pub title: String,
    pub content: String,
    pub expires: i64,
}

impl SnippetCreateForm {
    /// Parse raw form values
    ///
    /// # Errors
    /// `MalformedInput` when `expires` is not an integer.
    pub fn parse(title: &str, content: &str, expires: &str) -> Result<Self> {
        let expires = expires
            .trim()
            .parse::<i64>()
            .map_err(|e| SnipboxError::MalformedInput {
                field: "expires".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            expires,
        })
    }

    /// Run the creation policy; every check runs regardless of earlier ones
    pub fn validate(&self) -> Validator {
        let mut v = Validator::new();
        v.check_field(not_blank(&self.title), "title", MSG_BLANK);
        v.check_field(
            max_chars(&self.title, TITLE_MAX_CHARS),
            "title",
            MSG_TITLE_TOO_LONG,
        );
        v.check_field(not_blank(&self.content), "content", MSG_BLANK);
        v.check_field(
            permitted_int(self.expires, &PERMITTED_EXPIRY_DAYS),
            "expires",
            MSG_EXPIRES_NOT_PERMITTED,
        );
        v
    }

    /// Lifetime in days, for a form that has passed validation
    pub fn expires_days(&self) -> u32 {
        u32::try_from(self.expires).unwrap_or(0)
    }
}

/// Turns raw search parameters into [`SearchCriteria`]
pub struct SnippetSearchForm;

impl SnippetSearchForm {
    /// Parse optional raw parameters
    ///
    /// A missing parameter is no constraint. Title and content are kept even
    /// when empty. An empty `max_age_days` counts as missing.
    ///
    /// # Errors
    /// `MalformedInput` when `max_age_days` is not a non-negative integer.
    pub fn parse(
        title: Option<&str>,
        content: Option<&str>,
        max_age_days: Option<&str>,
    ) -> Result<SearchCriteria> {
        let max_age_days = match max_age_days.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<u32>().map_err(|e| {
                SnipboxError::MalformedInput {
                    field: "max_age_days".to_string(),
                    reason: e.to_string(),
                }
            })?),
        };

        Ok(SearchCriteria {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
            max_age_days,
        })
    }
}
