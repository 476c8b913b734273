/// Optional, independently settable search constraints
///
/// `None` means "no constraint on this field". `Some(String::new())` and
/// `Some(0)` are real filters and are kept distinct from `None` all the way
/// down to query construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the content
    pub content: Option<String>,
    /// Only snippets created within the last N days
    pub max_age_days: Option<u32>,
}

impl SearchCriteria {
    /// Criteria with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_max_age_days(mut self, days: u32) -> Self {
        self.max_age_days = Some(days);
        self
    }

    /// True when no field is set
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.max_age_days.is_none()
    }
}
