//! Search query builder
//!
//! A `SearchQuery` starts unconstrained and folds in one predicate per
//! present criterion, always in the order title, content, age. The SQL it
//! renders is therefore a pure function of the criteria.

use crate::db::FOLD_FN;
use rusqlite::types::Value;
use snipbox_core::model::SearchCriteria;

const SECONDS_PER_DAY: i64 = 86_400;

/// One conjunctive clause of a snippet search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPredicate {
    /// Title contains the needle, ignoring case (Unicode lower-case fold)
    TitleContains(String),
    /// Content contains the needle, ignoring case (Unicode lower-case fold)
    ContentContains(String),
    /// Created no earlier than N days before the store's now
    CreatedWithinDays(u32),
}

impl SearchPredicate {
    fn render(&self, placeholder: usize) -> (String, Value) {
        match self {
            SearchPredicate::TitleContains(needle) => (
                format!("{FOLD_FN}(title) LIKE {FOLD_FN}(?{placeholder}) ESCAPE '\\'"),
                Value::Text(like_pattern(needle)),
            ),
            SearchPredicate::ContentContains(needle) => (
                format!("{FOLD_FN}(content) LIKE {FOLD_FN}(?{placeholder}) ESCAPE '\\'"),
                Value::Text(like_pattern(needle)),
            ),
            SearchPredicate::CreatedWithinDays(days) => (
                format!(
                    "created_at >= CAST(strftime('%s', 'now') AS INTEGER) - ?{placeholder} * {SECONDS_PER_DAY}"
                ),
                Value::Integer(i64::from(*days)),
            ),
        }
    }
}

/// Wrap a needle in `%…%`, escaping LIKE metacharacters so they match literally
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Conjunction of zero or more search predicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    predicates: Vec<SearchPredicate>,
}

impl SearchQuery {
    /// An unconstrained query
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the present criteria into a query; absent fields add nothing
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let mut query = Self::new();
        if let Some(title) = &criteria.title {
            query = query.and(SearchPredicate::TitleContains(title.clone()));
        }
        if let Some(content) = &criteria.content {
            query = query.and(SearchPredicate::ContentContains(content.clone()));
        }
        if let Some(days) = criteria.max_age_days {
            query = query.and(SearchPredicate::CreatedWithinDays(days));
        }
        query
    }

    pub fn and(mut self, predicate: SearchPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// The clauses added so far, in application order
    pub fn predicates(&self) -> &[SearchPredicate] {
        &self.predicates
    }

    /// Render the full SELECT and its positional parameters
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql =
            String::from("SELECT id, title, content, created_at, expires_at FROM snippets");
        let mut params = Vec::with_capacity(self.predicates.len());

        for (i, predicate) in self.predicates.iter().enumerate() {
            let (clause, value) = predicate.render(i + 1);
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(&clause);
            params.push(value);
        }

        sql.push_str(" ORDER BY id DESC");
        (sql, params)
    }
}
