use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest title accepted at creation time
pub const TITLE_MAX_CHARS: usize = 100;

/// Lifetimes, in days, a new snippet may be given
pub const PERMITTED_EXPIRY_DAYS: [i64; 3] = [1, 7, 365];

/// Longest lifetime, in days, the store will write
///
/// Ten thousand years keeps every `expires_at` inside the range a
/// [`DateTime<Utc>`] can represent, so a stored row can always be read back.
pub const MAX_EXPIRY_DAYS: u32 = 3_652_425;

/// Page size used by the home listing when the caller gives none
pub const DEFAULT_LATEST_LIMIT: u32 = 10;

/// A persisted snippet
///
/// Every field is fixed at insert time. `created_at` and `expires_at` come
/// from the store's clock, never from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Store-assigned id, strictly increasing with insertion order
    pub id: i64,

    pub title: String,

    pub content: String,

    pub created_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

impl Snippet {
    /// Live snippets expire strictly after `now`
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Whole days between creation and expiry
    pub fn lifetime_days(&self) -> i64 {
        (self.expires_at - self.created_at).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn snippet(created: DateTime<Utc>, days: i64) -> Snippet {
        Snippet {
            id: 1,
            title: "An old silent pond".to_string(),
            content: "A frog jumps into the pond".to_string(),
            created_at: created,
            expires_at: created + Duration::days(days),
        }
    }

    #[test]
    fn test_liveness_is_strict() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let s = snippet(created, 7);

        assert!(s.is_live_at(created));
        assert!(s.is_live_at(s.expires_at - Duration::seconds(1)));
        assert!(!s.is_live_at(s.expires_at));
        assert!(!s.is_live_at(s.expires_at + Duration::days(1)));
    }

    #[test]
    fn test_lifetime_days() {
        let created = Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap();
        assert_eq!(snippet(created, 365).lifetime_days(), 365);
        assert_eq!(snippet(created, 1).lifetime_days(), 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(snippet(created, 1)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "An old silent pond");
        assert!(json["created_at"].as_str().unwrap().starts_with("2024-01-01"));
    }
}
