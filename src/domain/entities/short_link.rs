//! Persisted short link record.

use chrono::{DateTime, Utc};

/// A stored `(host, path) -> raw query` mapping.
///
/// Records are immutable once written. `unguessable` records are never offered for
/// reuse by the allocator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkRecord {
    pub host: String,
    pub path: String,
    /// Canonically encoded query string (no leading `?`).
    pub raw_query: String,
    pub unguessable: bool,
    pub created_at: DateTime<Utc>,
}

impl ShortLinkRecord {
    /// Creates a new ShortLinkRecord instance.
    pub fn new(
        host: String,
        path: String,
        raw_query: String,
        unguessable: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            host,
            path,
            raw_query,
            unguessable,
            created_at,
        }
    }
}

/// Input data for storing a freshly allocated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub host: String,
    pub path: String,
    pub raw_query: String,
    pub unguessable: bool,
}

/// Record counts reported by operations tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub guessable: i64,
    pub unguessable: i64,
}

impl LinkCounts {
    pub fn total(&self) -> i64 {
        self.guessable + self.unguessable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let now = Utc::now();
        let record = ShortLinkRecord::new(
            "x.link".to_string(),
            "abc123".to_string(),
            "link=https%3A%2F%2Fexample.com".to_string(),
            false,
            now,
        );

        assert_eq!(record.host, "x.link");
        assert_eq!(record.path, "abc123");
        assert!(!record.unguessable);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_link_counts_total() {
        let counts = LinkCounts {
            guessable: 3,
            unguessable: 4,
        };
        assert_eq!(counts.total(), 7);
    }
}
